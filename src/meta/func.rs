// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/meta/func.rs
// Unary type functions: invocation, composition and partial application

use crate::meta::literal::{Int, Literal};
use crate::meta::op::{Add, BinaryOp, Mul};
use std::marker::PhantomData;
use typenum::P2;

// ============================================================================
// Protocol
// ============================================================================

/// The unary-function capability: `Self` applied to `X` yields `Output`.
///
/// Implementations only exist for the arguments a function accepts, so a
/// call outside that domain is rejected by the compiler:
///
/// ```compile_fail
/// use tessellate::meta::*;
///
/// // `bool` exposes no numeric constant.
/// type Bad = Applied<DoubleFn, bool>;
/// let _ = <Bad as Literal>::VALUE;
/// ```
pub trait Function<X> {
    type Output;
}

/// A pending call of `F` on `X`.
///
/// Lets generic code name a call without knowing whether `F` is primitive,
/// composed or curried; the result is read through [`Invoke`].
pub struct Apply<F, X>(PhantomData<(F, X)>);

/// A type-level computation with a single result.
pub trait Invoke {
    type Result;
}

impl<F: Function<X>, X> Invoke for Apply<F, X> {
    type Result = F::Output;
}

/// Result of calling `F` on `X` through [`Apply`].
pub type Applied<F, X> = <Apply<F, X> as Invoke>::Result;

// ============================================================================
// Combinators
// ============================================================================

/// `F ∘ G`: apply `G`, then `F` to its result.
pub struct Compose<F, G>(PhantomData<(F, G)>);

impl<F, G, X> Function<X> for Compose<F, G>
where
    G: Function<X>,
    F: Function<G::Output>,
{
    type Output = <F as Function<G::Output>>::Output;
}

/// A binary operator with its left operand `T` already bound.
///
/// Fixing `T` yields a unary function; the right operand arrives with the
/// call.
pub struct Curry<Op, T>(PhantomData<(Op, T)>);

impl<Op, T, U> Function<U> for Curry<Op, T>
where
    T: Literal,
    U: Literal,
    Op: BinaryOp<T, U>,
{
    type Output = <Op as BinaryOp<T, U>>::Output;
}

/// Curried addition: `Add3<T>` applied to `U` yields `T + U`.
pub type Add3<T> = Curry<Add, T>;

/// Doubles a literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleFn;

impl<T: Literal> Function<T> for DoubleFn
where
    Mul: BinaryOp<T, Int<P2>>,
{
    type Output = <Mul as BinaryOp<T, Int<P2>>>::Output;
}

/// Returns its argument unchanged. Accepts any type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<X> Function<X> for Identity {
    type Output = X;
}
