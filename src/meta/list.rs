// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/meta/list.rs
// Type-level sequences and the operations over them

use crate::meta::func::{Apply, Function, Invoke};
use crate::meta::literal::Literal;
use std::marker::PhantomData;
use std::ops;
use typenum::{Sub1, UInt, UTerm, Unsigned, B1};

// ============================================================================
// Representation
// ============================================================================

/// The empty sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

/// `H` followed by the sequence `T`.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// An ordered, fixed-length sequence of types.
pub trait Seq {
    const LEN: usize;
}

impl Seq for Nil {
    const LEN: usize = 0;
}

impl<H, T: Seq> Seq for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Build a sequence type from its elements, first to last.
///
/// ```
/// use tessellate::list;
/// use tessellate::meta::*;
/// use typenum::{P1, P2};
///
/// type Pair = list![Int<P1>, Int<P2>];
/// assert_eq!(<Pair as Seq>::LEN, 2);
/// ```
#[macro_export]
macro_rules! list {
    () => { $crate::meta::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::meta::Cons<$head, $crate::list!($($tail),*)>
    };
}

// ============================================================================
// Prepend
// ============================================================================

/// Place `T` in front of `Self`.
pub trait Prepend<T>: Seq {
    type Output: Seq;
}

impl<T, S: Seq> Prepend<T> for S {
    type Output = Cons<T, S>;
}

/// `S` with `T` as its new first element.
pub type Prepended<T, S> = <S as Prepend<T>>::Output;

// ============================================================================
// Map
// ============================================================================

/// Apply `F` to every element, calling through [`Apply`].
pub trait MapWith<F>: Seq {
    type Output: Seq;
}

impl<F> MapWith<F> for Nil {
    type Output = Nil;
}

impl<F, H, T> MapWith<F> for Cons<H, T>
where
    T: MapWith<F>,
    Apply<F, H>: Invoke,
{
    type Output = Prepended<<Apply<F, H> as Invoke>::Result, <T as MapWith<F>>::Output>;
}

/// `S` with `F` applied to each element, order preserved.
pub type Map<F, S> = <S as MapWith<F>>::Output;

// ============================================================================
// Tessellate
// ============================================================================

/// Apply `F` to every element, calling its [`Function`] rule directly.
///
/// Agrees with [`MapWith`] for every function value; kept as the direct
/// calling convention.
pub trait TessellateWith<F>: Seq {
    type Output: Seq;
}

impl<F> TessellateWith<F> for Nil {
    type Output = Nil;
}

impl<F, H, T> TessellateWith<F> for Cons<H, T>
where
    T: TessellateWith<F>,
    F: Function<H>,
{
    type Output = Prepended<<F as Function<H>>::Output, <T as TessellateWith<F>>::Output>;
}

/// `S` with `F` applied to each element, order preserved.
pub type Tessellate<F, S> = <S as TessellateWith<F>>::Output;

// ============================================================================
// At
// ============================================================================

/// Zero-based lookup with a `typenum` unsigned index.
///
/// There is no rule for [`Nil`], so reading past the end does not compile:
///
/// ```compile_fail
/// use tessellate::list;
/// use tessellate::meta::*;
/// use typenum::{P4, P5, U2};
///
/// type Short = list![Int<P4>, Int<P5>];
/// let _ = <At<U2, Short> as Literal>::VALUE;
/// ```
pub trait Lookup<I>: Seq {
    type Output;
}

impl<H, T: Seq> Lookup<UTerm> for Cons<H, T> {
    type Output = H;
}

impl<H, T, U, B> Lookup<UInt<U, B>> for Cons<H, T>
where
    T: Lookup<Sub1<UInt<U, B>>>,
    UInt<U, B>: ops::Sub<B1>,
    U: Unsigned,
{
    type Output = <T as Lookup<Sub1<UInt<U, B>>>>::Output;
}

/// Element `I` of `S`.
pub type At<I, S> = <S as Lookup<I>>::Output;

// ============================================================================
// Reading Values
// ============================================================================

/// A sequence whose every element is a [`Literal`].
pub trait LiteralSeq: Seq {
    /// Element constants, first to last.
    fn values() -> Vec<i64> {
        let mut out = Vec::with_capacity(Self::LEN);
        Self::push_values(&mut out);
        out
    }

    fn push_values(out: &mut Vec<i64>);
}

impl LiteralSeq for Nil {
    fn push_values(_out: &mut Vec<i64>) {}
}

impl<H: Literal, T: LiteralSeq> LiteralSeq for Cons<H, T> {
    fn push_values(out: &mut Vec<i64>) {
        out.push(H::VALUE);
        T::push_values(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::func::DoubleFn;
    use crate::meta::literal::Int;
    use typenum::{P1, P2, P3, U0, U1};

    type Input = list![Int<P1>, Int<P2>, Int<P3>];

    #[test]
    fn test_len() {
        assert_eq!(<list![] as Seq>::LEN, 0);
        assert_eq!(<Input as Seq>::LEN, 3);
        assert_eq!(<Prepended<Int<P3>, Input> as Seq>::LEN, 4);
    }

    #[test]
    fn test_values() {
        assert_eq!(<Input as LiteralSeq>::values(), vec![1, 2, 3]);
        assert_eq!(<Nil as LiteralSeq>::values(), Vec::<i64>::new());
    }

    #[test]
    fn test_map_doubles() {
        assert_eq!(<Map<DoubleFn, Input> as LiteralSeq>::values(), vec![2, 4, 6]);
        assert_eq!(<Tessellate<DoubleFn, Input> as LiteralSeq>::values(), vec![2, 4, 6]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(<At<U0, Input> as Literal>::VALUE, 1);
        assert_eq!(<At<U1, Input> as Literal>::VALUE, 2);
    }
}
