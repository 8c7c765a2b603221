// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/meta/literal.rs
// Integer literals as types

use std::fmt;
use std::marker::PhantomData;
use typenum::Integer;

/// A constant integer lifted to the type level.
///
/// `N` is a `typenum` signed integer (`Z0`, `P7`, `N3`, ...). The struct is
/// zero-sized and never carries runtime state; the constant is read through
/// [`Literal::VALUE`].
pub struct Int<N>(PhantomData<N>);

/// Anything that exposes a numeric constant.
pub trait Literal {
    type Num: Integer;
    const VALUE: i64;
}

impl<N: Integer> Literal for Int<N> {
    type Num = N;
    const VALUE: i64 = N::I64;
}

impl<N> Int<N> {
    pub const fn new() -> Self {
        Int(PhantomData)
    }
}

impl<N> Default for Int<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for Int<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Int<N> {}

impl<N: Integer> fmt::Debug for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Int<{}>", N::I64)
    }
}

impl<N: Integer> fmt::Display for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", N::I64)
    }
}
