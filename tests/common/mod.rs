// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/common/mod.rs
// Compile-time type equality

#![allow(dead_code)]

/// Implemented only when `Self` and `T` are the same type.
pub trait Same<T> {}

impl<T> Same<T> for T {}

/// Compiles only if `A` and `B` resolve to the same type.
pub fn assert_same<A, B>()
where
    A: Same<B>,
{
}
