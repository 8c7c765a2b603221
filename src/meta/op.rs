// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/meta/op.rs
// Operator tags and the rules that combine two literals

use crate::meta::literal::{Int, Literal};
use std::ops;
use typenum::{Diff, Integer, Prod, Quot, Sum};

// ============================================================================
// Tags
// ============================================================================

/// Addition tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

/// Subtraction tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sub;

/// Multiplication tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mul;

/// Truncating division tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Div;

/// The closed set of operator tags.
///
/// Sealed: a tag defined outside this module can never reach the evaluator.
pub trait Operator: sealed::Sealed {
    /// Infix spelling, as accepted by the parser.
    const SYMBOL: char;
    /// Type name, as emitted by the code generator.
    const NAME: &'static str;
}

impl Operator for Add {
    const SYMBOL: char = '+';
    const NAME: &'static str = "Add";
}

impl Operator for Sub {
    const SYMBOL: char = '-';
    const NAME: &'static str = "Sub";
}

impl Operator for Mul {
    const SYMBOL: char = '*';
    const NAME: &'static str = "Mul";
}

impl Operator for Div {
    const SYMBOL: char = '/';
    const NAME: &'static str = "Div";
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Add {}
    impl Sealed for super::Sub {}
    impl Sealed for super::Mul {}
    impl Sealed for super::Div {}
}

// ============================================================================
// Combining Rules
// ============================================================================

/// Combine two already-reduced literals under operator `Self`.
pub trait BinaryOp<L: Literal, R: Literal>: Operator {
    type Output: Literal;
}

/// Result of applying tag `Op` to literals `L` and `R`.
pub type Combined<Op, L, R> = <Op as BinaryOp<L, R>>::Output;

impl<L: Literal, R: Literal> BinaryOp<L, R> for Add
where
    L::Num: ops::Add<R::Num>,
    Sum<L::Num, R::Num>: Integer,
{
    type Output = Int<Sum<L::Num, R::Num>>;
}

impl<L: Literal, R: Literal> BinaryOp<L, R> for Sub
where
    L::Num: ops::Sub<R::Num>,
    Diff<L::Num, R::Num>: Integer,
{
    type Output = Int<Diff<L::Num, R::Num>>;
}

impl<L: Literal, R: Literal> BinaryOp<L, R> for Mul
where
    L::Num: ops::Mul<R::Num>,
    Prod<L::Num, R::Num>: Integer,
{
    type Output = Int<Prod<L::Num, R::Num>>;
}

// typenum has no `Div<Z0>` impl, so a zero divisor leaves this rule unresolved.
impl<L: Literal, R: Literal> BinaryOp<L, R> for Div
where
    L::Num: ops::Div<R::Num>,
    Quot<L::Num, R::Num>: Integer,
{
    type Output = Int<Quot<L::Num, R::Num>>;
}
