// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/meta/eval.rs
// Expression trees and the evaluator that reduces them to literals

use crate::meta::literal::{Int, Literal};
use crate::meta::op::BinaryOp;
use std::marker::PhantomData;
use typenum::Integer;

/// A binary arithmetic node: operator tag `Op` over operands `L` and `R`.
///
/// Each operand is an [`Int`] or another `Expr`. Nothing is computed until
/// the tree is named through [`Evaluated`].
pub struct Expr<Op, L, R>(PhantomData<(Op, L, R)>);

/// Reduce a literal or expression to its literal value.
///
/// ```
/// use tessellate::meta::*;
/// use typenum::{P2, P3, P4};
///
/// type Program = Expr<Mul, Expr<Add, Int<P2>, Int<P3>>, Int<P4>>;
/// assert_eq!(<Evaluated<Program> as Literal>::VALUE, 20);
/// ```
///
/// A zero divisor has no rule to resolve:
///
/// ```compile_fail
/// use tessellate::meta::*;
/// use typenum::{P1, P2};
///
/// type Bad = Expr<Div, Int<P2>, Expr<Sub, Int<P1>, Int<P1>>>;
/// let _ = <Evaluated<Bad> as Literal>::VALUE;
/// ```
///
/// Neither does a tag outside the four operators:
///
/// ```compile_fail
/// use tessellate::meta::*;
/// use typenum::{P1, P2};
///
/// struct Pow;
/// let _ = <Evaluated<Expr<Pow, Int<P2>, Int<P1>>> as Literal>::VALUE;
/// ```
pub trait Eval {
    type Output: Literal;
}

/// The fully reduced literal of `E`.
pub type Evaluated<E> = <E as Eval>::Output;

impl<N: Integer> Eval for Int<N> {
    type Output = Int<N>;
}

impl<Op, L, R> Eval for Expr<Op, L, R>
where
    L: Eval,
    R: Eval,
    Op: BinaryOp<L::Output, R::Output>,
{
    type Output = <Op as BinaryOp<L::Output, R::Output>>::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::op::{Add, Div, Mul, Sub};
    use typenum::{N5, P10, P2, P3, P4, P7};

    #[test]
    fn test_literal_is_irreducible() {
        assert_eq!(<Evaluated<Int<P7>> as Literal>::VALUE, 7);
        assert_eq!(<Evaluated<Int<N5>> as Literal>::VALUE, -5);
    }

    #[test]
    fn test_nested_expression() {
        // 10 - (3 * 4) / 2
        type E = Expr<Sub, Int<P10>, Expr<Div, Expr<Mul, Int<P3>, Int<P4>>, Int<P2>>>;
        assert_eq!(<Evaluated<E> as Literal>::VALUE, 4);
    }

    #[test]
    fn test_left_nested_expression() {
        type E = Expr<Add, Expr<Add, Expr<Add, Int<P2>, Int<P2>>, Int<P2>>, Int<P2>>;
        assert_eq!(<Evaluated<E> as Literal>::VALUE, 8);
    }
}
