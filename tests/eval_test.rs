// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/eval_test.rs
// Evaluator laws, checked by the compiler

mod common;

use common::assert_same;
use tessellate::meta::*;
use typenum::{N1, N2, N6, P1, P10, P2, P20, P3, P4, P5, P6, P7, P9, Z0};

#[test]
fn test_literal_evaluates_to_itself() {
    assert_same::<Evaluated<Int<Z0>>, Int<Z0>>();
    assert_same::<Evaluated<Int<P7>>, Int<P7>>();
    assert_same::<Evaluated<Int<N6>>, Int<N6>>();
    assert_eq!(<Evaluated<Int<P7>> as Literal>::VALUE, 7);
}

#[test]
fn test_sample_program() {
    // (2 + 3) * 4
    type Program = Expr<Mul, Expr<Add, Int<P2>, Int<P3>>, Int<P4>>;
    assert_same::<Evaluated<Program>, Int<P20>>();
    assert_eq!(<Evaluated<Program> as Literal>::VALUE, 20);
}

#[test]
fn test_each_operator() {
    assert_same::<Evaluated<Expr<Add, Int<P3>, Int<P4>>>, Int<P7>>();
    assert_same::<Evaluated<Expr<Sub, Int<P3>, Int<P4>>>, Int<N1>>();
    assert_same::<Evaluated<Expr<Mul, Int<P3>, Int<N2>>>, Int<N6>>();
    assert_same::<Evaluated<Expr<Div, Int<P20>, Int<P6>>>, Int<P3>>();
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_same::<Evaluated<Expr<Div, Int<P9>, Int<P2>>>, Int<P4>>();
    assert_same::<Evaluated<Expr<Div, Int<P9>, Int<N2>>>, Int<typenum::N4>>();
    assert_same::<Evaluated<Expr<Div, Int<P1>, Int<P2>>>, Int<Z0>>();
}

#[test]
fn test_operands_reduce_before_combining() {
    // (10 - 5) / (2 - 1) + 0 * 7
    type E = Expr<
        Add,
        Expr<Div, Expr<Sub, Int<P10>, Int<P5>>, Expr<Sub, Int<P2>, Int<P1>>>,
        Expr<Mul, Int<Z0>, Int<P7>>,
    >;
    assert_same::<Evaluated<E>, Int<P5>>();
}

#[test]
fn test_cancelling_to_zero() {
    assert_same::<Evaluated<Expr<Add, Int<P5>, Int<typenum::N5>>>, Int<Z0>>();
    assert_eq!(<Evaluated<Expr<Sub, Int<P5>, Int<P5>>> as Literal>::VALUE, 0);
}
