// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/meta/mod.rs
// The compile-time core. Every rule here is a trait resolved by the compiler;
// only `observe` and `LiteralSeq::values` do anything at runtime.

pub mod literal;
pub mod op;
pub mod eval;
pub mod func;
pub mod list;
pub mod observe;

pub use literal::{Int, Literal};
pub use op::{Add, BinaryOp, Combined, Div, Mul, Operator, Sub};
pub use eval::{Eval, Evaluated, Expr};
pub use func::{Add3, Applied, Apply, Compose, Curry, DoubleFn, Function, Identity, Invoke};
pub use list::{
    At, Cons, LiteralSeq, Lookup, Map, MapWith, Nil, Prepend, Prepended, Seq, Tessellate,
    TessellateWith,
};
pub use observe::{print_result, write_result, write_values};
