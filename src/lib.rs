// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/lib.rs
// Tessellate library
//
// `meta` is the compile-time core: literals, expression trees, unary type
// functions and sequences, all resolved by the trait solver. `ast` and
// `syntax` are the runtime front-end that parses infix arithmetic and lowers
// it to `meta` types.

pub mod ast;
pub mod demo;
pub mod error;
pub mod meta;
pub mod syntax;

// Re-export commonly used items
pub use ast::{Ast, BinOp, IntLit};
pub use error::{Error, Result};
pub use syntax::{
    build_manifest, build_program, parse_expr_str, parse_expr_with_limit, to_type_expr,
};
