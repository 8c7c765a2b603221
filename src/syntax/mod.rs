// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/mod.rs
// Textual front-end: parsing, printing and lowering to type-level source

pub mod parser;
pub mod pretty;
pub mod codegen;

pub use parser::{parse_expr_str, parse_expr_with_limit, DEFAULT_MAX_DEPTH};
pub use codegen::{
    build_manifest, build_program, to_type_expr, typenum_const, MAX_TYPE_DEPTH, MAX_TYPE_LITERAL,
};
