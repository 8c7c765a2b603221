// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/error.rs
// Errors raised by the runtime front-end (parsing, evaluation, code generation).
// The type-level core has none: its failures are compile errors.

/// Errors that can occur while handling a textual expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input is not a well-formed arithmetic expression.
    #[error("parse error at offset {position}: {message}")]
    Parse { position: usize, message: String },

    /// Parentheses nested deeper than the configured limit.
    #[error("parentheses nested deeper than {0} levels")]
    RecursionLimitExceeded(usize),

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,

    /// No named `typenum` constant exists for this value.
    #[error("literal {0} has no type-level constant (supported range is -1024..=1024)")]
    LiteralOutOfRange(i64),

    /// Tree too deep to lower to a type the compiler will resolve.
    #[error("expression tree is {depth} levels deep; type-level evaluation supports at most {limit}")]
    TooDeep { depth: usize, limit: usize },
}

/// Result type for front-end operations.
pub type Result<T> = std::result::Result<T, Error>;
