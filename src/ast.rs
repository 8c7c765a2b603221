// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast.rs
// Runtime arithmetic AST, mirroring the type-level `Int` / `Expr` pair

use crate::error::{Error, Result};
use crate::meta::{self, Operator};
use log::trace;
use std::fmt;

// ============================================================================
// Core Types
// ============================================================================

/// Integer literals
pub type IntLit = i64;

/// Binary operators, one per type-level tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => meta::Add::SYMBOL,
            BinOp::Sub => meta::Sub::SYMBOL,
            BinOp::Mul => meta::Mul::SYMBOL,
            BinOp::Div => meta::Div::SYMBOL,
        }
    }

    /// Name of the matching tag in [`crate::meta`].
    pub fn tag_name(self) -> &'static str {
        match self {
            BinOp::Add => meta::Add::NAME,
            BinOp::Sub => meta::Sub::NAME,
            BinOp::Mul => meta::Mul::NAME,
            BinOp::Div => meta::Div::NAME,
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div]
            .into_iter()
            .find(|op| op.symbol() == c)
    }

    /// Multiplicative operators bind tighter than additive ones.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }

    /// Combine two values. Division truncates toward zero.
    pub fn apply(self, lhs: IntLit, rhs: IntLit) -> Result<IntLit> {
        let result = match self {
            BinOp::Add => lhs.checked_add(rhs),
            BinOp::Sub => lhs.checked_sub(rhs),
            BinOp::Mul => lhs.checked_mul(rhs),
            BinOp::Div => {
                if rhs == 0 {
                    return Err(Error::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(Error::Overflow)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Int(IntLit),
    BinOp(BinOp, Box<Ast>, Box<Ast>),
}

impl Ast {
    pub fn int(n: IntLit) -> Self {
        Ast::Int(n)
    }

    pub fn binop(op: BinOp, lhs: Ast, rhs: Ast) -> Self {
        Ast::BinOp(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn add(lhs: Ast, rhs: Ast) -> Self {
        Self::binop(BinOp::Add, lhs, rhs)
    }

    pub fn sub(lhs: Ast, rhs: Ast) -> Self {
        Self::binop(BinOp::Sub, lhs, rhs)
    }

    pub fn mul(lhs: Ast, rhs: Ast) -> Self {
        Self::binop(BinOp::Mul, lhs, rhs)
    }

    pub fn div(lhs: Ast, rhs: Ast) -> Self {
        Self::binop(BinOp::Div, lhs, rhs)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Ast::Int(_))
    }

    /// Height of the tree; a literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Ast::Int(_) => 1,
            Ast::BinOp(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Reduce to a single integer, operands first.
    pub fn eval(&self) -> Result<IntLit> {
        match self {
            Ast::Int(n) => Ok(*n),
            Ast::BinOp(op, lhs, rhs) => {
                let l = lhs.eval()?;
                let r = rhs.eval()?;
                let value = op.apply(l, r)?;
                trace!("{} {} {} => {}", l, op, r, value);
                Ok(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_precedence_tree() {
        // (2 + 3) * 4
        let e = Ast::mul(Ast::add(Ast::int(2), Ast::int(3)), Ast::int(4));
        assert_eq!(e.eval(), Ok(20));
        assert_eq!(e.depth(), 3);
    }

    #[test]
    fn test_eval_errors() {
        let e = Ast::div(Ast::int(1), Ast::sub(Ast::int(2), Ast::int(2)));
        assert_eq!(e.eval(), Err(Error::DivisionByZero));

        let e = Ast::mul(Ast::int(i64::MAX), Ast::int(2));
        assert_eq!(e.eval(), Err(Error::Overflow));
    }

    #[test]
    fn test_division_truncates() {
        assert_eq!(BinOp::Div.apply(7, 2), Ok(3));
        assert_eq!(BinOp::Div.apply(-7, 2), Ok(-3));
        assert_eq!(BinOp::Div.apply(i64::MIN, -1), Err(Error::Overflow));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(BinOp::from_symbol('*'), Some(BinOp::Mul));
        assert_eq!(BinOp::from_symbol('%'), None);
        assert_eq!(BinOp::Div.tag_name(), "Div");
    }
}
