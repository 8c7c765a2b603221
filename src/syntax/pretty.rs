// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/pretty.rs
// Infix printing with minimal parentheses

use crate::ast::*;
use std::fmt;

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", PrettyExpr(self, PREC_NONE, Side::Left))
    }
}

impl Ast {
    pub fn to_pretty_string(&self) -> String {
        format!("{}", self)
    }
}

// ============================================================================
// Pretty Printer with Precedence
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

const PREC_NONE: u8 = 0;

struct PrettyExpr<'a>(&'a Ast, u8, Side);

impl<'a> fmt::Display for PrettyExpr<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrettyExpr(expr, parent_prec, side) = *self;

        match expr {
            // `1 - -4` would not parse back; a signed operand needs parentheses.
            Ast::Int(n) if *n < 0 && parent_prec > PREC_NONE => write!(f, "({})", n),
            Ast::Int(n) => write!(f, "{}", n),

            Ast::BinOp(op, lhs, rhs) => {
                let prec = op.precedence();
                // The parser folds to the left, so an equal-precedence node on
                // the right only round-trips inside parentheses.
                let wrap = prec < parent_prec || (prec == parent_prec && side == Side::Right);
                if wrap {
                    write!(f, "(")?;
                }
                write!(
                    f,
                    "{} {} {}",
                    PrettyExpr(lhs, prec, Side::Left),
                    op,
                    PrettyExpr(rhs, prec, Side::Right)
                )?;
                if wrap {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_parens() {
        let e = Ast::mul(Ast::add(Ast::int(2), Ast::int(3)), Ast::int(4));
        assert_eq!(e.to_pretty_string(), "(2 + 3) * 4");

        let e = Ast::add(Ast::int(2), Ast::mul(Ast::int(3), Ast::int(4)));
        assert_eq!(e.to_pretty_string(), "2 + 3 * 4");
    }

    #[test]
    fn test_right_nested_same_precedence() {
        let e = Ast::sub(Ast::int(1), Ast::sub(Ast::int(2), Ast::int(3)));
        assert_eq!(e.to_pretty_string(), "1 - (2 - 3)");

        let e = Ast::sub(Ast::sub(Ast::int(1), Ast::int(2)), Ast::int(3));
        assert_eq!(e.to_pretty_string(), "1 - 2 - 3");
    }

    #[test]
    fn test_negative_literal() {
        assert_eq!(Ast::int(-4).to_pretty_string(), "-4");

        let e = Ast::sub(Ast::int(1), Ast::int(-4));
        assert_eq!(e.to_pretty_string(), "1 - (-4)");

        let e = Ast::mul(Ast::int(-3), Ast::int(-2));
        assert_eq!(e.to_pretty_string(), "(-3) * (-2)");
    }
}
