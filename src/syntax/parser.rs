// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/parser.rs
// Infix arithmetic parser using nom

use crate::ast::*;
use crate::error::{Error, Result};
use log::debug;
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{cut, map, map_opt, map_res, opt, recognize},
    error::{context, VerboseError, VerboseErrorKind},
    multi::many0,
    sequence::{delimited, pair},
    IResult,
};

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Deepest parenthesis nesting accepted by [`parse_expr_str`].
///
/// Bounds the parser's own recursion. How deep a tree may be once lowered to
/// types is a separate limit, [`crate::syntax::MAX_TYPE_DEPTH`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

const DEPTH_CONTEXT: &str = "nesting limit";

// ============================================================================
// Lexer
// ============================================================================

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn integer(input: &str) -> ParseResult<IntLit> {
    context(
        "integer",
        map_res(ws(recognize(pair(opt(char('-')), digit1))), |s: &str| {
            s.parse::<IntLit>()
        }),
    )(input)
}

fn operator<'a>(symbols: &'static str) -> impl FnMut(&'a str) -> ParseResult<'a, BinOp> {
    map_opt(ws(one_of(symbols)), BinOp::from_symbol)
}

// ============================================================================
// Grammar
// ============================================================================

struct Grammar {
    max_depth: usize,
}

impl Grammar {
    /// expr := term (('+' | '-') term)*
    fn expr<'a>(&self, input: &'a str, depth: usize) -> ParseResult<'a, Ast> {
        let (input, first) = self.term(input, depth)?;
        let (input, rest) = many0(pair(
            operator("+-"),
            cut(|i: &'a str| self.term(i, depth)),
        ))(input)?;

        Ok((input, fold_left(first, rest)))
    }

    /// term := factor (('*' | '/') factor)*
    fn term<'a>(&self, input: &'a str, depth: usize) -> ParseResult<'a, Ast> {
        let (input, first) = self.factor(input, depth)?;
        let (input, rest) = many0(pair(
            operator("*/"),
            cut(|i: &'a str| self.factor(i, depth)),
        ))(input)?;

        Ok((input, fold_left(first, rest)))
    }

    /// factor := '-'? INT | '(' expr ')'
    fn factor<'a>(&self, input: &'a str, depth: usize) -> ParseResult<'a, Ast> {
        context(
            "number or '('",
            alt((
                map(integer, Ast::Int),
                |i: &'a str| self.parenthesized(i, depth),
            )),
        )(input)
    }

    fn parenthesized<'a>(&self, input: &'a str, depth: usize) -> ParseResult<'a, Ast> {
        let (input, _) = ws(char('('))(input)?;
        if depth >= self.max_depth {
            return Err(nom::Err::Failure(VerboseError {
                errors: vec![(input, VerboseErrorKind::Context(DEPTH_CONTEXT))],
            }));
        }
        let (input, inner) = cut(|i: &'a str| self.expr(i, depth + 1))(input)?;
        let (input, _) = cut(context("closing ')'", ws(char(')'))))(input)?;
        Ok((input, inner))
    }
}

// Operators at one precedence level associate to the left.
fn fold_left(first: Ast, rest: Vec<(BinOp, Ast)>) -> Ast {
    rest.into_iter()
        .fold(first, |acc, (op, rhs)| Ast::binop(op, acc, rhs))
}

// ============================================================================
// Error Reporting
// ============================================================================

fn offset(source: &str, rest: &str) -> usize {
    source.len() - rest.len()
}

fn describe_found(rest: &str) -> String {
    match rest.trim_start().chars().next() {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}

fn convert_error<'a>(source: &'a str, max_depth: usize, e: VerboseError<&'a str>) -> Error {
    let innermost_context = e.errors.iter().find_map(|(rest, kind)| match kind {
        VerboseErrorKind::Context(ctx) => Some((*rest, *ctx)),
        _ => None,
    });

    match innermost_context {
        Some((_, DEPTH_CONTEXT)) => Error::RecursionLimitExceeded(max_depth),
        Some((rest, ctx)) => Error::Parse {
            position: offset(source, rest),
            message: format!("expected {}, found {}", ctx, describe_found(rest)),
        },
        None => {
            let (rest, kind) = e
                .errors
                .first()
                .map(|(rest, kind)| (*rest, kind.clone()))
                .unwrap_or((source, VerboseErrorKind::Context("expression")));
            Error::Parse {
                position: offset(source, rest),
                message: format!("{:?} failed at {}", kind, describe_found(rest)),
            }
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Parse an infix arithmetic expression with [`DEFAULT_MAX_DEPTH`].
pub fn parse_expr_str(input: &str) -> Result<Ast> {
    parse_expr_with_limit(input, DEFAULT_MAX_DEPTH)
}

/// Parse an infix arithmetic expression with at most `max_depth` levels of
/// parentheses.
///
/// Operator chains like `1 + 2 + 3` are not limited here, however deep the
/// resulting tree.
pub fn parse_expr_with_limit(input: &str, max_depth: usize) -> Result<Ast> {
    let grammar = Grammar { max_depth };
    match grammar.expr(input, 0) {
        Ok(("", expr)) => {
            debug!("parsed `{}` (depth {})", expr, expr.depth());
            Ok(expr)
        }
        Ok((rest, _)) => Err(Error::Parse {
            position: offset(input, rest),
            message: format!("unexpected {}", describe_found(rest)),
        }),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(convert_error(input, max_depth, e))
        }
        Err(nom::Err::Incomplete(_)) => Err(Error::Parse {
            position: input.len(),
            message: "incomplete input".to_string(),
        }),
    }
}
