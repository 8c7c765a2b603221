// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/codegen.rs
// Lowering a runtime AST to type-level Rust source

use crate::ast::*;
use crate::error::{Error, Result};
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

/// Largest magnitude with a named `typenum` constant (`P1024`, `N1024`).
pub const MAX_TYPE_LITERAL: u64 = 1024;

/// Name of the `typenum` constant for `n`: `Z0`, `P7`, `N3`.
pub fn typenum_const(n: IntLit) -> Result<String> {
    let magnitude = n.unsigned_abs();
    if magnitude > MAX_TYPE_LITERAL {
        return Err(Error::LiteralOutOfRange(n));
    }
    Ok(match n.signum() {
        0 => "Z0".to_string(),
        1 => format!("P{}", magnitude),
        _ => format!("N{}", magnitude),
    })
}

/// Deepest tree lowered to type syntax.
///
/// Each level is one `Eval` obligation, so this stays well under the
/// compiler's default recursion limit of 128.
pub const MAX_TYPE_DEPTH: usize = 64;

/// Render `expr` in the `Int` / `Expr` type syntax of [`crate::meta`].
///
/// `7 * (2 + 3)` becomes `Expr<Mul, Int<P7>, Expr<Add, Int<P2>, Int<P3>>>`.
pub fn to_type_expr(expr: &Ast) -> Result<String> {
    lower(expr).map(|(ty, _)| ty)
}

fn lower(expr: &Ast) -> Result<(String, BTreeSet<String>)> {
    let depth = expr.depth();
    if depth > MAX_TYPE_DEPTH {
        return Err(Error::TooDeep {
            depth,
            limit: MAX_TYPE_DEPTH,
        });
    }
    let mut ty = String::new();
    let mut consts = BTreeSet::new();
    write_type(expr, &mut ty, &mut consts)?;
    Ok((ty, consts))
}

fn write_type(expr: &Ast, out: &mut String, consts: &mut BTreeSet<String>) -> Result<()> {
    match expr {
        Ast::Int(n) => {
            let name = typenum_const(*n)?;
            out.push_str("Int<");
            out.push_str(&name);
            out.push('>');
            consts.insert(name);
        }
        Ast::BinOp(op, lhs, rhs) => {
            out.push_str("Expr<");
            out.push_str(op.tag_name());
            out.push_str(", ");
            write_type(lhs, out, consts)?;
            out.push_str(", ");
            write_type(rhs, out, consts)?;
            out.push('>');
        }
    }
    Ok(())
}

/// A complete `main.rs` that evaluates `expr` at compile time and prints it.
///
/// A division by zero in `expr` is emitted as-is; the generated program then
/// fails to compile, which is the type-level report of that error.
pub fn build_program(expr: &Ast) -> Result<String> {
    let (ty, consts) = lower(expr)?;
    debug!("lowered `{}` to {} ({} constants)", expr, ty, consts.len());

    let imports = consts.into_iter().collect::<Vec<_>>().join(", ");
    Ok(format!(
        r#"// Generated by tessellate from `{expr}`.
use tessellate::meta::*;
use typenum::{{{imports}}};

type Program = {ty};

fn main() {{
    print_result::<Evaluated<Program>>();
}}
"#
    ))
}

/// `Cargo.toml` for a scratch binary crate that builds a [`build_program`]
/// output against the tessellate sources in `crate_dir`.
///
/// The empty `[workspace]` table keeps cargo from attaching the scratch crate
/// to an enclosing workspace.
pub fn build_manifest(crate_dir: &Path) -> String {
    format!(
        r#"[package]
name = "tessellate-run"
version = "0.0.0"
edition = "2021"
publish = false

[workspace]

[dependencies]
tessellate = {{ path = '{path}' }}
typenum = "1.17"
"#,
        path = crate_dir.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typenum_const() {
        assert_eq!(typenum_const(0).unwrap(), "Z0");
        assert_eq!(typenum_const(7).unwrap(), "P7");
        assert_eq!(typenum_const(-3).unwrap(), "N3");
        assert_eq!(typenum_const(1024).unwrap(), "P1024");
        assert_eq!(typenum_const(-1025), Err(Error::LiteralOutOfRange(-1025)));
        assert_eq!(typenum_const(i64::MIN), Err(Error::LiteralOutOfRange(i64::MIN)));
    }

    #[test]
    fn test_to_type_expr() {
        let e = Ast::mul(Ast::int(7), Ast::add(Ast::int(4), Ast::int(3)));
        assert_eq!(
            to_type_expr(&e).unwrap(),
            "Expr<Mul, Int<P7>, Expr<Add, Int<P4>, Int<P3>>>"
        );
    }

    #[test]
    fn test_out_of_range_literal_anywhere_in_tree() {
        let e = Ast::sub(Ast::int(1), Ast::div(Ast::int(2), Ast::int(5000)));
        assert_eq!(to_type_expr(&e), Err(Error::LiteralOutOfRange(5000)));
    }

    #[test]
    fn test_depth_limit_applies_to_lowering() {
        let chain = |n: i64| (2..=n).fold(Ast::int(1), |acc, i| Ast::add(acc, Ast::int(i)));
        assert!(to_type_expr(&chain(MAX_TYPE_DEPTH as i64)).is_ok());
        assert_eq!(
            build_program(&chain(MAX_TYPE_DEPTH as i64 + 1)),
            Err(Error::TooDeep {
                depth: MAX_TYPE_DEPTH + 1,
                limit: MAX_TYPE_DEPTH
            })
        );
    }
}
