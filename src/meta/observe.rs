// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/meta/observe.rs
// Printing resolved constants

use crate::meta::list::LiteralSeq;
use crate::meta::literal::Literal;
use std::io::{self, Write};

/// Write `T`'s constant followed by a newline.
pub fn write_result<T: Literal, W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", T::VALUE)
}

/// Print `T`'s constant to stdout.
pub fn print_result<T: Literal>() {
    println!("{}", T::VALUE);
}

/// Write each element constant of `S` on its own line.
pub fn write_values<S: LiteralSeq, W: Write>(out: &mut W) -> io::Result<()> {
    for value in S::values() {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}
