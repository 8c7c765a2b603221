// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/demo.rs
// Sample program resolved entirely at compile time

use crate::list;
use crate::meta::*;
use std::io::{self, Write};
use typenum::{P1, P2, P3, P4, P5, P7, U0};

/// (2 + 3) * 4
pub type Program = Expr<Mul, Expr<Add, Int<P2>, Int<P3>>, Int<P4>>;

/// `Add3` with its first operand bound to 5.
pub type PartialAdd = Add3<Int<P5>>;

pub type Input = list![Int<P1>, Int<P2>, Int<P3>];
pub type Mapped = Map<DoubleFn, Input>;
pub type Output = Tessellate<DoubleFn, Input>;
pub type FirstElement = At<U0, Output>;

/// Print every result of the sample program, one labelled line each.
pub fn write_demo<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "(2 + 3) * 4 = ")?;
    write_result::<Evaluated<Program>, _>(out)?;

    write!(out, "DoubleFn 7 = ")?;
    write_result::<Applied<DoubleFn, Int<P7>>, _>(out)?;

    write!(out, "Add3<5> 7 = ")?;
    write_result::<Applied<PartialAdd, Int<P7>>, _>(out)?;

    writeln!(out, "Map DoubleFn [1, 2, 3] = {:?}", <Mapped as LiteralSeq>::values())?;
    writeln!(out, "Tessellate DoubleFn [1, 2, 3] = {:?}", <Output as LiteralSeq>::values())?;

    write!(out, "At 0 = ")?;
    write_result::<FirstElement, _>(out)
}
