//! The application run: banner, one calculator call, one result line.

use std::io::Write;

use tracing::{debug, info};

use crate::calculator::{self, Operation};
use crate::error::Result;

/// Line printed before anything else.
pub const BANNER: &str = "Java Application Started";

/// Operands passed to the calculator on every run.
pub const OPERANDS: (i32, i32) = (10, 20);

/// Renders one result line, e.g. `10 + 20 = 30`.
pub fn format_result(op: Operation, lhs: i32, rhs: i32, result: i32) -> String {
    format!("{lhs} {op} {rhs} = {result}")
}

/// Writes the banner and the sum of [`OPERANDS`] to `out`.
///
/// ## Errors
/// Returns [`crate::Error::Io`] if writing to `out` fails.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    info!("application started");

    let (lhs, rhs) = OPERANDS;
    let result = calculator::add(lhs, rhs);
    debug!(lhs, rhs, result, "computed sum");

    writeln!(out, "{}", format_result(Operation::Add, lhs, rhs, result))?;
    out.flush()?;

    Ok(())
}
