//! Integer arithmetic primitives.
//!
//! All operations work on `i32`. [`add`] and [`subtract`] use wrapping
//! two's-complement arithmetic, so `add(i32::MAX, 1) == i32::MIN` in both
//! debug and release builds. Callers that need to detect overflow use
//! [`checked_add`] and [`checked_subtract`] instead.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// An arithmetic operation supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
}

impl Operation {
    /// Returns the infix symbol used when printing the operation.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    /// Applies the operation with wrapping semantics.
    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Self::Add => add(a, b),
            Self::Subtract => subtract(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Adds two numbers, wrapping at the `i32` boundaries.
///
/// # Examples
///
/// ```
/// assert_eq!(sample_app::calculator::add(10, 20), 30);
/// assert_eq!(sample_app::calculator::add(i32::MAX, 1), i32::MIN);
/// ```
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Subtracts `b` from `a`, wrapping at the `i32` boundaries.
///
/// # Examples
///
/// ```
/// assert_eq!(sample_app::calculator::subtract(10, 20), -10);
/// ```
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Adds two numbers, failing instead of wrapping.
///
/// ## Errors
/// Returns [`Error::Overflow`] if the sum does not fit in `i32`.
pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or_else(|| overflow(Operation::Add, a, b))
}

/// Subtracts `b` from `a`, failing instead of wrapping.
///
/// ## Errors
/// Returns [`Error::Overflow`] if the difference does not fit in `i32`.
pub fn checked_subtract(a: i32, b: i32) -> Result<i32> {
    a.checked_sub(b)
        .ok_or_else(|| overflow(Operation::Subtract, a, b))
}

fn overflow(op: Operation, lhs: i32, rhs: i32) -> Error {
    debug!(%op, lhs, rhs, "checked arithmetic overflowed");
    Error::Overflow { op, lhs, rhs }
}
