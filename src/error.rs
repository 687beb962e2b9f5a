//! Error types for the sample application.
//!
//! The calculator's default functions wrap on overflow and never fail; only
//! the checked variants and output writing produce errors.

use thiserror::Error;

use crate::calculator::Operation;

/// A unified error type for the entire application.
#[derive(Debug, Error)]
pub enum Error {
    /// A checked arithmetic operation left the `i32` range.
    #[error("integer overflow: {lhs} {op} {rhs} does not fit in i32")]
    Overflow {
        /// The operation that overflowed.
        op: Operation,
        /// Left operand.
        lhs: i32,
        /// Right operand.
        rhs: i32,
    },

    /// Writing program output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for sample-app operations.
pub type Result<T> = std::result::Result<T, Error>;
