//! Sample application
//!
//! A small fixture program: it prints a startup banner, adds two integers
//! through the [`calculator`] module and prints the result.
//!
//! # Modules
//!
//! - [`calculator`] - Integer arithmetic with an explicit overflow policy
//! - [`app`] - The output produced by a program run
//! - [`error`] - Error types for the entire application
//!
//! # Example
//!
//! ```
//! let mut out = Vec::new();
//! sample_app::app::run(&mut out)?;
//! assert_eq!(String::from_utf8_lossy(&out), "Java Application Started\n10 + 20 = 30\n");
//! # Ok::<(), sample_app::Error>(())
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod calculator;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
