//! Plain-text files shared with external regression solvers.
//!
//! The input file holds one training sample per line, its power-basis features separated by
//! a single space followed by two spaces and the target. The output file holds the fitted
//! coefficients, intercept first, separated by whitespace.

mod error;
mod input;
mod output;

pub use error::{ExchangeErr, Result};
pub use input::{export_input, import_input, read_input, write_input};
pub use output::{export_coefficients, import_coefficients, read_coefficients, write_coefficients};
