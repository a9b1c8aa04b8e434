//! Tagged number evaluator CLI library
//!
//! Provides the Evaluator struct and supporting modules for the `tn` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod evaluator;
pub mod repl;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use evaluator::Evaluator;
