//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
///
/// Operators themselves never fail; these cover malformed statements,
/// unbound names, integer division by zero and the I/O around the evaluator.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Statement does not match any supported form
    #[error("Parse error: {0}")]
    Parse(String),

    /// Variable read before it was bound
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    /// Assignment target is not a variable name
    #[error("Cannot assign to {0:?}")]
    NotAssignable(String),

    /// Integer division or remainder by zero
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
