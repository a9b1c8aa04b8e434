//! Error type for the opt-in `FromStr` parse.
//!
//! Operators and `from_text` never fail; they fall back to Invalid. This
//! error only exists for hosts that parse through [`str::parse`] and want a
//! `Result` instead of checking the kind.

use thiserror::Error;

/// Why text did not resolve to a boolean, integer or float.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTaggedNumberError {
    /// The input was the empty string
    #[error("cannot parse a tagged number from empty text")]
    Empty,
    /// The input is not an integer, float or boolean literal
    #[error("unrecognized number literal: {0:?}")]
    Unrecognized(String),
}
