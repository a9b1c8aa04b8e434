//! Kind tags for tagged numbers.

use std::fmt;

/// The representation a [`TaggedNumber`](crate::TaggedNumber) currently holds.
///
/// # Examples
///
/// ```
/// use tagged_number::{NumberKind, TaggedNumber};
///
/// assert_eq!(TaggedNumber::from(42).kind(), NumberKind::Integer);
/// assert_eq!(NumberKind::Float.name(), "float");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberKind {
    /// Result of an undefined operation or unparseable text
    #[default]
    Invalid,
    /// Boolean truth value
    Boolean,
    /// Signed 64-bit integer
    Integer,
    /// IEEE 754 double-precision float
    Float,
}

impl NumberKind {
    /// Returns the fixed display name of this kind.
    ///
    /// - Boolean → "boolean"
    /// - Integer → "integer"
    /// - Float → "float"
    /// - Invalid → "invalid type"
    pub fn name(self) -> &'static str {
        match self {
            NumberKind::Boolean => "boolean",
            NumberKind::Integer => "integer",
            NumberKind::Float => "float",
            NumberKind::Invalid => "invalid type",
        }
    }

    /// Whether this kind carries a usable payload.
    pub fn is_valid(self) -> bool {
        self != NumberKind::Invalid
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
