//! Tagged number representation.
//!
//! This module provides the core `TaggedNumber` enum: one value type that
//! holds a boolean, a 64-bit integer or a double-precision float, along with
//! the shared Invalid constant produced by undefined operations.

use crate::kind::NumberKind;
use std::fmt;

/// A boolean, integer or float whose representation is decided at runtime.
///
/// Each variant carries exactly the payload its kind describes, so the
/// payload can only ever be read through the matching tag. Values are plain
/// `Copy` data; operators never fail and produce [`TaggedNumber::Invalid`]
/// for combinations they do not define.
///
/// `PartialEq` compares kind and payload structurally. The `==` operator of
/// the coercion algebra is [`TaggedNumber::cmp_eq`], which returns a tagged
/// Boolean instead.
///
/// # Examples
///
/// ```
/// use tagged_number::{NumberKind, TaggedNumber};
///
/// let sum = TaggedNumber::from(true) + TaggedNumber::from(1);
/// assert_eq!(sum, TaggedNumber::Integer(2));
///
/// let quotient = TaggedNumber::from(true) / TaggedNumber::from(false);
/// assert_eq!(quotient.kind(), NumberKind::Invalid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TaggedNumber {
    /// Undefined result; carries no payload
    #[default]
    Invalid,
    /// Boolean truth value
    Boolean(bool),
    /// Signed 64-bit integer
    Integer(i64),
    /// IEEE 754 double-precision float
    Float(f64),
}

/// The process-wide Invalid value returned by every undefined operation.
pub static INVALID_NUMBER: TaggedNumber = TaggedNumber::Invalid;

impl TaggedNumber {
    /// Creates a value of the given kind holding a zero payload.
    ///
    /// ```
    /// use tagged_number::{NumberKind, TaggedNumber};
    ///
    /// assert_eq!(TaggedNumber::with_kind(NumberKind::Integer), TaggedNumber::Integer(0));
    /// assert_eq!(TaggedNumber::with_kind(NumberKind::Invalid), TaggedNumber::Invalid);
    /// ```
    pub fn with_kind(kind: NumberKind) -> Self {
        match kind {
            NumberKind::Boolean => TaggedNumber::Boolean(false),
            NumberKind::Integer => TaggedNumber::Integer(0),
            NumberKind::Float => TaggedNumber::Float(0.0),
            NumberKind::Invalid => INVALID_NUMBER,
        }
    }

    /// Returns the kind tag of this value.
    pub fn kind(&self) -> NumberKind {
        match self {
            TaggedNumber::Invalid => NumberKind::Invalid,
            TaggedNumber::Boolean(_) => NumberKind::Boolean,
            TaggedNumber::Integer(_) => NumberKind::Integer,
            TaggedNumber::Float(_) => NumberKind::Float,
        }
    }

    /// Returns the display name of this value's kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Whether this value is anything other than Invalid.
    pub fn is_valid(&self) -> bool {
        self.kind().is_valid()
    }

    /// Converts to a boolean.
    ///
    /// Integers and floats are true when nonzero; Invalid is false.
    pub fn as_bool(&self) -> bool {
        match *self {
            TaggedNumber::Boolean(b) => b,
            TaggedNumber::Integer(n) => n != 0,
            TaggedNumber::Float(x) => x != 0.0,
            TaggedNumber::Invalid => false,
        }
    }

    /// Converts to an integer.
    ///
    /// Booleans become 0 or 1. Floats truncate toward zero, saturating at the
    /// `i64` bounds, with NaN mapping to 0. Invalid is 0.
    pub fn as_int(&self) -> i64 {
        match *self {
            TaggedNumber::Boolean(b) => b as i64,
            TaggedNumber::Integer(n) => n,
            TaggedNumber::Float(x) => x as i64,
            TaggedNumber::Invalid => 0,
        }
    }

    /// Converts to a float.
    ///
    /// Booleans become 0.0 or 1.0; Invalid is 0.0.
    pub fn as_float(&self) -> f64 {
        match *self {
            TaggedNumber::Boolean(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            TaggedNumber::Integer(n) => n as f64,
            TaggedNumber::Float(x) => x,
            TaggedNumber::Invalid => 0.0,
        }
    }
}

impl From<bool> for TaggedNumber {
    fn from(value: bool) -> Self {
        TaggedNumber::Boolean(value)
    }
}

impl From<i32> for TaggedNumber {
    fn from(value: i32) -> Self {
        TaggedNumber::Integer(i64::from(value))
    }
}

impl From<i64> for TaggedNumber {
    fn from(value: i64) -> Self {
        TaggedNumber::Integer(value)
    }
}

impl From<f32> for TaggedNumber {
    fn from(value: f32) -> Self {
        TaggedNumber::Float(f64::from(value))
    }
}

impl From<f64> for TaggedNumber {
    fn from(value: f64) -> Self {
        TaggedNumber::Float(value)
    }
}

impl From<&str> for TaggedNumber {
    fn from(text: &str) -> Self {
        TaggedNumber::from_text(text)
    }
}

impl From<String> for TaggedNumber {
    fn from(text: String) -> Self {
        TaggedNumber::from_text(&text)
    }
}

/// Text rendering.
///
/// - Boolean → "true" or "false"
/// - Integer → decimal digits
/// - Float → shortest round-trip form ("7.0", "3.14", "1e100", "NaN", "inf")
/// - Invalid → "Unknown"
///
/// ```
/// use tagged_number::TaggedNumber;
///
/// assert_eq!(TaggedNumber::from(false).to_string(), "false");
/// assert_eq!(TaggedNumber::from(-12).to_string(), "-12");
/// assert_eq!(TaggedNumber::from(7.0).to_string(), "7.0");
/// assert_eq!(TaggedNumber::Invalid.to_string(), "Unknown");
/// ```
impl fmt::Display for TaggedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TaggedNumber::Boolean(b) => write!(f, "{}", if b { "true" } else { "false" }),
            TaggedNumber::Integer(n) => write!(f, "{}", n),
            TaggedNumber::Float(x) => {
                let mut buffer = ryu::Buffer::new();
                f.write_str(buffer.format(x))
            }
            TaggedNumber::Invalid => write!(f, "Unknown"),
        }
    }
}
