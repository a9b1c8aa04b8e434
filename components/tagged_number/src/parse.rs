//! Construction from text.
//!
//! Literal recognition runs in a fixed order: integer, then float, then the
//! boolean spellings. Each numeric step must consume the whole string.

use crate::error::ParseTaggedNumberError;
use crate::value::{TaggedNumber, INVALID_NUMBER};
use std::str::FromStr;

const TRUE_SPELLINGS: [&str; 3] = ["true", "True", "TRUE"];
const FALSE_SPELLINGS: [&str; 3] = ["false", "False", "FALSE"];

impl TaggedNumber {
    /// Builds a value from literal text, falling back to Invalid.
    ///
    /// ```
    /// use tagged_number::{NumberKind, TaggedNumber};
    ///
    /// assert_eq!(TaggedNumber::from_text("42"), TaggedNumber::Integer(42));
    /// assert_eq!(TaggedNumber::from_text("3.14").kind(), NumberKind::Float);
    /// assert_eq!(TaggedNumber::from_text("True"), TaggedNumber::Boolean(true));
    /// assert_eq!(TaggedNumber::from_text("abc").kind(), NumberKind::Invalid);
    /// ```
    pub fn from_text(text: &str) -> Self {
        if let Some(n) = parse_integer(text) {
            return TaggedNumber::Integer(n);
        }
        if let Some(x) = parse_float(text) {
            return TaggedNumber::Float(x);
        }
        if let Some(b) = parse_boolean(text) {
            return TaggedNumber::Boolean(b);
        }
        tracing::trace!(text = text, "text is not a number literal, using invalid");
        INVALID_NUMBER
    }
}

impl FromStr for TaggedNumber {
    type Err = ParseTaggedNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(ParseTaggedNumberError::Empty);
        }
        match TaggedNumber::from_text(text) {
            TaggedNumber::Invalid => Err(ParseTaggedNumberError::Unrecognized(text.to_string())),
            value => Ok(value),
        }
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

// `f64::from_str` also accepts "inf" and "nan" spellings and rounds
// out-of-range literals to infinity; only finite decimal and exponent forms
// count as float literals here.
fn parse_float(text: &str) -> Option<f64> {
    let is_literal = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_literal {
        return None;
    }
    text.parse::<f64>().ok().filter(|x| x.is_finite())
}

fn parse_boolean(text: &str) -> Option<bool> {
    if TRUE_SPELLINGS.contains(&text) {
        Some(true)
    } else if FALSE_SPELLINGS.contains(&text) {
        Some(false)
    } else {
        None
    }
}
