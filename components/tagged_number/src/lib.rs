//! Dynamically-tagged numeric values.
//!
//! This crate provides a single value type that holds a boolean, a 64-bit
//! integer or a double-precision float, and a coercion engine that decides
//! for every operator and pair of kinds which representation to compute in.
//! Operators are total: combinations they do not define produce the Invalid
//! value instead of an error.
//!
//! # Overview
//!
//! - [`TaggedNumber`] - The tagged value
//! - [`NumberKind`] - Kind tag of a value
//! - [`INVALID_NUMBER`] - Shared Invalid value
//! - [`BinaryOp`] / [`UnaryOp`] - Operator tables for token-driven hosts
//! - [`ParseTaggedNumberError`] - Error for the opt-in `FromStr` parse
//!
//! # Examples
//!
//! ```
//! use tagged_number::{NumberKind, TaggedNumber};
//!
//! let product = TaggedNumber::from("3.5") * TaggedNumber::from("2");
//! assert_eq!(product, TaggedNumber::Float(7.0));
//!
//! let remainder = TaggedNumber::from(10) % TaggedNumber::from(3.0);
//! assert_eq!(remainder, TaggedNumber::Integer(1));
//!
//! let compared = TaggedNumber::from(2).cmp_lt(TaggedNumber::from(2.5));
//! assert_eq!(compared.kind(), NumberKind::Boolean);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod coerce;
mod error;
mod kind;
mod operator;
mod ops;
mod overload;
mod parse;
mod value;

pub use error::ParseTaggedNumberError;
pub use kind::NumberKind;
pub use operator::{BinaryOp, UnaryOp};
pub use value::{TaggedNumber, INVALID_NUMBER};
