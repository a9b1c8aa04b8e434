//! Coercion engine.
//!
//! Every operator is one of a handful of dispatch strategies with the native
//! operation plugged in as closures, one per working kind. A strategy decides
//! which kind to compute in, converts the operands with the value-preserving
//! casts, runs the native operation and wraps the result. Anything a strategy
//! does not define yields [`INVALID_NUMBER`].
//!
//! Any Invalid operand makes the result Invalid, for every strategy.

use crate::kind::NumberKind;
use crate::value::{TaggedNumber, INVALID_NUMBER};

/// Working kind for the general binary widen.
///
/// Same kinds stay as they are. Mixed kinds widen to Float if either side is
/// Float, otherwise to Integer.
pub(crate) fn widened_kind(lhs: NumberKind, rhs: NumberKind) -> NumberKind {
    use crate::kind::NumberKind::*;

    match (lhs, rhs) {
        (Invalid, _) | (_, Invalid) => Invalid,
        (a, b) if a == b => a,
        (Float, _) | (_, Float) => Float,
        (Integer, _) | (_, Integer) => Integer,
        _ => Invalid,
    }
}

/// Working kind for numeric-only operators: like [`widened_kind`] but a
/// Boolean on either side rejects the operation.
pub(crate) fn numeric_kind(lhs: NumberKind, rhs: NumberKind) -> NumberKind {
    match (lhs, rhs) {
        (NumberKind::Boolean, _) | (_, NumberKind::Boolean) => NumberKind::Invalid,
        _ => widened_kind(lhs, rhs),
    }
}

/// General binary widen (`+ - *`, comparisons, `&& ||`).
pub(crate) fn widen<B, I, F>(
    lhs: TaggedNumber,
    rhs: TaggedNumber,
    on_bool: B,
    on_int: I,
    on_float: F,
) -> TaggedNumber
where
    B: FnOnce(bool, bool) -> TaggedNumber,
    I: FnOnce(i64, i64) -> TaggedNumber,
    F: FnOnce(f64, f64) -> TaggedNumber,
{
    match widened_kind(lhs.kind(), rhs.kind()) {
        NumberKind::Boolean => on_bool(lhs.as_bool(), rhs.as_bool()),
        NumberKind::Integer => on_int(lhs.as_int(), rhs.as_int()),
        NumberKind::Float => on_float(lhs.as_float(), rhs.as_float()),
        NumberKind::Invalid => INVALID_NUMBER,
    }
}

/// Numeric-only binary widen (`/`).
pub(crate) fn widen_numeric<I, F>(
    lhs: TaggedNumber,
    rhs: TaggedNumber,
    on_int: I,
    on_float: F,
) -> TaggedNumber
where
    I: FnOnce(i64, i64) -> TaggedNumber,
    F: FnOnce(f64, f64) -> TaggedNumber,
{
    match numeric_kind(lhs.kind(), rhs.kind()) {
        NumberKind::Integer => on_int(lhs.as_int(), rhs.as_int()),
        NumberKind::Float => on_float(lhs.as_float(), rhs.as_float()),
        NumberKind::Boolean | NumberKind::Invalid => INVALID_NUMBER,
    }
}

/// Integer-only binary (`% & ^ | << >>`): both operands go through `as_int`.
pub(crate) fn integer_only<I>(lhs: TaggedNumber, rhs: TaggedNumber, op: I) -> TaggedNumber
where
    I: FnOnce(i64, i64) -> i64,
{
    if !lhs.is_valid() || !rhs.is_valid() {
        return INVALID_NUMBER;
    }
    TaggedNumber::Integer(op(lhs.as_int(), rhs.as_int()))
}

/// Same-kind unary pass-through (`!`).
pub(crate) fn pass_through<B, I, F>(
    value: TaggedNumber,
    on_bool: B,
    on_int: I,
    on_float: F,
) -> TaggedNumber
where
    B: FnOnce(bool) -> TaggedNumber,
    I: FnOnce(i64) -> TaggedNumber,
    F: FnOnce(f64) -> TaggedNumber,
{
    match value {
        TaggedNumber::Boolean(b) => on_bool(b),
        TaggedNumber::Integer(n) => on_int(n),
        TaggedNumber::Float(x) => on_float(x),
        TaggedNumber::Invalid => INVALID_NUMBER,
    }
}

/// Numeric-only unary (`-`): Boolean is rejected.
pub(crate) fn numeric_unary<I, F>(value: TaggedNumber, on_int: I, on_float: F) -> TaggedNumber
where
    I: FnOnce(i64) -> TaggedNumber,
    F: FnOnce(f64) -> TaggedNumber,
{
    match value {
        TaggedNumber::Integer(n) => on_int(n),
        TaggedNumber::Float(x) => on_float(x),
        TaggedNumber::Boolean(_) | TaggedNumber::Invalid => INVALID_NUMBER,
    }
}

/// Integer-only unary (`~`).
pub(crate) fn integer_unary<I>(value: TaggedNumber, op: I) -> TaggedNumber
where
    I: FnOnce(i64) -> i64,
{
    if !value.is_valid() {
        return INVALID_NUMBER;
    }
    TaggedNumber::Integer(op(value.as_int()))
}
