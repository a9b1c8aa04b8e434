//! Contract compliance tests for tagged_number
//!
//! These tests pin down the observable behavior hosts rely on: result kinds,
//! text construction order, and the Invalid fallback.

use tagged_number::{NumberKind, TaggedNumber, INVALID_NUMBER};

#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// Contract: Boolean widens to Integer when mixed with an Integer
    #[test]
    fn test_boolean_plus_integer() {
        let result = TaggedNumber::from(true) + TaggedNumber::from(1);
        assert_eq!(result.kind(), NumberKind::Integer);
        assert_eq!(result.as_int(), 2);
    }

    /// Contract: `%` coerces both operands through as_int
    #[test]
    fn test_integer_mod_float() {
        let result = TaggedNumber::from(10) % TaggedNumber::from(3.0);
        assert_eq!(result, TaggedNumber::Integer(1));
    }

    /// Contract: operands parsed from text widen like any other value
    #[test]
    fn test_parsed_float_times_parsed_integer() {
        let result = TaggedNumber::from("3.5") * TaggedNumber::from("2");
        assert_eq!(result.kind(), NumberKind::Float);
        assert_eq!(result.as_float(), 7.0);
    }

    /// Contract: shift amount is the right operand's as_int
    #[test]
    fn test_shift_by_boolean() {
        let result = TaggedNumber::from(5) << TaggedNumber::from(true);
        assert_eq!(result, TaggedNumber::Integer(10));
    }
}

#[cfg(test)]
mod text_contract_tests {
    use super::*;

    #[test]
    fn test_integer_text() {
        let value = TaggedNumber::from("42");
        assert_eq!(value.kind(), NumberKind::Integer);
        assert_eq!(value.as_int(), 42);
    }

    #[test]
    fn test_float_text() {
        assert_eq!(TaggedNumber::from("3.14").kind(), NumberKind::Float);
    }

    #[test]
    fn test_boolean_text() {
        let value = TaggedNumber::from("True");
        assert_eq!(value.kind(), NumberKind::Boolean);
        assert!(value.as_bool());
    }

    #[test]
    fn test_unparseable_text() {
        assert_eq!(TaggedNumber::from("abc").kind(), NumberKind::Invalid);
    }
}

#[cfg(test)]
mod invalid_contract_tests {
    use super::*;

    /// Contract: comparisons against Invalid are Invalid, never Boolean
    #[test]
    fn test_invalid_comparisons() {
        let one = TaggedNumber::from(1);
        assert_eq!(one.cmp_eq(INVALID_NUMBER).kind(), NumberKind::Invalid);
        assert_eq!(INVALID_NUMBER.cmp_ne(one).kind(), NumberKind::Invalid);
        assert_eq!(INVALID_NUMBER.cmp_lt(INVALID_NUMBER).kind(), NumberKind::Invalid);
    }

    /// Contract: Invalid can be used as any operand without trapping
    #[test]
    fn test_invalid_operand_never_traps() {
        let x = TaggedNumber::from(8);
        assert_eq!(INVALID_NUMBER + INVALID_NUMBER, INVALID_NUMBER);
        assert_eq!(INVALID_NUMBER & x, INVALID_NUMBER);
        assert_eq!(x % INVALID_NUMBER, INVALID_NUMBER);
        assert_eq!(x / INVALID_NUMBER, INVALID_NUMBER);
        assert_eq!(x << INVALID_NUMBER, INVALID_NUMBER);
        assert_eq!(INVALID_NUMBER.logical_or(x), INVALID_NUMBER);
        assert_eq!(!INVALID_NUMBER, INVALID_NUMBER);
        assert_eq!(INVALID_NUMBER.bit_not(), INVALID_NUMBER);
    }

    /// Contract: compound assignment stores the Invalid result
    #[test]
    fn test_compound_assignment_to_invalid() {
        let mut value = TaggedNumber::from(false);
        value /= TaggedNumber::from(true);
        assert_eq!(value, INVALID_NUMBER);
        value += TaggedNumber::from(1);
        assert_eq!(value, INVALID_NUMBER);
    }

    /// Contract: the shared constant is the default value
    #[test]
    fn test_shared_invalid_is_default() {
        assert_eq!(TaggedNumber::default(), INVALID_NUMBER);
        assert_eq!(INVALID_NUMBER.kind(), NumberKind::Invalid);
    }

    #[test]
    fn test_values_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TaggedNumber>();
    }
}
