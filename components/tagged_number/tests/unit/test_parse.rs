//! Unit tests for construction from text

use tagged_number::{NumberKind, ParseTaggedNumberError, TaggedNumber};

#[cfg(test)]
mod from_text_tests {
    use super::*;

    #[test]
    fn test_integer_literals() {
        assert_eq!(TaggedNumber::from("0"), TaggedNumber::Integer(0));
        assert_eq!(TaggedNumber::from("-42"), TaggedNumber::Integer(-42));
        assert_eq!(
            TaggedNumber::from("9223372036854775807"),
            TaggedNumber::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(TaggedNumber::from("3.14"), TaggedNumber::Float(3.14));
        assert_eq!(TaggedNumber::from("2.0"), TaggedNumber::Float(2.0));
        assert_eq!(TaggedNumber::from("-1.5e-3"), TaggedNumber::Float(-0.0015));
        assert_eq!(TaggedNumber::from("5."), TaggedNumber::Float(5.0));
    }

    #[test]
    fn test_integer_wins_over_float() {
        assert_eq!(TaggedNumber::from("2").kind(), NumberKind::Integer);
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(TaggedNumber::from("True"), TaggedNumber::Boolean(true));
        assert_eq!(TaggedNumber::from("FALSE"), TaggedNumber::Boolean(false));
        assert_eq!(TaggedNumber::from("yes").kind(), NumberKind::Invalid);
        assert_eq!(TaggedNumber::from("1").kind(), NumberKind::Integer);
    }

    #[test]
    fn test_rejects_whitespace_and_trailing_characters() {
        for text in ["", " ", "42 ", "\t42", "4 2", "3.14f", "--1", "1e", "."] {
            assert_eq!(TaggedNumber::from(text).kind(), NumberKind::Invalid, "{:?}", text);
        }
    }

    #[test]
    fn test_rejects_non_decimal_spellings() {
        for text in ["infinity", "inf", "-inf", "nan", "NaN", "0x1F", "1_000", "1e400", "-1e400"] {
            assert_eq!(TaggedNumber::from(text).kind(), NumberKind::Invalid, "{:?}", text);
        }
    }
}

#[cfg(test)]
mod from_str_tests {
    use super::*;

    #[test]
    fn test_parse_ok() {
        assert_eq!("7".parse::<TaggedNumber>(), Ok(TaggedNumber::Integer(7)));
        assert_eq!("0.25".parse::<TaggedNumber>(), Ok(TaggedNumber::Float(0.25)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<TaggedNumber>(), Err(ParseTaggedNumberError::Empty));
        let err = "abc".parse::<TaggedNumber>().unwrap_err();
        assert_eq!(err, ParseTaggedNumberError::Unrecognized("abc".to_string()));
        assert_eq!(err.to_string(), "unrecognized number literal: \"abc\"");
    }
}
