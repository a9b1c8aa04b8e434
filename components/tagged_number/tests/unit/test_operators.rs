//! Unit tests for the operator dispatch table, one module per strategy

use tagged_number::{BinaryOp, NumberKind, TaggedNumber, UnaryOp, INVALID_NUMBER};

fn samples() -> Vec<TaggedNumber> {
    vec![
        INVALID_NUMBER,
        TaggedNumber::from(true),
        TaggedNumber::from(false),
        TaggedNumber::from(3),
        TaggedNumber::from(-2),
        TaggedNumber::from(1.5),
        TaggedNumber::from(-0.5),
    ]
}

#[cfg(test)]
mod general_widen_tests {
    use super::*;

    #[test]
    fn test_result_kind_for_arithmetic() {
        let widening_ops = [BinaryOp::Mul, BinaryOp::Add, BinaryOp::Sub];
        for op in widening_ops {
            for lhs in samples() {
                for rhs in samples() {
                    let expected = match (lhs.kind(), rhs.kind()) {
                        (NumberKind::Invalid, _) | (_, NumberKind::Invalid) => NumberKind::Invalid,
                        (NumberKind::Float, _) | (_, NumberKind::Float) => NumberKind::Float,
                        (NumberKind::Integer, _) | (_, NumberKind::Integer) => NumberKind::Integer,
                        _ => NumberKind::Boolean,
                    };
                    assert_eq!(op.apply(lhs, rhs).kind(), expected, "{} {} {}", lhs, op, rhs);
                }
            }
        }
    }

    #[test]
    fn test_result_kind_for_comparisons_and_logic() {
        let boolean_ops = [
            BinaryOp::Gt,
            BinaryOp::Ge,
            BinaryOp::Lt,
            BinaryOp::Le,
            BinaryOp::Eq,
            BinaryOp::Ne,
            BinaryOp::LogicalAnd,
            BinaryOp::LogicalOr,
        ];
        for op in boolean_ops {
            for lhs in samples() {
                for rhs in samples() {
                    let expected = if lhs.is_valid() && rhs.is_valid() {
                        NumberKind::Boolean
                    } else {
                        NumberKind::Invalid
                    };
                    assert_eq!(op.apply(lhs, rhs).kind(), expected, "{} {} {}", lhs, op, rhs);
                }
            }
        }
    }

    #[test]
    fn test_float_integer_mix_is_symmetric() {
        let a = TaggedNumber::from(4);
        let b = TaggedNumber::from(0.25);
        assert_eq!(a + b, TaggedNumber::Float(4.25));
        assert_eq!(b + a, TaggedNumber::Float(4.25));
        assert_eq!(a - b, TaggedNumber::Float(3.75));
        assert_eq!(b - a, TaggedNumber::Float(-3.75));
    }

    #[test]
    fn test_boolean_compares_as_integer_against_integer() {
        assert_eq!(TaggedNumber::from(true).cmp_lt(TaggedNumber::from(2)), TaggedNumber::Boolean(true));
        assert_eq!(TaggedNumber::from(false).cmp_eq(TaggedNumber::from(0)), TaggedNumber::Boolean(true));
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(
            TaggedNumber::from(i64::MAX) + TaggedNumber::from(1),
            TaggedNumber::Integer(i64::MIN)
        );
        assert_eq!(
            TaggedNumber::from(i64::MIN) - TaggedNumber::from(true),
            TaggedNumber::Integer(i64::MAX)
        );
    }
}

#[cfg(test)]
mod numeric_only_tests {
    use super::*;

    #[test]
    fn test_boolean_involvement_is_invalid() {
        for lhs in samples() {
            for rhs in samples() {
                if lhs.kind() == NumberKind::Boolean || rhs.kind() == NumberKind::Boolean {
                    assert_eq!(lhs / rhs, INVALID_NUMBER, "{} / {}", lhs, rhs);
                }
            }
        }
    }

    #[test]
    fn test_division_kinds() {
        assert_eq!(TaggedNumber::from(9) / TaggedNumber::from(2), TaggedNumber::Integer(4));
        assert_eq!(TaggedNumber::from(9) / TaggedNumber::from(2.0), TaggedNumber::Float(4.5));
        assert_eq!(TaggedNumber::from(1.0) / TaggedNumber::from(4), TaggedNumber::Float(0.25));
    }

    #[test]
    fn test_float_division_by_zero_follows_ieee() {
        let result = TaggedNumber::from(0.0) / TaggedNumber::from(0);
        assert!(matches!(result, TaggedNumber::Float(x) if x.is_nan()));
        let result = TaggedNumber::from(-1.0) / TaggedNumber::from(0.0);
        assert_eq!(result, TaggedNumber::Float(f64::NEG_INFINITY));
    }
}

#[cfg(test)]
mod integer_only_tests {
    use super::*;

    #[test]
    fn test_result_is_integer_for_valid_operands() {
        let ops = [BinaryOp::BitAnd, BinaryOp::BitXor, BinaryOp::BitOr, BinaryOp::Shl, BinaryOp::Shr];
        for op in ops {
            for lhs in samples() {
                for rhs in samples() {
                    let expected = if lhs.is_valid() && rhs.is_valid() {
                        NumberKind::Integer
                    } else {
                        NumberKind::Invalid
                    };
                    assert_eq!(op.apply(lhs, rhs).kind(), expected, "{} {} {}", lhs, op, rhs);
                }
            }
        }
    }

    #[test]
    fn test_remainder_truncates_float_operands() {
        assert_eq!(TaggedNumber::from(7.8) % TaggedNumber::from(4.2), TaggedNumber::Integer(3));
        assert_eq!(TaggedNumber::from(-7) % TaggedNumber::from(3), TaggedNumber::Integer(-1));
    }

    #[test]
    fn test_bit_not() {
        assert_eq!(TaggedNumber::from(5).bit_not(), TaggedNumber::Integer(-6));
        assert_eq!(TaggedNumber::from(false).bit_not(), TaggedNumber::Integer(-1));
        assert_eq!(INVALID_NUMBER.bit_not(), INVALID_NUMBER);
    }
}

#[cfg(test)]
mod unary_tests {
    use super::*;

    #[test]
    fn test_logical_not_each_kind() {
        assert_eq!(UnaryOp::LogicalNot.apply(TaggedNumber::from(true)), TaggedNumber::Boolean(false));
        assert_eq!(UnaryOp::LogicalNot.apply(TaggedNumber::from(7)), TaggedNumber::Boolean(false));
        assert_eq!(UnaryOp::LogicalNot.apply(TaggedNumber::from(0.0)), TaggedNumber::Boolean(true));
        assert_eq!(UnaryOp::LogicalNot.apply(INVALID_NUMBER), INVALID_NUMBER);
    }

    #[test]
    fn test_negate_each_kind() {
        assert_eq!(-TaggedNumber::from(3), TaggedNumber::Integer(-3));
        assert_eq!(-TaggedNumber::from(-2.5), TaggedNumber::Float(2.5));
        assert_eq!(-TaggedNumber::from(false), INVALID_NUMBER);
        assert_eq!(-INVALID_NUMBER, INVALID_NUMBER);
    }

    #[test]
    fn test_decrement_each_kind() {
        let mut values = samples();
        for value in values.iter_mut() {
            value.decrement();
        }
        assert_eq!(
            values,
            vec![
                INVALID_NUMBER,
                TaggedNumber::from(true),
                TaggedNumber::from(false),
                TaggedNumber::from(2),
                TaggedNumber::from(-3),
                TaggedNumber::from(0.5),
                TaggedNumber::from(-1.5),
            ]
        );
    }
}
