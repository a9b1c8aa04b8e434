//! Operator tables for hosts that dispatch on tokens.

use crate::coerce::numeric_kind;
use crate::kind::NumberKind;
use crate::value::TaggedNumber;
use std::fmt;

/// A binary operator of the coercion algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `&`
    BitAnd,
    /// `^`
    BitXor,
    /// `|`
    BitOr,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
}

impl BinaryOp {
    /// Every binary operator, in precedence order.
    pub const ALL: [BinaryOp; 18] = [
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Shl,
        BinaryOp::Shr,
        BinaryOp::Gt,
        BinaryOp::Ge,
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Eq,
        BinaryOp::Ne,
        BinaryOp::BitAnd,
        BinaryOp::BitXor,
        BinaryOp::BitOr,
        BinaryOp::LogicalAnd,
        BinaryOp::LogicalOr,
    ];

    /// The infix token for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        }
    }

    /// Looks up an operator by its infix token.
    ///
    /// ```
    /// use tagged_number::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::from_symbol(">="), Some(BinaryOp::Ge));
    /// assert_eq!(BinaryOp::from_symbol("**"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        BinaryOp::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Looks up the operator behind a compound-assignment token such as `+=`.
    ///
    /// Only `*= /= %= += -= <<= >>= &= |= ^=` exist.
    pub fn from_compound_symbol(symbol: &str) -> Option<BinaryOp> {
        let op = BinaryOp::from_symbol(symbol.strip_suffix('=')?)?;
        op.has_compound_form().then_some(op)
    }

    /// Whether `op=` is a compound-assignment operator.
    pub fn has_compound_form(self) -> bool {
        matches!(
            self,
            BinaryOp::Mul
                | BinaryOp::Div
                | BinaryOp::Rem
                | BinaryOp::Add
                | BinaryOp::Sub
                | BinaryOp::Shl
                | BinaryOp::Shr
                | BinaryOp::BitAnd
                | BinaryOp::BitXor
                | BinaryOp::BitOr
        )
    }

    /// Applies the operator.
    pub fn apply(self, lhs: TaggedNumber, rhs: TaggedNumber) -> TaggedNumber {
        match self {
            BinaryOp::Mul => lhs.mul(rhs),
            BinaryOp::Div => lhs.div(rhs),
            BinaryOp::Rem => lhs.rem(rhs),
            BinaryOp::Add => lhs.add(rhs),
            BinaryOp::Sub => lhs.sub(rhs),
            BinaryOp::Shl => lhs.shl(rhs),
            BinaryOp::Shr => lhs.shr(rhs),
            BinaryOp::Gt => lhs.cmp_gt(rhs),
            BinaryOp::Ge => lhs.cmp_ge(rhs),
            BinaryOp::Lt => lhs.cmp_lt(rhs),
            BinaryOp::Le => lhs.cmp_le(rhs),
            BinaryOp::Eq => lhs.cmp_eq(rhs),
            BinaryOp::Ne => lhs.cmp_ne(rhs),
            BinaryOp::BitAnd => lhs.bit_and(rhs),
            BinaryOp::BitXor => lhs.bit_xor(rhs),
            BinaryOp::BitOr => lhs.bit_or(rhs),
            BinaryOp::LogicalAnd => lhs.logical_and(rhs),
            BinaryOp::LogicalOr => lhs.logical_or(rhs),
        }
    }

    /// Applies the operator, or returns `None` where [`apply`](Self::apply)
    /// would panic on an integer divisor of zero.
    ///
    /// ```
    /// use tagged_number::{BinaryOp, TaggedNumber};
    ///
    /// assert_eq!(BinaryOp::Rem.checked_apply(TaggedNumber::from(5), TaggedNumber::from(0.5)), None);
    /// assert!(BinaryOp::Div.checked_apply(TaggedNumber::from(1.0), TaggedNumber::from(0)).is_some());
    /// ```
    pub fn checked_apply(self, lhs: TaggedNumber, rhs: TaggedNumber) -> Option<TaggedNumber> {
        let integer_divisor = match self {
            BinaryOp::Div => numeric_kind(lhs.kind(), rhs.kind()) == NumberKind::Integer,
            BinaryOp::Rem => lhs.is_valid() && rhs.is_valid(),
            _ => false,
        };
        if integer_divisor && rhs.as_int() == 0 {
            return None;
        }
        Some(self.apply(lhs, rhs))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A prefix operator producing a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `~`
    BitNot,
    /// `!`
    LogicalNot,
    /// `-`
    Negate,
}

impl UnaryOp {
    /// The prefix token for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::BitNot => "~",
            UnaryOp::LogicalNot => "!",
            UnaryOp::Negate => "-",
        }
    }

    /// Looks up an operator by its prefix token.
    pub fn from_symbol(symbol: &str) -> Option<UnaryOp> {
        match symbol {
            "~" => Some(UnaryOp::BitNot),
            "!" => Some(UnaryOp::LogicalNot),
            "-" => Some(UnaryOp::Negate),
            _ => None,
        }
    }

    /// Applies the operator.
    pub fn apply(self, operand: TaggedNumber) -> TaggedNumber {
        match self {
            UnaryOp::BitNot => operand.bit_not(),
            UnaryOp::LogicalNot => operand.logical_not(),
            UnaryOp::Negate => operand.negate(),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
