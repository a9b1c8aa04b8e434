//! Named operator functions.
//!
//! Each operator picks its dispatch strategy from [`crate::coerce`] and
//! supplies the native operation for every working kind it accepts. Integer
//! arithmetic wraps on overflow. Shift amounts are taken modulo 64 and `>>`
//! is arithmetic.

use crate::coerce::{
    integer_only, integer_unary, numeric_unary, pass_through, widen, widen_numeric,
};
use crate::value::TaggedNumber;
use std::cmp::Ordering;

#[allow(clippy::should_implement_trait)]
impl TaggedNumber {
    /// `a * b`. Booleans multiply like `&&`.
    pub fn mul(self, rhs: TaggedNumber) -> TaggedNumber {
        widen(
            self,
            rhs,
            |a, b| TaggedNumber::Boolean(a && b),
            |a, b| TaggedNumber::Integer(a.wrapping_mul(b)),
            |a, b| TaggedNumber::Float(a * b),
        )
    }

    /// `a / b`. Booleans are rejected; integers divide with truncation.
    ///
    /// # Panics
    ///
    /// Panics when both operands are Integer and the divisor is zero, the
    /// same as native `i64` division. Float division by zero follows IEEE.
    ///
    /// ```
    /// use tagged_number::TaggedNumber;
    ///
    /// assert_eq!(TaggedNumber::from(7).div(TaggedNumber::from(2)), TaggedNumber::Integer(3));
    /// assert_eq!(TaggedNumber::from(7).div(TaggedNumber::from(2.0)), TaggedNumber::Float(3.5));
    /// assert!(!TaggedNumber::from(true).div(TaggedNumber::from(1)).is_valid());
    /// ```
    pub fn div(self, rhs: TaggedNumber) -> TaggedNumber {
        widen_numeric(
            self,
            rhs,
            |a, b| TaggedNumber::Integer(a.wrapping_div(b)),
            |a, b| TaggedNumber::Float(a / b),
        )
    }

    /// `a % b`, computed on `as_int` of both operands.
    ///
    /// # Panics
    ///
    /// Panics when the integer divisor is zero.
    pub fn rem(self, rhs: TaggedNumber) -> TaggedNumber {
        integer_only(self, rhs, i64::wrapping_rem)
    }

    /// `a + b`. Booleans add like `||`.
    pub fn add(self, rhs: TaggedNumber) -> TaggedNumber {
        widen(
            self,
            rhs,
            |a, b| TaggedNumber::Boolean(a || b),
            |a, b| TaggedNumber::Integer(a.wrapping_add(b)),
            |a, b| TaggedNumber::Float(a + b),
        )
    }

    /// `a - b`. Booleans subtract like exclusive or.
    pub fn sub(self, rhs: TaggedNumber) -> TaggedNumber {
        widen(
            self,
            rhs,
            |a, b| TaggedNumber::Boolean(a != b),
            |a, b| TaggedNumber::Integer(a.wrapping_sub(b)),
            |a, b| TaggedNumber::Float(a - b),
        )
    }

    /// `a << b` on `as_int` of both operands.
    pub fn shl(self, rhs: TaggedNumber) -> TaggedNumber {
        integer_only(self, rhs, |a, b| a.wrapping_shl(b as u32))
    }

    /// `a >> b` on `as_int` of both operands.
    pub fn shr(self, rhs: TaggedNumber) -> TaggedNumber {
        integer_only(self, rhs, |a, b| a.wrapping_shr(b as u32))
    }

    /// `a > b`
    pub fn cmp_gt(self, rhs: TaggedNumber) -> TaggedNumber {
        self.compare(rhs, |order| order == Some(Ordering::Greater))
    }

    /// `a >= b`
    pub fn cmp_ge(self, rhs: TaggedNumber) -> TaggedNumber {
        self.compare(rhs, |order| {
            matches!(order, Some(Ordering::Greater | Ordering::Equal))
        })
    }

    /// `a < b`
    pub fn cmp_lt(self, rhs: TaggedNumber) -> TaggedNumber {
        self.compare(rhs, |order| order == Some(Ordering::Less))
    }

    /// `a <= b`
    pub fn cmp_le(self, rhs: TaggedNumber) -> TaggedNumber {
        self.compare(rhs, |order| matches!(order, Some(Ordering::Less | Ordering::Equal)))
    }

    /// `a == b` as a tagged Boolean.
    ///
    /// ```
    /// use tagged_number::TaggedNumber;
    ///
    /// let one = TaggedNumber::from(1);
    /// assert_eq!(one.cmp_eq(TaggedNumber::from(1.0)), TaggedNumber::Boolean(true));
    /// assert_eq!(one.cmp_eq(TaggedNumber::Invalid), TaggedNumber::Invalid);
    /// ```
    pub fn cmp_eq(self, rhs: TaggedNumber) -> TaggedNumber {
        self.compare(rhs, |order| order == Some(Ordering::Equal))
    }

    /// `a != b`. NaN is unequal to everything, itself included.
    pub fn cmp_ne(self, rhs: TaggedNumber) -> TaggedNumber {
        self.compare(rhs, |order| order != Some(Ordering::Equal))
    }

    /// `a & b` on `as_int` of both operands.
    pub fn bit_and(self, rhs: TaggedNumber) -> TaggedNumber {
        integer_only(self, rhs, |a, b| a & b)
    }

    /// `a ^ b` on `as_int` of both operands.
    pub fn bit_xor(self, rhs: TaggedNumber) -> TaggedNumber {
        integer_only(self, rhs, |a, b| a ^ b)
    }

    /// `a | b` on `as_int` of both operands.
    pub fn bit_or(self, rhs: TaggedNumber) -> TaggedNumber {
        integer_only(self, rhs, |a, b| a | b)
    }

    /// `a && b` as a tagged Boolean.
    pub fn logical_and(self, rhs: TaggedNumber) -> TaggedNumber {
        widen(
            self,
            rhs,
            |a, b| TaggedNumber::Boolean(a && b),
            |a, b| TaggedNumber::Boolean(a != 0 && b != 0),
            |a, b| TaggedNumber::Boolean(a != 0.0 && b != 0.0),
        )
    }

    /// `a || b` as a tagged Boolean.
    pub fn logical_or(self, rhs: TaggedNumber) -> TaggedNumber {
        widen(
            self,
            rhs,
            |a, b| TaggedNumber::Boolean(a || b),
            |a, b| TaggedNumber::Boolean(a != 0 || b != 0),
            |a, b| TaggedNumber::Boolean(a != 0.0 || b != 0.0),
        )
    }

    /// `~a` on `as_int`.
    pub fn bit_not(self) -> TaggedNumber {
        integer_unary(self, |a| !a)
    }

    /// `!a`. Integers and floats test for zero and yield a Boolean.
    ///
    /// ```
    /// use tagged_number::TaggedNumber;
    ///
    /// assert_eq!(TaggedNumber::from(false).logical_not(), TaggedNumber::Boolean(true));
    /// assert_eq!(TaggedNumber::from(0).logical_not(), TaggedNumber::Boolean(true));
    /// assert_eq!(TaggedNumber::from(2.5).logical_not(), TaggedNumber::Boolean(false));
    /// ```
    pub fn logical_not(self) -> TaggedNumber {
        pass_through(
            self,
            |b| TaggedNumber::Boolean(!b),
            |n| TaggedNumber::Boolean(n == 0),
            |x| TaggedNumber::Boolean(x == 0.0),
        )
    }

    /// `-a`. Booleans cannot be negated.
    pub fn negate(self) -> TaggedNumber {
        numeric_unary(
            self,
            |n| TaggedNumber::Integer(n.wrapping_neg()),
            |x| TaggedNumber::Float(-x),
        )
    }

    /// Adds one in place, keeping the kind. Booleans and Invalid are left as
    /// they are.
    ///
    /// ```
    /// use tagged_number::TaggedNumber;
    ///
    /// let mut counter = TaggedNumber::from(5);
    /// counter.increment();
    /// assert_eq!(counter, TaggedNumber::Integer(6));
    /// ```
    pub fn increment(&mut self) {
        match self {
            TaggedNumber::Integer(n) => *n = n.wrapping_add(1),
            TaggedNumber::Float(x) => *x += 1.0,
            TaggedNumber::Boolean(_) | TaggedNumber::Invalid => {}
        }
    }

    /// Subtracts one in place, keeping the kind. Booleans and Invalid are
    /// left as they are.
    pub fn decrement(&mut self) {
        match self {
            TaggedNumber::Integer(n) => *n = n.wrapping_sub(1),
            TaggedNumber::Float(x) => *x -= 1.0,
            TaggedNumber::Boolean(_) | TaggedNumber::Invalid => {}
        }
    }

    fn compare(self, rhs: TaggedNumber, accept: fn(Option<Ordering>) -> bool) -> TaggedNumber {
        widen(
            self,
            rhs,
            |a, b| TaggedNumber::Boolean(accept(a.partial_cmp(&b))),
            |a, b| TaggedNumber::Boolean(accept(a.partial_cmp(&b))),
            |a, b| TaggedNumber::Boolean(accept(a.partial_cmp(&b))),
        )
    }
}
