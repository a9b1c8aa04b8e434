//! Operator syntax on top of the named functions.
//!
//! Rust's `!` maps to logical not; bit complement is only available as
//! [`TaggedNumber::bit_not`]. Comparisons and `&&`/`||` have no overloadable
//! form that can return a tagged value, so they stay named.
//! Compound assignment computes the binary operator and overwrites the left
//! operand.

use crate::value::TaggedNumber;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $named:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for TaggedNumber {
            type Output = TaggedNumber;

            fn $method(self, rhs: TaggedNumber) -> TaggedNumber {
                TaggedNumber::$named(self, rhs)
            }
        }

        impl $assign_trait for TaggedNumber {
            fn $assign_method(&mut self, rhs: TaggedNumber) {
                *self = TaggedNumber::$named(*self, rhs);
            }
        }
    };
}

binary_operator!(Mul, mul, mul, MulAssign, mul_assign);
binary_operator!(Div, div, div, DivAssign, div_assign);
binary_operator!(Rem, rem, rem, RemAssign, rem_assign);
binary_operator!(Add, add, add, AddAssign, add_assign);
binary_operator!(Sub, sub, sub, SubAssign, sub_assign);
binary_operator!(Shl, shl, shl, ShlAssign, shl_assign);
binary_operator!(Shr, shr, shr, ShrAssign, shr_assign);
binary_operator!(BitAnd, bitand, bit_and, BitAndAssign, bitand_assign);
binary_operator!(BitXor, bitxor, bit_xor, BitXorAssign, bitxor_assign);
binary_operator!(BitOr, bitor, bit_or, BitOrAssign, bitor_assign);

impl Neg for TaggedNumber {
    type Output = TaggedNumber;

    fn neg(self) -> TaggedNumber {
        self.negate()
    }
}

impl Not for TaggedNumber {
    type Output = TaggedNumber;

    fn not(self) -> TaggedNumber {
        self.logical_not()
    }
}
