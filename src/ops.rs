//! Numeric bounds for the arithmetic and shift operations.
//!
//! Integer arithmetic wraps on overflow, the same as the native atomic `fetch_add` and
//! `fetch_sub`. Division and remainder are the only operations which can fault.

use crate::err::ArithmeticError;
use crate::word::Word;

/// A [Word] which supports arithmetic and ordered comparison.
pub trait Number: Word + PartialOrd {
    /// The operand of an increment or decrement.
    const ONE: Self;

    fn plus(self, rhs: Self) -> Self;

    fn minus(self, rhs: Self) -> Self;

    fn times(self, rhs: Self) -> Self;

    /// Integers fault on a zero divisor and on `MIN / -1`. Floats never fault.
    fn quotient(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// Remainder of truncated division, so the result takes the sign of `self`. Faults under the
    /// same conditions as [Number::quotient].
    fn remainder(self, rhs: Self) -> Result<Self, ArithmeticError>;
}

/// A [Number] which supports bitwise shifts.
///
/// The shift amount is masked to the width of the type, so shifting a 32-bit integer by 33 is
/// the same as shifting it by 1. Right shifts are arithmetic for signed types and logical for
/// unsigned types.
pub trait Integer: Number {
    fn shifted_left(self, amount: u32) -> Self;

    fn shifted_right(self, amount: u32) -> Self;
}

macro_rules! impl_integer {
    ($($value:ty),* $(,)?) => {
        $(
            impl Number for $value {
                const ONE: Self = 1;

                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn minus(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn times(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn quotient(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    if rhs == 0 {
                        return Err(ArithmeticError::DivisionByZero);
                    }
                    self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
                }

                #[inline]
                fn remainder(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    if rhs == 0 {
                        return Err(ArithmeticError::DivisionByZero);
                    }
                    self.checked_rem(rhs).ok_or(ArithmeticError::Overflow)
                }
            }

            impl Integer for $value {
                #[inline]
                fn shifted_left(self, amount: u32) -> Self {
                    self.wrapping_shl(amount)
                }

                #[inline]
                fn shifted_right(self, amount: u32) -> Self {
                    self.wrapping_shr(amount)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($value:ty),* $(,)?) => {
        $(
            impl Number for $value {
                const ONE: Self = 1.0;

                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn minus(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn times(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn quotient(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    Ok(self / rhs)
                }

                #[inline]
                fn remainder(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    Ok(self % rhs)
                }
            }
        )*
    };
}

impl_integer!(i32, u32, i64, u64, isize, usize);

impl_float!(f32, f64);
