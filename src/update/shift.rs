use crate::cell::{ByValue, CasCell};
use crate::ops::Integer;
use crate::update::drive;

/// Lock-free bitwise shifts of an integer cell. Not available for floats.
///
/// `amount` is masked to the width of the integer, matching the native shift instructions:
/// shifting a `u32` by 33 shifts it by 1. A shift which leaves the value unchanged (an amount
/// of zero, or shifting zero) writes nothing.
pub trait Shift: CasCell<Discipline = ByValue>
where
    Self::Value: Integer,
{
    fn shift_left(&self, amount: u32) -> Self::Value {
        drive(self, |original: Self::Value| original.shifted_left(amount))
    }

    /// Arithmetic (sign-extending) for signed integers, logical for unsigned ones.
    fn shift_right(&self, amount: u32) -> Self::Value {
        drive(self, |original: Self::Value| original.shifted_right(amount))
    }
}

impl<C> Shift for C
where
    C: CasCell<Discipline = ByValue> + ?Sized,
    C::Value: Integer,
{
}
