use crate::cell::{ByValue, CasCell};
use crate::err::ArithmeticError;
use crate::ops::Number;
use crate::update::{drive, try_drive};

/// Lock-free arithmetic on a value-domain cell.
///
/// Each operation returns the value it installed. When the result would equal the current
/// content (adding zero, multiplying by one, a division which truncates back to the same
/// value) nothing is written and the current content is returned.
///
/// Integer arithmetic wraps. Float arithmetic follows IEEE 754.
pub trait Arithmetic: CasCell<Discipline = ByValue>
where
    Self::Value: Number,
{
    fn add(&self, operand: Self::Value) -> Self::Value {
        drive(self, |original: Self::Value| original.plus(operand))
    }

    fn subtract(&self, operand: Self::Value) -> Self::Value {
        drive(self, |original: Self::Value| original.minus(operand))
    }

    fn multiply(&self, operand: Self::Value) -> Self::Value {
        drive(self, |original: Self::Value| original.times(operand))
    }

    /// Divide the content by `divisor`.
    ///
    /// For integers, a zero divisor fails with [ArithmeticError::DivisionByZero] and `MIN / -1`
    /// with [ArithmeticError::Overflow]; the cell is left as it was. Float division never fails.
    fn divide(&self, divisor: Self::Value) -> Result<Self::Value, ArithmeticError> {
        try_drive(self, |original: Self::Value| original.quotient(divisor))
    }

    /// Replace the content with its remainder by `divisor`, taking the sign of the content.
    ///
    /// Fails under the same conditions as [Arithmetic::divide].
    fn modulo(&self, divisor: Self::Value) -> Result<Self::Value, ArithmeticError> {
        try_drive(self, |original: Self::Value| original.remainder(divisor))
    }

    fn increment(&self) -> Self::Value {
        self.add(<Self::Value as Number>::ONE)
    }

    fn decrement(&self) -> Self::Value {
        self.subtract(<Self::Value as Number>::ONE)
    }
}

impl<C> Arithmetic for C
where
    C: CasCell<Discipline = ByValue> + ?Sized,
    C::Value: Number,
{
}
