use displaydoc::Display;

/// A candidate computation which faulted instead of producing a value.
///
/// The cell is never modified when one of these is returned: the fault happens before any
/// exchange is attempted and is not retried.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ArithmeticError {
    /// Attempted to divide or take the remainder by zero.
    DivisionByZero,
    /// The quotient or remainder of the minimum signed value by -1 does not fit in the type.
    Overflow,
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}
