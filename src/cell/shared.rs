use core::fmt::{Debug, Formatter};

use crate::cell::{ByValue, CasCell};
use crate::word::Word;

/// A shared cell of the value domain.
///
/// The only way to change the content after construction is a store, a swap, or a successful
/// compare-and-swap; compound updates are layered on top through [crate::Update],
/// [crate::Clamp], [crate::Arithmetic] and [crate::Shift].
///
/// Floats are stored by bit pattern, so compare-and-swap and the no-op check both compare bits:
/// `-0.0` is not `0.0`, and a NaN is only the same as a NaN with the same payload.
#[repr(transparent)]
pub struct Shared<T: Word> {
    inner: T::Atomic,
}

impl<T: Word> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: value.new_atomic(),
        }
    }

    /// Read the current value with `Acquire` ordering.
    #[inline]
    pub fn load(&self) -> T {
        T::load(&self.inner)
    }

    /// Overwrite the current value with `Release` ordering, regardless of what it was.
    #[inline]
    pub fn store(&self, value: T) {
        T::store(&self.inner, value);
    }

    /// Overwrite the current value and return the previous one.
    #[inline]
    pub fn swap(&self, value: T) -> T {
        T::swap(&self.inner, value)
    }

    /// Install `new` if the cell still holds `expected`. On failure, returns what it held
    /// instead.
    #[inline]
    pub fn compare_and_swap(&self, expected: T, new: T) -> Result<(), T> {
        T::compare_exchange(&self.inner, expected, new)
    }

    pub fn into_inner(self) -> T {
        self.load()
    }
}

impl<T: Word> CasCell for Shared<T> {
    type Value = T;
    type Discipline = ByValue;

    #[inline]
    fn current(&self) -> T {
        self.load()
    }

    #[inline]
    fn compare_and_swap(&self, expected: &T, new: T) -> Result<(), T> {
        T::compare_exchange(&self.inner, *expected, new)
    }
}

impl<T: Word + Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Word> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Word + Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Shared").field(&self.load()).finish()
    }
}
