//! Scalars which can live in a [crate::Shared] cell.
//!
//! A [Word] knows which atomic stores it and how to compare-and-swap that atomic. Equality of
//! words is always equality of their stored representation, which is exactly what the hardware
//! compare-and-swap compares.

use crate::sync::{
    AtomicI32, AtomicI64, AtomicIsize, AtomicU32, AtomicU64, AtomicUsize, CAS_FAILURE, CAS_SUCCESS,
    LOAD, STORE,
};

mod private {
    pub trait Sealed {}
}

/// A scalar of the value domain: signed and unsigned 32-bit, 64-bit and pointer-sized integers,
/// and 32-bit and 64-bit floats.
///
/// This trait is sealed.
pub trait Word: Copy + Send + Sync + 'static + private::Sealed {
    /// The atomic which holds the word. Floats are held as their bit pattern.
    type Atomic: Send + Sync;

    /// The number of bits in the stored representation.
    const BITS: u32;

    fn new_atomic(self) -> Self::Atomic;

    fn load(atomic: &Self::Atomic) -> Self;

    fn store(atomic: &Self::Atomic, value: Self);

    fn swap(atomic: &Self::Atomic, value: Self) -> Self;

    /// Replace `current` with `new` if the stored representation is bit-for-bit `current`.
    /// On failure, returns the value which was actually stored.
    fn compare_exchange(atomic: &Self::Atomic, current: Self, new: Self) -> Result<(), Self>;

    /// Representation equality. For floats this tells `-0.0` apart from `0.0` and treats a NaN as
    /// equal to a NaN with the same payload.
    fn bit_eq(self, other: Self) -> bool;
}

macro_rules! impl_integer_word {
    ($($value:ty => $atomic:ident),* $(,)?) => {
        $(
            impl private::Sealed for $value {}

            impl Word for $value {
                type Atomic = $atomic;

                const BITS: u32 = <$value>::BITS;

                #[inline]
                fn new_atomic(self) -> $atomic {
                    $atomic::new(self)
                }

                #[inline]
                fn load(atomic: &$atomic) -> Self {
                    atomic.load(LOAD)
                }

                #[inline]
                fn store(atomic: &$atomic, value: Self) {
                    atomic.store(value, STORE);
                }

                #[inline]
                fn swap(atomic: &$atomic, value: Self) -> Self {
                    atomic.swap(value, CAS_SUCCESS)
                }

                #[inline]
                fn compare_exchange(atomic: &$atomic, current: Self, new: Self) -> Result<(), Self> {
                    atomic
                        .compare_exchange(current, new, CAS_SUCCESS, CAS_FAILURE)
                        .map(|_| ())
                }

                #[inline]
                fn bit_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_float_word {
    ($($value:ty => $atomic:ident),* $(,)?) => {
        $(
            impl private::Sealed for $value {}

            impl Word for $value {
                type Atomic = $atomic;

                const BITS: u32 = (core::mem::size_of::<$value>() * 8) as u32;

                #[inline]
                fn new_atomic(self) -> $atomic {
                    $atomic::new(self.to_bits())
                }

                #[inline]
                fn load(atomic: &$atomic) -> Self {
                    <$value>::from_bits(atomic.load(LOAD))
                }

                #[inline]
                fn store(atomic: &$atomic, value: Self) {
                    atomic.store(value.to_bits(), STORE);
                }

                #[inline]
                fn swap(atomic: &$atomic, value: Self) -> Self {
                    <$value>::from_bits(atomic.swap(value.to_bits(), CAS_SUCCESS))
                }

                #[inline]
                fn compare_exchange(atomic: &$atomic, current: Self, new: Self) -> Result<(), Self> {
                    atomic
                        .compare_exchange(current.to_bits(), new.to_bits(), CAS_SUCCESS, CAS_FAILURE)
                        .map(|_| ())
                        .map_err(<$value>::from_bits)
                }

                #[inline]
                fn bit_eq(self, other: Self) -> bool {
                    self.to_bits() == other.to_bits()
                }
            }
        )*
    };
}

impl_integer_word!(
    i32 => AtomicI32,
    u32 => AtomicU32,
    i64 => AtomicI64,
    u64 => AtomicU64,
    isize => AtomicIsize,
    usize => AtomicUsize,
);

impl_float_word!(
    f32 => AtomicU32,
    f64 => AtomicU64,
);
