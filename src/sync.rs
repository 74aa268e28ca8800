//! A module which decides which synchronization primitives to use throughout the rest of the crate
//! depending on features and configuration options

cfg_if::cfg_if! {
    if #[cfg(loom)] {
        pub(crate) use loom::sync::atomic::{
            AtomicI32, AtomicI64, AtomicIsize, AtomicPtr, AtomicU32, AtomicU64, AtomicUsize,
            Ordering,
        };

        /// Give the model checker a chance to schedule another thread.
        #[inline]
        pub(crate) fn spin_loop() {
            loom::hint::spin_loop();
        }
    } else if #[cfg(feature = "shuttle")] {
        pub(crate) use shuttle::sync::atomic::{
            AtomicI32, AtomicI64, AtomicIsize, AtomicPtr, AtomicU32, AtomicU64, AtomicUsize,
            Ordering,
        };

        /// Give the randomized scheduler a chance to schedule another thread.
        #[inline]
        pub(crate) fn spin_loop() {
            shuttle::thread::yield_now();
        }
    } else {
        pub(crate) use core::sync::atomic::{
            AtomicI32, AtomicI64, AtomicIsize, AtomicPtr, AtomicU32, AtomicU64, AtomicUsize,
            Ordering,
        };

        #[inline]
        pub(crate) fn spin_loop() {
            core::hint::spin_loop();
        }
    }
}

/// Ordering for plain reads of a cell.
pub(crate) const LOAD: Ordering = Ordering::Acquire;

/// Ordering for plain writes of a cell.
pub(crate) const STORE: Ordering = Ordering::Release;

/// Ordering for a compare-and-swap which installs a new value.
pub(crate) const CAS_SUCCESS: Ordering = Ordering::AcqRel;

/// Ordering for a compare-and-swap which loses the race and only observes the current value.
pub(crate) const CAS_FAILURE: Ordering = Ordering::Acquire;
