use core::fmt::{Debug, Formatter};
use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};

use crate::cell::{ByIdentity, CasCell, Equality};

/// A shared cell of the identity domain holding an owned [Arc].
///
/// Built on [ArcSwap], which makes loading a strong reference safe while other threads swap the
/// content out from under it. Like [crate::AtomicRef], sameness is [Arc::ptr_eq]: a fresh `Arc`
/// around an equal value is a different referent.
///
/// [ArcSwap] needs a [Sized] pointee, so unsized referents go behind one more pointer, as in
/// `AtomicArc<Box<dyn Trait>>` or `AtomicArc<String>` in place of `Arc<str>`.
pub struct AtomicArc<T> {
    inner: ArcSwap<T>,
}

impl<T> AtomicArc<T> {
    pub fn new(value: Arc<T>) -> Self {
        Self {
            inner: ArcSwap::new(value),
        }
    }

    pub fn from_pointee(value: T) -> Self {
        Self::new(Arc::new(value))
    }

    #[inline]
    pub fn load(&self) -> Arc<T> {
        self.inner.load_full()
    }

    #[inline]
    pub fn store(&self, value: Arc<T>) {
        self.inner.store(value);
    }

    #[inline]
    pub fn swap(&self, value: Arc<T>) -> Arc<T> {
        self.inner.swap(value)
    }

    /// Install `new` if the cell still holds the very allocation `expected` points at.
    pub fn compare_and_swap(&self, expected: &Arc<T>, new: Arc<T>) -> Result<(), Arc<T>> {
        let previous: Guard<Arc<T>> = self.inner.compare_and_swap(expected, new);
        if Arc::ptr_eq(&previous, expected) {
            Ok(())
        } else {
            Err(Guard::into_inner(previous))
        }
    }

    pub fn into_inner(self) -> Arc<T> {
        self.inner.into_inner()
    }
}

impl<T> Equality<Arc<T>> for ByIdentity {
    #[inline]
    fn unchanged(original: &Arc<T>, candidate: &Arc<T>) -> bool {
        Arc::ptr_eq(original, candidate)
    }
}

impl<T> CasCell for AtomicArc<T> {
    type Value = Arc<T>;
    type Discipline = ByIdentity;

    #[inline]
    fn current(&self) -> Arc<T> {
        self.load()
    }

    #[inline]
    fn compare_and_swap(&self, expected: &Arc<T>, new: Arc<T>) -> Result<(), Arc<T>> {
        AtomicArc::compare_and_swap(self, expected, new)
    }
}

impl<T: Debug> Debug for AtomicArc<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("AtomicArc").field(&self.load()).finish()
    }
}
