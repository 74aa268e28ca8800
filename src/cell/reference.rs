use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;
use core::ptr;

use crate::cell::{ByIdentity, CasCell};
use crate::sync::{AtomicPtr, CAS_FAILURE, CAS_SUCCESS, LOAD, STORE};

/// A shared cell of the identity domain holding an optional borrowed reference.
///
/// The referents are owned by the caller for all of `'a`; the cell only ever stores and
/// compares their addresses. Two referents are the same only if they are the same object, so
/// replacing a referent with a structurally equal copy is a real change.
///
/// The referent must be [Sized], since its address is kept in an [AtomicPtr]. To share a `str`,
/// a slice or a trait object, hold a reference to a reference to it, such as `AtomicRef<'a, &'a str>`.
///
/// `'a` is invariant: a cell which promises `'static` referents cannot be handed to code that
/// stores something shorter-lived into it.
///
/// ```compile_fail
/// use atomic_update::AtomicRef;
///
/// fn store_short<'s>(cell: &'s AtomicRef<'s, String>, short: &'s String) {
///     cell.store(Some(short));
/// }
///
/// let cell: AtomicRef<'static, String> = AtomicRef::null();
/// {
///     let short: String = String::from("short-lived");
///     store_short(&cell, &short);
/// }
/// let dangling: &'static String = cell.load().unwrap();
/// ```
pub struct AtomicRef<'a, T> {
    pointer: AtomicPtr<T>,
    _referent: PhantomData<(Option<&'a T>, fn(&'a ()) -> &'a ())>,
}

fn into_pointer<T>(reference: Option<&T>) -> *mut T {
    reference.map_or(ptr::null_mut(), |referent| referent as *const T as *mut T)
}

/// # Safety
///
/// `pointer` must be null or have come from [into_pointer] on a reference which lives for `'a`.
unsafe fn from_pointer<'a, T>(pointer: *mut T) -> Option<&'a T> {
    // SAFETY: upheld by the caller
    unsafe { pointer.as_ref() }
}

impl<'a, T> AtomicRef<'a, T> {
    pub fn new(reference: Option<&'a T>) -> Self {
        Self {
            pointer: AtomicPtr::new(into_pointer(reference)),
            _referent: PhantomData,
        }
    }

    /// A cell which does not refer to anything yet.
    pub fn null() -> Self {
        Self::new(None)
    }

    #[inline]
    pub fn load(&self) -> Option<&'a T> {
        // SAFETY: only pointers derived from `&'a T` or null are ever stored
        unsafe { from_pointer(self.pointer.load(LOAD)) }
    }

    #[inline]
    pub fn store(&self, reference: Option<&'a T>) {
        self.pointer.store(into_pointer(reference), STORE);
    }

    #[inline]
    pub fn swap(&self, reference: Option<&'a T>) -> Option<&'a T> {
        let previous: *mut T = self.pointer.swap(into_pointer(reference), CAS_SUCCESS);
        // SAFETY: only pointers derived from `&'a T` or null are ever stored
        unsafe { from_pointer(previous) }
    }

    /// Install `new` if the cell still refers to the very object `expected` refers to.
    #[inline]
    pub fn compare_and_swap(
        &self,
        expected: Option<&'a T>,
        new: Option<&'a T>,
    ) -> Result<(), Option<&'a T>> {
        self.pointer
            .compare_exchange(into_pointer(expected), into_pointer(new), CAS_SUCCESS, CAS_FAILURE)
            .map(|_| ())
            // SAFETY: only pointers derived from `&'a T` or null are ever stored
            .map_err(|actual| unsafe { from_pointer(actual) })
    }

    pub fn into_inner(self) -> Option<&'a T> {
        self.load()
    }
}

impl<'a, T> CasCell for AtomicRef<'a, T> {
    type Value = Option<&'a T>;
    type Discipline = ByIdentity;

    #[inline]
    fn current(&self) -> Option<&'a T> {
        self.load()
    }

    #[inline]
    fn compare_and_swap(
        &self,
        expected: &Option<&'a T>,
        new: Option<&'a T>,
    ) -> Result<(), Option<&'a T>> {
        AtomicRef::compare_and_swap(self, *expected, new)
    }
}

impl<'a, T> Default for AtomicRef<'a, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a, T: Debug> Debug for AtomicRef<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("AtomicRef").field(&self.load()).finish()
    }
}
