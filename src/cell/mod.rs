//! Shared cells and the compare-and-swap seam every update is built on.
//!
//! A cell exposes exactly two ways to touch its content: read it, or replace it if it has not
//! changed since it was read. There is no locked access and no partial update.

use crate::word::Word;

#[cfg(feature = "std")]
pub(crate) mod arc;
pub(crate) mod reference;
pub(crate) mod shared;

/// A single shared location which can be read and compare-and-swapped.
///
/// This is the primitive the update driver consumes. Implementations must make
/// [CasCell::compare_and_swap] a single atomic step, and every successful swap must be a
/// linearization point: all successful swaps on one cell form a total order.
pub trait CasCell {
    /// What the cell holds.
    type Value: Clone;

    /// Decides when a freshly computed candidate is the same as the original it was computed
    /// from, in which case no exchange is attempted.
    type Discipline: Equality<Self::Value>;

    /// Read the current content.
    fn current(&self) -> Self::Value;

    /// Replace the content with `new` if it is still `expected`.
    ///
    /// Returns `Err` with the content actually observed if another writer got there first.
    /// `expected` is compared under the cell's own notion of sameness: representation for value
    /// cells, referent identity for reference cells.
    fn compare_and_swap(&self, expected: &Self::Value, new: Self::Value) -> Result<(), Self::Value>;
}

/// An equality discipline for short-circuiting a compare-and-swap loop.
pub trait Equality<V: ?Sized> {
    /// `true` if installing `candidate` over `original` would change nothing.
    fn unchanged(original: &V, candidate: &V) -> bool;
}

/// Value-domain equality: two words are the same if their stored representation is.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ByValue;

/// Identity-domain equality: two handles are the same if they point at the same referent.
///
/// Structural equality of the referents is never consulted, even if they implement
/// [PartialEq].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ByIdentity;

impl<T: Word> Equality<T> for ByValue {
    #[inline]
    fn unchanged(original: &T, candidate: &T) -> bool {
        original.bit_eq(*candidate)
    }
}

impl<'a, T> Equality<Option<&'a T>> for ByIdentity {
    #[inline]
    fn unchanged(original: &Option<&'a T>, candidate: &Option<&'a T>) -> bool {
        match (original, candidate) {
            (Some(original), Some(candidate)) => core::ptr::eq(*original, *candidate),
            (None, None) => true,
            _ => false,
        }
    }
}

#[cfg(all(test, feature = "std", not(feature = "shuttle"), not(loom)))]
mod tests {
    use super::{ByIdentity, ByValue, Equality};
    use test_log::test;

    #[test]
    fn test_by_value_compares_representation() {
        assert!(<ByValue as Equality<i32>>::unchanged(&3, &3));
        assert!(!<ByValue as Equality<u64>>::unchanged(&3, &4));
        assert!(!<ByValue as Equality<f64>>::unchanged(&0.0, &-0.0));
        assert!(<ByValue as Equality<f32>>::unchanged(&f32::NAN, &f32::NAN));
    }

    #[test]
    fn test_by_identity_ignores_structural_equality() {
        let first: String = String::from("same");
        let second: String = String::from("same");
        assert_eq!(first, second);

        assert!(ByIdentity::unchanged(&Some(&first), &Some(&first)));
        assert!(!ByIdentity::unchanged(&Some(&first), &Some(&second)));
        assert!(ByIdentity::unchanged(&None::<&String>, &None));
        assert!(!ByIdentity::unchanged(&Some(&first), &None));
    }
}
