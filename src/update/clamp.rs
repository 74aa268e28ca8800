use tracing::{instrument, trace};

use crate::backoff::Backoff;
use crate::cell::{ByValue, CasCell};

/// Lock-free `min`/`max` clamping of a value-domain cell.
///
/// These skip the exchange whenever the bound is already satisfied, which is a stronger
/// short-circuit than the driver's "candidate equals original" check: nothing is computed at all.
///
/// The comparison is an ordered one (`<=` or `>=`). Against a NaN it is always false, so
/// clamping with a NaN bound, or clamping a cell which holds NaN, always installs the bound.
pub trait Clamp: CasCell<Discipline = ByValue>
where
    Self::Value: PartialOrd,
{
    /// Lower the content to `bound` if it is above it. Never increases the content.
    ///
    /// Returns `min(before, bound)` for some `before` the cell held during the call.
    #[instrument(level = "trace", skip_all)]
    fn min(&self, bound: Self::Value) -> Self::Value {
        clamp(self, bound, |original, bound| original <= bound)
    }

    /// Raise the content to `bound` if it is below it. Never decreases the content.
    ///
    /// Returns `max(before, bound)` for some `before` the cell held during the call.
    #[instrument(level = "trace", skip_all)]
    fn max(&self, bound: Self::Value) -> Self::Value {
        clamp(self, bound, |original, bound| original >= bound)
    }
}

impl<C> Clamp for C
where
    C: CasCell<Discipline = ByValue> + ?Sized,
    C::Value: PartialOrd,
{
}

fn clamp<C, F>(cell: &C, bound: C::Value, satisfied: F) -> C::Value
where
    C: CasCell + ?Sized,
    F: Fn(&C::Value, &C::Value) -> bool,
{
    let mut backoff: Backoff = Backoff::new();
    let mut original: C::Value = cell.current();
    loop {
        if satisfied(&original, &bound) {
            trace!("bound is already satisfied; skipping the exchange");
            return original;
        }
        match cell.compare_and_swap(&original, bound.clone()) {
            Ok(()) => return bound,
            Err(actual) => {
                trace!("lost a compare-and-swap race after {} retries", backoff.retries());
                backoff.snooze();
                original = actual;
            }
        }
    }
}
