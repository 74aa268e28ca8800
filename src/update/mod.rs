//! The compare-and-swap retry driver and the operations layered on it.
//!
//! Every update runs the same loop:
//!
//! 1. read the current content as `original`
//! 2. compute `candidate` from `original`
//! 3. if `candidate` is the same as `original` under the cell's [Equality] discipline, return
//!    `original` without writing
//! 4. otherwise compare-and-swap `original` for `candidate`; on success return `candidate`, on
//!    failure start over from the value the failed swap observed
//!
//! The loop never blocks and never holds a lock. It is not wait-free: under sustained contention
//! a call can retry indefinitely. The candidate computation may run more than once per call and
//! is always handed a fresh `original`, never a stale one.

use core::convert::Infallible;

use tracing::{instrument, trace};

use crate::backoff::Backoff;
use crate::cell::{CasCell, Equality};

pub(crate) mod arithmetic;
pub(crate) mod clamp;
pub(crate) mod shift;

/// Run the retry loop with a candidate computation which cannot fail.
///
/// Returns the installed candidate, or the original if the candidate was the same as it.
#[inline]
pub fn drive<C, F>(cell: &C, mut candidate_of: F) -> C::Value
where
    C: CasCell + ?Sized,
    F: FnMut(C::Value) -> C::Value,
{
    match try_drive(cell, |original: C::Value| Ok::<_, Infallible>(candidate_of(original))) {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Like [drive], passing `state` through to every invocation of `candidate_of`.
///
/// This lets a caller hand the computation its parameters without capturing them.
#[inline]
pub fn drive_with<C, S, F>(cell: &C, state: &S, mut candidate_of: F) -> C::Value
where
    C: CasCell + ?Sized,
    S: ?Sized,
    F: FnMut(C::Value, &S) -> C::Value,
{
    drive(cell, |original: C::Value| candidate_of(original, state))
}

/// Run the retry loop with a candidate computation which may fail.
///
/// An `Err` from `candidate_of` ends the call immediately: no exchange is attempted for that
/// iteration, nothing is retried, and the error is returned as is. The cell is not modified by
/// the failing iteration.
#[instrument(level = "trace", skip_all)]
pub fn try_drive<C, E, F>(cell: &C, mut candidate_of: F) -> Result<C::Value, E>
where
    C: CasCell + ?Sized,
    F: FnMut(C::Value) -> Result<C::Value, E>,
{
    let mut backoff: Backoff = Backoff::new();
    let mut original: C::Value = cell.current();
    loop {
        let candidate: C::Value = match candidate_of(original.clone()) {
            Ok(candidate) => candidate,
            Err(error) => {
                trace!("candidate computation failed after {} retries", backoff.retries());
                return Err(error);
            }
        };

        if <C::Discipline as Equality<C::Value>>::unchanged(&original, &candidate) {
            trace!("candidate is unchanged; skipping the exchange");
            return Ok(original);
        }

        match cell.compare_and_swap(&original, candidate.clone()) {
            Ok(()) => return Ok(candidate),
            Err(actual) => {
                trace!("lost a compare-and-swap race after {} retries", backoff.retries());
                backoff.snooze();
                original = actual;
            }
        }
    }
}

/// Arbitrary updates of any [CasCell].
///
/// The operation may be invoked more than once per call; it must tolerate that, which in
/// practice means being a pure function of its arguments.
pub trait Update: CasCell {
    /// Replace the content with `operation(content)`. Returns what was installed, or the
    /// current content if `operation` left it unchanged.
    #[inline]
    fn update<F>(&self, operation: F) -> Self::Value
    where
        F: FnMut(Self::Value) -> Self::Value,
    {
        drive(self, operation)
    }

    /// Like [Update::update], handing `state` to the operation on every attempt.
    #[inline]
    fn update_with<S, F>(&self, state: &S, operation: F) -> Self::Value
    where
        S: ?Sized,
        F: FnMut(Self::Value, &S) -> Self::Value,
    {
        drive_with(self, state, operation)
    }

    /// Like [Update::update], but an `Err` from `operation` is returned without touching the
    /// cell.
    #[inline]
    fn try_update<E, F>(&self, operation: F) -> Result<Self::Value, E>
    where
        F: FnMut(Self::Value) -> Result<Self::Value, E>,
    {
        try_drive(self, operation)
    }
}

impl<C: CasCell + ?Sized> Update for C {}
