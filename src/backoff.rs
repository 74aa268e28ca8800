use crate::sync::spin_loop;

/// Tracks retries of one compare-and-swap loop and, with the `backoff` feature, spins for an
/// exponentially growing number of iterations between them.
///
/// Backing off never changes what a loop computes or installs; it only spaces out the attempts.
#[derive(Debug, Default)]
pub(crate) struct Backoff {
    retries: u32,
}

impl Backoff {
    /// Spinning stops doubling after `2^SPIN_LIMIT` iterations.
    #[cfg_attr(not(feature = "backoff"), allow(dead_code))]
    const SPIN_LIMIT: u32 = 6;

    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The number of times [Backoff::snooze] has been called.
    pub(crate) fn retries(&self) -> u32 {
        self.retries
    }

    /// Called after losing a compare-and-swap race, before the next attempt.
    #[inline]
    pub(crate) fn snooze(&mut self) {
        #[cfg(feature = "backoff")]
        for _ in 0..1u32 << self.retries.min(Self::SPIN_LIMIT) {
            spin_loop();
        }
        #[cfg(not(feature = "backoff"))]
        if cfg!(any(loom, feature = "shuttle")) {
            spin_loop();
        }
        self.retries = self.retries.saturating_add(1);
    }
}
