//! A white-box cell for unit tests: counts exchange attempts and can simulate a competing writer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::cell::shared::Shared;
use crate::cell::{ByValue, CasCell};
use crate::word::Word;

pub(crate) struct CountingCell<T: Word> {
    inner: Shared<T>,
    exchanges: AtomicUsize,
    interference: Mutex<Vec<T>>,
}

impl<T: Word> CountingCell<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: Shared::new(value),
            exchanges: AtomicUsize::new(0),
            interference: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn load(&self) -> T {
        self.inner.load()
    }

    /// The number of compare-and-swap attempts, successful or not.
    pub(crate) fn exchanges(&self) -> usize {
        self.exchanges.load(Ordering::SeqCst)
    }

    /// Have another "writer" store `value` right before the next exchange attempt. Queued
    /// values are applied one per attempt, in order.
    pub(crate) fn interfere_with(&self, value: T) {
        self.interference
            .lock()
            .expect("interference lock poisoned")
            .push(value);
    }
}

impl<T: Word> CasCell for CountingCell<T> {
    type Value = T;
    type Discipline = ByValue;

    fn current(&self) -> T {
        self.inner.load()
    }

    fn compare_and_swap(&self, expected: &T, new: T) -> Result<(), T> {
        self.exchanges.fetch_add(1, Ordering::SeqCst);
        let mut interference = self.interference.lock().expect("interference lock poisoned");
        if !interference.is_empty() {
            let competing: T = interference.remove(0);
            self.inner.store(competing);
        }
        drop(interference);
        self.inner.compare_and_swap(*expected, new)
    }
}
