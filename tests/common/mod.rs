#![allow(dead_code)]

use atomic_update::prelude::*;
use atomic_update::Shared;
use tracing::debug;

cfg_if::cfg_if! {
    if #[cfg(loom)] {
        pub(crate) use loom::sync::Arc;
        pub(crate) use loom::thread;
    } else if #[cfg(feature = "shuttle")] {
        pub(crate) use shuttle::sync::Arc;
        pub(crate) use shuttle::thread;
    } else {
        pub(crate) use std::sync::Arc;
        pub(crate) use std::thread;
    }
}

/// Every thread increments the same cell; none of the increments may be lost.
pub(crate) fn increment_test<const NUM_THREADS: usize, const NUM_INCREMENTS: usize>() {
    let initial: u64 = 5;
    let counter: Arc<Shared<u64>> = Arc::new(Shared::new(initial));

    let join_handles: Vec<thread::JoinHandle<()>> = (0..NUM_THREADS)
        .map(|_| {
            let counter: Arc<Shared<u64>> = counter.clone();
            thread::spawn(move || {
                for _ in 0..NUM_INCREMENTS {
                    counter.increment();
                }
            })
        })
        .collect();

    join_handles
        .into_iter()
        .for_each(|join_handle| join_handle.join().expect("A thread panicked"));

    debug!("counter after all increments: {:?}", counter.load());
    assert_eq!(counter.load(), initial + (NUM_THREADS * NUM_INCREMENTS) as u64);
}

/// Thread `i` raises the cell to `i` and lowers a second cell to `i`; both must end at the
/// extreme bound, and every returned value must respect its own bound.
pub(crate) fn clamp_test<const NUM_THREADS: usize>() {
    let high: Arc<Shared<i32>> = Arc::new(Shared::new(0));
    let low: Arc<Shared<i32>> = Arc::new(Shared::new(NUM_THREADS as i32 + 1));

    let join_handles: Vec<thread::JoinHandle<()>> = (1..=NUM_THREADS as i32)
        .map(|bound| {
            let high: Arc<Shared<i32>> = high.clone();
            let low: Arc<Shared<i32>> = low.clone();
            thread::spawn(move || {
                assert!(high.max(bound) >= bound);
                assert!(low.min(bound) <= bound);
            })
        })
        .collect();

    join_handles
        .into_iter()
        .for_each(|join_handle| join_handle.join().expect("A thread panicked"));

    assert_eq!(high.load(), NUM_THREADS as i32);
    assert_eq!(low.load(), 1);
}
