//! Lock-free compound updates of a single shared cell, built on nothing but compare-and-swap.
//!
//! Every operation here is the same loop: read the cell, compute a candidate from what was read,
//! and either skip the write (the candidate is no change) or compare-and-swap it in, starting
//! over from a fresh read if another writer got there first. The operations differ only in how
//! the candidate is computed:
//!
//! - [Update]: an arbitrary caller-supplied function, optionally with pass-through state
//! - [Clamp]: `min` and `max` against a bound
//! - [Arithmetic]: add, subtract, multiply, divide, modulo, increment, decrement
//! - [Shift]: left and right shifts of integers
//!
//! Two kinds of cell are provided. [Shared] holds a scalar of the value domain (`i32`, `u32`,
//! `i64`, `u64`, `isize`, `usize`, `f32`, `f64`) and treats two values as the same when their
//! stored bits are. [AtomicRef] and [AtomicArc] hold references of the identity domain and
//! treat two references as the same only when they point at the same object.
//!
//! ```
//! use atomic_update::prelude::*;
//! use atomic_update::Shared;
//!
//! let high_water_mark: Shared<u64> = Shared::new(10);
//! assert_eq!(high_water_mark.max(7), 10);
//! assert_eq!(high_water_mark.max(12), 12);
//!
//! let counter: Shared<i32> = Shared::new(0);
//! counter.increment();
//! assert_eq!(counter.update(|value| value * 10), 10);
//! ```
//!
//! None of the loops are wait-free: a call may retry for as long as other threads keep winning
//! the race for the same cell. Each call touches exactly one cell.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

mod backoff;
mod cell;
mod err;
mod ops;
mod sync;
mod update;
mod word;

#[cfg(all(test, feature = "std", not(feature = "shuttle"), not(loom)))]
mod testing;

#[cfg(feature = "std")]
pub use crate::cell::arc::AtomicArc;
pub use crate::cell::reference::AtomicRef;
pub use crate::cell::shared::Shared;
pub use crate::cell::{ByIdentity, ByValue, CasCell, Equality};
pub use crate::err::ArithmeticError;
pub use crate::ops::{Integer, Number};
pub use crate::update::arithmetic::Arithmetic;
pub use crate::update::clamp::Clamp;
pub use crate::update::shift::Shift;
pub use crate::update::{drive, drive_with, try_drive, Update};
pub use crate::word::Word;

/// The extension traits which put the update operations on every cell.
pub mod prelude {
    pub use crate::update::arithmetic::Arithmetic;
    pub use crate::update::clamp::Clamp;
    pub use crate::update::shift::Shift;
    pub use crate::update::Update;
}
