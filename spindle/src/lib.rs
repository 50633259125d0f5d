//! A headless snap-to-center wheel picker engine.
//!
//! For the gesture phase machine, settle tween, and selection dispatch, see
//! the `spindle-adapter` crate.
//!
//! This crate focuses on the core math of an iOS-style wheel selector:
//! slot ↔ logical-index mapping with infinite circular wraparound, prefix
//! sums over heterogeneous item extents, symmetric centering padding, and
//! deterministic snap-target computation from a release velocity.
//!
//! It is UI-agnostic. A host list/recycler layer is expected to provide:
//! - viewport size (height/width)
//! - scroll offsets and gesture events
//! - per-item extents along the scroll axis
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod extents;
mod options;
mod snap;
mod types;
mod wheel;

pub mod ring;


pub use error::WheelError;
pub use options::{ExtentFn, WheelOptions};
pub use snap::Deceleration;
pub use types::{Axis, ItemSpan, Rect, ScrollDirection, ScrollPhase, SnapTarget};
pub use wheel::Wheel;
