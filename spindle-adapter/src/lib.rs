//! Picker container and gesture workflows for the `spindle` crate.
//!
//! The `spindle` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the stateful, framework-neutral layer a host
//! wires its virtualized list into:
//!
//! - The [`Picker`] composition root: configuration surface, gesture phase
//!   machine (Idle/Dragging/Settling), and per-frame `tick` drive
//! - Tween-based settle animation (host supplies the clock)
//! - Listener dispatch with once-per-settle selection dedup
//! - The [`WheelSource`] bridge to the host's data adapter
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dispatch;
mod picker;
mod source;
mod tween;

#[cfg(test)]
mod tests;

pub use dispatch::{Dispatcher, PhaseListener, ScrollListener, SelectionListener};
pub use picker::{DEFAULT_SETTLE_MS, Picker};
pub use source::{UniformSource, WheelSource};
pub use tween::{Easing, Tween};
