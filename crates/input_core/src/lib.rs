//! # input_core
//!
//! A single-line text input that reports edits the same way on every
//! engine.
//!
//! - [`InputNormalizer`]: the widget. Feed it [`DomEvent`]s, read
//!   [`InputNotification`](bus::InputNotification)s from the bus.
//! - [`HostElement`]: what the widget needs from the native element.
//! - [`keyup_synthesizes_input`] / [`keydown_forces_blur`]: the two
//!   per-platform decisions, driven by a [`QuirkTable`](platform::QuirkTable).
//!
//! ## Design Principles
//!
//! Platform detection happens once, outside this crate. The interceptors
//! only read the resolved quirk table, so on an unknown platform nothing
//! here deviates from native behavior.

mod config;
mod id;
mod intercept;
mod normalizer;
mod selection;
mod sync;
mod tasks;
mod traits;

#[cfg(test)]
mod test_host;

pub use config::InputConfig;
pub use id::InputId;
pub use intercept::{keydown_forces_blur, keyup_synthesizes_input};
pub use normalizer::{DomEvent, EventOutcome, InputNormalizer};
pub use selection::SelectionRange;
pub use tasks::DeferredTask;
pub use traits::HostElement;
