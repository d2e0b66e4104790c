//! Event-loop utilities for the `biglist` crate.
//!
//! The `biglist` engine is driven by two event sources: scroll notifications and a periodic
//! reclamation timer. This crate merges both into one single-threaded loop:
//!
//! - [`Driver`] owns the engine and applies [`Command`]s one at a time
//! - [`ListHandle`] sends commands from anywhere (it is `Send + Clone`)
//! - [`Clock`] supplies timestamps ([`MonotonicClock`] for real use, [`ManualClock`] for tests)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod clock;
mod driver;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use driver::{Command, Driver, DriverError, EventDisposition, ListHandle};
