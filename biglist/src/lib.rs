//! A windowed render cache for huge lists of fixed-height items.
//!
//! Only the items near the viewport are materialized. The engine keeps three pieces of
//! bookkeeping per instance:
//! - a render cache with the live window (one screen above, two screens from the top of the
//!   viewport on),
//! - a garbage pool with items that left the window but were not disposed yet, so they can be
//!   reused without re-rendering,
//! - a reclamation timer that disposes of the pool once interaction has been idle briefly.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`Surface`] that mounts, shows, hides and disposes of rendered items
//! - scroll offsets and timer ticks, with timestamps in milliseconds
//! - the render callback producing an item's output
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod engine;
mod error;
mod options;
mod reclaim;
mod surface;
mod types;
pub mod window;


pub use engine::BigList;
pub use error::ConfigError;
pub use options::{BigListOptions, RenderFn};
pub use reclaim::{ReclaimPolicy, Reclaimer};
pub use surface::{Rendered, Surface, SurfaceHost, SurfaceLayout};
pub use types::{EngineStats, Geometry, IndexRange, ReclaimReport, ScrollOutcome};
pub use window::WindowState;
