//! Window calculation: which indexes should be materialized for a scroll offset.

use crate::{Geometry, IndexRange};

/// Number of items that fit in one viewport, rounded up.
pub fn items_per_screen(geometry: Geometry) -> usize {
    if geometry.item_height == 0 {
        return 0;
    }
    geometry.viewport_height.div_ceil(geometry.item_height) as usize
}

/// Computes the window for `scroll_offset`: one screen above the first visible item and two
/// screens from there on, clamped to `total_count`.
pub fn compute_window(scroll_offset: u64, geometry: Geometry, total_count: usize) -> IndexRange {
    if geometry.item_height == 0 {
        return IndexRange::EMPTY;
    }
    let per_screen = items_per_screen(geometry);
    let first_visible = scroll_offset / geometry.item_height as u64;
    let first_visible = usize::try_from(first_visible).unwrap_or(usize::MAX);
    let start = first_visible.saturating_sub(per_screen);
    let end = start
        .saturating_add(per_screen.saturating_mul(3))
        .min(total_count);
    IndexRange::new(start, end)
}

/// The window rendered at `init`: the first screen plus one screen of lookahead.
pub fn initial_window(geometry: Geometry, total_count: usize) -> IndexRange {
    let end = items_per_screen(geometry)
        .saturating_mul(2)
        .min(total_count);
    IndexRange::new(0, end)
}

/// The last computed window and the scroll offset it was computed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub range: IndexRange,
    /// `None` until the first scroll notification.
    pub last_repaint_offset: Option<u64>,
}

impl WindowState {
    pub fn new(range: IndexRange) -> Self {
        Self {
            range,
            last_repaint_offset: None,
        }
    }

    /// Hysteresis gate: repaint on the first notification, then only once the offset has
    /// drifted more than one viewport from the last repaint.
    pub fn should_repaint(&self, scroll_offset: u64, viewport_height: u32) -> bool {
        match self.last_repaint_offset {
            None => true,
            Some(last) => scroll_offset.abs_diff(last) > viewport_height as u64,
        }
    }

    pub fn record_repaint(&mut self, range: IndexRange, scroll_offset: u64) {
        self.range = range;
        self.last_repaint_offset = Some(scroll_offset);
    }
}
