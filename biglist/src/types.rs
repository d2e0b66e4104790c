/// A half-open range of item indexes: `start..end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl IndexRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Builds a range, collapsing it to `end..end` when `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

/// Fixed geometry of the list: viewport height and uniform item height, in pixels (or rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Geometry {
    pub viewport_height: u32,
    pub item_height: u32,
}

impl Geometry {
    pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 500;
    pub const DEFAULT_ITEM_HEIGHT: u32 = 25;

    pub fn new(viewport_height: u32, item_height: u32) -> Self {
        Self {
            viewport_height,
            item_height,
        }
    }

    /// Offset of the item's top edge.
    pub fn item_top(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.item_height as u64)
    }

    /// Height of the whole scrollable content for `total_count` items.
    pub fn content_height(&self, total_count: usize) -> u64 {
        self.item_top(total_count)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            viewport_height: Self::DEFAULT_VIEWPORT_HEIGHT,
            item_height: Self::DEFAULT_ITEM_HEIGHT,
        }
    }
}

/// Counters describing the work the engine has done since `init`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineStats {
    /// Render callback invocations.
    pub renders: u64,
    /// Indexes that re-entered the window from the garbage pool without a re-render.
    pub reuses: u64,
    pub evictions: u64,
    pub disposals: u64,
    /// Window recomputations triggered by scroll notifications.
    pub repaints: u64,
    /// Reclamation passes skipped because interaction was recent.
    pub skipped_reclaims: u64,
}

/// Result of a single reclamation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReclaimReport {
    pub disposed: usize,
    /// `true` when the pass was skipped by the idle gate.
    pub skipped: bool,
}

/// What happened in response to a scroll notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// The new window, if the hysteresis gate tripped and the window was recomputed.
    pub repainted: Option<IndexRange>,
}
