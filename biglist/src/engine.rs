use alloc::vec::Vec;

use crate::cache::Residency;
use crate::window::{WindowState, compute_window, initial_window, items_per_screen};
use crate::{
    BigListOptions, ConfigError, EngineStats, Geometry, IndexRange, ReclaimReport, Reclaimer,
    Rendered, ScrollOutcome, Surface, SurfaceHost, SurfaceLayout,
};

/// A windowed render cache over a huge list of fixed-height items.
///
/// Only the items near the viewport exist as rendered output. Items that leave the window are
/// hidden and parked in a garbage pool; a periodic reclamation pass disposes of them once
/// interaction has been idle for a moment, and an index that comes back before that is reused
/// without calling the render callback again.
///
/// The engine is driven from one thread: scroll notifications go to [`BigList::on_scroll`],
/// timer ticks to [`BigList::tick`]. Both take the current time in milliseconds from a
/// monotonic origin of the caller's choosing. See the `biglist-adapter` crate for a ready
/// event loop.
pub struct BigList<S: Surface> {
    options: BigListOptions<S::Output>,
    surface: S,
    per_screen: usize,
    window: WindowState,
    residency: Residency<S::Output>,
    reclaimer: Reclaimer,
    stats: EngineStats,
    destroyed: bool,
}

impl<S: Surface> BigList<S> {
    /// Resolves the container, prepares the surface, renders the first two screens and starts
    /// the reclamation timer at `now_ms`.
    pub fn init<H>(
        host: &mut H,
        options: BigListOptions<S::Output>,
        now_ms: u64,
    ) -> Result<Self, ConfigError>
    where
        H: SurfaceHost<Surface = S>,
    {
        options.validate()?;
        let surface = resolve_surface(host, &options.container)?;
        Self::with_surface(surface, options, now_ms)
    }

    /// Same as [`BigList::init`], for callers that already hold the surface. The container
    /// locator is still validated but not resolved.
    pub fn with_surface(
        mut surface: S,
        options: BigListOptions<S::Output>,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let geometry = options.geometry;
        surface.reset(SurfaceLayout {
            viewport_height: geometry.viewport_height,
            item_height: geometry.item_height,
            content_height: geometry.content_height(options.total_count),
        });

        let per_screen = items_per_screen(geometry);
        let initial = initial_window(geometry, options.total_count);
        ldebug!(
            container = %options.container,
            total_count = options.total_count,
            per_screen,
            "BigList::init"
        );

        let mut list = Self {
            reclaimer: Reclaimer::new(options.reclaim),
            options,
            surface,
            per_screen,
            window: WindowState::new(initial),
            residency: Residency::new(),
            stats: EngineStats::default(),
            destroyed: false,
        };
        list.apply_range(initial.start, initial.end);
        list.reclaimer.start(now_ms);
        Ok(list)
    }

    pub fn options(&self) -> &BigListOptions<S::Output> {
        &self.options
    }

    pub fn geometry(&self) -> Geometry {
        self.options.geometry
    }

    pub fn total_count(&self) -> usize {
        self.options.total_count
    }

    pub fn items_per_screen(&self) -> usize {
        self.per_screen
    }

    /// Height of the whole scrollable content.
    pub fn content_height(&self) -> u64 {
        self.options.geometry.content_height(self.options.total_count)
    }

    /// The range of the last window update.
    pub fn window(&self) -> IndexRange {
        self.window.range
    }

    pub fn window_state(&self) -> WindowState {
        self.window
    }

    pub fn reclaimer(&self) -> &Reclaimer {
        &self.reclaimer
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_live(&self, index: usize) -> bool {
        self.residency.is_live(index)
    }

    pub fn is_garbage(&self, index: usize) -> bool {
        self.residency.is_garbage(index)
    }

    pub fn live_len(&self) -> usize {
        self.residency.live_len()
    }

    pub fn garbage_len(&self) -> usize {
        self.residency.garbage_len()
    }

    /// Live indexes, ascending.
    pub fn live_indices(&self) -> Vec<usize> {
        self.residency.live_indices()
    }

    /// Indexes waiting for reclamation, ascending.
    pub fn garbage_indices(&self) -> Vec<usize> {
        self.residency.garbage_indices()
    }

    pub fn get(&self, index: usize) -> Option<&Rendered<S::Output>> {
        self.residency.get(index)
    }

    /// Visits every live item, in no particular order.
    pub fn for_each_live(&self, f: impl FnMut(&Rendered<S::Output>)) {
        self.residency.for_each_live(f);
    }

    /// Makes `from..to` (clamped to the item count) the live window.
    ///
    /// Live items outside the range are hidden and moved to the garbage pool. Items inside it
    /// are revived from the pool when possible and rendered otherwise; all new items reach the
    /// surface in a single [`Surface::mount`] call. Applying the same range twice renders
    /// nothing the second time.
    pub fn apply_range(&mut self, from: usize, to: usize) -> IndexRange {
        if self.destroyed {
            return IndexRange::EMPTY;
        }
        let range = IndexRange::new(from, to.min(self.options.total_count));

        for index in self.residency.live_outside(range) {
            if let Some(item) = self.residency.evict(index) {
                item.set_visible(false);
                self.surface.hide(item);
                self.stats.evictions += 1;
            }
        }

        let geometry = self.options.geometry;
        let mut fresh = Vec::new();
        for index in range.iter() {
            if self.residency.is_live(index) {
                continue;
            }
            if let Some(item) = self.residency.revive(index) {
                item.set_visible(true);
                self.surface.show(item);
                self.stats.reuses += 1;
                continue;
            }
            let output = (self.options.render)(index);
            self.stats.renders += 1;
            fresh.push(Rendered::new(index, geometry, output));
        }

        ltrace!(
            start = range.start,
            end = range.end,
            rendered = fresh.len(),
            garbage = self.residency.garbage_len(),
            "apply_range"
        );

        if !fresh.is_empty() {
            self.surface.mount(&mut fresh);
            for item in fresh {
                self.residency.admit(item);
            }
        }

        self.window.range = range;
        range
    }

    /// Handles a position change of the scroll container.
    ///
    /// Always refreshes interaction recency. The window is recomputed only when the offset has
    /// moved more than one viewport since the last recomputation (or on the first call).
    /// Adapters should treat the underlying event as consumed.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) -> ScrollOutcome {
        if self.destroyed {
            return ScrollOutcome::default();
        }
        self.reclaimer.record_interaction(now_ms);

        let geometry = self.options.geometry;
        if !self
            .window
            .should_repaint(scroll_offset, geometry.viewport_height)
        {
            return ScrollOutcome::default();
        }

        let target = compute_window(scroll_offset, geometry, self.options.total_count);
        let range = self.apply_range(target.start, target.end);
        self.window.record_repaint(range, scroll_offset);
        self.stats.repaints += 1;
        ldebug!(
            scroll_offset,
            start = range.start,
            end = range.end,
            "repaint"
        );
        ScrollOutcome {
            repainted: Some(range),
        }
    }

    /// Advances the reclamation timer. Returns the pass result when a period elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Option<ReclaimReport> {
        if self.destroyed || !self.reclaimer.poll(now_ms) {
            return None;
        }
        Some(self.reclaim(false, now_ms))
    }

    /// When the reclamation timer fires next, if it is running.
    pub fn next_reclaim_due_ms(&self) -> Option<u64> {
        self.reclaimer.next_due_ms()
    }

    /// Disposes of everything in the garbage pool.
    ///
    /// Without `force`, nothing happens while the last interaction is younger than the idle
    /// threshold.
    pub fn reclaim(&mut self, force: bool, now_ms: u64) -> ReclaimReport {
        if self.destroyed {
            return ReclaimReport::default();
        }
        if !force && self.reclaimer.is_recent(now_ms) {
            self.stats.skipped_reclaims += 1;
            ltrace!(
                now_ms,
                garbage = self.residency.garbage_len(),
                "reclaim skipped: recent interaction"
            );
            return ReclaimReport {
                disposed: 0,
                skipped: true,
            };
        }

        let disposed = self.dispose_all(false);
        if disposed > 0 {
            ldebug!(disposed, force, "reclaim");
        }
        ReclaimReport {
            disposed,
            skipped: false,
        }
    }

    /// Re-renders the current window from the render callback, keeping the scroll position.
    ///
    /// Call this after the data behind the callback changed (e.g. was re-sorted). Every live
    /// item is evicted and disposed immediately, regardless of interaction recency.
    pub fn redraw(&mut self) -> IndexRange {
        if self.destroyed {
            return IndexRange::EMPTY;
        }
        let range = self.window.range;
        for index in self.residency.live_indices() {
            if let Some(item) = self.residency.evict(index) {
                item.set_visible(false);
                self.surface.hide(item);
                self.stats.evictions += 1;
            }
        }
        self.dispose_all(false);
        ldebug!(start = range.start, end = range.end, "redraw");
        self.apply_range(range.start, range.end)
    }

    /// Stops the timer, disposes of every owned item and clears the surface.
    ///
    /// Idempotent. Afterwards every other operation is a no-op; dropping the engine calls this.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.reclaimer.cancel();
        self.dispose_all(true);
        self.surface.clear();
        self.window = WindowState::default();
        ldebug!(disposals = self.stats.disposals, "BigList::destroy");
    }

    fn dispose_all(&mut self, include_live: bool) -> usize {
        let items = if include_live {
            self.residency.drain_all()
        } else {
            self.residency.drain_garbage()
        };
        let n = items.len();
        for item in items {
            self.surface.dispose(item);
        }
        self.stats.disposals += n as u64;
        n
    }
}

impl<S: Surface> Drop for BigList<S> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<S: Surface> core::fmt::Debug for BigList<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BigList")
            .field("options", &self.options)
            .field("per_screen", &self.per_screen)
            .field("window", &self.window)
            .field("live", &self.residency.live_len())
            .field("garbage", &self.residency.garbage_len())
            .field("reclaimer", &self.reclaimer)
            .field("stats", &self.stats)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

fn resolve_surface<H: SurfaceHost>(
    host: &mut H,
    locator: &str,
) -> Result<H::Surface, ConfigError> {
    let mut matches = host.query(locator);
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => {
            lwarn!(locator, "container not found");
            Err(ConfigError::SurfaceNotFound {
                locator: locator.into(),
            })
        }
        n => {
            lwarn!(locator, matches = n, "container is ambiguous");
            Err(ConfigError::AmbiguousSurface {
                locator: locator.into(),
                matches: n,
            })
        }
    }
}
