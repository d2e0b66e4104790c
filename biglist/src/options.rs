use alloc::string::String;
use alloc::sync::Arc;

use crate::{ConfigError, Geometry, ReclaimPolicy};

/// Produces the rendered output for one item index.
///
/// The engine calls it at most once per continuous residency of an index. A panic inside the
/// callback propagates to whoever triggered the window update.
pub type RenderFn<R> = Arc<dyn Fn(usize) -> R + Send + Sync>;

/// Configuration for [`crate::BigList`].
///
/// There is no incremental reconfiguration: build a new engine from a full options value.
pub struct BigListOptions<R> {
    /// Locator of the surface the engine will own.
    pub container: String,
    pub geometry: Geometry,
    pub total_count: usize,
    pub render: RenderFn<R>,
    pub reclaim: ReclaimPolicy,
}

impl<R> Clone for BigListOptions<R> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            geometry: self.geometry,
            total_count: self.total_count,
            render: Arc::clone(&self.render),
            reclaim: self.reclaim,
        }
    }
}

impl<R> BigListOptions<R> {
    pub fn new(
        container: impl Into<String>,
        total_count: usize,
        render: impl Fn(usize) -> R + Send + Sync + 'static,
    ) -> Self {
        Self {
            container: container.into(),
            geometry: Geometry::default(),
            total_count,
            render: Arc::new(render),
            reclaim: ReclaimPolicy::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_height(mut self, viewport_height: u32) -> Self {
        self.geometry.viewport_height = viewport_height;
        self
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.geometry.item_height = item_height;
        self
    }

    pub fn with_total_count(mut self, total_count: usize) -> Self {
        self.total_count = total_count;
        self
    }

    pub fn with_render(mut self, render: impl Fn(usize) -> R + Send + Sync + 'static) -> Self {
        self.render = Arc::new(render);
        self
    }

    pub fn with_reclaim_policy(mut self, reclaim: ReclaimPolicy) -> Self {
        self.reclaim = reclaim;
        self
    }

    pub fn with_reclaim_interval_ms(mut self, interval_ms: u64) -> Self {
        self.reclaim.interval_ms = interval_ms;
        self
    }

    pub fn with_idle_ms(mut self, idle_ms: u64) -> Self {
        self.reclaim.idle_ms = idle_ms;
        self
    }

    /// Checks everything that does not need the surface host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container.trim().is_empty() {
            return Err(ConfigError::EmptyLocator);
        }
        if self.geometry.item_height == 0 {
            return Err(ConfigError::ZeroItemHeight);
        }
        if self.geometry.viewport_height == 0 {
            return Err(ConfigError::ZeroViewportHeight);
        }
        if self.reclaim.interval_ms == 0 {
            return Err(ConfigError::ZeroReclaimInterval);
        }
        Ok(())
    }
}

impl<R> core::fmt::Debug for BigListOptions<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BigListOptions")
            .field("container", &self.container)
            .field("geometry", &self.geometry)
            .field("total_count", &self.total_count)
            .field("reclaim", &self.reclaim)
            .finish_non_exhaustive()
    }
}
