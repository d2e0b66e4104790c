use alloc::vec::Vec;

use crate::Geometry;

/// An item's rendered output together with the placement the engine assigned to it.
///
/// Handles are created by the engine right after the render callback returns and are owned by
/// it until they are handed to [`Surface::dispose`], which consumes them.
#[derive(Debug)]
pub struct Rendered<R> {
    index: usize,
    top: u64,
    height: u32,
    visible: bool,
    output: R,
}

impl<R> Rendered<R> {
    pub(crate) fn new(index: usize, geometry: Geometry, output: R) -> Self {
        Self {
            index,
            top: geometry.item_top(index),
            height: geometry.item_height,
            visible: true,
            output,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Offset of the item's top edge inside the scrollable content.
    pub fn top(&self) -> u64 {
        self.top
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn output(&self) -> &R {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut R {
        &mut self.output
    }

    pub fn into_output(self) -> R {
        self.output
    }
}

/// Layout applied to the surface when the engine takes ownership of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub viewport_height: u32,
    pub item_height: u32,
    /// Full height of the scrollable content (`item_height * total_count`).
    pub content_height: u64,
}

/// The output surface an engine owns exclusively.
///
/// Implementations translate placement and visibility into whatever the UI layer uses (DOM
/// nodes, terminal cells, retained widgets). Calls arrive on the engine's thread and must not
/// block.
pub trait Surface {
    type Output;

    /// Drops any previous content and sizes the viewport and scroll extent.
    fn reset(&mut self, layout: SurfaceLayout);

    /// Inserts freshly rendered items. Called at most once per window update, with every new
    /// item of that update.
    fn mount(&mut self, batch: &mut [Rendered<Self::Output>]);

    fn show(&mut self, item: &mut Rendered<Self::Output>);

    fn hide(&mut self, item: &mut Rendered<Self::Output>);

    /// Physically removes an item.
    fn dispose(&mut self, item: Rendered<Self::Output>);

    /// Removes whatever is left after teardown.
    fn clear(&mut self);
}

/// Resolves a container locator to surfaces.
pub trait SurfaceHost {
    type Surface: Surface;

    /// Returns every surface matching `locator`. The engine requires exactly one.
    fn query(&mut self, locator: &str) -> Vec<Self::Surface>;
}
