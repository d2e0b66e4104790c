use alloc::string::String;

/// Errors reported while constructing a [`crate::BigList`].
///
/// Construction either succeeds completely or fails before the surface is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The `container` locator is blank.
    #[error("container locator is empty")]
    EmptyLocator,

    /// The host returned no surface for the locator.
    #[error("could not find {locator} element")]
    SurfaceNotFound { locator: String },

    /// The host returned more than one surface for the locator.
    #[error("container locator {locator} matched {matches} elements, expected exactly one")]
    AmbiguousSurface { locator: String, matches: usize },

    /// `geometry.item_height` is zero.
    #[error("item height must be positive")]
    ZeroItemHeight,

    /// `geometry.viewport_height` is zero.
    #[error("viewport height must be positive")]
    ZeroViewportHeight,

    /// `reclaim.interval_ms` is zero.
    #[error("reclamation interval must be positive")]
    ZeroReclaimInterval,
}
