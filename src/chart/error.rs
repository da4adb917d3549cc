//! Failures surfaced while constructing a drawable.

/// Reasons a chart could not be built on its surface.
///
/// Every variant leaves the owning `ManagedVisual` without a live drawable,
/// so the next reconcile starts from a clean slate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("drawing surface has no 2d context")]
    SurfaceUnavailable,
    #[error("charting library is not loaded")]
    LibraryMissing,
    #[error("invalid chart config: {0}")]
    InvalidConfig(String),
    #[error("chart construction failed: {0}")]
    Construction(String),
}
