//! Error types for the pagemark core.

use thiserror::Error;

/// Errors raised at the boundary of the core.
///
/// All of these are locally recoverable: the worst outcome is a discarded
/// gesture, never corrupted store state. Silent no-op cases (stale ids,
/// rejected resizes) are not errors at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnotateError {
    /// The page renderer has not reported page dimensions yet, so a
    /// placement gesture cannot be mapped to a page.
    #[error("page renderer has not reported a layout yet")]
    RendererNotReady,

    /// A placement targeted a page outside the reported range.
    #[error("page {page} is out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// The 1-based page that was targeted
        page: u32,
        /// Total pages reported by the renderer
        page_count: u32,
    },

    /// Rectangle geometry below the minimum size reached the boundary.
    /// This is a caller contract violation, rejected before the store.
    #[error("rectangle {width}x{height} is below the minimum size")]
    InvalidGeometry {
        /// Requested width in document units
        width: f32,
        /// Requested height in document units
        height: f32,
    },
}
