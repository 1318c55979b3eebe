//! Global constants for the pagemark core.

/// Minimum width/height for a rectangle annotation, in document units.
pub const MIN_RECT_SIZE: f32 = 20.0;

/// Default width for a rectangle placed with a single click.
pub const DEFAULT_RECT_WIDTH: f32 = 150.0;

/// Default height for a rectangle placed with a single click.
pub const DEFAULT_RECT_HEIGHT: f32 = 100.0;

/// Default zoom level in percent.
pub const DEFAULT_ZOOM: f32 = 100.0;

/// Lowest zoom level the toolbar can step down to, in percent.
pub const MIN_ZOOM: f32 = 25.0;

/// Zoom step for the toolbar buttons, in percentage points.
pub const ZOOM_STEP: f32 = 25.0;

/// Vertical gap between rendered pages, in screen pixels.
pub const PAGE_GAP: f32 = 20.0;

/// Placeholder comment for freshly created annotations.
pub const DEFAULT_CONTENT: &str = "Add your comment here...";
