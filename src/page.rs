//! Page layout boundary.
//!
//! The external page renderer owns pagination; this module only models
//! what the core needs from it: per-page pixel dimensions, page count,
//! and the inter-page gap, plus the mapping from a click on the scrolled
//! surface to a page number and a document-space position on that page.

use serde::{Deserialize, Serialize};

use crate::constants::PAGE_GAP;
use crate::error::AnnotateError;
use crate::geometry::{self, Point};

/// Page geometry as reported by the renderer.
///
/// All pages share one size. Pages are stacked vertically with `gap`
/// screen pixels between them; the gap does not scale with zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width at 100% zoom, in pixels.
    pub page_width: f32,
    /// Page height at 100% zoom, in pixels.
    pub page_height: f32,
    /// Total number of pages.
    pub page_count: u32,
    /// Vertical gap between pages, in screen pixels.
    pub gap: f32,
}

/// A placement gesture resolved against the layout: which page was hit
/// and where on it, in document space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// 1-based page number.
    pub page_number: u32,
    /// Document-space position relative to the page origin.
    pub position: Point,
}

impl PageLayout {
    /// Layout with the default inter-page gap.
    pub fn new(page_width: f32, page_height: f32, page_count: u32) -> Self {
        Self {
            page_width,
            page_height,
            page_count,
            gap: PAGE_GAP,
        }
    }

    /// Page height as currently rendered at the given zoom percent.
    pub fn scaled_page_height(&self, zoom_percent: f32) -> f32 {
        self.page_height * zoom_percent / 100.0
    }

    /// Screen origin of a page's top-left corner within the surface.
    pub fn page_origin(&self, page_number: u32, zoom_percent: f32) -> Point {
        let stride = self.scaled_page_height(zoom_percent) + self.gap;
        Point::new(0.0, (page_number.saturating_sub(1)) as f32 * stride)
    }

    /// Check if a 1-based page number is within the document.
    pub fn contains_page(&self, page_number: u32) -> bool {
        page_number >= 1 && page_number <= self.page_count
    }

    /// The page under a surface y coordinate, clamped into range.
    ///
    /// Clicks in the gap below a page resolve to the next page, as in the
    /// rendered stack; clicks past the last page land on the last page.
    pub fn page_at(&self, surface_y: f32, zoom_percent: f32) -> u32 {
        let stride = self.scaled_page_height(zoom_percent) + self.gap;
        let raw = (surface_y / stride).floor() as i64 + 1;
        raw.clamp(1, i64::from(self.page_count.max(1))) as u32
    }

    /// Resolve a surface click to a page and a document-space position.
    pub fn locate(
        &self,
        surface_point: Point,
        zoom_percent: f32,
    ) -> Result<Placement, AnnotateError> {
        if self.page_count == 0 {
            return Err(AnnotateError::PageOutOfRange {
                page: 1,
                page_count: 0,
            });
        }
        let page_number = self.page_at(surface_point.y, zoom_percent);
        let origin = self.page_origin(page_number, zoom_percent);
        let position = geometry::screen_to_document(surface_point, origin, zoom_percent);
        Ok(Placement {
            page_number,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A4 page in pixels, three pages, like the demo document.
    fn a4() -> PageLayout {
        PageLayout::new(595.0, 842.0, 3)
    }

    #[test]
    fn test_page_at_stacks_pages_with_gap() {
        let layout = a4();
        assert_eq!(layout.page_at(100.0, 100.0), 1);
        assert_eq!(layout.page_at(841.0, 100.0), 1);
        // Past the first page plus gap.
        assert_eq!(layout.page_at(862.0, 100.0), 2);
        assert_eq!(layout.page_at(1800.0, 100.0), 3);
    }

    #[test]
    fn test_page_at_clamps_to_document() {
        let layout = a4();
        assert_eq!(layout.page_at(-50.0, 100.0), 1);
        assert_eq!(layout.page_at(100_000.0, 100.0), 3);
    }

    #[test]
    fn test_page_at_respects_zoom() {
        let layout = a4();
        // At 50% zoom the first page ends at 421px.
        assert_eq!(layout.page_at(430.0, 50.0), 1); // Still in the gap-stride of page 1
        assert_eq!(layout.page_at(442.0, 50.0), 2);
    }

    #[test]
    fn test_locate_maps_into_page_document_space() {
        let layout = a4();
        // Click 30px into page 2 at 100%: surface y = 862 + 30.
        let placement = layout
            .locate(Point::new(120.0, 892.0), 100.0)
            .unwrap();
        assert_eq!(placement.page_number, 2);
        assert_eq!(placement.position, Point::new(120.0, 30.0));
    }

    #[test]
    fn test_locate_divides_by_zoom() {
        let layout = a4();
        let placement = layout
            .locate(Point::new(100.0, 200.0), 200.0)
            .unwrap();
        assert_eq!(placement.page_number, 1);
        assert_eq!(placement.position, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_locate_rejects_empty_document() {
        let layout = PageLayout::new(595.0, 842.0, 0);
        let err = layout.locate(Point::new(10.0, 10.0), 100.0).unwrap_err();
        assert_eq!(
            err,
            AnnotateError::PageOutOfRange {
                page: 1,
                page_count: 0
            }
        );
    }
}
