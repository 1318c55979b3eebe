//! Coordinate transforms and resize mathematics.
//!
//! This module contains the pure geometry functions of the core,
//! extracted for testability: screen/document space conversion at a given
//! zoom level, and the 8-direction rectangle resize rules.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_RECT_SIZE;

/// A 2D point. Used for both document-space and screen-space coordinates;
/// the functions below document which space they expect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle in document space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner X coordinate.
    pub x: f32,
    /// Top-left corner Y coordinate.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Check if a point is inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Convert a screen-space point to document space.
///
/// `page_origin` is the screen position of the page's top-left corner and
/// `zoom_percent` the current zoom level (100 = 1:1). Exact algebraic
/// inverse of [`document_to_screen`].
pub fn screen_to_document(screen: Point, page_origin: Point, zoom_percent: f32) -> Point {
    let scale = zoom_percent / 100.0;
    Point::new(
        (screen.x - page_origin.x) / scale,
        (screen.y - page_origin.y) / scale,
    )
}

/// Convert a document-space point to screen space at the given zoom.
pub fn document_to_screen(document: Point, page_origin: Point, zoom_percent: f32) -> Point {
    let scale = zoom_percent / 100.0;
    Point::new(
        page_origin.x + document.x * scale,
        page_origin.y + document.y * scale,
    )
}

/// One of the eight resize handles on a selected rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeDirection {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl ResizeDirection {
    /// All eight handle directions.
    pub fn all() -> &'static [ResizeDirection] {
        &[
            ResizeDirection::Top,
            ResizeDirection::Right,
            ResizeDirection::Bottom,
            ResizeDirection::Left,
            ResizeDirection::TopLeft,
            ResizeDirection::TopRight,
            ResizeDirection::BottomRight,
            ResizeDirection::BottomLeft,
        ]
    }

    /// Whether this handle moves the left edge (affects x and width).
    fn moves_left_edge(&self) -> bool {
        matches!(
            self,
            ResizeDirection::Left | ResizeDirection::TopLeft | ResizeDirection::BottomLeft
        )
    }

    /// Whether this handle moves the top edge (affects y and height).
    fn moves_top_edge(&self) -> bool {
        matches!(
            self,
            ResizeDirection::Top | ResizeDirection::TopLeft | ResizeDirection::TopRight
        )
    }

    /// Whether this handle moves the right edge (affects width only).
    fn moves_right_edge(&self) -> bool {
        matches!(
            self,
            ResizeDirection::Right | ResizeDirection::TopRight | ResizeDirection::BottomRight
        )
    }

    /// Whether this handle moves the bottom edge (affects height only).
    fn moves_bottom_edge(&self) -> bool {
        matches!(
            self,
            ResizeDirection::Bottom | ResizeDirection::BottomRight | ResizeDirection::BottomLeft
        )
    }
}

/// Apply a resize to `rect` for the grabbed handle and cumulative pointer
/// movement `delta` since the resize session started.
///
/// Opposite edges stay fixed: dragging the left handle moves x and shrinks
/// width, dragging a corner moves both adjacent edges. Returns `None` when
/// the result would fall below [`MIN_RECT_SIZE`] on either axis - the
/// caller keeps the previous geometry, so fast pointer movement past the
/// minimum never produces degenerate rectangles.
pub fn resize(rect: Rect, direction: ResizeDirection, delta: Point) -> Option<Rect> {
    let mut new = rect;

    if direction.moves_left_edge() {
        new.x += delta.x;
        new.width -= delta.x;
    }
    if direction.moves_right_edge() {
        new.width += delta.x;
    }
    if direction.moves_top_edge() {
        new.y += delta.y;
        new.height -= delta.y;
    }
    if direction.moves_bottom_edge() {
        new.height += delta.y;
    }

    if new.width < MIN_RECT_SIZE || new.height < MIN_RECT_SIZE {
        return None;
    }
    Some(new)
}
