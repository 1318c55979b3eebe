//! Pointer-scoped drag and resize sessions.
//!
//! A session lives from pointer-down to pointer-up. While active it owns a
//! [`PointerCapture`] so the surface's move/up events are routed to it;
//! consuming the session (or dropping it) releases the capture. Movement
//! is tracked as a cumulative delta from the session's start, so every
//! move recomputes from the original geometry and intermediate rejected
//! resize states never compound error.

use crate::events::{PointerCapture, PointerListeners};
use crate::geometry::{self, Point, Rect, ResizeDirection};
use crate::model::AnnotationId;

/// A drag in progress for one annotation.
///
/// Pointer positions and the annotation position are tracked in the same
/// coordinate space for the whole session, so the delta math holds at any
/// zoom level. Changing zoom mid-drag is not supported.
#[derive(Debug)]
pub struct DragSession<M> {
    annotation_id: AnnotationId,
    start_pointer: Point,
    start_position: Point,
    current_position: Point,
    _capture: PointerCapture<M>,
}

impl<M> DragSession<M> {
    /// Start a drag: record the pointer and annotation start positions and
    /// attach move/up listeners that produce the given messages.
    pub fn begin<FM, FU>(
        listeners: &PointerListeners<M>,
        annotation_id: AnnotationId,
        start_pointer: Point,
        start_position: Point,
        on_move: FM,
        on_up: FU,
    ) -> Self
    where
        FM: Fn(Point) -> M + 'static,
        FU: Fn(Point) -> M + 'static,
    {
        Self {
            annotation_id,
            start_pointer,
            start_position,
            current_position: start_position,
            _capture: listeners.capture(on_move, on_up),
        }
    }

    /// Accumulate pointer movement into the dragged position.
    pub fn pointer_moved(&mut self, pointer: Point) {
        self.current_position = self.start_position + (pointer - self.start_pointer);
    }

    /// The position the annotation is currently dragged to, for preview.
    pub fn position(&self) -> Point {
        self.current_position
    }

    pub fn annotation_id(&self) -> AnnotationId {
        self.annotation_id
    }

    /// End the session and return the final position to commit.
    ///
    /// Consumes the session; the pointer capture is released here, on
    /// every exit path. Committing exactly once is the caller's side of
    /// the contract - the session can no longer be finished twice.
    pub fn finish(mut self, pointer: Point) -> (AnnotationId, Point) {
        self.pointer_moved(pointer);
        (self.annotation_id, self.current_position)
    }
}

/// A resize in progress for one rectangle annotation.
///
/// Only surfaced while the rectangle is selected. Each move feeds the
/// cumulative delta to [`geometry::resize`] against the session's original
/// geometry; rejected results leave the last valid geometry in place.
#[derive(Debug)]
pub struct ResizeSession<M> {
    annotation_id: AnnotationId,
    direction: ResizeDirection,
    start_pointer: Point,
    original: Rect,
    latest_valid: Rect,
    _capture: PointerCapture<M>,
}

impl<M> ResizeSession<M> {
    /// Start a resize from the grabbed handle.
    pub fn begin<FM, FU>(
        listeners: &PointerListeners<M>,
        annotation_id: AnnotationId,
        direction: ResizeDirection,
        start_pointer: Point,
        original: Rect,
        on_move: FM,
        on_up: FU,
    ) -> Self
    where
        FM: Fn(Point) -> M + 'static,
        FU: Fn(Point) -> M + 'static,
    {
        Self {
            annotation_id,
            direction,
            start_pointer,
            original,
            latest_valid: original,
            _capture: listeners.capture(on_move, on_up),
        }
    }

    /// Recompute geometry from the original rectangle plus the cumulative
    /// delta to `pointer`.
    ///
    /// Returns the new geometry when it is valid and actually changed;
    /// `None` when the move was rejected by the minimum-size rule or is a
    /// no-op.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<Rect> {
        let delta = pointer - self.start_pointer;
        match geometry::resize(self.original, self.direction, delta) {
            Some(rect) if rect != self.latest_valid => {
                self.latest_valid = rect;
                Some(rect)
            }
            _ => None,
        }
    }

    /// The last valid geometry, for preview.
    pub fn geometry(&self) -> Rect {
        self.latest_valid
    }

    pub fn annotation_id(&self) -> AnnotationId {
        self.annotation_id
    }

    pub fn direction(&self) -> ResizeDirection {
        self.direction
    }

    /// End the session and return the latest valid geometry to commit.
    pub fn finish(mut self, pointer: Point) -> (AnnotationId, Rect) {
        self.pointer_moved(pointer);
        (self.annotation_id, self.latest_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listeners() -> PointerListeners<()> {
        PointerListeners::new()
    }

    #[test]
    fn test_drag_accumulates_from_start() {
        let listeners = listeners();
        let mut drag = DragSession::begin(
            &listeners,
            1,
            Point::new(100.0, 100.0),
            Point::new(50.0, 50.0),
            |_| (),
            |_| (),
        );

        drag.pointer_moved(Point::new(110.0, 120.0));
        assert_eq!(drag.position(), Point::new(60.0, 70.0));

        // Cumulative, not incremental: same event twice changes nothing.
        drag.pointer_moved(Point::new(110.0, 120.0));
        assert_eq!(drag.position(), Point::new(60.0, 70.0));
    }

    #[test]
    fn test_drag_commit_scenario() {
        // Annotation at (50,50), drag from screen (100,100) to (130,145).
        let listeners = listeners();
        let drag = DragSession::begin(
            &listeners,
            7,
            Point::new(100.0, 100.0),
            Point::new(50.0, 50.0),
            |_| (),
            |_| (),
        );

        let (id, position) = drag.finish(Point::new(130.0, 145.0));
        assert_eq!(id, 7);
        assert_eq!(position, Point::new(80.0, 95.0));
    }

    #[test]
    fn test_drag_releases_capture_on_finish() {
        let listeners = listeners();
        let drag = DragSession::begin(
            &listeners,
            1,
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            |_| (),
            |_| (),
        );
        assert_eq!(listeners.active_captures(), 1);

        drag.finish(Point::new(5.0, 5.0));
        assert_eq!(listeners.active_captures(), 0);
    }

    #[test]
    fn test_drag_releases_capture_on_drop() {
        // Abnormal end (session discarded without pointer-up) must still
        // detach the listeners.
        let listeners = listeners();
        let drag = DragSession::begin(
            &listeners,
            1,
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            |_| (),
            |_| (),
        );
        drop(drag);
        assert_eq!(listeners.active_captures(), 0);
    }

    #[test]
    fn test_resize_recomputes_from_original() {
        let listeners = listeners();
        let mut resize = ResizeSession::begin(
            &listeners,
            1,
            ResizeDirection::Right,
            Point::new(250.0, 150.0),
            Rect::new(10.0, 10.0, 150.0, 100.0),
            |_| (),
            |_| (),
        );

        let rect = resize.pointer_moved(Point::new(280.0, 150.0)).unwrap();
        assert_eq!(rect.width, 180.0);

        // Cumulative delta of -200 from start demands width -50: rejected,
        // last valid geometry stays.
        assert_eq!(resize.pointer_moved(Point::new(50.0, 150.0)), None);
        assert_eq!(resize.geometry().width, 180.0);

        // Coming back into range resumes from the original geometry.
        let rect = resize.pointer_moved(Point::new(260.0, 150.0)).unwrap();
        assert_eq!(rect.width, 160.0);
    }

    #[test]
    fn test_resize_commits_latest_valid_on_release() {
        let listeners = listeners();
        let mut resize = ResizeSession::begin(
            &listeners,
            3,
            ResizeDirection::Right,
            Point::new(0.0, 0.0),
            Rect::new(10.0, 10.0, 150.0, 100.0),
            |_| (),
            |_| (),
        );

        resize.pointer_moved(Point::new(30.0, 0.0));
        // Release beyond the minimum: final move is rejected, the commit
        // carries the last valid geometry.
        let (id, rect) = resize.finish(Point::new(-200.0, 0.0));
        assert_eq!(id, 3);
        assert_eq!(rect, Rect::new(10.0, 10.0, 180.0, 100.0));
        assert_eq!(listeners.active_captures(), 0);
    }

    #[test]
    fn test_resize_unchanged_geometry_reports_no_update() {
        let listeners = listeners();
        let mut resize = ResizeSession::begin(
            &listeners,
            1,
            ResizeDirection::Bottom,
            Point::new(0.0, 0.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            |_| (),
            |_| (),
        );

        // Horizontal movement does not affect a bottom-edge resize.
        assert_eq!(resize.pointer_moved(Point::new(50.0, 0.0)), None);
    }
}
