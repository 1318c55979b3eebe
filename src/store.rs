//! Annotation store and transient view state.
//!
//! The store is the single owner of the annotation collection and of the
//! session-wide UI state (active tool, color, icon, zoom, selection). All
//! other components read through it and mutate through its operations;
//! every mutation notifies subscribers so presentation layers re-render
//! from store state.
//!
//! Operations are synchronous and total: stale ids are silent no-ops
//! because event ordering can legitimately deliver an update after a
//! delete, and nothing here panics on documented no-op cases.

use crate::constants::{DEFAULT_CONTENT, DEFAULT_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::events::{StoreEvent, SubscriberSet, SubscriptionId};
use crate::geometry::Point;
use crate::model::{
    Annotation, AnnotationColor, AnnotationId, AnnotationKind, AnnotationPatch, AnnotationTool,
    NoteIcon, TextRange, now_millis,
};

/// Creation data for [`AnnotationStore::create`].
///
/// Optional fields are defaulted by the store: content to the placeholder,
/// color to the active toolbar color, note icons to the active toolbar
/// icon.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnnotation {
    pub position: Point,
    pub page_number: u32,
    pub shape: NewShape,
    pub content: Option<String>,
    pub color: Option<AnnotationColor>,
}

/// Kind-specific creation data.
#[derive(Debug, Clone, PartialEq)]
pub enum NewShape {
    Note {
        /// `None` takes the store's active icon.
        icon: Option<NoteIcon>,
        text_content: Option<String>,
        text_range: Option<TextRange>,
    },
    Rectangle {
        width: f32,
        height: f32,
    },
}

impl NewAnnotation {
    /// A click-placed note at the given document position.
    pub fn note(position: Point, page_number: u32) -> Self {
        Self {
            position,
            page_number,
            shape: NewShape::Note {
                icon: None,
                text_content: None,
                text_range: None,
            },
            content: None,
            color: None,
        }
    }

    /// A note created from a text selection, capturing the source text.
    pub fn note_from_selection(
        position: Point,
        page_number: u32,
        text: impl Into<String>,
        range: TextRange,
    ) -> Self {
        Self {
            position,
            page_number,
            shape: NewShape::Note {
                icon: None,
                text_content: Some(text.into()),
                text_range: Some(range),
            },
            content: None,
            color: None,
        }
    }

    /// A rectangle at the given document position.
    pub fn rectangle(position: Point, page_number: u32, width: f32, height: f32) -> Self {
        Self {
            position,
            page_number,
            shape: NewShape::Rectangle { width, height },
            content: None,
            color: None,
        }
    }

    pub fn with_color(mut self, color: AnnotationColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// The authoritative, insertion-ordered annotation collection plus the
/// transient per-session view state.
#[derive(Debug)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    next_id: AnnotationId,
    selected_id: Option<AnnotationId>,
    active_tool: AnnotationTool,
    active_color: AnnotationColor,
    active_icon: NoteIcon,
    zoom: f32,
    subscribers: SubscriberSet,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            annotations: Vec::new(),
            next_id: 1,
            selected_id: None,
            active_tool: AnnotationTool::default(),
            active_color: AnnotationColor::default(),
            active_icon: NoteIcon::default(),
            zoom: DEFAULT_ZOOM,
            subscribers: SubscriberSet::new(),
        }
    }

    // ========================================================================
    // Subscription
    // ========================================================================

    /// Register a subscriber notified after every mutation.
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.subscribers.subscribe(f)
    }

    /// Remove a subscriber. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    fn notify(&mut self, event: StoreEvent) {
        self.subscribers.emit(&event);
    }

    // ========================================================================
    // Collection operations
    // ========================================================================

    /// Create an annotation and return its id.
    ///
    /// Assigns a fresh unique id, stamps the creation time, fills the note
    /// icon from the active toolbar icon when unset, and appends in
    /// insertion order. Never fails for well-formed input; geometry
    /// validation happens at the boundary before data reaches the store.
    pub fn create(&mut self, new: NewAnnotation) -> AnnotationId {
        let id = self.next_id;
        self.next_id += 1;

        let kind = match new.shape {
            NewShape::Note {
                icon,
                text_content,
                text_range,
            } => AnnotationKind::Note {
                icon: icon.unwrap_or(self.active_icon),
                text_content,
                text_range,
            },
            NewShape::Rectangle { width, height } => AnnotationKind::Rectangle { width, height },
        };

        let annotation = Annotation {
            id,
            kind,
            position: new.position,
            content: new.content.unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
            color: new.color.unwrap_or(self.active_color),
            created_at: now_millis(),
            page_number: new.page_number,
        };

        log::info!(
            "📝 Created annotation {} on page {} at ({:.1}, {:.1})",
            id,
            annotation.page_number,
            annotation.position.x,
            annotation.position.y
        );
        self.annotations.push(annotation);
        self.notify(StoreEvent::Created(id));
        id
    }

    /// Merge a patch into the matching annotation.
    ///
    /// Unknown ids are a no-op: an update can race a delete through the
    /// event queue, and that must not throw.
    pub fn update(&mut self, id: AnnotationId, patch: AnnotationPatch) {
        let Some(annotation) = self.annotations.iter_mut().find(|a| a.id == id) else {
            log::debug!("Update for stale annotation {id} ignored");
            return;
        };
        patch.apply(annotation);
        self.notify(StoreEvent::Updated(id));
    }

    /// Remove an annotation.
    ///
    /// If it was selected, the selection is cleared in the same operation;
    /// there is no state in which the selection references a removed id.
    /// Unknown ids are a no-op.
    pub fn delete(&mut self, id: AnnotationId) {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        if self.annotations.len() == before {
            log::debug!("Delete for stale annotation {id} ignored");
            return;
        }
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        log::info!("🗑️ Deleted annotation {id}");
        self.notify(StoreEvent::Deleted(id));
    }

    /// Set the selection. `None` deselects (background click); selecting
    /// replaces any prior selection. Ids not present in the collection are
    /// ignored so a stale click cannot break the selection invariant.
    pub fn select(&mut self, id: Option<AnnotationId>) {
        if let Some(id) = id {
            if !self.annotations.iter().any(|a| a.id == id) {
                log::debug!("Select for stale annotation {id} ignored");
                return;
            }
        }
        if self.selected_id != id {
            self.selected_id = id;
            log::debug!("🔍 Selection: {id:?}");
            self.notify(StoreEvent::SelectionChanged(id));
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// All annotations in insertion order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Get an annotation by id.
    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// The selected annotation, resolved by id so consumers always observe
    /// the current merged value.
    pub fn selected(&self) -> Option<&Annotation> {
        self.selected_id.and_then(|id| self.get(id))
    }

    /// The selected annotation id.
    pub fn selected_id(&self) -> Option<AnnotationId> {
        self.selected_id
    }

    /// Annotations belonging to one page, for overlay rendering.
    pub fn annotations_on_page(&self, page_number: u32) -> impl Iterator<Item = &Annotation> {
        self.annotations
            .iter()
            .filter(move |a| a.page_number == page_number)
    }

    /// Copies sorted newest-first for the sidebar listing. Ids break ties
    /// between equal timestamps, so the order is always deterministic.
    pub fn sorted_for_display(&self) -> Vec<Annotation> {
        let mut sorted = self.annotations.clone();
        sorted.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        sorted
    }

    /// Number of annotations.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    // ========================================================================
    // Transient view state
    // ========================================================================

    pub fn active_tool(&self) -> AnnotationTool {
        self.active_tool
    }

    pub fn set_active_tool(&mut self, tool: AnnotationTool) {
        if self.active_tool != tool {
            self.active_tool = tool;
            log::debug!("🖌️ Tool: {}", tool.name());
            self.notify(StoreEvent::ViewChanged);
        }
    }

    pub fn active_color(&self) -> AnnotationColor {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: AnnotationColor) {
        if self.active_color != color {
            self.active_color = color;
            log::debug!("🎨 Color: {}", color.name());
            self.notify(StoreEvent::ViewChanged);
        }
    }

    pub fn active_icon(&self) -> NoteIcon {
        self.active_icon
    }

    pub fn set_active_icon(&mut self, icon: NoteIcon) {
        if self.active_icon != icon {
            self.active_icon = icon;
            log::debug!("🔖 Icon: {}", icon.name());
            self.notify(StoreEvent::ViewChanged);
        }
    }

    /// Current zoom level in percent.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set zoom directly, floored at the minimum.
    pub fn set_zoom(&mut self, zoom: f32) {
        let clamped = zoom.max(MIN_ZOOM);
        if (self.zoom - clamped).abs() > f32::EPSILON {
            self.zoom = clamped;
            log::debug!("🔍 Zoom: {:.0}%", self.zoom);
            self.notify(StoreEvent::ViewChanged);
        }
    }

    /// Step zoom up by the toolbar increment.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Step zoom down by the toolbar increment, floored at the minimum.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn note_at(x: f32, y: f32) -> NewAnnotation {
        NewAnnotation::note(Point::new(x, y), 1)
    }

    #[test]
    fn test_create_assigns_unique_ids_in_insertion_order() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        let b = store.create(note_at(1.0, 1.0));
        let c = store.create(note_at(2.0, 2.0));

        assert_ne!(a, b);
        assert_ne!(b, c);
        let ids: Vec<_> = store.annotations().iter().map(|ann| ann.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_create_defaults_content_color_and_icon() {
        let mut store = AnnotationStore::new();
        store.set_active_color(AnnotationColor::Purple);
        store.set_active_icon(NoteIcon::Flag);

        let id = store.create(note_at(10.0, 10.0));
        let ann = store.get(id).unwrap();
        assert_eq!(ann.content, DEFAULT_CONTENT);
        assert_eq!(ann.color, AnnotationColor::Purple);
        assert_eq!(ann.icon(), Some(NoteIcon::Flag));
    }

    #[test]
    fn test_create_respects_explicit_color() {
        let mut store = AnnotationStore::new();
        let id = store.create(
            NewAnnotation::rectangle(Point::new(10.0, 10.0), 1, 150.0, 100.0)
                .with_color(AnnotationColor::Blue),
        );
        assert_eq!(store.get(id).unwrap().color, AnnotationColor::Blue);
    }

    #[test]
    fn test_single_selection_replaces_prior() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        let b = store.create(note_at(1.0, 1.0));

        store.select(Some(a));
        assert_eq!(store.selected_id(), Some(a));

        store.select(Some(b));
        assert_eq!(store.selected_id(), Some(b));

        store.select(None);
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        store.select(Some(a));

        store.select(Some(999));
        assert_eq!(store.selected_id(), Some(a));
    }

    #[test]
    fn test_delete_selected_clears_selection_atomically() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        store.select(Some(a));

        // Delete fires a single Deleted event; by the time any subscriber
        // runs, the selection is already cleared.
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_inner = Rc::clone(&seen);
        store.subscribe(move |event| seen_inner.borrow_mut().push(*event));

        store.delete(a);
        assert_eq!(store.selected_id(), None);
        assert_eq!(*seen.borrow(), vec![StoreEvent::Deleted(a)]);
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        let b = store.create(note_at(1.0, 1.0));
        store.select(Some(a));

        store.delete(b);
        assert_eq!(store.selected_id(), Some(a));
    }

    #[test]
    fn test_update_stale_id_is_noop() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        store.delete(a);

        // A queued drag commit arriving after the delete.
        store.update(a, AnnotationPatch::position(Point::new(50.0, 50.0)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_is_visible_through_selection() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        store.select(Some(a));

        store.update(a, AnnotationPatch::content("reviewed"));
        assert_eq!(store.selected().unwrap().content, "reviewed");
    }

    #[test]
    fn test_display_order_is_newest_first() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        let b = store.create(note_at(1.0, 1.0));
        let c = store.create(note_at(2.0, 2.0));

        // Insertion order in the store itself.
        let stored: Vec<_> = store.annotations().iter().map(|ann| ann.id).collect();
        assert_eq!(stored, vec![a, b, c]);

        // Force distinct timestamps so the created_at ordering is exercised
        // (creation within one millisecond yields equal stamps).
        for (index, ann) in store.annotations.iter_mut().enumerate() {
            ann.created_at = 1_000 + index as u64;
        }
        let displayed: Vec<_> = store.sorted_for_display().iter().map(|ann| ann.id).collect();
        assert_eq!(displayed, vec![c, b, a]);
    }

    #[test]
    fn test_display_order_breaks_timestamp_ties_by_id() {
        let mut store = AnnotationStore::new();
        let a = store.create(note_at(0.0, 0.0));
        let b = store.create(note_at(1.0, 1.0));
        for ann in store.annotations.iter_mut() {
            ann.created_at = 1_000;
        }

        let displayed: Vec<_> = store.sorted_for_display().iter().map(|ann| ann.id).collect();
        assert_eq!(displayed, vec![b, a]);
    }

    #[test]
    fn test_annotations_on_page_filters() {
        let mut store = AnnotationStore::new();
        store.create(NewAnnotation::note(Point::new(0.0, 0.0), 1));
        let on_two = store.create(NewAnnotation::note(Point::new(0.0, 0.0), 2));
        store.create(NewAnnotation::note(Point::new(0.0, 0.0), 3));

        let page_two: Vec<_> = store.annotations_on_page(2).map(|a| a.id).collect();
        assert_eq!(page_two, vec![on_two]);
    }

    #[test]
    fn test_zoom_steps_and_floor() {
        let mut store = AnnotationStore::new();
        assert_eq!(store.zoom(), 100.0);

        store.zoom_in();
        assert_eq!(store.zoom(), 125.0);

        store.zoom_out();
        store.zoom_out();
        store.zoom_out();
        store.zoom_out();
        assert_eq!(store.zoom(), 25.0);

        // Floored at the minimum.
        store.zoom_out();
        assert_eq!(store.zoom(), 25.0);
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut store = AnnotationStore::new();
        let events_inner = Rc::clone(&events);
        store.subscribe(move |event| events_inner.borrow_mut().push(*event));

        let id = store.create(note_at(0.0, 0.0));
        store.select(Some(id));
        store.update(id, AnnotationPatch::content("x"));
        store.set_active_tool(AnnotationTool::Rectangle);
        store.delete(id);

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Created(id),
                StoreEvent::SelectionChanged(Some(id)),
                StoreEvent::Updated(id),
                StoreEvent::ViewChanged,
                StoreEvent::Deleted(id),
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let events = Rc::new(RefCell::new(Vec::<StoreEvent>::new()));
        let mut store = AnnotationStore::new();
        let events_inner = Rc::clone(&events);
        let sub = store.subscribe(move |event| events_inner.borrow_mut().push(*event));

        store.unsubscribe(sub);
        store.create(note_at(0.0, 0.0));
        assert!(events.borrow().is_empty());
    }
}
