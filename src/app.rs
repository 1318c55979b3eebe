//! Application shell: owns the store, the page layout, and the active
//! drag/resize sessions, and routes messages between them.
//!
//! Everything runs synchronously inside [`AnnotatorApp::update`]; pointer
//! events arrive in order and each message runs to completion before the
//! next, so no two mutations of the same annotation ever interleave.

use crate::events::PointerListeners;
use crate::geometry::{Point, Rect};
use crate::handlers::{
    SessionState, handle_renderer, handle_session, handle_sidebar, handle_surface, handle_toolbar,
};
use crate::message::Message;
use crate::model::AnnotationId;
use crate::page::PageLayout;
use crate::session::{DragSession, ResizeSession};
use crate::store::AnnotationStore;

/// The annotation core for one document-viewing session.
///
/// Created on mount with an empty store and no layout; discarded on
/// unmount. The page renderer, toolbar, and sidebar talk to it purely
/// through [`Message`]s and reads on [`store`](Self::store).
#[derive(Debug)]
pub struct AnnotatorApp {
    store: AnnotationStore,
    layout: Option<PageLayout>,
    listeners: PointerListeners<Message>,
    drag: Option<DragSession<Message>>,
    resize: Option<ResizeSession<Message>>,
}

impl AnnotatorApp {
    pub fn new() -> Self {
        Self {
            store: AnnotationStore::new(),
            layout: None,
            listeners: PointerListeners::new(),
            drag: None,
            resize: None,
        }
    }

    /// Process one message to completion, including any messages produced
    /// by captured pointer listeners.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Toolbar(m) => handle_toolbar(m, &mut self.store),
            Message::Renderer(m) => handle_renderer(m, &mut self.layout, &mut self.store),
            Message::Sidebar(m) => handle_sidebar(m, &mut self.store),
            Message::Surface(m) => {
                let follow_ups = handle_surface(m, &mut self.session_state());
                for follow_up in follow_ups {
                    self.update(follow_up);
                }
            }
            Message::Session(m) => handle_session(m, &mut self.session_state()),
        }
    }

    fn session_state(&mut self) -> SessionState<'_> {
        SessionState {
            store: &mut self.store,
            layout: self.layout.as_ref(),
            listeners: &self.listeners,
            drag: &mut self.drag,
            resize: &mut self.resize,
        }
    }

    /// Read access for the toolbar, sidebar, and overlay.
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// Mutable store access for embedders that bypass the message loop.
    pub fn store_mut(&mut self) -> &mut AnnotationStore {
        &mut self.store
    }

    /// The layout reported by the renderer, if any yet.
    pub fn page_layout(&self) -> Option<&PageLayout> {
        self.layout.as_ref()
    }

    /// Check if placement gestures can be resolved (renderer has reported).
    pub fn is_ready(&self) -> bool {
        self.layout.is_some()
    }

    /// The in-flight dragged position for overlay preview.
    pub fn drag_preview(&self) -> Option<(AnnotationId, Point)> {
        self.drag.as_ref().map(|d| (d.annotation_id(), d.position()))
    }

    /// The in-flight resize geometry for overlay preview.
    pub fn resize_preview(&self) -> Option<(AnnotationId, Rect)> {
        self.resize
            .as_ref()
            .map(|r| (r.annotation_id(), r.geometry()))
    }

    /// Number of pointer captures currently held by sessions.
    pub fn active_captures(&self) -> usize {
        self.listeners.active_captures()
    }
}

impl Default for AnnotatorApp {
    fn default() -> Self {
        Self::new()
    }
}
