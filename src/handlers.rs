//! Message handlers for the pagemark core.
//!
//! Each handler processes one category of messages, keeping the
//! [`AnnotatorApp::update`](crate::app::AnnotatorApp::update) function
//! clean and organized. Handlers that start or end drag/resize sessions
//! receive a [`SessionState`] borrowing the app's session slots.

use crate::constants::{DEFAULT_RECT_HEIGHT, DEFAULT_RECT_WIDTH, MIN_RECT_SIZE};
use crate::error::AnnotateError;
use crate::events::PointerListeners;
use crate::geometry::Point;
use crate::message::{
    Message, RendererMessage, SessionMessage, SidebarMessage, SurfaceMessage, ToolbarMessage,
};
use crate::model::{AnnotationColor, AnnotationPatch, AnnotationTool};
use crate::page::PageLayout;
use crate::session::{DragSession, ResizeSession};
use crate::store::{AnnotationStore, NewAnnotation};

/// Borrowed session slots and plumbing for surface/session handlers.
pub struct SessionState<'a> {
    pub store: &'a mut AnnotationStore,
    pub layout: Option<&'a PageLayout>,
    pub listeners: &'a PointerListeners<Message>,
    pub drag: &'a mut Option<DragSession<Message>>,
    pub resize: &'a mut Option<ResizeSession<Message>>,
}

/// Handle toolbar messages (tool, color, icon, zoom).
pub fn handle_toolbar(msg: ToolbarMessage, store: &mut AnnotationStore) {
    match msg {
        ToolbarMessage::SetTool(tool) => store.set_active_tool(tool),
        ToolbarMessage::SetColor(color) => store.set_active_color(color),
        ToolbarMessage::SetIcon(icon) => store.set_active_icon(icon),
        ToolbarMessage::ZoomIn => store.zoom_in(),
        ToolbarMessage::ZoomOut => store.zoom_out(),
    }
}

/// Handle messages from the page renderer.
pub fn handle_renderer(
    msg: RendererMessage,
    layout: &mut Option<PageLayout>,
    store: &mut AnnotationStore,
) {
    match msg {
        RendererMessage::LayoutReported(reported) => {
            log::info!(
                "📄 Layout reported: {} pages, {:.0}x{:.0}",
                reported.page_count,
                reported.page_width,
                reported.page_height
            );
            *layout = Some(reported);
        }
        RendererMessage::TextSelected {
            anchor,
            text,
            range,
        } => {
            if store.active_tool() != AnnotationTool::Note {
                log::debug!("Text selection ignored: note tool not active");
                return;
            }
            let result = layout
                .as_ref()
                .ok_or(AnnotateError::RendererNotReady)
                .and_then(|layout| layout.locate(anchor, store.zoom()))
                .map(|placement| {
                    store.create(NewAnnotation::note_from_selection(
                        placement.position,
                        placement.page_number,
                        text,
                        range,
                    ))
                });
            if let Err(e) = result {
                log::warn!("Text selection discarded: {e}");
            }
        }
    }
}

/// Handle sidebar messages (select, edit, delete).
pub fn handle_sidebar(msg: SidebarMessage, store: &mut AnnotationStore) {
    match msg {
        SidebarMessage::Select(id) => store.select(id),
        SidebarMessage::EditContent(id, content) => {
            store.update(id, AnnotationPatch::content(content));
        }
        SidebarMessage::Delete(id) => store.delete(id),
    }
}

/// Handle pointer events from the viewing surface.
///
/// Raw move/release events are dispatched through the capture registry;
/// the returned messages are fed back into the update loop by the caller.
pub fn handle_surface(msg: SurfaceMessage, state: &mut SessionState<'_>) -> Vec<Message> {
    match msg {
        SurfaceMessage::Clicked(point) => {
            match state.store.active_tool() {
                AnnotationTool::Select | AnnotationTool::None => {
                    // Background click deselects.
                    state.store.select(None);
                }
                AnnotationTool::Note | AnnotationTool::Rectangle => {
                    if let Err(e) = place_annotation(state.store, state.layout, point) {
                        log::warn!("Placement discarded: {e}");
                    }
                }
            }
            Vec::new()
        }
        SurfaceMessage::AnnotationClicked(id) => {
            state.store.select(Some(id));
            Vec::new()
        }
        SurfaceMessage::DragStarted { id, pointer } => {
            start_drag(state, id, pointer);
            Vec::new()
        }
        SurfaceMessage::ResizeStarted {
            id,
            direction,
            pointer,
        } => {
            start_resize(state, id, direction, pointer);
            Vec::new()
        }
        SurfaceMessage::PointerMoved(point) => state.listeners.pointer_moved(point),
        SurfaceMessage::PointerReleased(point) => state.listeners.pointer_released(point),
    }
}

/// Handle messages produced by a session's captured listeners.
pub fn handle_session(msg: SessionMessage, state: &mut SessionState<'_>) {
    match msg {
        SessionMessage::DragMoved(pointer) => {
            if let Some(drag) = state.drag.as_mut() {
                drag.pointer_moved(pointer);
            }
        }
        SessionMessage::DragReleased(pointer) => {
            // take() guards against duplicate release events: the second
            // one finds no session and is a no-op.
            if let Some(drag) = state.drag.take() {
                let (id, position) = drag.finish(pointer);
                log::debug!(
                    "🖐️ Drag committed: annotation {} -> ({:.1}, {:.1})",
                    id,
                    position.x,
                    position.y
                );
                state.store.update(id, AnnotationPatch::position(position));
            }
        }
        SessionMessage::ResizeMoved(pointer) => {
            if let Some(resize) = state.resize.as_mut() {
                let id = resize.annotation_id();
                if let Some(rect) = resize.pointer_moved(pointer) {
                    state.store.update(id, AnnotationPatch::rect(rect));
                }
            }
        }
        SessionMessage::ResizeReleased(pointer) => {
            if let Some(resize) = state.resize.take() {
                let (id, rect) = resize.finish(pointer);
                log::debug!(
                    "↔️ Resize committed: annotation {} -> {:.1}x{:.1}",
                    id,
                    rect.width,
                    rect.height
                );
                state.store.update(id, AnnotationPatch::rect(rect));
            }
        }
    }
}

/// Place a new annotation for the active tool at a surface click.
fn place_annotation(
    store: &mut AnnotationStore,
    layout: Option<&PageLayout>,
    point: Point,
) -> Result<(), AnnotateError> {
    let layout = layout.ok_or(AnnotateError::RendererNotReady)?;
    let placement = layout.locate(point, store.zoom())?;

    match store.active_tool() {
        AnnotationTool::Note => {
            store.create(NewAnnotation::note(
                placement.position,
                placement.page_number,
            ));
        }
        AnnotationTool::Rectangle => {
            if DEFAULT_RECT_WIDTH < MIN_RECT_SIZE || DEFAULT_RECT_HEIGHT < MIN_RECT_SIZE {
                return Err(AnnotateError::InvalidGeometry {
                    width: DEFAULT_RECT_WIDTH,
                    height: DEFAULT_RECT_HEIGHT,
                });
            }
            store.create(
                NewAnnotation::rectangle(
                    placement.position,
                    placement.page_number,
                    DEFAULT_RECT_WIDTH,
                    DEFAULT_RECT_HEIGHT,
                )
                .with_color(AnnotationColor::Blue),
            );
        }
        AnnotationTool::Select | AnnotationTool::None => {}
    }
    Ok(())
}

/// Start a drag session for an annotation, replacing any active one.
fn start_drag(state: &mut SessionState<'_>, id: crate::model::AnnotationId, pointer: Point) {
    if !state.store.active_tool().allows_manipulation() {
        log::debug!("Drag ignored: tool {} cannot manipulate", state.store.active_tool().name());
        return;
    }
    let Some(annotation) = state.store.get(id) else {
        log::debug!("Drag ignored: stale annotation {id}");
        return;
    };
    let start_position = annotation.position;
    log::debug!("🖐️ Drag started for annotation {id}");
    // Last writer wins: assigning drops a leftover session's capture.
    *state.drag = Some(DragSession::begin(
        state.listeners,
        id,
        pointer,
        start_position,
        |p| Message::Session(SessionMessage::DragMoved(p)),
        |p| Message::Session(SessionMessage::DragReleased(p)),
    ));
}

/// Start a resize session for the selected rectangle.
fn start_resize(
    state: &mut SessionState<'_>,
    id: crate::model::AnnotationId,
    direction: crate::geometry::ResizeDirection,
    pointer: Point,
) {
    if state.store.selected_id() != Some(id) {
        log::debug!("Resize ignored: annotation {id} is not selected");
        return;
    }
    let Some(rect) = state.store.get(id).and_then(|a| a.rect()) else {
        log::debug!("Resize ignored: annotation {id} is not a rectangle");
        return;
    };
    log::debug!("↔️ Resize started for annotation {id} ({direction:?})");
    *state.resize = Some(ResizeSession::begin(
        state.listeners,
        id,
        direction,
        pointer,
        rect,
        |p| Message::Session(SessionMessage::ResizeMoved(p)),
        |p| Message::Session(SessionMessage::ResizeReleased(p)),
    ));
}
