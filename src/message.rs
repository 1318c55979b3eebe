//! Application message types for the pagemark core.
//!
//! All toolbar, renderer, surface, and sidebar events are represented as
//! messages in the Elm architecture style and routed through
//! [`AnnotatorApp::update`](crate::app::AnnotatorApp::update).

use crate::geometry::{Point, ResizeDirection};
use crate::model::{AnnotationColor, AnnotationId, AnnotationTool, NoteIcon, TextRange};
use crate::page::PageLayout;

/// Top-level message, grouped by source.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Renderer(RendererMessage),
    Surface(SurfaceMessage),
    Sidebar(SidebarMessage),
    Session(SessionMessage),
}

/// Messages from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarMessage {
    /// Annotation tool selected
    SetTool(AnnotationTool),
    /// Active color picked
    SetColor(AnnotationColor),
    /// Active note icon picked
    SetIcon(NoteIcon),
    /// Zoom in one step
    ZoomIn,
    /// Zoom out one step
    ZoomOut,
}

/// Messages from the external page renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererMessage {
    /// The renderer reported page dimensions and count
    LayoutReported(PageLayout),
    /// A text selection was released with the note tool active
    TextSelected {
        /// Screen position of the selection's anchor
        anchor: Point,
        /// The selected source text
        text: String,
        /// Offsets into the source text
        range: TextRange,
    },
}

/// Pointer events from the viewing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceMessage {
    /// Click on the page background (not on an annotation)
    Clicked(Point),
    /// Click on an annotation's body
    AnnotationClicked(AnnotationId),
    /// Pointer-down on a draggable annotation
    DragStarted {
        id: AnnotationId,
        pointer: Point,
    },
    /// Pointer-down on a resize handle of the selected rectangle
    ResizeStarted {
        id: AnnotationId,
        direction: ResizeDirection,
        pointer: Point,
    },
    /// Raw pointer movement, routed to captured session listeners
    PointerMoved(Point),
    /// Raw pointer release, routed to captured session listeners
    PointerReleased(Point),
}

/// Messages from the sidebar listing.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarMessage {
    /// Entry clicked (or deselected)
    Select(Option<AnnotationId>),
    /// Comment text edited
    EditContent(AnnotationId, String),
    /// Delete button pressed
    Delete(AnnotationId),
}

/// Messages produced by a session's captured pointer listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionMessage {
    /// Pointer moved during a drag
    DragMoved(Point),
    /// Pointer released during a drag
    DragReleased(Point),
    /// Pointer moved during a resize
    ResizeMoved(Point),
    /// Pointer released during a resize
    ResizeReleased(Point),
}
