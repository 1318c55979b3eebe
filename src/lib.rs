//! Pagemark - annotation state and interaction core for paginated documents.
//!
//! The crate owns annotation data, selection, zoom, and the drag/resize
//! interaction machinery; page rendering stays with the embedding
//! application, which reports its layout and forwards pointer events as
//! [`Message`]s.

pub mod app;
pub mod constants;
pub mod error;
pub mod events;
pub mod geometry;
pub mod handlers;
pub mod message;
pub mod model;
pub mod page;
pub mod session;
pub mod store;

pub use app::AnnotatorApp;
pub use error::AnnotateError;
pub use events::{PointerCapture, PointerListeners, StoreEvent, SubscriptionId};
pub use geometry::{Point, Rect, ResizeDirection};
pub use message::{
    Message, RendererMessage, SessionMessage, SidebarMessage, SurfaceMessage, ToolbarMessage,
};
pub use model::{
    Annotation, AnnotationColor, AnnotationId, AnnotationKind, AnnotationPatch, AnnotationTool,
    NoteIcon, TextRange,
};
pub use page::{PageLayout, Placement};
pub use session::{DragSession, ResizeSession};
pub use store::{AnnotationStore, NewAnnotation, NewShape};
