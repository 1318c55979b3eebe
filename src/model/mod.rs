//! Data models for the pagemark core.

mod annotation;
mod color;
mod icon;
mod tool;

pub use annotation::{
    Annotation, AnnotationId, AnnotationKind, AnnotationPatch, TextRange, Timestamp, now_millis,
};
pub use color::AnnotationColor;
pub use icon::NoteIcon;
pub use tool::AnnotationTool;
