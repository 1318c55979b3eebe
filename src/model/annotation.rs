//! Annotation data model.

use serde::{Deserialize, Serialize};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::geometry::{Point, Rect};
use crate::model::{AnnotationColor, NoteIcon};

/// Unique identifier for an annotation. Assigned by the store at creation
/// and never reassigned.
pub type AnnotationId = u64;

/// Creation timestamp in milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Current wall-clock time as a [`Timestamp`].
pub fn now_millis() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Offsets into the source text a note was created from.
///
/// Informational only - the range is never re-resolved against the
/// document after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Kind-specific annotation data.
///
/// A tagged union rather than an optional-field struct: rectangle geometry
/// is unrepresentable on a note, and note icons/text capture are
/// unrepresentable on a rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// A point marker with a comment.
    Note {
        /// Marker icon, defaulted from the active toolbar icon at creation.
        icon: NoteIcon,
        /// Source text captured when the note was created from a selection.
        text_content: Option<String>,
        /// Offsets of the captured selection.
        text_range: Option<TextRange>,
    },
    /// A resizable rectangle. Width and height are always present and
    /// at least [`MIN_RECT_SIZE`](crate::constants::MIN_RECT_SIZE).
    Rectangle { width: f32, height: f32 },
}

impl AnnotationKind {
    /// A plain click-placed note with no captured text.
    pub fn note(icon: NoteIcon) -> Self {
        AnnotationKind::Note {
            icon,
            text_content: None,
            text_range: None,
        }
    }

    /// Check if this is a note annotation.
    pub fn is_note(&self) -> bool {
        matches!(self, AnnotationKind::Note { .. })
    }

    /// Check if this is a rectangle annotation.
    pub fn is_rectangle(&self) -> bool {
        matches!(self, AnnotationKind::Rectangle { .. })
    }
}

/// A single annotation on a document page.
///
/// Identity (`id`, `created_at`, `page_number`) is immutable after
/// creation; position, content, and appearance are mutated through the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier.
    pub id: AnnotationId,
    /// Kind-specific data (marker icon or rectangle size).
    pub kind: AnnotationKind,
    /// Top-left anchor in document space, relative to the page origin.
    pub position: Point,
    /// Free-form comment, edited from the sidebar.
    pub content: String,
    /// Palette color.
    pub color: AnnotationColor,
    /// Creation time, used for display ordering.
    pub created_at: Timestamp,
    /// 1-based page this annotation belongs to. No cross-page moves.
    pub page_number: u32,
}

impl Annotation {
    /// The full rectangle geometry, if this is a rectangle annotation.
    pub fn rect(&self) -> Option<Rect> {
        match self.kind {
            AnnotationKind::Rectangle { width, height } => Some(Rect {
                x: self.position.x,
                y: self.position.y,
                width,
                height,
            }),
            AnnotationKind::Note { .. } => None,
        }
    }

    /// The note icon, if this is a note annotation.
    pub fn icon(&self) -> Option<NoteIcon> {
        match self.kind {
            AnnotationKind::Note { icon, .. } => Some(icon),
            AnnotationKind::Rectangle { .. } => None,
        }
    }
}

/// A partial update merged into an annotation by
/// [`AnnotationStore::update`](crate::store::AnnotationStore::update).
///
/// Unset fields leave the annotation untouched. `rect` replaces position
/// and size together and only applies to rectangle annotations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationPatch {
    pub position: Option<Point>,
    pub rect: Option<Rect>,
    pub content: Option<String>,
    pub color: Option<AnnotationColor>,
    pub icon: Option<NoteIcon>,
}

impl AnnotationPatch {
    /// Patch that moves an annotation to a new position.
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Patch that replaces a rectangle's full geometry.
    pub fn rect(rect: Rect) -> Self {
        Self {
            rect: Some(rect),
            ..Self::default()
        }
    }

    /// Patch that replaces the comment text.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Patch that changes the color.
    pub fn color(color: AnnotationColor) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Patch that changes the note icon.
    pub fn icon(icon: NoteIcon) -> Self {
        Self {
            icon: Some(icon),
            ..Self::default()
        }
    }

    /// Apply this patch to an annotation in place.
    ///
    /// Kind-mismatched fields (a rect on a note, an icon on a rectangle)
    /// are ignored rather than erroring; they can only arise from stale
    /// events.
    pub fn apply(&self, annotation: &mut Annotation) {
        if let Some(position) = self.position {
            annotation.position = position;
        }
        if let Some(rect) = self.rect {
            if let AnnotationKind::Rectangle { width, height } = &mut annotation.kind {
                annotation.position = Point::new(rect.x, rect.y);
                *width = rect.width;
                *height = rect.height;
            }
        }
        if let Some(content) = &self.content {
            annotation.content = content.clone();
        }
        if let Some(color) = self.color {
            annotation.color = color;
        }
        if let Some(icon) = self.icon {
            if let AnnotationKind::Note { icon: current, .. } = &mut annotation.kind {
                *current = icon;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: AnnotationId) -> Annotation {
        Annotation {
            id,
            kind: AnnotationKind::note(NoteIcon::Flag),
            position: Point::new(10.0, 20.0),
            content: String::new(),
            color: AnnotationColor::Red,
            created_at: 1_000,
            page_number: 1,
        }
    }

    #[test]
    fn test_rect_accessor_only_for_rectangles() {
        let mut ann = note(1);
        assert_eq!(ann.rect(), None);

        ann.kind = AnnotationKind::Rectangle {
            width: 150.0,
            height: 100.0,
        };
        let rect = ann.rect().unwrap();
        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.width, 150.0);
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut ann = note(1);
        ann.content = "original".to_string();

        AnnotationPatch::position(Point::new(50.0, 60.0)).apply(&mut ann);
        assert_eq!(ann.position, Point::new(50.0, 60.0));
        assert_eq!(ann.content, "original");

        AnnotationPatch::content("edited").apply(&mut ann);
        assert_eq!(ann.content, "edited");
        assert_eq!(ann.position, Point::new(50.0, 60.0));
    }

    #[test]
    fn test_patch_ignores_kind_mismatched_fields() {
        let mut ann = note(1);
        let before = ann.clone();

        AnnotationPatch::rect(Rect::new(0.0, 0.0, 300.0, 300.0)).apply(&mut ann);
        assert_eq!(ann, before);

        let mut rect_ann = note(2);
        rect_ann.kind = AnnotationKind::Rectangle {
            width: 150.0,
            height: 100.0,
        };
        AnnotationPatch::icon(NoteIcon::AlertCircle).apply(&mut rect_ann);
        assert!(rect_ann.icon().is_none());
    }

    #[test]
    fn test_kind_serialization_shape() {
        let kind = AnnotationKind::Rectangle {
            width: 150.0,
            height: 100.0,
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("Rectangle"));

        let parsed: AnnotationKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, kind);
    }
}
