//! Toolbar tool selection.

use serde::{Deserialize, Serialize};

/// Annotation tools available in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnnotationTool {
    /// Selection tool for picking and manipulating existing annotations.
    #[default]
    Select,
    /// Place note markers (point annotations with a comment).
    Note,
    /// Place rectangle annotations.
    Rectangle,
    /// No tool active - clicks on the surface only deselect.
    None,
}

impl AnnotationTool {
    /// Get the display name for this tool.
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationTool::Select => "Select",
            AnnotationTool::Note => "Note",
            AnnotationTool::Rectangle => "Rectangle",
            AnnotationTool::None => "None",
        }
    }

    /// Tools shown in the toolbar.
    pub fn all() -> &'static [AnnotationTool] {
        &[
            AnnotationTool::Select,
            AnnotationTool::Note,
            AnnotationTool::Rectangle,
        ]
    }

    /// Check if this tool places new annotations (not Select/None).
    pub fn is_placement_tool(&self) -> bool {
        matches!(self, AnnotationTool::Note | AnnotationTool::Rectangle)
    }

    /// Check if this tool allows dragging existing annotations.
    pub fn allows_manipulation(&self) -> bool {
        matches!(self, AnnotationTool::Select)
    }
}
