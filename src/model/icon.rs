//! Marker icons for note annotations.

use serde::{Deserialize, Serialize};

/// Icon shown inside a note annotation's marker.
///
/// Closed enumeration so icon rendering can match exhaustively; invalid
/// icon names are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoteIcon {
    /// Speech bubble (square) - the default for new notes.
    #[default]
    MessageSquare,
    /// Alert / attention marker.
    AlertCircle,
    /// Flag marker.
    Flag,
    /// Question marker.
    HelpCircle,
    /// Round speech bubble - render fallback, not offered by the picker.
    MessageCircle,
}

impl NoteIcon {
    /// Get the display name for this icon.
    pub fn name(&self) -> &'static str {
        match self {
            NoteIcon::MessageSquare => "Message",
            NoteIcon::AlertCircle => "Alert",
            NoteIcon::Flag => "Flag",
            NoteIcon::HelpCircle => "Question",
            NoteIcon::MessageCircle => "Comment",
        }
    }

    /// Icons offered by the toolbar picker.
    pub fn pickable() -> &'static [NoteIcon] {
        &[
            NoteIcon::MessageSquare,
            NoteIcon::AlertCircle,
            NoteIcon::Flag,
            NoteIcon::HelpCircle,
        ]
    }
}
