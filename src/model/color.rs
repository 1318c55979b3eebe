//! Annotation color palette.

use serde::{Deserialize, Serialize};

/// The fixed palette available for annotations.
///
/// Colors are a closed enumeration rather than free-form strings so the
/// overlay renderer can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationColor {
    #[default]
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl AnnotationColor {
    /// Get the display name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationColor::Red => "Red",
            AnnotationColor::Orange => "Orange",
            AnnotationColor::Yellow => "Yellow",
            AnnotationColor::Green => "Green",
            AnnotationColor::Blue => "Blue",
            AnnotationColor::Purple => "Purple",
            AnnotationColor::Pink => "Pink",
        }
    }

    /// All palette colors, in picker order.
    pub fn all() -> &'static [AnnotationColor] {
        &[
            AnnotationColor::Red,
            AnnotationColor::Orange,
            AnnotationColor::Yellow,
            AnnotationColor::Green,
            AnnotationColor::Blue,
            AnnotationColor::Purple,
            AnnotationColor::Pink,
        ]
    }

    /// RGB value for overlay rendering.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            AnnotationColor::Red => [234, 67, 53],
            AnnotationColor::Orange => [244, 140, 6],
            AnnotationColor::Yellow => [244, 194, 13],
            AnnotationColor::Green => [52, 168, 83],
            AnnotationColor::Blue => [66, 133, 244],
            AnnotationColor::Purple => [154, 92, 219],
            AnnotationColor::Pink => [230, 92, 160],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_seven_colors() {
        assert_eq!(AnnotationColor::all().len(), 7);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&AnnotationColor::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
    }
}
