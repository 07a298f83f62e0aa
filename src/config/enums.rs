//! Configuration enum types.

use crate::draw::{BLACK, Color, WHITE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Backdrop the drawing is flattened onto when exported.
///
/// The live canvas is always transparent; the backdrop only affects the PNG.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ExportBackground {
    /// Keep unpainted pixels transparent
    #[default]
    Transparent,
    /// Flatten onto black, matching the on-screen canvas
    Black,
    /// Flatten onto white
    White,
}

impl ExportBackground {
    /// Color to flatten onto, or `None` for a transparent export.
    pub fn color(self) -> Option<Color> {
        match self {
            ExportBackground::Transparent => None,
            ExportBackground::Black => Some(BLACK),
            ExportBackground::White => Some(WHITE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_colors() {
        assert_eq!(ExportBackground::Transparent.color(), None);
        assert_eq!(ExportBackground::Black.color(), Some(BLACK));
        assert_eq!(ExportBackground::White.color(), Some(WHITE));
    }
}
