//! Configuration type definitions.

use super::enums::ExportBackground;
use crate::draw::{BrushConfig, ColorScheme, EffectMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Symmetry settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PatternConfig {
    /// Number of rotational copies around the center (valid range: 3 - 24)
    #[serde(default = "default_segments")]
    pub segments: u32,

    /// Reflect every copy through the canvas center
    #[serde(default = "default_mirror_mode")]
    pub mirror_mode: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            mirror_mode: default_mirror_mode(),
        }
    }
}

/// Brush settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaintConfig {
    /// Dab radius in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_brush_size")]
    pub brush_size: f64,

    /// Dab opacity in percent (valid range: 10.0 - 100.0)
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Palette: rainbow, ocean, fire, forest, monochrome, neon, pastel,
    /// sunset, cosmic, autumn, winter
    #[serde(default = "default_color_scheme")]
    pub color_scheme: String,

    /// Compositing effect: normal, glow, neon, liquid, crystal
    #[serde(default = "default_effect_mode")]
    pub effect_mode: String,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            brush_size: default_brush_size(),
            opacity: default_opacity(),
            color_scheme: default_color_scheme(),
            effect_mode: default_effect_mode(),
        }
    }
}

impl PaintConfig {
    /// Resolves the brush used for rendering.
    ///
    /// Unknown scheme or effect names fall back to rainbow / normal.
    pub fn brush_config(&self) -> BrushConfig {
        BrushConfig {
            size: self.brush_size,
            opacity: self.opacity,
            color_scheme: ColorScheme::from_name(&self.color_scheme),
            effect_mode: EffectMode::from_name(&self.effect_mode),
        }
    }
}

/// Auto-rotate animation settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnimationConfig {
    /// Rotate new dabs by a slowly advancing angle
    #[serde(default)]
    pub auto_rotate: bool,

    /// Rotation speed multiplier (valid range: 0.1 - 5.0)
    /// Each tick advances the angle by 0.005 rad times this value
    #[serde(default = "default_rotate_speed")]
    pub rotate_speed: f64,

    /// Milliseconds between animation ticks (valid range: 1 - 1000)
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            auto_rotate: false,
            rotate_speed: default_rotate_speed(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Drawing surface dimensions.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: i32,

    /// Surface height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory the PNG is written to (supports ~/ prefix)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Backdrop for the exported image (transparent, black, white)
    #[serde(default)]
    pub background: ExportBackground,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            background: ExportBackground::default(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_segments() -> u32 {
    8
}

fn default_mirror_mode() -> bool {
    true
}

fn default_brush_size() -> f64 {
    5.0
}

fn default_opacity() -> f64 {
    100.0
}

fn default_color_scheme() -> String {
    "rainbow".to_string()
}

fn default_effect_mode() -> String {
    "normal".to_string()
}

fn default_rotate_speed() -> f64 {
    1.0
}

fn default_tick_interval_ms() -> u64 {
    16 // ~60 Hz
}

fn default_canvas_size() -> i32 {
    600
}

fn default_export_directory() -> String {
    "~/Pictures/MirraMaze".to_string()
}
