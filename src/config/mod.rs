//! Configuration file support for mirramaze.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/mirramaze/config.toml`. Settings include the symmetry pattern,
//! brush appearance, auto-rotate animation, canvas size and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ExportBackground;
pub use types::{AnimationConfig, CanvasConfig, ExportConfig, PaintConfig, PatternConfig};

use crate::animation::{MAX_ROTATE_SPEED, MIN_ROTATE_SPEED};
use crate::draw::{ColorScheme, EffectMode, MAX_SEGMENTS, MIN_SEGMENTS};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [pattern]
/// segments = 12
/// mirror_mode = true
///
/// [paint]
/// brush_size = 6.0
/// opacity = 80.0
/// color_scheme = "cosmic"
/// effect_mode = "glow"
///
/// [animation]
/// auto_rotate = true
/// rotate_speed = 1.5
///
/// [canvas]
/// width = 800
/// height = 800
///
/// [export]
/// directory = "~/Pictures/MirraMaze"
/// background = "black"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Symmetry settings (segment count, mirroring)
    #[serde(default)]
    pub pattern: PatternConfig,

    /// Brush settings (size, opacity, palette, effect)
    #[serde(default)]
    pub paint: PaintConfig,

    /// Auto-rotate animation settings
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Drawing surface dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default for unknown names) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `segments`: 3 - 24
    /// - `brush_size`: 1.0 - 20.0
    /// - `opacity`: 10.0 - 100.0
    /// - `rotate_speed`: 0.1 - 5.0
    /// - `tick_interval_ms`: 1 - 1000
    /// - canvas `width` / `height`: 16 - 4096
    pub fn validate_and_clamp(&mut self) {
        // Segments: 3 - 24
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.pattern.segments) {
            log::warn!(
                "Invalid segments {}, clamping to {}-{} range",
                self.pattern.segments,
                MIN_SEGMENTS,
                MAX_SEGMENTS
            );
            self.pattern.segments = self.pattern.segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
        }

        // Brush size: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.paint.brush_size) {
            log::warn!(
                "Invalid brush_size {:.1}, clamping to 1.0-20.0 range",
                self.paint.brush_size
            );
            self.paint.brush_size = clamp_or(self.paint.brush_size, 1.0, 20.0, 5.0);
        }

        // Opacity: 10 - 100 percent
        if !(10.0..=100.0).contains(&self.paint.opacity) {
            log::warn!(
                "Invalid opacity {:.1}, clamping to 10-100 range",
                self.paint.opacity
            );
            self.paint.opacity = clamp_or(self.paint.opacity, 10.0, 100.0, 100.0);
        }

        if ColorScheme::parse(&self.paint.color_scheme).is_none() {
            log::warn!(
                "Invalid color_scheme '{}', falling back to 'rainbow'",
                self.paint.color_scheme
            );
            self.paint.color_scheme = ColorScheme::Rainbow.name().to_string();
        }

        if EffectMode::parse(&self.paint.effect_mode).is_none() {
            log::warn!(
                "Invalid effect_mode '{}', falling back to 'normal'",
                self.paint.effect_mode
            );
            self.paint.effect_mode = EffectMode::Normal.name().to_string();
        }

        // Rotate speed: 0.1 - 5.0
        if !(MIN_ROTATE_SPEED..=MAX_ROTATE_SPEED).contains(&self.animation.rotate_speed) {
            log::warn!(
                "Invalid rotate_speed {:.2}, clamping to {:.1}-{:.1} range",
                self.animation.rotate_speed,
                MIN_ROTATE_SPEED,
                MAX_ROTATE_SPEED
            );
            self.animation.rotate_speed = clamp_or(
                self.animation.rotate_speed,
                MIN_ROTATE_SPEED,
                MAX_ROTATE_SPEED,
                1.0,
            );
        }

        // Tick interval: 1 - 1000 ms
        if !(1..=1000).contains(&self.animation.tick_interval_ms) {
            log::warn!(
                "Invalid tick_interval_ms {}, clamping to 1-1000 range",
                self.animation.tick_interval_ms
            );
            self.animation.tick_interval_ms = self.animation.tick_interval_ms.clamp(1, 1000);
        }

        // Canvas: 16 - 4096 px per side
        if !(16..=4096).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 4096);
        }
        if !(16..=4096).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 4096);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/mirramaze/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mirramaze");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Clamps `value` into `min..=max`, substituting `fallback` for NaN.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();
        assert_eq!(config.pattern.segments, 8);
        assert!(config.pattern.mirror_mode);
        assert_eq!(config.paint.brush_size, 5.0);
        assert_eq!(config.paint.opacity, 100.0);
        assert_eq!(config.paint.color_scheme, "rainbow");
        assert_eq!(config.paint.effect_mode, "normal");
        assert!(!config.animation.auto_rotate);
        assert_eq!(config.canvas.width, 600);
        assert_eq!(config.export.background, ExportBackground::Transparent);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.pattern.segments = 40;
        config.paint.brush_size = 0.0;
        config.paint.opacity = f64::NAN;
        config.paint.color_scheme = "plaid".into();
        config.paint.effect_mode = "sparkle".into();
        config.animation.rotate_speed = 9.0;
        config.animation.tick_interval_ms = 0;
        config.canvas.width = 2;
        config.canvas.height = 10_000;

        config.validate_and_clamp();

        assert_eq!(config.pattern.segments, 24);
        assert_eq!(config.paint.brush_size, 1.0);
        assert_eq!(config.paint.opacity, 100.0);
        assert_eq!(config.paint.color_scheme, "rainbow");
        assert_eq!(config.paint.effect_mode, "normal");
        assert_eq!(config.animation.rotate_speed, 5.0);
        assert_eq!(config.animation.tick_interval_ms, 1);
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 4096);
    }

    #[test]
    fn load_from_parses_partial_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[pattern]\nsegments = 2\n\n[paint]\ncolor_scheme = \"winter\"\n\n[export]\nbackground = \"black\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.pattern.segments, 3);
        assert!(config.pattern.mirror_mode);
        assert_eq!(config.paint.color_scheme, "winter");
        assert_eq!(config.paint.brush_size, 5.0);
        assert_eq!(config.export.background, ExportBackground::Black);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pattern\nsegments = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["pattern", "paint", "animation", "canvas", "export"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
