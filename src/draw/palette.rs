//! Named color schemes mapping a position around the canvas center to a color.
//!
//! Every scheme is a deterministic function of the polar coordinates of the
//! offset from the center, so the same offset always yields the same color and
//! rotated copies of a dab pick up the hue of the segment they land in.

use super::color::{Color, Hsla};
use log::warn;
use std::f64::consts::PI;
use std::fmt;

/// Palette used to color dabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Full-saturation hue wheel following the angle around the center.
    #[default]
    Rainbow,
    Ocean,
    Fire,
    Forest,
    /// Greys that brighten in bands with distance from the center.
    Monochrome,
    Neon,
    Pastel,
    Sunset,
    Cosmic,
    Autumn,
    Winter,
}

impl ColorScheme {
    /// All schemes in menu order.
    pub const ALL: [ColorScheme; 11] = [
        ColorScheme::Rainbow,
        ColorScheme::Ocean,
        ColorScheme::Fire,
        ColorScheme::Forest,
        ColorScheme::Monochrome,
        ColorScheme::Neon,
        ColorScheme::Pastel,
        ColorScheme::Sunset,
        ColorScheme::Cosmic,
        ColorScheme::Autumn,
        ColorScheme::Winter,
    ];

    /// Looks a scheme up by its lowercase name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`ColorScheme::parse`] but unknown names fall back to rainbow.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!("Unknown color scheme '{}', using rainbow", name);
            ColorScheme::Rainbow
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Rainbow => "rainbow",
            ColorScheme::Ocean => "ocean",
            ColorScheme::Fire => "fire",
            ColorScheme::Forest => "forest",
            ColorScheme::Monochrome => "monochrome",
            ColorScheme::Neon => "neon",
            ColorScheme::Pastel => "pastel",
            ColorScheme::Sunset => "sunset",
            ColorScheme::Cosmic => "cosmic",
            ColorScheme::Autumn => "autumn",
            ColorScheme::Winter => "winter",
        }
    }

    /// HSLA value for an offset from the canvas center.
    ///
    /// `%` below is the truncated remainder, so terms derived from a negative
    /// angle stay negative.
    pub fn hsla(self, offset_x: f64, offset_y: f64, opacity_percent: f64) -> Hsla {
        let distance = (offset_x * offset_x + offset_y * offset_y).sqrt();
        let angle = offset_y.atan2(offset_x);
        let wheel = (angle * 180.0 / PI + 180.0) % 360.0;
        let alpha = opacity_percent / 100.0;

        let (h, s, l) = match self {
            ColorScheme::Rainbow => (wheel, 100.0, 50.0),
            ColorScheme::Ocean => (
                200.0 + distance % 40.0,
                70.0 + distance % 30.0,
                40.0 + distance % 30.0,
            ),
            ColorScheme::Fire => (
                10.0 + distance % 30.0,
                90.0 - distance % 20.0,
                40.0 + distance % 30.0,
            ),
            ColorScheme::Forest => (
                100.0 + distance % 60.0,
                60.0 + distance % 40.0,
                30.0 + distance % 30.0,
            ),
            ColorScheme::Monochrome => (0.0, 0.0, 50.0 + distance % 50.0),
            ColorScheme::Neon => (wheel, 100.0, 60.0),
            ColorScheme::Pastel => (wheel, 70.0, 80.0),
            ColorScheme::Sunset => (distance % 60.0 + 10.0, 90.0, 50.0 + angle * 10.0 % 30.0),
            ColorScheme::Cosmic => (
                270.0 + distance % 90.0,
                80.0 + distance % 20.0,
                30.0 + angle * 20.0 % 30.0,
            ),
            ColorScheme::Autumn => (
                20.0 + distance % 40.0,
                80.0 + distance % 20.0,
                40.0 + angle * 10.0 % 20.0,
            ),
            ColorScheme::Winter => (
                180.0 + distance % 60.0,
                50.0 + distance % 30.0,
                70.0 + angle * 10.0 % 20.0,
            ),
        };

        Hsla::new(h, s, l, alpha)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an offset from the canvas center to a dab color.
///
/// Pure and deterministic: identical inputs always yield an identical color.
pub fn color_for(offset_x: f64, offset_y: f64, scheme: ColorScheme, opacity_percent: f64) -> Color {
    scheme.hsla(offset_x, offset_y, opacity_percent).to_color()
}
