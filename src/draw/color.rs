//! RGBA and HSLA color types.

use palette::encoding::Srgb;
use palette::{FromColor, Srgba};

/// Straight (non-premultiplied) RGBA in the 0.0-1.0 range Cairo expects.
///
/// ```
/// use mirramaze::draw::{Color, Hsla};
/// let cyan: Color = Hsla::new(180.0, 100.0, 50.0, 1.0).into();
/// assert!(cyan.r.abs() < 1e-9 && cyan.g > 0.999);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Coverage; 0.0 leaves the surface untouched
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Opaque black, the canvas backdrop color.
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Opaque white.
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// A color in the hue/saturation/lightness model with alpha.
///
/// Units follow CSS `hsla()`: hue in degrees, saturation and lightness in
/// percent, alpha in 0.0-1.0. Out-of-range values are normalized on
/// conversion the same way a browser would: hue wraps around the color wheel,
/// everything else clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Converts to sRGB with alpha.
    pub fn to_color(self) -> Color {
        let hsla = palette::Hsla::<Srgb, f64>::new(
            self.hue,
            self.saturation.clamp(0.0, 100.0) / 100.0,
            self.lightness.clamp(0.0, 100.0) / 100.0,
            self.alpha.clamp(0.0, 1.0),
        );
        let (r, g, b, a) = Srgba::<f64>::from_color(hsla).into_components();
        Color::new(r, g, b, a)
    }
}

impl From<Hsla> for Color {
    fn from(hsla: Hsla) -> Self {
        hsla.to_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Color, expected: Color) {
        let eps = 1e-9;
        assert!(
            (actual.r - expected.r).abs() < eps
                && (actual.g - expected.g).abs() < eps
                && (actual.b - expected.b).abs() < eps
                && (actual.a - expected.a).abs() < eps,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn primary_hues_convert_exactly() {
        assert_close(
            Hsla::new(0.0, 100.0, 50.0, 1.0).to_color(),
            Color::new(1.0, 0.0, 0.0, 1.0),
        );
        assert_close(
            Hsla::new(120.0, 100.0, 50.0, 1.0).to_color(),
            Color::new(0.0, 1.0, 0.0, 1.0),
        );
        assert_close(
            Hsla::new(240.0, 100.0, 50.0, 0.5).to_color(),
            Color::new(0.0, 0.0, 1.0, 0.5),
        );
    }

    #[test]
    fn hue_wraps_both_directions() {
        let base = Hsla::new(30.0, 80.0, 40.0, 1.0).to_color();
        assert_close(Hsla::new(390.0, 80.0, 40.0, 1.0).to_color(), base);
        assert_close(Hsla::new(-330.0, 80.0, 40.0, 1.0).to_color(), base);
    }

    #[test]
    fn secondary_hue_mixes_channels() {
        // hsl(180, 100%, 50%) is pure cyan; hsl(30, 100%, 50%) is orange.
        assert_close(
            Hsla::new(180.0, 100.0, 50.0, 1.0).to_color(),
            Color::new(0.0, 1.0, 1.0, 1.0),
        );
        assert_close(
            Hsla::new(30.0, 100.0, 50.0, 1.0).to_color(),
            Color::new(1.0, 0.5, 0.0, 1.0),
        );
    }

    #[test]
    fn zero_saturation_is_grey() {
        let grey = Hsla::new(200.0, 0.0, 75.0, 1.0).to_color();
        assert_close(grey, Color::new(0.75, 0.75, 0.75, 1.0));
    }

    #[test]
    fn out_of_range_components_clamp() {
        assert_close(Hsla::new(0.0, 0.0, 130.0, 2.0).to_color(), WHITE);
        assert_close(
            Hsla::new(0.0, 100.0, -10.0, -1.0).to_color(),
            Color::new(0.0, 0.0, 0.0, 0.0),
        );
    }
}
