//! Compositing effects applied while stamping dabs.
//!
//! An [`EffectMode`] resolves to [`EffectParams`]: a halo radius and the Cairo
//! operator used to composite the dab onto the surface. Cairo has no shadow
//! blur, so glowing effects paint a radial gradient halo underneath the disc.

use super::color::Color;
use log::warn;
use std::f64::consts::PI;
use std::fmt;

/// Named compositing effect selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectMode {
    /// Plain source-over painting.
    #[default]
    Normal,
    /// Soft halo in the dab's own color.
    Glow,
    /// Wider halo with additive blending, overlaps saturate towards white.
    Neon,
    /// Color-dodge blending, brightens what is already painted.
    Liquid,
    /// Overlay blending, multiplies or screens depending on the backdrop.
    Crystal,
}

impl EffectMode {
    pub const ALL: [EffectMode; 5] = [
        EffectMode::Normal,
        EffectMode::Glow,
        EffectMode::Neon,
        EffectMode::Liquid,
        EffectMode::Crystal,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`EffectMode::parse`] but unknown names fall back to normal.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!("Unknown effect mode '{}', using normal", name);
            EffectMode::Normal
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            EffectMode::Normal => "normal",
            EffectMode::Glow => "glow",
            EffectMode::Neon => "neon",
            EffectMode::Liquid => "liquid",
            EffectMode::Crystal => "crystal",
        }
    }
}

impl fmt::Display for EffectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a dab is composited onto the existing surface content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source-over, the default.
    #[default]
    Normal,
    /// Additive ("lighter").
    Lighter,
    ColorDodge,
    Overlay,
}

impl BlendMode {
    pub fn operator(self) -> cairo::Operator {
        match self {
            BlendMode::Normal => cairo::Operator::Over,
            BlendMode::Lighter => cairo::Operator::Add,
            BlendMode::ColorDodge => cairo::Operator::ColorDodge,
            BlendMode::Overlay => cairo::Operator::Overlay,
        }
    }
}

/// Paint parameters applied before a dab is stamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EffectParams {
    /// Extra halo radius in pixels around the disc (0 = no halo).
    pub blur_radius: f64,
    pub blend: BlendMode,
}

impl EffectParams {
    /// Parameters that leave the surface in its default paint state.
    pub const RESET: EffectParams = EffectParams {
        blur_radius: 0.0,
        blend: BlendMode::Normal,
    };

    /// Configures `ctx` for compositing a dab.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_operator(self.blend.operator());
    }

    /// Paints the halo for a dab at `(x, y)`, if this effect has one.
    ///
    /// The halo fades from the dab color at the disc edge to transparent at
    /// `radius + blur_radius`. Must be called after [`EffectParams::apply`] so
    /// it shares the dab's blend operator.
    pub fn render_halo(&self, ctx: &cairo::Context, x: f64, y: f64, radius: f64, color: Color) {
        if self.blur_radius <= 0.0 {
            return;
        }

        let outer = radius + self.blur_radius;
        let gradient = cairo::RadialGradient::new(x, y, radius * 0.5, x, y, outer);
        gradient.add_color_stop_rgba(0.0, color.r, color.g, color.b, color.a * 0.6);
        gradient.add_color_stop_rgba(1.0, color.r, color.g, color.b, 0.0);

        if ctx.set_source(&gradient).is_err() {
            return;
        }
        ctx.arc(x, y, outer, 0.0, PI * 2.0);
        let _ = ctx.fill(); // A failed halo still leaves the disc itself
    }
}

/// Resolves the compositing parameters for an effect at a given brush size.
pub fn effect_params_for(mode: EffectMode, brush_size: f64) -> EffectParams {
    match mode {
        EffectMode::Normal => EffectParams::RESET,
        EffectMode::Glow => EffectParams {
            blur_radius: brush_size * 2.0,
            blend: BlendMode::Normal,
        },
        EffectMode::Neon => EffectParams {
            blur_radius: brush_size * 3.0,
            blend: BlendMode::Lighter,
        },
        EffectMode::Liquid => EffectParams {
            blur_radius: 0.0,
            blend: BlendMode::ColorDodge,
        },
        EffectMode::Crystal => EffectParams {
            blur_radius: 0.0,
            blend: BlendMode::Overlay,
        },
    }
}

/// Returns `ctx` to default paint parameters so effects never leak into
/// unrelated drawing.
pub fn reset_effects(ctx: &cairo::Context) {
    EffectParams::RESET.apply(ctx);
}
