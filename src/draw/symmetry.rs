//! Radial symmetry renderer.
//!
//! Every input point is replicated `segments` times around the canvas center,
//! evenly spaced by `2π / segments`, and each copy is optionally reflected
//! through the center. Each copy is stamped as a filled disc ("dab") colored by
//! its own offset from the center.

use super::effect::{EffectMode, EffectParams, effect_params_for, reset_effects};
use super::palette::{ColorScheme, color_for};
use super::surface::Surface;
use crate::util::{self, Point, Rect};
use std::f64::consts::PI;

/// Smallest supported segment count.
pub const MIN_SEGMENTS: u32 = 3;
/// Largest supported segment count.
pub const MAX_SEGMENTS: u32 = 24;

/// Symmetry settings for a single render call.
///
/// Passed by value; the renderer never reads ambient state. Callers fold
/// auto-rotation into `rotation_offset` (0 when auto-rotate is off).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryConfig {
    /// Number of rotational copies, `MIN_SEGMENTS..=MAX_SEGMENTS`.
    pub segments: u32,
    /// Also reflect every copy through the center.
    pub mirror_mode: bool,
    /// Extra rotation in radians added to every copy.
    pub rotation_offset: f64,
}

impl Default for SymmetryConfig {
    fn default() -> Self {
        Self {
            segments: 8,
            mirror_mode: true,
            rotation_offset: 0.0,
        }
    }
}

impl SymmetryConfig {
    /// Angle between neighbouring copies.
    pub fn segment_angle(&self) -> f64 {
        PI * 2.0 / self.segments as f64
    }

    /// Number of dabs stamped for one input point.
    pub fn dabs_per_point(&self) -> usize {
        self.segments as usize * if self.mirror_mode { 2 } else { 1 }
    }
}

/// Brush appearance for a single render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushConfig {
    /// Dab radius in pixels (1-20).
    pub size: f64,
    /// Opacity in percent (10-100).
    pub opacity: f64,
    pub color_scheme: ColorScheme,
    pub effect_mode: EffectMode,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            size: 5.0,
            opacity: 100.0,
            color_scheme: ColorScheme::Rainbow,
            effect_mode: EffectMode::Normal,
        }
    }
}

/// One disc placement produced by symmetry replication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dab {
    /// Disc center on the surface.
    pub x: f64,
    pub y: f64,
    /// Offset of the disc from the canvas center, used for color lookup.
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Dab {
    fn at(center: Point, offset_x: f64, offset_y: f64) -> Self {
        Self {
            x: center.x + offset_x,
            y: center.y + offset_y,
            offset_x,
            offset_y,
        }
    }

    /// The copy reflected through the center.
    pub fn mirrored(&self, center: Point) -> Self {
        Self::at(center, -self.offset_x, -self.offset_y)
    }
}

/// Computes every dab position for a raw input point.
///
/// Copies are ordered by segment index; when mirroring, each rotated copy is
/// immediately followed by its reflection. Coincident positions (the center
/// itself, or even segment counts where reflections land on other copies) are
/// kept, since overlapping dabs composite visibly.
pub fn symmetric_dabs(center: Point, raw: Point, symmetry: &SymmetryConfig) -> Vec<Dab> {
    let rel_x = raw.x - center.x;
    let rel_y = raw.y - center.y;
    let distance = (rel_x * rel_x + rel_y * rel_y).sqrt();
    let base_angle = rel_y.atan2(rel_x) + symmetry.rotation_offset;
    let step = symmetry.segment_angle();

    let mut dabs = Vec::with_capacity(symmetry.dabs_per_point());
    for i in 0..symmetry.segments {
        let angle = base_angle + step * i as f64;
        let dab = Dab::at(center, angle.cos() * distance, angle.sin() * distance);
        dabs.push(dab);
        if symmetry.mirror_mode {
            dabs.push(dab.mirrored(center));
        }
    }
    dabs
}

/// Stamps all symmetric copies of a brush dab for one raw input point.
///
/// Returns the damaged area clipped to the surface, or `None` when nothing was
/// drawn. A surface without backing pixels is a silent no-op, and so is a
/// point too far from the center for any copy to reach the surface.
pub fn stamp_point(
    surface: &mut Surface,
    raw: Point,
    symmetry: &SymmetryConfig,
    brush: &BrushConfig,
) -> Option<Rect> {
    if !(surface.center().distance_to(raw) <= visible_radius(surface, brush)) {
        return None;
    }
    let ctx = surface.context()?;
    let damage = stamp_point_with(&ctx, surface.center(), raw, symmetry, brush);
    damage.and_then(|rect| rect.clamp_to_bounds(surface.width(), surface.height()))
}

/// Distance from the center beyond which no copy of a dab (halo included)
/// can touch the surface. Copies keep the input's distance from the center.
pub(crate) fn visible_radius(surface: &Surface, brush: &BrushConfig) -> f64 {
    let half_diagonal = f64::from(surface.width()).hypot(f64::from(surface.height())) / 2.0;
    half_diagonal + brush.size + effect_params_for(brush.effect_mode, brush.size).blur_radius
}

/// Stamps one input point through an existing context.
pub(crate) fn stamp_point_with(
    ctx: &cairo::Context,
    center: Point,
    raw: Point,
    symmetry: &SymmetryConfig,
    brush: &BrushConfig,
) -> Option<Rect> {
    let effect = effect_params_for(brush.effect_mode, brush.size);
    let mut damage: Option<Rect> = None;

    for dab in symmetric_dabs(center, raw, symmetry) {
        render_dab(ctx, &dab, brush, &effect);
        let bounds = util::disc_bounds(dab.x, dab.y, brush.size + effect.blur_radius);
        damage = match (damage, bounds) {
            (Some(acc), Some(rect)) => Some(acc.union(rect)),
            (acc, rect) => acc.or(rect),
        };
    }

    reset_effects(ctx);
    damage
}

fn render_dab(ctx: &cairo::Context, dab: &Dab, brush: &BrushConfig, effect: &EffectParams) {
    let color = color_for(dab.offset_x, dab.offset_y, brush.color_scheme, brush.opacity);

    effect.apply(ctx);
    effect.render_halo(ctx, dab.x, dab.y, brush.size, color);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.arc(dab.x, dab.y, brush.size, 0.0, PI * 2.0);
    let _ = ctx.fill(); // Ignore errors - a failed fill just leaves this dab unpainted
}
