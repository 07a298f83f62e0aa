//! Stroke interpolation between consecutive pointer samples.
//!
//! Pointer devices report positions at their own rate, so a fast drag arrives
//! as sparse samples. Segments are resampled every couple of pixels so the
//! stamped dabs read as one continuous line.

use super::surface::Surface;
use super::symmetry::{BrushConfig, SymmetryConfig, stamp_point_with, visible_radius};
use crate::util::{Point, Rect};

/// Segments shorter than this collapse to a single dab at the end point.
pub const MIN_SEGMENT_LENGTH: f64 = 1.0;

/// Spacing between resampled points in pixels.
pub const SAMPLE_SPACING: f64 = 2.0;

/// Upper bound on resampling steps for one segment. Longer segments are
/// sampled more sparsely; anything that fits on a canvas stays well below it.
pub const MAX_SEGMENT_STEPS: usize = 8192;

/// Resamples the segment `p1 -> p2` into the points that get stamped.
///
/// Segments shorter than [`MIN_SEGMENT_LENGTH`] yield just `p2`. Longer ones
/// yield `steps + 1` evenly spaced points including both endpoints, where
/// `steps = max(floor(length / SAMPLE_SPACING), 1)`, capped at
/// [`MAX_SEGMENT_STEPS`].
pub fn interpolate(p1: Point, p2: Point) -> Vec<Point> {
    let distance = p1.distance_to(p2);
    if distance < MIN_SEGMENT_LENGTH {
        return vec![p2];
    }

    let steps = ((distance / SAMPLE_SPACING).floor() as usize).clamp(1, MAX_SEGMENT_STEPS);
    (0..=steps)
        .map(|i| {
            if i == steps {
                p2
            } else {
                p1.lerp(p2, i as f64 / steps as f64)
            }
        })
        .collect()
}

/// Stamps a continuous stroke segment from `p1` to `p2`.
///
/// Every resampled point goes through the symmetry renderer. Only the part of
/// the segment close enough to the center for a copy to reach the surface is
/// resampled. Returns the union of the damaged areas, clipped to the surface.
pub fn stamp_segment(
    surface: &mut Surface,
    p1: Point,
    p2: Point,
    symmetry: &SymmetryConfig,
    brush: &BrushConfig,
) -> Option<Rect> {
    let ctx = surface.context()?;
    let center = surface.center();
    let (from, to) = clip_to_disc(p1, p2, center, visible_radius(surface, brush))?;

    stamp_segment_with(&ctx, center, from, to, symmetry, brush)
        .and_then(|rect| rect.clamp_to_bounds(surface.width(), surface.height()))
}

/// Stamps every resampled point of `p1 -> p2` through one context.
pub(crate) fn stamp_segment_with(
    ctx: &cairo::Context,
    center: Point,
    p1: Point,
    p2: Point,
    symmetry: &SymmetryConfig,
    brush: &BrushConfig,
) -> Option<Rect> {
    let mut damage: Option<Rect> = None;
    for point in interpolate(p1, p2) {
        if let Some(rect) = stamp_point_with(ctx, center, point, symmetry, brush) {
            damage = Some(match damage {
                Some(acc) => acc.union(rect),
                None => rect,
            });
        }
    }
    damage
}

/// The part of `p1 -> p2` within `radius` of `center`, or `None` when the
/// segment never comes that close (or has non-finite coordinates).
///
/// Endpoints already inside the disc are returned unchanged.
fn clip_to_disc(p1: Point, p2: Point, center: Point, radius: f64) -> Option<(Point, Point)> {
    let length = p1.distance_to(p2);
    if !length.is_finite() {
        return None;
    }
    let inside = |p: Point| center.distance_to(p) <= radius;
    if inside(p1) && inside(p2) {
        return Some((p1, p2));
    }
    if length == 0.0 {
        return None;
    }

    // Walk the line p1 + s * dir and find where it crosses the circle.
    let dir_x = (p2.x - p1.x) / length;
    let dir_y = (p2.y - p1.y) / length;
    let off_x = p1.x - center.x;
    let off_y = p1.y - center.y;
    let along = off_x * dir_x + off_y * dir_y;
    let perpendicular = (off_x * dir_y - off_y * dir_x).abs();
    if !(perpendicular <= radius) {
        return None;
    }

    let half_chord = (radius * radius - perpendicular * perpendicular).sqrt();
    let enter = (-along - half_chord).max(0.0);
    let exit = (-along + half_chord).min(length);
    if !(enter <= exit) {
        return None;
    }

    let at = |s: f64| {
        let t = s / length;
        Point::new(p1.x * (1.0 - t) + p2.x * t, p1.y * (1.0 - t) + p2.y * t)
    };
    Some((at(enter), at(exit)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::EffectMode;

    #[test]
    fn long_segment_is_densely_sampled() {
        let points = interpolate(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[50], Point::new(100.0, 0.0));

        for pair in points.windows(2) {
            assert!((pair[0].distance_to(pair[1]) - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn sub_pixel_segment_stamps_only_end_point() {
        let end = Point::new(10.4, 10.3);
        let points = interpolate(Point::new(10.0, 10.0), end);
        assert_eq!(points, vec![end]);
    }

    #[test]
    fn short_segment_still_stamps_both_ends() {
        // 1.5px: floor(0.75) = 0, clamped to one step.
        let start = Point::new(0.0, 0.0);
        let end = Point::new(1.5, 0.0);
        assert_eq!(interpolate(start, end), vec![start, end]);
    }

    #[test]
    fn diagonal_segment_ends_exactly_on_target() {
        let start = Point::new(3.0, 7.0);
        let end = Point::new(41.3, -12.9);
        let points = interpolate(start, end);
        assert_eq!(points.first(), Some(&start));
        assert_eq!(points.last(), Some(&end));
    }

    #[test]
    fn huge_segments_are_sampled_sparsely() {
        let points = interpolate(Point::new(0.0, 0.0), Point::new(1e30, 0.0));
        assert_eq!(points.len(), MAX_SEGMENT_STEPS + 1);
        assert_eq!(points.last(), Some(&Point::new(1e30, 0.0)));
    }

    #[test]
    fn clipping_keeps_segments_inside_the_disc() {
        let center = Point::new(0.0, 0.0);
        let (a, b) = (Point::new(-3.0, 1.0), Point::new(4.0, -2.0));
        assert_eq!(clip_to_disc(a, b, center, 10.0), Some((a, b)));
    }

    #[test]
    fn clipping_trims_to_the_crossing_points() {
        let center = Point::new(0.0, 0.0);
        let (from, to) =
            clip_to_disc(Point::new(-100.0, 0.0), Point::new(5.0, 0.0), center, 10.0).unwrap();
        assert!((from.x + 10.0).abs() < 1e-9 && from.y == 0.0);
        assert_eq!(to, Point::new(5.0, 0.0));

        let (from, to) =
            clip_to_disc(Point::new(-50.0, 6.0), Point::new(50.0, 6.0), center, 10.0).unwrap();
        assert!((from.x + 8.0).abs() < 1e-9);
        assert!((to.x - 8.0).abs() < 1e-9);
    }

    #[test]
    fn clipping_drops_segments_that_miss_the_disc() {
        let center = Point::new(0.0, 0.0);
        let miss = clip_to_disc(Point::new(-50.0, 20.0), Point::new(50.0, 20.0), center, 10.0);
        assert!(miss.is_none());
        // Pointing away from the disc.
        let away = clip_to_disc(Point::new(20.0, 0.0), Point::new(60.0, 0.0), center, 10.0);
        assert!(away.is_none());
        let nan = clip_to_disc(Point::new(f64::NAN, 0.0), Point::new(1.0, 0.0), center, 10.0);
        assert!(nan.is_none());
    }

    #[test]
    fn far_off_segment_stamps_only_the_visible_part() {
        let mut surface = Surface::new(100, 100);
        let symmetry = SymmetryConfig {
            segments: 3,
            mirror_mode: true,
            rotation_offset: 0.0,
        };
        let damage = stamp_segment(
            &mut surface,
            Point::new(1e30, 50.0),
            Point::new(70.0, 50.0),
            &symmetry,
            &BrushConfig::default(),
        );
        assert!(damage.is_some());
        assert!(surface.pixel(70, 50).unwrap()[3] > 0);

        let offscreen = stamp_segment(
            &mut surface,
            Point::new(1e12, 1e12),
            Point::new(2e12, 1e12),
            &symmetry,
            &BrushConfig::default(),
        );
        assert!(offscreen.is_none());
    }

    #[test]
    fn shared_context_returns_to_source_over_after_neon_segment() {
        let surface = Surface::new(100, 100);
        let ctx = surface.context().unwrap();
        let brush = BrushConfig {
            effect_mode: EffectMode::Neon,
            ..BrushConfig::default()
        };

        let damage = stamp_segment_with(
            &ctx,
            surface.center(),
            Point::new(60.0, 50.0),
            Point::new(90.0, 50.0),
            &SymmetryConfig::default(),
            &brush,
        );
        assert!(damage.is_some());
        assert_eq!(ctx.operator(), cairo::Operator::Over);
    }

    #[test]
    fn stamp_segment_damages_along_the_stroke() {
        let mut surface = Surface::new(100, 100);
        let symmetry = SymmetryConfig {
            segments: 3,
            mirror_mode: false,
            rotation_offset: 0.0,
        };
        let damage = stamp_segment(
            &mut surface,
            Point::new(60.0, 50.0),
            Point::new(90.0, 50.0),
            &symmetry,
            &BrushConfig::default(),
        )
        .expect("segment should damage the surface");
        assert!(damage.x + damage.width >= 95);
        assert!(damage.width <= 100 && damage.height <= 100);
    }
}
