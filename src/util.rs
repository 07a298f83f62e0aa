//! Geometry shared by the renderer and input layers: canvas-space [`Point`]s
//! and the integer [`Rect`]s that damage tracking works in.

// ============================================================================
// Points
// ============================================================================

/// A position in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Pixel-aligned damage rectangle; `x..x + width` by `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());
        Rect {
            x: min_x,
            y: min_y,
            width: max_x.saturating_sub(min_x),
            height: max_y.saturating_sub(min_y),
        }
    }

    /// Whether the two rectangles share any area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Clips the rectangle to `0..width` x `0..height`.
    ///
    /// Returns `None` when nothing of the rectangle is left on the surface.
    pub fn clamp_to_bounds(self, width: i32, height: i32) -> Option<Rect> {
        let min_x = self.x.clamp(0, width);
        let min_y = self.y.clamp(0, height);
        let max_x = self.right().clamp(0, width);
        let max_y = self.bottom().clamp(0, height);
        Rect::from_min_max(min_x, min_y, max_x, max_y)
    }

    // Edges saturate so rects spanning the whole i32 range stay well-formed.
    fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Largest magnitude a damage coordinate is allowed to take.
const COORD_LIMIT: f64 = (1 << 28) as f64;

/// Bounding box of a disc of `radius` centered at `(cx, cy)`, rounded outwards.
///
/// Edges are clamped to `±COORD_LIMIT`, so unions of any two boxes fit in
/// `i32`. A disc entirely past the limit (or with a NaN center) has no box.
pub fn disc_bounds(cx: f64, cy: f64, radius: f64) -> Option<Rect> {
    let radius = radius.max(0.5);
    let edge = |value: f64| value.clamp(-COORD_LIMIT, COORD_LIMIT) as i32;
    Rect::from_min_max(
        edge((cx - radius).floor()),
        edge((cy - radius).floor()),
        edge((cx + radius).ceil()),
        edge((cy + radius).ceil()),
    )
}
