//! Device-level pointer events and client-to-canvas coordinate mapping.

use crate::util::Point;

/// Position of the canvas inside the client (window) coordinate space.
///
/// Device events report client coordinates; subtracting the canvas origin
/// yields surface pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
}

impl CanvasRect {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Maps a client-space position onto the canvas.
    pub fn to_canvas(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }
}

/// Mouse events in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    /// Button pressed over the canvas
    Down { x: f64, y: f64 },
    /// Pointer moved (with or without a button held)
    Move { x: f64, y: f64 },
    /// Button released
    Up,
    /// Pointer left the canvas
    Leave,
}

/// Lifecycle phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Touch event carrying every active touch point in client coordinates.
///
/// Only the first touch draws; multi-touch gestures are not interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<(f64, f64)>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: Vec<(f64, f64)>) -> Self {
        Self { phase, touches }
    }

    /// The touch that drives drawing.
    pub fn primary(&self) -> Option<(f64, f64)> {
        self.touches.first().copied()
    }
}
