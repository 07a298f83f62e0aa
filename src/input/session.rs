//! Pointer sessions: one stroke lifecycle shared by every input modality.

use super::events::{CanvasRect, MouseEvent, TouchEvent, TouchPhase};
use super::state::KaleidoscopeState;
use crate::util::Point;
use log::debug;

/// Stroke bookkeeping: whether a stroke is active and where it last was.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StrokeTracker {
    last_point: Option<Point>,
}

impl StrokeTracker {
    pub fn is_drawing(&self) -> bool {
        self.last_point.is_some()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    fn begin(&mut self, point: Point) {
        self.last_point = Some(point);
    }

    /// Moves the stroke to `point`, returning where it was.
    ///
    /// Returns `None` when no stroke is active.
    fn advance(&mut self, point: Point) -> Option<Point> {
        let previous = self.last_point?;
        self.last_point = Some(point);
        Some(previous)
    }

    fn finish(&mut self) -> bool {
        self.last_point.take().is_some()
    }
}

/// Start/move/end stroke lifecycle in canvas coordinates.
///
/// Implemented per input modality; the modality only decides which device
/// events map to which lifecycle call.
pub trait PointerSession {
    fn tracker(&self) -> &StrokeTracker;

    fn tracker_mut(&mut self) -> &mut StrokeTracker;

    fn is_drawing(&self) -> bool {
        self.tracker().is_drawing()
    }

    /// Begins a stroke with a single stamped point.
    fn start(&mut self, state: &mut KaleidoscopeState, point: Point) {
        state.stamp_point(point);
        self.tracker_mut().begin(point);
    }

    /// Extends the active stroke to `point`; ignored when not drawing.
    fn move_to(&mut self, state: &mut KaleidoscopeState, point: Point) {
        if let Some(previous) = self.tracker_mut().advance(point) {
            state.stamp_segment(previous, point);
        }
    }

    /// Ends the active stroke, if any.
    fn end(&mut self) {
        self.tracker_mut().finish();
    }
}

/// Mouse modality.
#[derive(Debug, Default)]
pub struct MouseSession {
    tracker: StrokeTracker,
    rect: CanvasRect,
}

impl MouseSession {
    pub fn new(rect: CanvasRect) -> Self {
        Self {
            tracker: StrokeTracker::default(),
            rect,
        }
    }

    /// Updates the canvas origin, e.g. after the host layout changed.
    pub fn set_canvas_rect(&mut self, rect: CanvasRect) {
        self.rect = rect;
    }

    pub fn handle(&mut self, state: &mut KaleidoscopeState, event: MouseEvent) {
        match event {
            MouseEvent::Down { x, y } => {
                let point = self.rect.to_canvas(x, y);
                debug!("Mouse stroke started at ({:.1}, {:.1})", point.x, point.y);
                self.start(state, point);
            }
            MouseEvent::Move { x, y } => {
                let point = self.rect.to_canvas(x, y);
                self.move_to(state, point);
            }
            MouseEvent::Up | MouseEvent::Leave => {
                if self.is_drawing() {
                    debug!("Mouse stroke ended");
                }
                self.end();
            }
        }
    }
}

impl PointerSession for MouseSession {
    fn tracker(&self) -> &StrokeTracker {
        &self.tracker
    }

    fn tracker_mut(&mut self) -> &mut StrokeTracker {
        &mut self.tracker
    }
}

/// Touch modality; follows the first touch point only.
#[derive(Debug, Default)]
pub struct TouchSession {
    tracker: StrokeTracker,
    rect: CanvasRect,
}

impl TouchSession {
    pub fn new(rect: CanvasRect) -> Self {
        Self {
            tracker: StrokeTracker::default(),
            rect,
        }
    }

    pub fn set_canvas_rect(&mut self, rect: CanvasRect) {
        self.rect = rect;
    }

    pub fn handle(&mut self, state: &mut KaleidoscopeState, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Start => {
                if let Some((x, y)) = event.primary() {
                    let point = self.rect.to_canvas(x, y);
                    debug!("Touch stroke started at ({:.1}, {:.1})", point.x, point.y);
                    self.start(state, point);
                }
            }
            TouchPhase::Move => {
                if let Some((x, y)) = event.primary() {
                    let point = self.rect.to_canvas(x, y);
                    self.move_to(state, point);
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if self.is_drawing() {
                    debug!("Touch stroke ended");
                }
                self.end();
            }
        }
    }
}

impl PointerSession for TouchSession {
    fn tracker(&self) -> &StrokeTracker {
        &self.tracker
    }

    fn tracker_mut(&mut self) -> &mut StrokeTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_lifecycle() {
        let mut tracker = StrokeTracker::default();
        assert!(!tracker.is_drawing());
        assert_eq!(tracker.advance(Point::new(1.0, 1.0)), None);

        tracker.begin(Point::new(0.0, 0.0));
        assert_eq!(tracker.advance(Point::new(5.0, 0.0)), Some(Point::new(0.0, 0.0)));
        assert_eq!(tracker.last_point(), Some(Point::new(5.0, 0.0)));

        assert!(tracker.finish());
        assert!(!tracker.finish());
    }

    #[test]
    fn mouse_move_without_press_draws_nothing() {
        let mut state = KaleidoscopeState::new(100, 100);
        let mut mouse = MouseSession::default();
        mouse.handle(&mut state, MouseEvent::Move { x: 80.0, y: 50.0 });
        assert!(state.surface_mut().is_blank());
    }

    #[test]
    fn mouse_press_drag_release() {
        let mut state = KaleidoscopeState::new(100, 100);
        let mut mouse = MouseSession::new(CanvasRect::new(10.0, 10.0));

        mouse.handle(&mut state, MouseEvent::Down { x: 90.0, y: 60.0 });
        assert!(mouse.is_drawing());
        assert_eq!(mouse.tracker().last_point(), Some(Point::new(80.0, 50.0)));

        mouse.handle(&mut state, MouseEvent::Move { x: 90.0, y: 80.0 });
        assert_eq!(mouse.tracker().last_point(), Some(Point::new(80.0, 70.0)));

        mouse.handle(&mut state, MouseEvent::Leave);
        assert!(!mouse.is_drawing());
        assert!(!state.surface_mut().is_blank());
    }

    #[test]
    fn touch_follows_first_touch_and_ignores_empty_start() {
        let mut state = KaleidoscopeState::new(100, 100);
        let mut touch = TouchSession::default();

        touch.handle(&mut state, &TouchEvent::new(TouchPhase::Start, vec![]));
        assert!(!touch.is_drawing());

        touch.handle(
            &mut state,
            &TouchEvent::new(TouchPhase::Start, vec![(70.0, 50.0), (10.0, 10.0)]),
        );
        assert_eq!(touch.tracker().last_point(), Some(Point::new(70.0, 50.0)));

        touch.handle(&mut state, &TouchEvent::new(TouchPhase::Cancel, vec![]));
        assert!(!touch.is_drawing());
    }
}
