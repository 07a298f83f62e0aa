//! Recorded pointer input, replayed onto a drawing session.
//!
//! A script is a JSON document listing device events in client coordinates,
//! plus animation ticks and setting changes between strokes:
//!
//! ```json
//! {
//!   "canvas_origin": [0, 0],
//!   "events": [
//!     { "kind": "configure", "segments": 6, "color_scheme": "ocean" },
//!     { "kind": "mouse_down", "x": 400, "y": 300 },
//!     { "kind": "mouse_move", "x": 420, "y": 310 },
//!     { "kind": "mouse_up" },
//!     { "kind": "tick", "count": 120 },
//!     { "kind": "touch_start", "touches": [[350, 250]] },
//!     { "kind": "touch_end" }
//!   ]
//! }
//! ```
//!
//! Scripts are input only; the drawing itself is never serialized back.

use crate::draw::{ColorScheme, EffectMode};
use crate::input::{
    CanvasRect, KaleidoscopeState, MouseEvent, MouseSession, PointerSession, TouchEvent,
    TouchPhase, TouchSession,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Recorded input session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrokeScript {
    /// Client-space position of the canvas' top-left corner
    #[serde(default)]
    pub canvas_origin: [f64; 2],

    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    MouseDown { x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    MouseUp,
    MouseLeave,
    TouchStart { touches: Vec<[f64; 2]> },
    TouchMove { touches: Vec<[f64; 2]> },
    TouchEnd,
    TouchCancel,
    /// Advance the auto-rotate animation
    Tick { count: u32 },
    /// Change settings; only applied while no stroke is in progress
    Configure(SettingsChange),
    /// Blank the surface
    Clear,
}

/// Settings changed by a [`ScriptEvent::Configure`] event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsChange {
    pub segments: Option<u32>,
    pub mirror_mode: Option<bool>,
    pub brush_size: Option<f64>,
    pub opacity: Option<f64>,
    pub color_scheme: Option<String>,
    pub effect_mode: Option<String>,
    pub auto_rotate: Option<bool>,
    pub rotate_speed: Option<f64>,
}

impl SettingsChange {
    fn apply(&self, state: &mut KaleidoscopeState) {
        if let Some(segments) = self.segments {
            state.segments = segments.clamp(crate::draw::MIN_SEGMENTS, crate::draw::MAX_SEGMENTS);
        }
        if let Some(mirror_mode) = self.mirror_mode {
            state.mirror_mode = mirror_mode;
        }
        if let Some(size) = self.brush_size {
            state.brush.size = size.clamp(1.0, 20.0);
        }
        if let Some(opacity) = self.opacity {
            state.brush.opacity = opacity.clamp(10.0, 100.0);
        }
        if let Some(name) = &self.color_scheme {
            state.brush.color_scheme = ColorScheme::from_name(name);
        }
        if let Some(name) = &self.effect_mode {
            state.brush.effect_mode = EffectMode::from_name(name);
        }
        if let Some(auto_rotate) = self.auto_rotate {
            state.auto_rotate = auto_rotate;
        }
        if let Some(speed) = self.rotate_speed {
            state.rotate_speed = speed.clamp(
                crate::animation::MIN_ROTATE_SPEED,
                crate::animation::MAX_ROTATE_SPEED,
            );
        }
    }
}

/// Counters reported after a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub strokes: usize,
    /// Configure events dropped because a stroke was in progress
    pub skipped_settings: usize,
}

impl StrokeScript {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path)?;
        let script = Self::parse(&contents)?;
        debug!(
            "Loaded {} events from {}",
            script.events.len(),
            path.display()
        );
        Ok(script)
    }

    pub fn parse(contents: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Feeds every event through mouse and touch sessions onto `state`.
    ///
    /// Strokes still open at the end of the script are ended.
    pub fn replay(&self, state: &mut KaleidoscopeState) -> ReplaySummary {
        let rect = CanvasRect::new(self.canvas_origin[0], self.canvas_origin[1]);
        let mut mouse = MouseSession::new(rect);
        let mut touch = TouchSession::new(rect);
        let mut summary = ReplaySummary::default();

        for event in &self.events {
            summary.events += 1;
            match event {
                ScriptEvent::MouseDown { x, y } => {
                    summary.strokes += 1;
                    mouse.handle(state, MouseEvent::Down { x: *x, y: *y });
                }
                ScriptEvent::MouseMove { x, y } => {
                    mouse.handle(state, MouseEvent::Move { x: *x, y: *y });
                }
                ScriptEvent::MouseUp => mouse.handle(state, MouseEvent::Up),
                ScriptEvent::MouseLeave => mouse.handle(state, MouseEvent::Leave),
                ScriptEvent::TouchStart { touches } => {
                    if !touches.is_empty() {
                        summary.strokes += 1;
                    }
                    touch.handle(state, &touch_event(TouchPhase::Start, touches));
                }
                ScriptEvent::TouchMove { touches } => {
                    touch.handle(state, &touch_event(TouchPhase::Move, touches));
                }
                ScriptEvent::TouchEnd => {
                    touch.handle(state, &touch_event(TouchPhase::End, &[]));
                }
                ScriptEvent::TouchCancel => {
                    touch.handle(state, &touch_event(TouchPhase::Cancel, &[]));
                }
                ScriptEvent::Tick { count } => state.advance_rotation(*count),
                ScriptEvent::Configure(change) => {
                    if mouse.is_drawing() || touch.is_drawing() {
                        warn!("Ignoring settings change during an active stroke");
                        summary.skipped_settings += 1;
                    } else {
                        change.apply(state);
                    }
                }
                ScriptEvent::Clear => state.clear(),
            }
        }

        mouse.end();
        touch.end();

        info!(
            "Replayed {} events ({} strokes)",
            summary.events, summary.strokes
        );
        summary
    }
}

fn touch_event(phase: TouchPhase, touches: &[[f64; 2]]) -> TouchEvent {
    TouchEvent::new(phase, touches.iter().map(|[x, y]| (*x, *y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_events() {
        let script = StrokeScript::parse(
            r#"{
                "canvas_origin": [10, 20],
                "events": [
                    {"kind": "configure", "segments": 6, "effect_mode": "neon"},
                    {"kind": "mouse_down", "x": 1, "y": 2},
                    {"kind": "mouse_up"},
                    {"kind": "touch_start", "touches": [[3, 4]]},
                    {"kind": "tick", "count": 5},
                    {"kind": "clear"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(script.canvas_origin, [10.0, 20.0]);
        assert_eq!(script.events.len(), 6);
        assert_eq!(
            script.events[0],
            ScriptEvent::Configure(SettingsChange {
                segments: Some(6),
                effect_mode: Some("neon".into()),
                ..SettingsChange::default()
            })
        );
        assert_eq!(script.events[1], ScriptEvent::MouseDown { x: 1.0, y: 2.0 });
        assert_eq!(script.events[4], ScriptEvent::Tick { count: 5 });
    }

    #[test]
    fn rejects_unknown_event_kinds() {
        let err = StrokeScript::parse(r#"{"events": [{"kind": "scribble"}]}"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn replay_draws_and_counts_strokes() {
        let script = StrokeScript {
            canvas_origin: [0.0, 0.0],
            events: vec![
                ScriptEvent::MouseDown { x: 70.0, y: 50.0 },
                ScriptEvent::MouseMove { x: 80.0, y: 60.0 },
                ScriptEvent::MouseUp,
                ScriptEvent::TouchStart {
                    touches: vec![[30.0, 30.0]],
                },
                ScriptEvent::TouchEnd,
            ],
        };
        let mut state = KaleidoscopeState::new(100, 100);

        let summary = script.replay(&mut state);
        assert_eq!(summary.events, 5);
        assert_eq!(summary.strokes, 2);
        assert!(!state.surface_mut().is_blank());
    }

    #[test]
    fn settings_change_waits_for_stroke_end() {
        let script = StrokeScript {
            canvas_origin: [0.0, 0.0],
            events: vec![
                ScriptEvent::MouseDown { x: 70.0, y: 50.0 },
                ScriptEvent::Configure(SettingsChange {
                    segments: Some(5),
                    ..SettingsChange::default()
                }),
                ScriptEvent::MouseUp,
                ScriptEvent::Configure(SettingsChange {
                    segments: Some(99),
                    color_scheme: Some("fire".into()),
                    ..SettingsChange::default()
                }),
            ],
        };
        let mut state = KaleidoscopeState::new(100, 100);

        let summary = script.replay(&mut state);
        assert_eq!(summary.skipped_settings, 1);
        assert_eq!(state.segments, 24);
        assert_eq!(state.brush.color_scheme, ColorScheme::Fire);
    }

    #[test]
    fn far_off_coordinates_replay_without_panicking() {
        let script = StrokeScript::parse(
            r#"{
                "events": [
                    {"kind": "mouse_down", "x": 1e12, "y": 50},
                    {"kind": "mouse_move", "x": 1e30, "y": 50},
                    {"kind": "mouse_move", "x": 70, "y": 50},
                    {"kind": "mouse_up"},
                    {"kind": "touch_start", "touches": [[-1e300, 1e300]]},
                    {"kind": "touch_move", "touches": [[1e300, -1e300]]},
                    {"kind": "touch_end"}
                ]
            }"#,
        )
        .unwrap();
        let mut state = KaleidoscopeState::new(100, 100);

        let summary = script.replay(&mut state);
        assert_eq!(summary.events, 7);
        assert_eq!(summary.strokes, 2);
        // Only the stretch of the first stroke that reaches the canvas paints.
        assert!(state.surface_mut().pixel(70, 50).unwrap()[3] > 0);
        for rect in state.take_damage() {
            assert!(rect.x >= 0 && rect.x + rect.width <= 100);
        }
    }

    #[test]
    fn huge_tick_counts_replay_quickly() {
        let script = StrokeScript::parse(
            r#"{"events": [
                {"kind": "configure", "auto_rotate": true, "rotate_speed": 5.0},
                {"kind": "tick", "count": 4294967295}
            ]}"#,
        )
        .unwrap();
        let mut state = KaleidoscopeState::new(10, 10);

        let started = std::time::Instant::now();
        script.replay(&mut state);
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert!(state.rotation_offset() < std::f64::consts::TAU);
    }

    #[test]
    fn clear_event_blanks_surface() {
        let script = StrokeScript {
            canvas_origin: [0.0, 0.0],
            events: vec![
                ScriptEvent::MouseDown { x: 70.0, y: 50.0 },
                ScriptEvent::MouseUp,
                ScriptEvent::Clear,
            ],
        };
        let mut state = KaleidoscopeState::new(100, 100);
        script.replay(&mut state);
        assert!(state.surface_mut().is_blank());
    }
}
