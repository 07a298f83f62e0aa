//! Input handling and drawing session state.
//!
//! This module translates mouse and touch events into canvas-space stroke
//! lifecycles and owns the surface together with the user's tool settings.

pub mod events;
pub mod session;
pub mod state;

// Re-export commonly used types at module level
pub use events::{CanvasRect, MouseEvent, TouchEvent, TouchPhase};
pub use session::{MouseSession, PointerSession, StrokeTracker, TouchSession};
pub use state::KaleidoscopeState;
