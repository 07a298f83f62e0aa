//! Drawing session state: the surface plus the settings the user controls.

use crate::animation::{self, AutoRotateTask, RotationState, SharedRotation};
use crate::config::Config;
use crate::draw::{self, BrushConfig, DirtyTracker, Surface, SymmetryConfig};
use crate::util::{Point, Rect};
use log::{debug, info};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Owns the drawing surface and the current tool settings.
///
/// Settings are plain fields the host mutates between strokes. Every render
/// call snapshots them into immutable [`SymmetryConfig`] / [`BrushConfig`]
/// values, so the renderer never reads ambient state.
pub struct KaleidoscopeState {
    surface: Surface,
    /// Number of rotational copies (3-24)
    pub segments: u32,
    /// Reflect every copy through the center
    pub mirror_mode: bool,
    /// Brush size, opacity, palette and effect
    pub brush: BrushConfig,
    /// Whether the rotation offset applies to new dabs
    pub auto_rotate: bool,
    /// Auto-rotate speed multiplier (0.1-5.0)
    pub rotate_speed: f64,
    /// Cadence of the auto-rotate task
    pub tick_interval: Duration,
    rotation: SharedRotation,
    dirty_tracker: DirtyTracker,
}

impl KaleidoscopeState {
    /// Creates a state with default settings and a blank surface.
    pub fn new(width: i32, height: i32) -> Self {
        let symmetry = SymmetryConfig::default();
        Self {
            surface: Surface::new(width, height),
            segments: symmetry.segments,
            mirror_mode: symmetry.mirror_mode,
            brush: BrushConfig::default(),
            auto_rotate: false,
            rotate_speed: 1.0,
            tick_interval: animation::DEFAULT_TICK_INTERVAL,
            rotation: Arc::new(Mutex::new(RotationState::new())),
            dirty_tracker: DirtyTracker::new(),
        }
    }

    /// Creates a state from loaded (and already clamped) configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(config.canvas.width, config.canvas.height);
        state.segments = config.pattern.segments;
        state.mirror_mode = config.pattern.mirror_mode;
        state.brush = config.paint.brush_config();
        state.auto_rotate = config.animation.auto_rotate;
        state.rotate_speed = config.animation.rotate_speed;
        state.tick_interval = Duration::from_millis(config.animation.tick_interval_ms);
        info!(
            "Canvas {}x{}, {} segments, mirror {}, scheme {}, effect {}",
            state.surface.width(),
            state.surface.height(),
            state.segments,
            state.mirror_mode,
            state.brush.color_scheme,
            state.brush.effect_mode
        );
        state
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Rotation applied to new dabs: the animation angle when auto-rotate is
    /// on, otherwise zero.
    pub fn rotation_offset(&self) -> f64 {
        if self.auto_rotate {
            animation::current_offset(&self.rotation)
        } else {
            0.0
        }
    }

    /// Snapshot of the symmetry settings for one render call.
    pub fn symmetry_config(&self) -> SymmetryConfig {
        SymmetryConfig {
            segments: self.segments,
            mirror_mode: self.mirror_mode,
            rotation_offset: self.rotation_offset(),
        }
    }

    /// Stamps every symmetric copy of a dab at `point`.
    pub fn stamp_point(&mut self, point: Point) {
        let symmetry = self.symmetry_config();
        let damage = draw::stamp_point(&mut self.surface, point, &symmetry, &self.brush);
        self.dirty_tracker.mark_optional_rect(damage);
    }

    /// Stamps a continuous segment from `from` to `to`.
    pub fn stamp_segment(&mut self, from: Point, to: Point) {
        let symmetry = self.symmetry_config();
        let damage = draw::stamp_segment(&mut self.surface, from, to, &symmetry, &self.brush);
        self.dirty_tracker.mark_optional_rect(damage);
    }

    /// Advances the animation by `ticks` steps, if auto-rotate is on.
    ///
    /// Used by hosts that drive the animation from their own frame clock
    /// instead of [`KaleidoscopeState::start_auto_rotate`].
    pub fn advance_rotation(&mut self, ticks: u32) {
        if !self.auto_rotate || ticks == 0 {
            return;
        }
        let mut rotation = self
            .rotation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rotation.advance(ticks, self.rotate_speed);
        debug!("Rotation offset now {:.4} rad", rotation.offset());
    }

    /// Starts the background auto-rotate task when auto-rotate is on.
    ///
    /// The returned task stops when cancelled or dropped.
    pub fn start_auto_rotate(&self) -> std::io::Result<Option<AutoRotateTask>> {
        if !self.auto_rotate {
            return Ok(None);
        }
        AutoRotateTask::spawn(
            Arc::clone(&self.rotation),
            self.rotate_speed,
            self.tick_interval,
        )
        .map(Some)
    }

    /// Blanks the surface; settings are kept.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.dirty_tracker.mark_full();
        info!("Canvas cleared");
    }

    /// Reallocates the surface at a new size. Destroys the drawing.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.surface.resize(width, height);
        self.dirty_tracker.mark_full();
        info!("Canvas resized to {}x{}", width, height);
    }

    /// Drains the areas changed since the last call.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.dirty_tracker
            .take_regions(self.surface.width(), self.surface.height())
    }
}
