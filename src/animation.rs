//! Auto-rotate animation driver.
//!
//! The rotation offset advances by a fixed step per tick. [`AutoRotateTask`]
//! drives ticks on a background thread at a fixed cadence; the renderer never
//! sees the task and only reads the resulting offset.

use log::{debug, info};
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Radians advanced per tick at `rotate_speed = 1.0`.
pub const ROTATION_STEP: f64 = 0.005;

/// Slowest supported rotate speed multiplier.
pub const MIN_ROTATE_SPEED: f64 = 0.1;
/// Fastest supported rotate speed multiplier.
pub const MAX_ROTATE_SPEED: f64 = 5.0;

/// Default tick cadence, roughly one display refresh at 60 Hz.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Current auto-rotate angle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    offset: f64,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset in radians, always in `[0, 2π)`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advances one tick of `ROTATION_STEP * rotate_speed`, wrapping at 2π.
    pub fn tick(&mut self, rotate_speed: f64) {
        self.offset = (self.offset + ROTATION_STEP * rotate_speed).rem_euclid(TAU);
    }

    /// Advances `count` ticks in one step.
    pub fn advance(&mut self, count: u32, rotate_speed: f64) {
        let delta = f64::from(count) * ROTATION_STEP * rotate_speed;
        self.offset = (self.offset + delta).rem_euclid(TAU);
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

/// Rotation state shared between the animation thread and the renderer.
pub type SharedRotation = Arc<Mutex<RotationState>>;

/// Reads the current offset, recovering from a poisoned lock.
pub fn current_offset(rotation: &SharedRotation) -> f64 {
    rotation
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .offset()
}

/// Periodic task ticking a shared rotation until cancelled.
///
/// Dropping the task cancels it and waits for the thread to exit.
pub struct AutoRotateTask {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl AutoRotateTask {
    /// Starts ticking `rotation` every `interval`.
    pub fn spawn(
        rotation: SharedRotation,
        rotate_speed: f64,
        interval: Duration,
    ) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let rotate_speed = rotate_speed.clamp(MIN_ROTATE_SPEED, MAX_ROTATE_SPEED);

        let handle = thread::Builder::new()
            .name("mirramaze-rotate".into())
            .spawn(move || {
                debug!(
                    "Auto-rotate running (speed {:.2}, every {:?})",
                    rotate_speed, interval
                );
                while !thread_stop.load(Ordering::Acquire) {
                    thread::sleep(interval);
                    if thread_stop.load(Ordering::Acquire) {
                        break;
                    }
                    rotation
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner())
                        .tick(rotate_speed);
                }
                debug!("Auto-rotate stopped");
            })?;

        info!("Auto-rotate started");
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stops the task and waits for the final tick to finish.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for AutoRotateTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}
