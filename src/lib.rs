//! Library exports for the mirramaze kaleidoscope renderer.
//!
//! The rendering core lives in [`draw`]; [`input`] turns pointer events into
//! strokes on a [`input::KaleidoscopeState`], [`animation`] drives the
//! auto-rotate angle, and [`export`] writes the surface out as PNG. Exposed as
//! a library so hosts with their own windowing can reuse the renderer and
//! configuration handling.

pub mod animation;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
