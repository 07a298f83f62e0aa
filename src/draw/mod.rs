//! Kaleidoscope rendering core (Cairo-based).
//!
//! This module defines the symmetry rendering pipeline:
//! - [`color_for`]: maps an offset from the canvas center and a [`ColorScheme`] to a [`Color`]
//! - [`effect_params_for`]: maps an [`EffectMode`] to halo and blend parameters
//! - [`stamp_point`]: stamps every rotated/mirrored copy of a dab
//! - [`stamp_segment`]: resamples a pointer segment and stamps each sample
//! - [`Surface`]: the raster canvas the dabs land on

pub mod color;
pub mod dirty;
pub mod effect;
pub mod palette;
pub mod stroke;
pub mod surface;
pub mod symmetry;

// Re-export commonly used types at module level
pub use color::{BLACK, Color, Hsla, WHITE};
pub use dirty::DirtyTracker;
pub use effect::{BlendMode, EffectMode, EffectParams, effect_params_for, reset_effects};
pub use palette::{ColorScheme, color_for};
pub use stroke::{interpolate, stamp_segment};
pub use surface::Surface;
pub use symmetry::{
    BrushConfig, Dab, MAX_SEGMENTS, MIN_SEGMENTS, SymmetryConfig, stamp_point, symmetric_dabs,
};
