//! Saving the drawing surface as a PNG file.

use crate::draw::{Color, Surface};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name every export is written under.
pub const EXPORT_FILE_NAME: &str = "mirramaze-kaleidoscope.png";

/// Errors that can occur while exporting the surface.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Surface has no pixels to export")]
    EmptySurface,

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Creates `directory` (and parents) when missing and returns its absolute
/// form where it can be resolved.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(directory)?;
    Ok(fs::canonicalize(directory).unwrap_or_else(|_| directory.to_path_buf()))
}

/// Writes the surface to `<directory>/mirramaze-kaleidoscope.png`.
///
/// An existing export in the same directory is overwritten. With a
/// `background`, the drawing is flattened over that color.
pub fn save_png(
    surface: &Surface,
    directory: &Path,
    background: Option<Color>,
) -> Result<PathBuf, ExportError> {
    let image_data = surface.to_png_bytes(background)?;
    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(EXPORT_FILE_NAME);

    log::info!(
        "Saving kaleidoscope to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );
    fs::write(&file_path, &image_data)?;

    Ok(file_path)
}

/// Resolves a leading `~` against the home directory.
///
/// Paths without one, or hosts without a home directory, pass through as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix("~/") {
        Some(rest) => rest,
        None if path == "~" => "",
        None => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
