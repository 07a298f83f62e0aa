//! Raster drawing surface backed by a Cairo image surface.

use super::color::Color;
use crate::export::ExportError;
use crate::util::Point;
use log::{debug, warn};

/// The mutable raster canvas dabs are stamped onto.
///
/// Content persists across draw calls until [`Surface::clear`] or
/// [`Surface::resize`]. A surface with zero area (or whose pixel buffer could
/// not be allocated) has no backing image; drawing onto it is a silent no-op
/// and exporting it fails with [`ExportError::EmptySurface`].
#[derive(Debug)]
pub struct Surface {
    image: Option<cairo::ImageSurface>,
    width: i32,
    height: i32,
}

impl Surface {
    /// Allocates a transparent ARGB32 surface.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let image = if width > 0 && height > 0 {
            cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
                .map_err(|err| warn!("Failed to allocate {}x{} surface: {}", width, height, err))
                .ok()
        } else {
            None
        };

        Self {
            image,
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the surface has backing pixels to draw on.
    pub fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    /// Center of the canvas; the symmetry pivot.
    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Creates a drawing context, or `None` for a surface without pixels.
    pub fn context(&self) -> Option<cairo::Context> {
        let image = self.image.as_ref()?;
        cairo::Context::new(image)
            .map_err(|err| warn!("Failed to create drawing context: {}", err))
            .ok()
    }

    /// Blanks every pixel. Configuration held elsewhere is untouched.
    pub fn clear(&mut self) {
        if let Some(ctx) = self.context() {
            ctx.set_operator(cairo::Operator::Clear);
            let _ = ctx.paint();
            debug!("Cleared {}x{} surface", self.width, self.height);
        }
    }

    /// Replaces the surface with a blank one of the new size.
    ///
    /// Destructive: existing content is discarded, so this must not run while
    /// a stroke is in progress.
    pub fn resize(&mut self, width: i32, height: i32) {
        *self = Surface::new(width, height);
    }

    /// Premultiplied `[r, g, b, a]` bytes of the pixel at `(x, y)`.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let image = self.image.as_mut()?;
        image.flush();
        let stride = image.stride() as usize;
        let data = image.data().ok()?;

        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        let argb = u32::from_ne_bytes(bytes);
        Some([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ])
    }

    /// True when no pixel has been painted.
    pub fn is_blank(&mut self) -> bool {
        let Some(image) = self.image.as_mut() else {
            return true;
        };
        image.flush();
        image
            .data()
            .map(|data| data.iter().all(|byte| *byte == 0))
            .unwrap_or(true)
    }

    /// Encodes the surface as PNG.
    ///
    /// With a `background`, the drawing is flattened over that color first;
    /// otherwise unpainted pixels stay transparent.
    pub fn to_png_bytes(&self, background: Option<Color>) -> Result<Vec<u8>, ExportError> {
        let image = self.image.as_ref().ok_or(ExportError::EmptySurface)?;
        let mut bytes = Vec::new();

        match background {
            None => image.write_to_png(&mut bytes)?,
            Some(color) => {
                let flattened =
                    cairo::ImageSurface::create(cairo::Format::ARgb32, self.width, self.height)?;
                {
                    let ctx = cairo::Context::new(&flattened)?;
                    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
                    ctx.paint()?;
                    ctx.set_source_surface(image, 0.0, 0.0)?;
                    ctx.paint()?;
                }
                flattened.write_to_png(&mut bytes)?;
            }
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLACK;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn paint_square(surface: &Surface) {
        let ctx = surface.context().unwrap();
        ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
        ctx.rectangle(2.0, 2.0, 4.0, 4.0);
        ctx.fill().unwrap();
    }

    #[test]
    fn new_surface_is_blank_and_centered() {
        let mut surface = Surface::new(600, 400);
        assert!(surface.is_ready());
        assert!(surface.is_blank());
        assert_eq!(surface.center(), Point::new(300.0, 200.0));
    }

    #[test]
    fn clear_blanks_painted_pixels() {
        let mut surface = Surface::new(10, 10);
        paint_square(&surface);
        assert_eq!(surface.pixel(3, 3), Some([255, 0, 0, 255]));

        surface.clear();
        assert!(surface.is_blank());
        assert_eq!(surface.width(), 10);
    }

    #[test]
    fn resize_discards_content() {
        let mut surface = Surface::new(10, 10);
        paint_square(&surface);
        surface.resize(20, 30);
        assert_eq!((surface.width(), surface.height()), (20, 30));
        assert!(surface.is_blank());
    }

    #[test]
    fn pixel_outside_bounds_is_none() {
        let mut surface = Surface::new(4, 4);
        assert!(surface.pixel(4, 0).is_none());
        assert!(surface.pixel(-1, 2).is_none());
    }

    #[test]
    fn zero_size_surface_is_not_ready() {
        let mut surface = Surface::new(0, 50);
        assert!(!surface.is_ready());
        assert!(surface.context().is_none());
        assert!(surface.is_blank());
        assert!(matches!(
            surface.to_png_bytes(None),
            Err(ExportError::EmptySurface)
        ));
    }

    #[test]
    fn png_export_has_signature() {
        let surface = Surface::new(8, 8);
        paint_square(&surface);
        let transparent = surface.to_png_bytes(None).unwrap();
        assert_eq!(transparent[..8], PNG_SIGNATURE);

        let flattened = surface.to_png_bytes(Some(BLACK)).unwrap();
        assert_eq!(flattened[..8], PNG_SIGNATURE);
    }
}
