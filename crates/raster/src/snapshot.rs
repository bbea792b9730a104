//! PNG export of a [`PixmapSurface`].
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! raster surface do not pull in the `image` crate.

use flowfield_core::error::EngineError;
use std::path::Path;

use crate::pixel::pixmap_to_rgba;
use crate::pixmap::PixmapSurface;

/// Writes the surface as a PNG image.
///
/// Returns `EngineError::Io` on write failure.
pub fn write_png(surface: &PixmapSurface, path: &Path) -> Result<(), EngineError> {
    let pixmap = surface.pixmap();
    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap_to_rgba(pixmap))
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
