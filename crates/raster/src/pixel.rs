//! Straight-alpha RGBA8 buffers from a premultiplied pixmap.
//!
//! Always available (no feature gate) so any image sink can share the
//! conversion.

use tiny_skia::Pixmap;

/// Demultiplies every pixel into a row-major RGBA8 buffer of
/// `width * height * 4` bytes.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
