//! [`DrawSurface`] backed by a `tiny-skia` pixmap.
//!
//! Paths are anti-aliased with butt caps and miter joins, matching the
//! defaults of an HTML canvas 2-D context.

use flowfield_core::error::EngineError;
use flowfield_core::{DrawSurface, Srgb};
use log::debug;
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// An RGBA raster surface.
pub struct PixmapSurface {
    pixmap: Pixmap,
    paint: Paint<'static>,
    stroke: Stroke,
    path: PathBuilder,
}

impl PixmapSurface {
    /// Creates a transparent surface.
    ///
    /// Returns `EngineError::InvalidDimensions` for zero or oversized dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color_rgba8(255, 255, 255, 255);
        Ok(Self {
            pixmap: allocate(width, height)?,
            paint,
            stroke: Stroke::default(),
            path: PathBuilder::new(),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight (non-premultiplied) RGBA at a pixel, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }
}

fn allocate(width: usize, height: usize) -> Result<Pixmap, EngineError> {
    let w = u32::try_from(width).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| EngineError::InvalidDimensions)?;
    Pixmap::new(w, h).ok_or(EngineError::InvalidDimensions)
}

impl DrawSurface for PixmapSurface {
    fn width(&self) -> usize {
        self.pixmap.width() as usize
    }

    fn height(&self) -> usize {
        self.pixmap.height() as usize
    }

    fn resize(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        if width != self.width() || height != self.height() {
            self.pixmap = allocate(width, height)?;
            debug!("pixmap reallocated at {width}x{height}");
        }
        self.path = PathBuilder::new();
        Ok(())
    }

    fn clear(&mut self, color: Srgb) {
        let [r, g, b, _] = color.to_rgba8(1.0);
        self.pixmap.fill(Color::from_rgba8(r, g, b, 255));
    }

    fn set_stroke_color(&mut self, color: Srgb, alpha: f64) {
        let [r, g, b, a] = color.to_rgba8(alpha);
        self.paint.set_color_rgba8(r, g, b, a);
    }

    fn set_line_width(&mut self, width: f64) {
        // A 2-D canvas ignores non-positive or non-finite widths.
        if width.is_finite() && width > 0.0 {
            self.stroke.width = width as f32;
        }
    }

    fn begin_path(&mut self) {
        self.path = PathBuilder::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x as f32, y as f32);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(x as f32, y as f32);
    }

    fn stroke(&mut self) {
        // A lone move_to has no segments and finishes to None: nothing to draw.
        if let Some(path) = self.path.clone().finish() {
            self.pixmap.stroke_path(
                &path,
                &self.paint,
                &self.stroke,
                Transform::identity(),
                None,
            );
        }
    }
}
