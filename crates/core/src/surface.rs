//! Immediate-mode 2-D drawing surface.
//!
//! [`DrawSurface`] is the primitive set the compositor needs: clear, stroke
//! style, and a single open polyline path. [`CommandRecorder`] captures the
//! calls as [`DrawCommand`]s instead of rasterizing them.

use crate::color::Srgb;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// A raster surface that accepts canvas-style drawing calls.
///
/// Object-safe, so the compositor can hold a `Box<dyn DrawSurface>` when the
/// backend is chosen at runtime.
pub trait DrawSurface {
    /// Surface width in pixels.
    fn width(&self) -> usize;

    /// Surface height in pixels.
    fn height(&self) -> usize;

    /// Reallocates the surface. Contents after a resize are unspecified until
    /// the next [`clear`](DrawSurface::clear).
    fn resize(&mut self, width: usize, height: usize) -> Result<(), EngineError>;

    /// Fills the whole surface with an opaque color.
    fn clear(&mut self, color: Srgb);

    fn set_stroke_color(&mut self, color: Srgb, alpha: f64);

    fn set_line_width(&mut self, width: f64);

    /// Discards any pending path.
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the pending path with the current color and width.
    fn stroke(&mut self);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear { color: Srgb },
    SetStrokeColor { color: Srgb, alpha: f64 },
    SetLineWidth { width: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
}

/// A surface that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    width: usize,
    height: usize,
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `Stroke` commands issued so far.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for CommandRecorder {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn resize(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn clear(&mut self, color: Srgb) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn set_stroke_color(&mut self, color: Srgb, alpha: f64) {
        self.commands
            .push(DrawCommand::SetStrokeColor { color, alpha });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth { width });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for Box<S> {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn resize(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        (**self).resize(width, height)
    }

    fn clear(&mut self, color: Srgb) {
        (**self).clear(color)
    }

    fn set_stroke_color(&mut self, color: Srgb, alpha: f64) {
        (**self).set_stroke_color(color, alpha)
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }

    fn begin_path(&mut self) {
        (**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn stroke(&mut self) {
        (**self).stroke()
    }
}
