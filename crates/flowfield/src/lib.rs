#![deny(unsafe_code)]
//! Noise-driven flow field line art.
//!
//! A [`FieldGrid`] of angles is sampled from a seeded noise source over an
//! oversized lattice. A [`StrokeTracer`] walks fixed-length segments along
//! those angles, and a [`Compositor`] draws batches of traced strokes onto a
//! [`DrawSurface`](flowfield_core::DrawSurface) until the session budget is
//! spent. The driver owns the loop: call `reset` on every size or parameter
//! change, then `step` once per frame.

pub mod compositor;
pub mod config;
pub mod grid;
pub mod hooks;
pub mod tracer;

pub use compositor::Compositor;
pub use config::{FlowfieldConfig, PaletteChoice};
pub use grid::FieldGrid;
pub use hooks::{FrameStatsRecorder, ParameterPanel};
pub use tracer::{Stroke, StrokeTracer};
