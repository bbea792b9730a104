#![deny(unsafe_code)]
//! Raster backend for flow field compositions.
//!
//! [`PixmapSurface`] implements `flowfield_core::DrawSurface` on a
//! `tiny-skia` pixmap so a compositor can draw real pixels. The `png`
//! feature adds [`snapshot::write_png`] for saving the result.

pub mod pixel;
pub mod pixmap;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixmap::PixmapSurface;
