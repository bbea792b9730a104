#![deny(unsafe_code)]
//! Core types and traits for flowfield.
//!
//! Provides the `Engine` trait, the `DrawSurface` drawing seam (with a
//! `CommandRecorder`), seeded `NoiseSource` backends, the `Srgb` color type,
//! the built-in `Palette` bank, the `Xorshift64` PRNG behind `RandomSource`,
//! and parameter helpers.

pub mod color;
pub mod engine;
pub mod error;
pub mod noise;
pub mod palette;
pub mod params;
pub mod prng;
pub mod surface;

pub use color::Srgb;
pub use engine::Engine;
pub use error::EngineError;
pub use crate::noise::{NoiseKind, NoiseSource, PerlinNoise, SimplexNoise};
pub use palette::Palette;
pub use prng::{RandomSource, Xorshift64};
pub use surface::{CommandRecorder, DrawCommand, DrawSurface};
