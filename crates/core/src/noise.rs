//! Coherent noise sources sampled to build a flow field.
//!
//! A [`NoiseSource`] is a pure function of (x, y, z) once seeded. Each
//! backend documents its output interval through [`NoiseSource::range`] so
//! callers can map samples linearly onto angles.

use crate::error::EngineError;
use ::noise::{NoiseFn, OpenSimplex, Perlin};

/// A seeded, deterministic 3-D coherent noise function.
///
/// Same inputs always produce the same output for a given instance.
pub trait NoiseSource: Send + Sync {
    /// Sample the noise at (x, y, z).
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;

    /// Documented output interval `(min, max)` of [`sample`](NoiseSource::sample).
    fn range(&self) -> (f64, f64);
}

/// OpenSimplex noise, output clamped to [-1, 1].
pub struct SimplexNoise {
    noise: OpenSimplex,
}

/// Perlin gradient noise, output clamped to [-1, 1].
pub struct PerlinNoise {
    noise: Perlin,
}

impl SimplexNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
        }
    }
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
        }
    }
}

impl NoiseSource for SimplexNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z]).clamp(-1.0, 1.0)
    }

    fn range(&self) -> (f64, f64) {
        (-1.0, 1.0)
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z]).clamp(-1.0, 1.0)
    }

    fn range(&self) -> (f64, f64) {
        (-1.0, 1.0)
    }
}

/// Selectable noise backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseKind {
    #[default]
    Simplex,
    Perlin,
}

impl NoiseKind {
    const NAMES: &'static [&'static str] = &["simplex", "perlin"];

    /// Parses a backend name (`"simplex"` or `"perlin"`).
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "simplex" => Ok(NoiseKind::Simplex),
            "perlin" => Ok(NoiseKind::Perlin),
            _ => Err(EngineError::UnknownNoise(name.to_string())),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        Self::NAMES
    }

    /// Builds a seeded source of this kind.
    ///
    /// Only the low 32 bits of `seed` reach the noise permutation table.
    pub fn build(self, seed: u64) -> Box<dyn NoiseSource> {
        let seed = seed as u32;
        match self {
            NoiseKind::Simplex => Box::new(SimplexNoise::new(seed)),
            NoiseKind::Perlin => Box::new(PerlinNoise::new(seed)),
        }
    }
}
