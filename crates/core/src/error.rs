//! Error types for the flowfield core.

use thiserror::Error;

/// Errors produced by configuration, grid construction and palette handling.
///
/// Every variant is raised before any state is installed, so a failed
/// `reset` can be retried with corrected input.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero (or their product overflowed) for a canvas or surface.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A configuration parameter lies outside its valid numeric domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// The lattice computed from the configuration has no cells, or too many.
    #[error("degenerate field grid: {0}")]
    DegenerateGrid(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A palette name is not in the built-in bank.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// A noise backend name is not recognized.
    #[error("unknown noise source: {0}")]
    UnknownNoise(String),

    /// Writing a raster snapshot failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl EngineError {
    /// Shorthand for [`EngineError::InvalidConfig`].
    pub fn invalid_config(name: &str, reason: impl Into<String>) -> Self {
        EngineError::InvalidConfig {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}
