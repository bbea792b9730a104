//! Composition parameters.
//!
//! A [`FlowfieldConfig`] is a plain value: a UI or CLI produces a new one and
//! hands it to the compositor, which applies it on the next reset.

use flowfield_core::error::EngineError;
use flowfield_core::params::{
    ensure_finite, ensure_non_negative, ensure_positive, param_bool, param_f64, param_string,
    param_usize,
};
use flowfield_core::{Palette, Srgb};
use serde_json::{json, Value};

/// Lattice cell size as a fraction of canvas width.
pub const DEFAULT_GRID_RESOLUTION: f64 = 0.015;
/// Multiplier from lattice index to noise coordinate.
pub const DEFAULT_NOISE_SCALE: f64 = 0.007;
/// z coordinate of the sampled noise slice.
pub const DEFAULT_NOISE_DEPTH: f64 = 1.0;
/// Strokes per session.
pub const DEFAULT_STROKE_COUNT: usize = 8000;
/// Stroke length budget as a fraction of the larger canvas side.
pub const DEFAULT_MAX_STROKE_LENGTH: f64 = 0.9;
pub const DEFAULT_MIN_STROKE_THICKNESS: f64 = 0.1;
pub const DEFAULT_MAX_STROKE_THICKNESS: f64 = 0.5;
/// Integration step in pixels.
pub const DEFAULT_STROKE_SEGMENT_LENGTH: f64 = 10.0;
pub const DEFAULT_BACKGROUND: &str = "#212322";
/// Strokes drawn per `step()` call.
pub const DEFAULT_STROKES_PER_STEP: usize = 300;
/// Palette name meaning "pick one from the bank on every reset".
pub const RANDOM_PALETTE: &str = "random";

/// Which palette a session draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteChoice {
    /// A fresh bank palette is drawn on every reset.
    Random,
    /// A fixed bank palette.
    Named(String),
}

impl PaletteChoice {
    fn from_name(name: &str) -> Self {
        if name == RANDOM_PALETTE {
            PaletteChoice::Random
        } else {
            PaletteChoice::Named(name.to_owned())
        }
    }

    fn as_str(&self) -> &str {
        match self {
            PaletteChoice::Random => RANDOM_PALETTE,
            PaletteChoice::Named(name) => name,
        }
    }
}

/// All tunable parameters of a flow field composition.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowfieldConfig {
    pub grid_resolution: f64,
    pub noise_scale: f64,
    pub noise_depth: f64,
    pub stroke_count: usize,
    pub max_stroke_length: f64,
    pub min_stroke_thickness: f64,
    pub max_stroke_thickness: f64,
    pub stroke_segment_length: f64,
    pub background: Srgb,
    /// Draw every stroke in opaque white instead of palette colors.
    pub monochrome: bool,
    /// Overlay the raw field vectors after each reset.
    pub draw_grid: bool,
    pub strokes_per_step: usize,
    pub palette: PaletteChoice,
}

impl Default for FlowfieldConfig {
    fn default() -> Self {
        Self {
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            noise_scale: DEFAULT_NOISE_SCALE,
            noise_depth: DEFAULT_NOISE_DEPTH,
            stroke_count: DEFAULT_STROKE_COUNT,
            max_stroke_length: DEFAULT_MAX_STROKE_LENGTH,
            min_stroke_thickness: DEFAULT_MIN_STROKE_THICKNESS,
            max_stroke_thickness: DEFAULT_MAX_STROKE_THICKNESS,
            stroke_segment_length: DEFAULT_STROKE_SEGMENT_LENGTH,
            background: Srgb::from_hex(DEFAULT_BACKGROUND)
                .expect("default background hex is valid"),
            monochrome: false,
            draw_grid: false,
            strokes_per_step: DEFAULT_STROKES_PER_STEP,
            palette: PaletteChoice::Random,
        }
    }
}

impl FlowfieldConfig {
    /// Builds a configuration from a JSON object. Absent keys take their
    /// defaults; see [`merge_json`](Self::merge_json) for how present keys
    /// are read.
    pub fn from_json(params: &Value) -> Result<Self, EngineError> {
        Self::default().merge_json(params)
    }

    /// Returns a copy of `self` with the keys present in `params` replaced.
    ///
    /// A present key whose value has the wrong JSON type (a string for a
    /// number, a negative or fractional count) is an `InvalidConfig` error,
    /// as is a non-object `params`. Domain checks on the merged result are
    /// left to [`validate`](Self::validate).
    pub fn merge_json(&self, params: &Value) -> Result<Self, EngineError> {
        if !params.is_object() {
            return Err(EngineError::invalid_config(
                "params",
                format!("expected a JSON object, got {params}"),
            ));
        }
        let background = match params.get("background") {
            None => self.background,
            Some(_) => Srgb::from_hex(&param_string(params, "background", "")?)?,
        };
        Ok(Self {
            grid_resolution: param_f64(params, "grid_resolution", self.grid_resolution)?,
            noise_scale: param_f64(params, "noise_scale", self.noise_scale)?,
            noise_depth: param_f64(params, "noise_depth", self.noise_depth)?,
            stroke_count: param_usize(params, "stroke_count", self.stroke_count)?,
            max_stroke_length: param_f64(params, "max_stroke_length", self.max_stroke_length)?,
            min_stroke_thickness: param_f64(
                params,
                "min_stroke_thickness",
                self.min_stroke_thickness,
            )?,
            max_stroke_thickness: param_f64(
                params,
                "max_stroke_thickness",
                self.max_stroke_thickness,
            )?,
            stroke_segment_length: param_f64(
                params,
                "stroke_segment_length",
                self.stroke_segment_length,
            )?,
            background,
            monochrome: param_bool(params, "monochrome", self.monochrome)?,
            draw_grid: param_bool(params, "draw_grid", self.draw_grid)?,
            strokes_per_step: param_usize(params, "strokes_per_step", self.strokes_per_step)?,
            palette: PaletteChoice::from_name(&param_string(
                params,
                "palette",
                self.palette.as_str(),
            )?),
        })
    }

    /// Checks every parameter against its numeric domain.
    ///
    /// UI ranges from [`param_schema`](Self::param_schema) are hints only;
    /// this rejects values the algorithm cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_positive("grid_resolution", self.grid_resolution)?;
        ensure_finite("noise_scale", self.noise_scale)?;
        ensure_finite("noise_depth", self.noise_depth)?;
        ensure_non_negative("max_stroke_length", self.max_stroke_length)?;
        ensure_positive("stroke_segment_length", self.stroke_segment_length)?;
        let min = ensure_non_negative("min_stroke_thickness", self.min_stroke_thickness)?;
        let max = ensure_non_negative("max_stroke_thickness", self.max_stroke_thickness)?;
        if min > max {
            return Err(EngineError::invalid_config(
                "min_stroke_thickness",
                format!("{min} exceeds max_stroke_thickness {max}"),
            ));
        }
        if self.strokes_per_step == 0 {
            return Err(EngineError::invalid_config(
                "strokes_per_step",
                "must be at least 1",
            ));
        }
        if let PaletteChoice::Named(name) = &self.palette {
            if !Palette::exists(name) {
                return Err(EngineError::UnknownPalette(name.clone()));
            }
        }
        Ok(())
    }

    /// Current values as a JSON object, with the same keys `from_json` reads.
    pub fn to_json(&self) -> Value {
        json!({
            "grid_resolution": self.grid_resolution,
            "noise_scale": self.noise_scale,
            "noise_depth": self.noise_depth,
            "stroke_count": self.stroke_count,
            "max_stroke_length": self.max_stroke_length,
            "min_stroke_thickness": self.min_stroke_thickness,
            "max_stroke_thickness": self.max_stroke_thickness,
            "stroke_segment_length": self.stroke_segment_length,
            "background": self.background.to_hex(),
            "monochrome": self.monochrome,
            "draw_grid": self.draw_grid,
            "strokes_per_step": self.strokes_per_step,
            "palette": self.palette.as_str(),
        })
    }

    /// Schema for a parameter panel: type, default, UI range and description.
    pub fn param_schema() -> Value {
        let mut palettes = vec![RANDOM_PALETTE];
        palettes.extend(Palette::list_names());
        json!({
            "grid_resolution": {
                "type": "number",
                "default": DEFAULT_GRID_RESOLUTION,
                "min": 0.01,
                "max": 0.1,
                "description": "Lattice cell size as a fraction of canvas width"
            },
            "noise_scale": {
                "type": "number",
                "default": DEFAULT_NOISE_SCALE,
                "min": 0.0001,
                "max": 0.02,
                "description": "Lattice index to noise coordinate multiplier"
            },
            "noise_depth": {
                "type": "number",
                "default": DEFAULT_NOISE_DEPTH,
                "min": 0.1,
                "max": 5.0,
                "description": "z coordinate of the sampled noise slice"
            },
            "stroke_count": {
                "type": "integer",
                "default": DEFAULT_STROKE_COUNT,
                "min": 100,
                "max": 20000,
                "description": "Total strokes drawn per session"
            },
            "max_stroke_length": {
                "type": "number",
                "default": DEFAULT_MAX_STROKE_LENGTH,
                "min": 0.001,
                "max": 1.0,
                "description": "Stroke length budget as a fraction of the larger canvas side"
            },
            "stroke_segment_length": {
                "type": "number",
                "default": DEFAULT_STROKE_SEGMENT_LENGTH,
                "min": 0.5,
                "max": 100.0,
                "description": "Integration step in pixels"
            },
            "min_stroke_thickness": {
                "type": "number",
                "default": DEFAULT_MIN_STROKE_THICKNESS,
                "min": 0.02,
                "max": 3.0,
                "description": "Minimum stroke line width"
            },
            "max_stroke_thickness": {
                "type": "number",
                "default": DEFAULT_MAX_STROKE_THICKNESS,
                "min": 0.02,
                "max": 3.0,
                "description": "Maximum stroke line width"
            },
            "background": {
                "type": "color",
                "default": DEFAULT_BACKGROUND,
                "description": "Background clear color"
            },
            "monochrome": {
                "type": "boolean",
                "default": false,
                "description": "Draw every stroke in white"
            },
            "draw_grid": {
                "type": "boolean",
                "default": false,
                "description": "Overlay the raw field vectors after reset"
            },
            "strokes_per_step": {
                "type": "integer",
                "default": DEFAULT_STROKES_PER_STEP,
                "min": 1,
                "max": 2000,
                "description": "Strokes drawn per step() call"
            },
            "palette": {
                "type": "string",
                "default": RANDOM_PALETTE,
                "options": palettes,
                "description": "Bank palette name, or 'random' to pick one per reset"
            }
        })
    }
}
