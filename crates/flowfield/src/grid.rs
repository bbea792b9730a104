//! Lattice of flow angles sampled from a noise source.
//!
//! The lattice spans an oversized region, `-50%..150%` of the canvas in both
//! axes, but lookups stretch the whole lattice over the visible canvas: a
//! canvas point at fraction `f` of the width reads column `floor(f * columns)`.
//! Angles are stored column-major, matching the `[column][row]` addressing.

use crate::config::FlowfieldConfig;
use flowfield_core::error::EngineError;
use flowfield_core::NoiseSource;
use std::f64::consts::TAU;

/// Upper bound on lattice cells, to reject configurations that would try to
/// allocate an absurd grid (e.g. a tiny `grid_resolution` on a huge canvas).
pub const MAX_LATTICE_CELLS: usize = 1 << 26;

/// Left/top edge of the lattice relative to canvas size.
const LATTICE_START: f64 = -0.5;
/// Right/bottom edge of the lattice relative to canvas size.
const LATTICE_END: f64 = 1.5;

/// Linearly maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map_to_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// A 2-D grid of angles in `[0, 2π)` covering a canvas.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    columns: usize,
    rows: usize,
    cell_size: f64,
    canvas_width: f64,
    canvas_height: f64,
    angles: Vec<f64>,
}

impl FieldGrid {
    /// Samples `noise` over the lattice for a `width × height` canvas.
    ///
    /// Column and row counts are `ceil(span / cell_size)`, so a fractional
    /// count includes the partial cell at the far edge.
    ///
    /// Returns `InvalidDimensions` for a zero-sized canvas and `DegenerateGrid`
    /// when the cell size or lattice dimensions are zero, non-finite, or
    /// exceed [`MAX_LATTICE_CELLS`].
    pub fn build(
        width: usize,
        height: usize,
        config: &FlowfieldConfig,
        noise: &dyn NoiseSource,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        let canvas_width = width as f64;
        let canvas_height = height as f64;

        let cell_size = canvas_width * config.grid_resolution;
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(EngineError::DegenerateGrid(format!(
                "cell size {cell_size} from grid_resolution {}",
                config.grid_resolution
            )));
        }

        let span = LATTICE_END - LATTICE_START;
        let columns = lattice_count(canvas_width * span, cell_size, "column")?;
        let rows = lattice_count(canvas_height * span, cell_size, "row")?;
        let cells = columns
            .checked_mul(rows)
            .filter(|&n| n <= MAX_LATTICE_CELLS)
            .ok_or_else(|| {
                EngineError::DegenerateGrid(format!(
                    "{columns}x{rows} lattice exceeds {MAX_LATTICE_CELLS} cells"
                ))
            })?;

        let (in_min, in_max) = noise.range();
        let mut angles = Vec::with_capacity(cells);
        for column in 0..columns {
            for row in 0..rows {
                let sample = noise.sample(
                    column as f64 * config.noise_scale,
                    row as f64 * config.noise_scale,
                    config.noise_depth,
                );
                angles.push(sample_to_angle(sample, in_min, in_max));
            }
        }

        Ok(Self {
            columns,
            rows,
            cell_size,
            canvas_width,
            canvas_height,
            angles,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Lattice cell size in lattice-space pixels (`width × grid_resolution`).
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Canvas pixels covered by one lattice column.
    pub fn column_pixel_size(&self) -> f64 {
        self.canvas_width / self.columns as f64
    }

    /// Canvas pixels covered by one lattice row.
    pub fn row_pixel_size(&self) -> f64 {
        self.canvas_height / self.rows as f64
    }

    /// Column-major angle storage.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Angle stored at a lattice cell, or `None` past the lattice edge.
    pub fn get(&self, column: usize, row: usize) -> Option<f64> {
        if column < self.columns && row < self.rows {
            Some(self.angles[column * self.rows + row])
        } else {
            None
        }
    }

    /// Lattice cell containing a canvas point.
    ///
    /// `None` for points outside `[0, width) × [0, height)` or non-finite
    /// input. Inside the canvas every point resolves; a quotient that rounds
    /// up to the cell count at the far edge lands in the last cell.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !(0.0..self.canvas_width).contains(&x) || !(0.0..self.canvas_height).contains(&y) {
            return None;
        }
        let column = ((x / self.column_pixel_size()).floor() as usize).min(self.columns - 1);
        let row = ((y / self.row_pixel_size()).floor() as usize).min(self.rows - 1);
        Some((column, row))
    }

    /// Field angle at a canvas point. See [`cell_at`](Self::cell_at).
    pub fn angle_at(&self, x: f64, y: f64) -> Option<f64> {
        let (column, row) = self.cell_at(x, y)?;
        self.get(column, row)
    }

    /// Iterates over `(column, row, angle)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let rows = self.rows;
        self.angles
            .iter()
            .enumerate()
            .map(move |(i, &angle)| (i / rows, i % rows, angle))
    }
}

/// `ceil(extent / cell_size)` as a non-zero cell count.
fn lattice_count(extent: f64, cell_size: f64, axis: &str) -> Result<usize, EngineError> {
    let count = (extent / cell_size).ceil();
    if !count.is_finite() || count < 1.0 || count > MAX_LATTICE_CELLS as f64 {
        return Err(EngineError::DegenerateGrid(format!(
            "{axis} count {count} from extent {extent} and cell size {cell_size}"
        )));
    }
    Ok(count as usize)
}

/// Maps a noise sample onto `[0, 2π)`. The top of the noise range folds to 0.
fn sample_to_angle(sample: f64, in_min: f64, in_max: f64) -> f64 {
    let angle = map_to_range(sample.clamp(in_min, in_max), in_min, in_max, 0.0, TAU);
    if angle >= TAU {
        0.0
    } else {
        angle.max(0.0)
    }
}
