//! Integrates stroke paths through a [`FieldGrid`].

use crate::grid::FieldGrid;
use flowfield_core::Srgb;
use glam::DVec2;

/// A traced polyline with its drawing style.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<DVec2>,
    pub width: f64,
    pub color: Srgb,
}

impl Stroke {
    /// Sum of segment lengths.
    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }
}

/// Sum of the distances between consecutive points.
pub fn path_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Fixed-step integrator for one canvas size.
///
/// Each step moves `segment_length` pixels along the field angle of the
/// current cell. A stroke ends when the next point would leave
/// `[0, width) × [0, height)` or when another full segment would exceed the
/// length budget of `max_stroke_length × max(width, height)`.
#[derive(Debug, Clone, Copy)]
pub struct StrokeTracer {
    segment_length: f64,
    budget: f64,
    width: f64,
    height: f64,
}

impl StrokeTracer {
    /// `segment_length` must be positive and finite (checked by config validation).
    pub fn new(segment_length: f64, max_stroke_length: f64, width: f64, height: f64) -> Self {
        Self {
            segment_length,
            budget: max_stroke_length * width.max(height),
            width,
            height,
        }
    }

    /// Length budget every stroke starts with.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn segment_length(&self) -> f64 {
        self.segment_length
    }

    fn contains(&self, p: DVec2) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }

    /// Traces a path from `start`. The result always begins with `start`.
    ///
    /// A start point outside the canvas (or the grid) yields a one-point path.
    pub fn trace(&self, grid: &FieldGrid, start: DVec2) -> Vec<DVec2> {
        let mut points = vec![start];
        let mut position = start;
        let mut remaining = self.budget;

        while remaining >= self.segment_length {
            let Some(angle) = grid.angle_at(position.x, position.y) else {
                break;
            };
            let next = position + DVec2::from_angle(angle) * self.segment_length;
            if !self.contains(next) {
                break;
            }
            points.push(next);
            position = next;
            remaining -= self.segment_length;
        }

        points
    }
}
