//! Progressive stroke rendering onto a [`DrawSurface`].
//!
//! A [`Compositor`] owns the surface, the noise source and the random
//! source. `reset` rebuilds the field for a canvas size; each `step` draws
//! one bounded batch of strokes until the session budget is spent.

use crate::config::{FlowfieldConfig, PaletteChoice};
use crate::grid::FieldGrid;
use crate::hooks::{FrameStatsRecorder, ParameterPanel};
use crate::tracer::{Stroke, StrokeTracer};
use flowfield_core::error::EngineError;
use flowfield_core::{DrawSurface, Engine, NoiseSource, Palette, RandomSource, Srgb, Xorshift64};
use glam::DVec2;
use log::{debug, info, trace, warn};
use serde_json::Value;

/// Alpha of the debug field overlay.
const GRID_OVERLAY_ALPHA: f64 = 0.3;
/// Overlay segment length as a fraction of the column pixel size.
const GRID_OVERLAY_LENGTH: f64 = 0.8;
const GRID_OVERLAY_LINE_WIDTH: f64 = 1.0;

/// State installed by a successful reset.
struct Session {
    config: FlowfieldConfig,
    grid: FieldGrid,
    palette: Palette,
    tracer: StrokeTracer,
    drawn: usize,
}

impl Session {
    fn remaining(&self) -> usize {
        self.config.stroke_count.saturating_sub(self.drawn)
    }
}

/// Draws flow field strokes progressively onto a surface.
pub struct Compositor<S: DrawSurface, R: RandomSource = Xorshift64> {
    surface: S,
    noise: Box<dyn NoiseSource>,
    rng: R,
    pending: FlowfieldConfig,
    session: Option<Session>,
    panel: Option<Box<dyn ParameterPanel>>,
    stats: Option<Box<dyn FrameStatsRecorder>>,
}

impl<S: DrawSurface, R: RandomSource> Compositor<S, R> {
    /// Creates a compositor. Nothing is drawn until the first [`reset`](Self::reset).
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(
        surface: S,
        noise: Box<dyn NoiseSource>,
        rng: R,
        config: FlowfieldConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            surface,
            noise,
            rng,
            pending: config,
            session: None,
            panel: None,
            stats: None,
        })
    }

    /// Attaches a parameter panel and shows it the current parameters.
    pub fn with_panel(mut self, panel: Box<dyn ParameterPanel>) -> Self {
        self.panel = Some(panel);
        self.present_params();
        self
    }

    /// Attaches a per-step stats recorder.
    pub fn with_stats(mut self, stats: Box<dyn FrameStatsRecorder>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Replaces the pending configuration. It takes effect on the next reset;
    /// the running session keeps drawing with the old one.
    pub fn configure(&mut self, config: FlowfieldConfig) -> Result<(), EngineError> {
        config.validate()?;
        self.pending = config;
        self.present_params();
        Ok(())
    }

    /// The configuration the next reset will apply.
    pub fn config(&self) -> &FlowfieldConfig {
        &self.pending
    }

    /// Starts a new session on a `width × height` canvas.
    ///
    /// Builds the grid, resizes the surface, picks the palette, clears the
    /// surface, zeroes the stroke counter and, when `draw_grid` is set, draws
    /// the field overlay. On error the previous session stays installed
    /// untouched and the random source is not advanced.
    pub fn reset(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        let result = self.try_reset(width, height);
        if let Err(e) = &result {
            warn!("reset to {width}x{height} rejected: {e}");
        }
        result
    }

    fn try_reset(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        let config = self.pending.clone();
        config.validate()?;
        let grid = FieldGrid::build(width, height, &config, self.noise.as_ref())?;
        let named = match &config.palette {
            PaletteChoice::Random => None,
            PaletteChoice::Named(name) => Some(Palette::from_name(name)?),
        };
        self.surface.resize(width, height)?;
        // Infallible from here on; the random source advances only for an
        // installed reset.
        let palette = named.unwrap_or_else(|| Palette::random(&mut self.rng));
        self.surface.clear(config.background);

        debug!(
            "reset {width}x{height}: {}x{} lattice, cell {:.2}px, palette '{}'",
            grid.columns(),
            grid.rows(),
            grid.cell_size(),
            palette.name()
        );

        let tracer = StrokeTracer::new(
            config.stroke_segment_length,
            config.max_stroke_length,
            width as f64,
            height as f64,
        );
        let draw_grid = config.draw_grid;
        self.session = Some(Session {
            config,
            grid,
            palette,
            tracer,
            drawn: 0,
        });
        if draw_grid {
            self.draw_grid();
        }
        Ok(())
    }

    /// Draws one batch of strokes and returns how many were drawn.
    ///
    /// A batch is `min(strokes_per_step, strokes left in the budget)`. Before
    /// the first reset or once the budget is spent this draws nothing.
    pub fn step(&mut self) -> usize {
        if let Some(stats) = self.stats.as_mut() {
            stats.begin();
        }

        let drawn = match self.session.as_mut() {
            Some(session) if session.remaining() > 0 => {
                let batch = session.config.strokes_per_step.min(session.remaining());
                for _ in 0..batch {
                    let stroke = next_stroke(session, &mut self.rng);
                    draw_stroke(&mut self.surface, &stroke);
                    session.drawn += 1;
                }
                trace!("drew {batch} strokes ({}/{})", session.drawn, session.config.stroke_count);
                if session.remaining() == 0 {
                    info!("stroke budget of {} reached", session.config.stroke_count);
                }
                batch
            }
            _ => 0,
        };

        if let Some(stats) = self.stats.as_mut() {
            stats.end(drawn);
        }
        drawn
    }

    /// Overlays every lattice vector on the surface: a short segment from each
    /// cell's canvas origin along its angle.
    ///
    /// Called by `reset` when `draw_grid` is set; does nothing before a reset.
    pub fn draw_grid(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let grid = &session.grid;
        let column_size = grid.column_pixel_size();
        let row_size = grid.row_pixel_size();
        let length = column_size * GRID_OVERLAY_LENGTH;

        self.surface.set_stroke_color(Srgb::WHITE, GRID_OVERLAY_ALPHA);
        self.surface.set_line_width(GRID_OVERLAY_LINE_WIDTH);
        for (column, row, angle) in grid.iter() {
            let start = DVec2::new(column as f64 * column_size, row as f64 * row_size);
            let end = start + DVec2::from_angle(angle) * length;
            self.surface.begin_path();
            self.surface.move_to(start.x, start.y);
            self.surface.line_to(end.x, end.y);
            self.surface.stroke();
        }
    }

    /// Whether the current session has drawn its whole budget.
    ///
    /// False before the first reset.
    pub fn is_complete(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.remaining() == 0)
    }

    /// Strokes drawn since the last reset.
    pub fn strokes_drawn(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.drawn)
    }

    /// Field grid of the current session.
    pub fn grid(&self) -> Option<&FieldGrid> {
        self.session.as_ref().map(|session| &session.grid)
    }

    /// Palette of the current session.
    pub fn palette(&self) -> Option<&Palette> {
        self.session.as_ref().map(|session| &session.palette)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn present_params(&mut self) {
        if let Some(panel) = self.panel.as_mut() {
            panel.present(&FlowfieldConfig::param_schema(), &self.pending.to_json());
        }
    }
}

/// Picks a start point, color and width, then traces the path.
///
/// Random draws happen in a fixed order (x, y, color, width) so a seeded
/// source reproduces the same strokes.
fn next_stroke<R: RandomSource>(session: &Session, rng: &mut R) -> Stroke {
    let grid = &session.grid;
    let config = &session.config;
    let start = DVec2::new(
        rng.next_range(0.0, grid.canvas_width()),
        rng.next_range(0.0, grid.canvas_height()),
    );
    let color = if config.monochrome {
        Srgb::WHITE
    } else {
        session.palette.pick(&mut *rng)
    };
    let width = rng.next_range(config.min_stroke_thickness, config.max_stroke_thickness);
    Stroke {
        points: session.tracer.trace(grid, start),
        width,
        color,
    }
}

fn draw_stroke<S: DrawSurface>(surface: &mut S, stroke: &Stroke) {
    surface.set_stroke_color(stroke.color, 1.0);
    surface.set_line_width(stroke.width);
    surface.begin_path();
    let mut points = stroke.points.iter();
    if let Some(first) = points.next() {
        surface.move_to(first.x, first.y);
    }
    for p in points {
        surface.line_to(p.x, p.y);
    }
    surface.stroke();
}

impl<S: DrawSurface, R: RandomSource> Engine for Compositor<S, R> {
    fn configure(&mut self, params: &Value) -> Result<(), EngineError> {
        let config = self.pending.merge_json(params)?;
        Compositor::configure(self, config)
    }

    fn reset(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        Compositor::reset(self, width, height)
    }

    fn step(&mut self) -> usize {
        Compositor::step(self)
    }

    fn is_complete(&self) -> bool {
        Compositor::is_complete(self)
    }

    fn params(&self) -> Value {
        self.pending.to_json()
    }

    fn param_schema(&self) -> Value {
        FlowfieldConfig::param_schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::testing::{RecordingPanel, RecordingStats};
    use flowfield_core::engine::run_to_completion;
    use flowfield_core::{CommandRecorder, DrawCommand, SimplexNoise};
    use serde_json::json;

    fn config(stroke_count: usize) -> FlowfieldConfig {
        FlowfieldConfig {
            stroke_count,
            ..Default::default()
        }
    }

    fn compositor(config: FlowfieldConfig, seed: u64) -> Compositor<CommandRecorder> {
        Compositor::new(
            CommandRecorder::new(1, 1),
            Box::new(SimplexNoise::new(seed as u32)),
            Xorshift64::new(seed),
            config,
        )
        .unwrap()
    }

    /// Splits recorded commands into per-stroke point lists.
    fn stroked_paths(commands: &[DrawCommand]) -> Vec<Vec<(f64, f64)>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        for command in commands {
            match command {
                DrawCommand::BeginPath => current.clear(),
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => {
                    current.push((*x, *y))
                }
                DrawCommand::Stroke => paths.push(std::mem::take(&mut current)),
                _ => {}
            }
        }
        paths
    }

    // ---- Lifecycle ----

    #[test]
    fn new_rejects_invalid_config() {
        let bad = FlowfieldConfig {
            stroke_segment_length: -1.0,
            ..Default::default()
        };
        let result = Compositor::new(
            CommandRecorder::new(1, 1),
            Box::new(SimplexNoise::new(1)),
            Xorshift64::new(1),
            bad,
        );
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn step_before_reset_is_a_no_op() {
        let mut c = compositor(config(100), 1);
        assert_eq!(c.step(), 0);
        assert!(!c.is_complete());
        assert!(c.surface().commands().is_empty());
        assert!(c.grid().is_none());
    }

    #[test]
    fn reset_resizes_and_clears_to_background() {
        let mut c = compositor(config(100), 1);
        c.reset(320, 200).unwrap();
        assert_eq!((c.surface().width(), c.surface().height()), (320, 200));
        assert_eq!(
            c.surface().commands(),
            &[DrawCommand::Clear {
                color: FlowfieldConfig::default().background
            }]
        );
        let grid = c.grid().unwrap();
        assert!((grid.canvas_width() - 320.0).abs() < f64::EPSILON);
        assert_eq!(c.strokes_drawn(), 0);
        assert!(c.palette().is_some());
    }

    #[test]
    fn reset_rejects_zero_dimensions() {
        let mut c = compositor(config(10), 1);
        assert!(matches!(
            c.reset(0, 100),
            Err(EngineError::InvalidDimensions)
        ));
        assert!(c.grid().is_none());
    }

    // ---- Budget ----

    #[test]
    fn steps_draw_batches_until_budget() {
        let mut c = compositor(config(700), 2);
        c.reset(200, 150).unwrap();
        assert_eq!(c.step(), 300);
        assert_eq!(c.step(), 300);
        assert!(!c.is_complete());
        assert_eq!(c.step(), 100);
        assert!(c.is_complete());
        assert_eq!(c.strokes_drawn(), 700);
        assert_eq!(c.surface().stroke_count(), 700);
    }

    #[test]
    fn completed_session_ignores_further_steps() {
        let mut c = compositor(config(50), 3);
        c.reset(100, 100).unwrap();
        c.step();
        let before = c.surface().commands().len();
        for _ in 0..10 {
            assert_eq!(c.step(), 0);
        }
        assert_eq!(c.surface().commands().len(), before);
        assert_eq!(c.strokes_drawn(), 50);
    }

    #[test]
    fn zero_budget_is_complete_immediately() {
        let mut c = compositor(config(0), 3);
        c.reset(100, 100).unwrap();
        assert!(c.is_complete());
        assert_eq!(c.step(), 0);
    }

    #[test]
    fn custom_batch_size_is_honored() {
        let mut c = compositor(
            FlowfieldConfig {
                stroke_count: 25,
                strokes_per_step: 10,
                ..Default::default()
            },
            4,
        );
        c.reset(120, 90).unwrap();
        let batches: Vec<usize> = (0..4).map(|_| c.step()).collect();
        assert_eq!(batches, vec![10, 10, 5, 0]);
    }

    // ---- Stroke content ----

    #[test]
    fn every_stroke_point_lies_inside_canvas() {
        let mut c = compositor(config(400), 5);
        c.reset(300, 180).unwrap();
        c.step();
        c.step();
        for path in stroked_paths(c.surface().commands()) {
            assert!(!path.is_empty());
            for (x, y) in path {
                assert!((0.0..300.0).contains(&x) && (0.0..180.0).contains(&y));
            }
        }
    }

    #[test]
    fn widths_stay_in_thickness_range() {
        let mut c = compositor(
            FlowfieldConfig {
                stroke_count: 300,
                min_stroke_thickness: 0.5,
                max_stroke_thickness: 2.5,
                ..Default::default()
            },
            6,
        );
        c.reset(100, 100).unwrap();
        c.step();
        let widths: Vec<f64> = c
            .surface()
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::SetLineWidth { width } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 300);
        assert!(widths.iter().all(|w| (0.5..=2.5).contains(w)));
    }

    #[test]
    fn colors_come_from_the_session_palette() {
        let mut c = compositor(
            FlowfieldConfig {
                stroke_count: 200,
                palette: PaletteChoice::Named("harbor".into()),
                ..Default::default()
            },
            7,
        );
        c.reset(100, 100).unwrap();
        c.step();
        let palette = c.palette().unwrap().clone();
        assert_eq!(palette.name(), "harbor");
        for cmd in c.surface().commands() {
            if let DrawCommand::SetStrokeColor { color, alpha } = cmd {
                assert!(palette.colors().contains(color));
                assert_eq!(*alpha, 1.0);
            }
        }
    }

    #[test]
    fn monochrome_draws_white_only() {
        let mut c = compositor(
            FlowfieldConfig {
                stroke_count: 100,
                monochrome: true,
                ..Default::default()
            },
            8,
        );
        c.reset(100, 100).unwrap();
        c.step();
        let colors: Vec<_> = c
            .surface()
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::SetStrokeColor { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors.len(), 100);
        assert!(colors.iter().all(|&c| c == Srgb::WHITE));
    }

    // ---- Determinism ----

    #[test]
    fn same_seed_and_config_produce_identical_commands() {
        let run = || {
            let mut c = compositor(config(900), 2024);
            c.reset(400, 300).unwrap();
            run_to_completion(&mut c, 100);
            c.into_surface().take()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn different_seeds_produce_different_compositions() {
        let run = |seed| {
            let mut c = compositor(config(50), seed);
            c.reset(200, 200).unwrap();
            c.step();
            c.into_surface().take()
        };
        assert_ne!(run(1), run(2));
    }

    // ---- Reset ----

    #[test]
    fn reset_after_drawing_restarts_the_session() {
        let mut c = compositor(config(600), 9);
        c.reset(400, 300).unwrap();
        c.step();
        c.step();
        assert_eq!(c.strokes_drawn(), 600);

        c.reset(150, 500).unwrap();
        assert_eq!(c.strokes_drawn(), 0);
        assert!(!c.is_complete());
        let grid = c.grid().unwrap();
        assert!((grid.canvas_width() - 150.0).abs() < f64::EPSILON);
        assert!((grid.canvas_height() - 500.0).abs() < f64::EPSILON);
        assert!(grid.angle_at(149.0, 499.0).is_some());
        assert_eq!(c.step(), 300);
    }

    #[test]
    fn configure_applies_only_on_next_reset() {
        let mut c = compositor(config(600), 10);
        c.reset(100, 100).unwrap();
        c.configure(config(10)).unwrap();
        assert_eq!(c.step(), 300, "running session keeps its budget");
        c.reset(100, 100).unwrap();
        assert_eq!(c.step(), 10);
        assert!(c.is_complete());
    }

    #[test]
    fn configure_rejects_invalid_values_and_keeps_pending() {
        let mut c = compositor(config(600), 10);
        let bad = FlowfieldConfig {
            grid_resolution: 0.0,
            ..Default::default()
        };
        assert!(c.configure(bad).is_err());
        assert_eq!(c.config().stroke_count, 600);
    }

    #[test]
    fn failed_reset_keeps_previous_session() {
        let mut c = compositor(config(600), 11);
        c.reset(400, 300).unwrap();
        c.step();
        let columns = c.grid().unwrap().columns();
        let commands = c.surface().commands().len();

        c.configure(FlowfieldConfig {
            grid_resolution: 1e-9,
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(
            c.reset(400, 300),
            Err(EngineError::DegenerateGrid(_))
        ));
        assert_eq!(c.strokes_drawn(), 300);
        assert_eq!(c.grid().unwrap().columns(), columns);
        assert_eq!(c.surface().commands().len(), commands);
    }

    // ---- Debug overlay ----

    #[test]
    fn draw_grid_flag_overlays_every_cell_on_reset() {
        let mut c = compositor(
            FlowfieldConfig {
                grid_resolution: 0.1,
                draw_grid: true,
                ..Default::default()
            },
            12,
        );
        c.reset(100, 80).unwrap();
        let grid = c.grid().unwrap();
        let cells = grid.columns() * grid.rows();
        let commands = c.surface().commands();
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert_eq!(
            commands[1],
            DrawCommand::SetStrokeColor {
                color: Srgb::WHITE,
                alpha: 0.3
            }
        );
        assert_eq!(c.surface().stroke_count(), cells);

        let paths = stroked_paths(commands);
        let column_size = grid.column_pixel_size();
        for path in &paths {
            assert_eq!(path.len(), 2);
            let (x0, y0) = path[0];
            let (x1, y1) = path[1];
            let length = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            assert!((length - 0.8 * column_size).abs() < 1e-9);
        }
        assert_eq!(c.strokes_drawn(), 0, "overlay is not counted as strokes");
    }

    #[test]
    fn overlay_is_absent_without_flag() {
        let mut c = compositor(config(10), 12);
        c.reset(100, 80).unwrap();
        assert_eq!(c.surface().stroke_count(), 0);
    }

    // ---- Collaborators ----

    #[test]
    fn panel_sees_params_on_attach_and_configure() {
        let panel = RecordingPanel::default();
        let shown = panel.shown.clone();
        let mut c = compositor(config(10), 13).with_panel(Box::new(panel));
        assert_eq!(shown.borrow().len(), 1);
        assert_eq!(shown.borrow()[0]["stroke_count"], 10);

        c.configure(config(42)).unwrap();
        assert_eq!(shown.borrow().len(), 2);
        assert_eq!(shown.borrow()[1]["stroke_count"], 42);
    }

    #[test]
    fn stats_bracket_every_step() {
        let stats = RecordingStats::default();
        let begins = stats.begins.clone();
        let ends = stats.ends.clone();
        let mut c = compositor(config(350), 14).with_stats(Box::new(stats));
        c.step();
        c.reset(100, 100).unwrap();
        c.step();
        c.step();
        c.step();
        assert_eq!(*begins.borrow(), 4);
        assert_eq!(*ends.borrow(), vec![0, 300, 50, 0]);
    }

    // ---- Engine trait ----

    #[test]
    fn drives_through_dyn_engine() {
        let mut c = compositor(FlowfieldConfig::default(), 15);
        let engine: &mut dyn Engine = &mut c;
        engine
            .configure(&json!({"stroke_count": 650, "palette": "fire"}))
            .unwrap();
        assert_eq!(engine.params()["palette"], "fire");
        assert!(engine.param_schema().get("noise_scale").is_some());
        engine.reset(160, 120).unwrap();
        assert_eq!(run_to_completion(engine, 100), 3);
        assert!(engine.is_complete());
        assert_eq!(c.strokes_drawn(), 650);
    }

    #[test]
    fn engine_configure_rejects_bad_json_values() {
        let mut c = compositor(FlowfieldConfig::default(), 16);
        let engine: &mut dyn Engine = &mut c;
        assert!(engine.configure(&json!({"background": "nope"})).is_err());
        assert!(engine.configure(&json!({"stroke_segment_length": 0})).is_err());
        assert!(engine.configure(&json!({"palette": "plaid"})).is_err());
    }

    #[test]
    fn engine_configure_merges_successive_calls() {
        let mut c = compositor(FlowfieldConfig::default(), 16);
        let engine: &mut dyn Engine = &mut c;
        engine.configure(&json!({"stroke_count": 650})).unwrap();
        engine.configure(&json!({"monochrome": true})).unwrap();
        let params = engine.params();
        assert_eq!(params["stroke_count"], 650);
        assert_eq!(params["monochrome"], true);
        assert_eq!(c.config().stroke_count, 650);
    }

    #[test]
    fn engine_configure_rejects_mistyped_values_and_keeps_pending() {
        let mut c = compositor(FlowfieldConfig::default(), 16);
        let engine: &mut dyn Engine = &mut c;
        engine.configure(&json!({"stroke_count": 650})).unwrap();
        for bad in [
            json!({"stroke_count": -5}),
            json!({"strokes_per_step": 0.5}),
            json!({"grid_resolution": "0"}),
        ] {
            assert!(
                matches!(engine.configure(&bad), Err(EngineError::InvalidConfig { .. })),
                "{bad} was accepted"
            );
        }
        assert_eq!(c.config().stroke_count, 650);
        assert_eq!(c.config().strokes_per_step, FlowfieldConfig::default().strokes_per_step);
    }

    /// Records like `CommandRecorder` but refuses to grow past a side length.
    struct CappedSurface {
        inner: CommandRecorder,
        max_side: usize,
    }

    impl DrawSurface for CappedSurface {
        fn width(&self) -> usize {
            self.inner.width()
        }
        fn height(&self) -> usize {
            self.inner.height()
        }
        fn resize(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
            if width > self.max_side || height > self.max_side {
                return Err(EngineError::InvalidDimensions);
            }
            self.inner.resize(width, height)
        }
        fn clear(&mut self, color: Srgb) {
            self.inner.clear(color)
        }
        fn set_stroke_color(&mut self, color: Srgb, alpha: f64) {
            self.inner.set_stroke_color(color, alpha)
        }
        fn set_line_width(&mut self, width: f64) {
            self.inner.set_line_width(width)
        }
        fn begin_path(&mut self) {
            self.inner.begin_path()
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.inner.move_to(x, y)
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.inner.line_to(x, y)
        }
        fn stroke(&mut self) {
            self.inner.stroke()
        }
    }

    #[test]
    fn rejected_resize_does_not_advance_random_source() {
        let capped = |seed: u64| {
            Compositor::new(
                CappedSurface {
                    inner: CommandRecorder::new(1, 1),
                    max_side: 500,
                },
                Box::new(SimplexNoise::new(seed as u32)),
                Xorshift64::new(seed),
                config(40),
            )
            .unwrap()
        };
        let mut rejected = capped(21);
        assert!(matches!(
            rejected.reset(800, 600),
            Err(EngineError::InvalidDimensions)
        ));
        rejected.reset(300, 200).unwrap();
        rejected.step();

        let mut fresh = capped(21);
        fresh.reset(300, 200).unwrap();
        fresh.step();

        assert_eq!(rejected.palette(), fresh.palette());
        assert_eq!(rejected.surface().inner.commands(), fresh.surface().inner.commands());
    }
}
