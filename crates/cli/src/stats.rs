//! Wall-clock frame timing for `render --stats`.

use flowfield_engine::FrameStatsRecorder;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Totals accumulated across every bracketed step.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameTotals {
    pub frames: usize,
    pub strokes: usize,
    pub busy: Duration,
    pub slowest: Duration,
}

impl FrameTotals {
    pub fn mean_ms(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.busy.as_secs_f64() * 1000.0 / self.frames as f64
        }
    }
}

/// Times each step and logs it at debug level. The driver keeps a handle to
/// the shared totals after the recorder is moved into the compositor.
#[derive(Default)]
pub struct LogFrameStats {
    started: Option<Instant>,
    totals: Rc<RefCell<FrameTotals>>,
}

impl LogFrameStats {
    pub fn totals(&self) -> Rc<RefCell<FrameTotals>> {
        Rc::clone(&self.totals)
    }
}

impl FrameStatsRecorder for LogFrameStats {
    fn begin(&mut self) {
        self.started = Some(Instant::now());
    }

    fn end(&mut self, strokes: usize) {
        let elapsed = self.started.take().map(|t| t.elapsed()).unwrap_or_default();
        let mut totals = self.totals.borrow_mut();
        totals.frames += 1;
        totals.strokes += strokes;
        totals.busy += elapsed;
        totals.slowest = totals.slowest.max(elapsed);
        debug!(
            "frame {}: {strokes} strokes in {:.3} ms",
            totals.frames,
            elapsed.as_secs_f64() * 1000.0
        );
    }
}
