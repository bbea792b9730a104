//! The `Engine` trait a driver uses to run a progressive composition.
//!
//! The trait is object-safe so a driver loop can hold `&mut dyn Engine`
//! without knowing the surface or random source behind it.

use crate::error::EngineError;
use serde_json::Value;

/// A composition that is configured, reset against a canvas size, and then
/// advanced one bounded batch at a time by an external loop.
///
/// The engine never schedules itself: the caller decides when to call
/// [`step`](Engine::step) and stops once [`is_complete`](Engine::is_complete).
pub trait Engine {
    /// Updates the pending parameters with the keys present in `params`;
    /// absent keys keep their current values. Changes take effect on the
    /// next [`reset`](Engine::reset).
    ///
    /// A present key with a value outside its domain rejects the whole call
    /// and leaves the pending parameters unchanged.
    fn configure(&mut self, params: &Value) -> Result<(), EngineError>;

    /// Discards all progress and rebuilds state for a canvas of the given size.
    ///
    /// On error nothing is installed and the previous state stays intact.
    fn reset(&mut self, width: usize, height: usize) -> Result<(), EngineError>;

    /// Performs one bounded batch of work and returns how many items it drew.
    ///
    /// Infallible; a no-op returning 0 once complete or before the first reset.
    fn step(&mut self) -> usize;

    /// Whether the session budget has been reached.
    fn is_complete(&self) -> bool;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters: type, default, UI range, description.
    fn param_schema(&self) -> Value;
}

/// Drives `engine` until it completes or `max_steps` calls have been made.
///
/// Returns the number of `step` calls performed.
pub fn run_to_completion(engine: &mut dyn Engine, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && !engine.is_complete() {
        engine.step();
        steps += 1;
    }
    steps
}
