//! Optional collaborators a driver can attach to a compositor.

use serde_json::Value;

/// Presents parameters to a user. It only displays; new values come back to
/// the compositor through `configure`.
pub trait ParameterPanel {
    /// Called on attach and after every accepted `configure`.
    fn present(&mut self, schema: &Value, values: &Value);
}

/// Receives per-step timing brackets.
pub trait FrameStatsRecorder {
    /// Called before a step draws anything.
    fn begin(&mut self);

    /// Called after the step with the number of strokes it drew.
    fn end(&mut self, strokes: usize);
}
