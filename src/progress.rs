// src/progress.rs
/// Lightweight progress reporting for feed loads.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Non-blocking notice: something went wrong but the app carries on
    /// (e.g. fallback data is being shown).
    fn warn(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
