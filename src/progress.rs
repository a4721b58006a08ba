// src/progress.rs

/// Lightweight progress reporting used by the long-running pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the number of top-level players is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One player's teammate collection finished.
    fn item_done(&mut self, _index: usize, _label: &str) {}

    /// One player's teammate collection could not run.
    fn item_failed(&mut self, _index: usize, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
