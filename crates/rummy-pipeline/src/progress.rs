//! Progress reporting.

/// Receives progress updates from long-running stages.
///
/// Methods take `&self`; implementations use interior mutability.
pub trait ProgressSink: Send + Sync {
    /// Begins a stage. `total` is `None` when the amount of work is unknown.
    fn start(&self, label: &str, total: Option<u64>);

    /// Records `n` finished units of work.
    fn advance(&self, n: u64);

    /// Ends the current stage.
    fn finish(&self, message: &str);
}

/// A sink that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&self, _label: &str, _total: Option<u64>) {}

    fn advance(&self, _n: u64) {}

    fn finish(&self, _message: &str) {}
}
