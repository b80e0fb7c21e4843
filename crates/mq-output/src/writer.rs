//! The `OutputWriter` trait implemented by backend writers.

use mq_core::SimulationStep;

use crate::OutputResult;

/// Trait implemented by time-series output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with `SimOutputObserver::take_error`.
pub trait OutputWriter {
    /// Write one step record.
    fn write_step(&mut self, step: &SimulationStep) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
