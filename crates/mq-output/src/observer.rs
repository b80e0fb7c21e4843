//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mq_core::SimulationStep;
use mq_sim::SimObserver;

use crate::OutputError;
use crate::writer::OutputWriter;

/// A [`SimObserver`] that streams step records to any [`OutputWriter`]
/// backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step(&mut self, step: &SimulationStep) {
        let result = self.writer.write_step(step);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _steps: &[SimulationStep]) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
