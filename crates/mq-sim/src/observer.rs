//! Simulation observer trait for progress reporting and data collection.

use mq_core::SimulationStep;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step(&mut self, step: &SimulationStep) {
///         if step.time % 24.0 == 0.0 {
///             println!("t={:>6.1} h  Q={:.2}", step.time, step.quality_index);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per emitted step record, in time-ascending order.
    fn on_step(&mut self, _step: &SimulationStep) {}

    /// Called once after the final step, with the complete sequence.
    fn on_run_end(&mut self, _steps: &[SimulationStep]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
