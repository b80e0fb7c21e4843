//! Simulation time grid.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing step index.  The mapping
//! to simulated hours is fixed:
//!
//!   hours = step_index * DT_HOURS
//!
//! Using an integer index as the canonical time unit means the grid arithmetic
//! is exact (no floating-point accumulation drift across long runs) while the
//! emitted records still carry time in hours.
//!
//! The grid is inclusive at both ends: a step lands exactly at
//! `duration_hours` when the duration is a multiple of `DT_HOURS`, and a
//! zero-hour run still yields the single step at time 0.  A negative duration
//! yields an empty grid.

/// Integration step size in simulated hours.
pub const DT_HOURS: f64 = 0.5;

/// The inclusive fixed-step time grid `0, 0.5, …, ≤ duration_hours`.
///
/// `TimeGrid` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGrid {
    duration_hours: f64,
}

impl TimeGrid {
    pub fn new(duration_hours: f64) -> Self {
        Self { duration_hours }
    }

    /// Number of steps on the grid (0 for a negative duration).
    pub fn step_count(&self) -> usize {
        if self.duration_hours < 0.0 {
            return 0;
        }
        (self.duration_hours / DT_HOURS).floor() as usize + 1
    }

    /// Simulated time in hours at step `index`.
    #[inline]
    pub fn hours(index: usize) -> f64 {
        index as f64 * DT_HOURS
    }

    /// Iterate over `(index, hours)` pairs, time-ascending.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> {
        (0..self.step_count()).map(|i| (i, Self::hours(i)))
    }
}
