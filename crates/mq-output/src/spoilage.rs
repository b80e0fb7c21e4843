//! Spoilage detection over a finished step sequence.
//!
//! This is a thin consumer-side reduction, not part of the driver's own
//! contract — but its threshold is the same `SPOILAGE_THRESHOLD` that feeds
//! the quality index, so the spoilage flag and the index always agree.

use mq_core::{ScenarioKind, SimulationStep};
use mq_kinetics::SPOILAGE_THRESHOLD;

/// The time (hours) of the first step whose microbial density reaches the
/// spoilage threshold, or `None` if the run never spoils.
pub fn spoilage_time(steps: &[SimulationStep]) -> Option<f64> {
    steps
        .iter()
        .find(|step| step.microbes >= SPOILAGE_THRESHOLD)
        .map(|step| step.time)
}

/// Per-run summary handed to presentation collaborators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpoilageReport {
    /// Which scenario produced the run.
    pub scenario: ScenarioKind,
    /// First time at or past the spoilage threshold; `None` = no spoilage.
    pub spoilage_hours: Option<f64>,
    /// Quality index of the final step (1.0 for an empty run).
    pub final_quality: f64,
}

impl SpoilageReport {
    pub fn from_steps(scenario: ScenarioKind, steps: &[SimulationStep]) -> Self {
        Self {
            scenario,
            spoilage_hours: spoilage_time(steps),
            final_quality:  steps.last().map_or(1.0, |s| s.quality_index),
        }
    }

    /// Whether the run crossed the spoilage threshold at all.
    pub fn spoiled(&self) -> bool {
        self.spoilage_hours.is_some()
    }
}
