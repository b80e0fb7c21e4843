//! Storage-scenario configuration.
//!
//! A [`SimulationConfig`] is supplied by an external collaborator (the
//! scenario catalog or an interactive editor) and is read-only input to the
//! driver.  The driver performs no validation of its own; collaborators that
//! construct configurations by hand can call [`SimulationConfig::validate`].

use std::fmt;
use std::str::FromStr;

use crate::{MqError, MqResult};

// ── ScenarioKind ──────────────────────────────────────────────────────────────

/// The built-in storage scenarios.
///
/// Most behavior is driven purely by the numeric fields of
/// [`SimulationConfig`]; the kind itself matters to the engine only through
/// [`is_cyclic`][ScenarioKind::is_cyclic], which selects the sinusoidal
/// environment-temperature override.  Keeping that coupling on a tagged
/// variant (rather than inferring it from a free-text name) makes it explicit
/// and testable in isolation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScenarioKind {
    /// Standard household refrigeration at +4 °C.
    ColdStorage,
    /// Storage at the edge of freezing (0…1 °C).
    Superchilling,
    /// Refrigeration failure: a temperature spike partway through the run.
    TempAbuse,
    /// An aging refrigerator with large hysteresis — the ambient temperature
    /// oscillates sinusoidally around its target.
    Fluctuation,
    /// Vacuum packaging: near-ideal oxygen and moisture barrier.
    Vacuum,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 5] = [
        ScenarioKind::ColdStorage,
        ScenarioKind::Superchilling,
        ScenarioKind::TempAbuse,
        ScenarioKind::Fluctuation,
        ScenarioKind::Vacuum,
    ];

    /// Whether this scenario adds the cyclic `3·sin(0.5·t)` term to the
    /// sampled environment temperature.
    #[inline]
    pub fn is_cyclic(self) -> bool {
        matches!(self, ScenarioKind::Fluctuation)
    }

    /// Human-readable scenario name.
    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::ColdStorage   => "Standard cold storage",
            ScenarioKind::Superchilling => "Superchilling",
            ScenarioKind::TempAbuse     => "Temperature abuse",
            ScenarioKind::Fluctuation   => "Unstable refrigeration",
            ScenarioKind::Vacuum        => "Vacuum packaging",
        }
    }

    /// The canonical configuration for this scenario.
    pub fn preset(self) -> SimulationConfig {
        match self {
            // Ideal conditions at +4 °C, 7 days.
            ScenarioKind::ColdStorage => SimulationConfig {
                scenario:         self,
                initial_temp:     10.0,
                target_env_temp:  4.0,
                base_humidity:    85.0,
                temp_fluctuation: 0.5,
                temp_spike_hour:  None,
                temp_spike_value: None,
                packaging_factor: 0.8,
                duration_hours:   168.0,
            },
            // At the edge of freezing, 10 days.
            ScenarioKind::Superchilling => SimulationConfig {
                scenario:         self,
                initial_temp:     4.0,
                target_env_temp:  0.5,
                base_humidity:    85.0,
                temp_fluctuation: 0.2,
                temp_spike_hour:  None,
                temp_spike_value: None,
                packaging_factor: 0.8,
                duration_hours:   240.0,
            },
            // Spike to +15 °C at hour 12, 3 days.
            ScenarioKind::TempAbuse => SimulationConfig {
                scenario:         self,
                initial_temp:     4.0,
                target_env_temp:  4.0,
                base_humidity:    85.0,
                temp_fluctuation: 0.5,
                temp_spike_hour:  Some(12.0),
                temp_spike_value: Some(15.0),
                packaging_factor: 0.8,
                duration_hours:   72.0,
            },
            // Mean above target, sinusoidal wander, 5 days.
            ScenarioKind::Fluctuation => SimulationConfig {
                scenario:         self,
                initial_temp:     4.0,
                target_env_temp:  6.0,
                base_humidity:    80.0,
                temp_fluctuation: 1.0,
                temp_spike_hour:  None,
                temp_spike_value: None,
                packaging_factor: 0.8,
                duration_hours:   120.0,
            },
            // Near-ideal barrier, 14 days.
            ScenarioKind::Vacuum => SimulationConfig {
                scenario:         self,
                initial_temp:     4.0,
                target_env_temp:  4.0,
                base_humidity:    85.0,
                temp_fluctuation: 0.5,
                temp_spike_hour:  None,
                temp_spike_value: None,
                packaging_factor: 0.05,
                duration_hours:   336.0,
            },
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScenarioKind::ColdStorage   => "cold_storage",
            ScenarioKind::Superchilling => "superchilling",
            ScenarioKind::TempAbuse     => "temp_abuse",
            ScenarioKind::Fluctuation   => "fluctuation",
            ScenarioKind::Vacuum        => "vacuum",
        };
        f.write_str(s)
    }
}

impl FromStr for ScenarioKind {
    type Err = MqError;

    fn from_str(s: &str) -> MqResult<Self> {
        match s {
            "cold_storage"  => Ok(ScenarioKind::ColdStorage),
            "superchilling" => Ok(ScenarioKind::Superchilling),
            "temp_abuse"    => Ok(ScenarioKind::TempAbuse),
            "fluctuation"   => Ok(ScenarioKind::Fluctuation),
            "vacuum"        => Ok(ScenarioKind::Vacuum),
            other           => Err(MqError::UnknownScenario(other.to_string())),
        }
    }
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Immutable per-run configuration.
///
/// All temperatures are °C, humidity and moisture are percentages, times are
/// simulated hours.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Scenario identity; the engine only consults [`ScenarioKind::is_cyclic`].
    pub scenario: ScenarioKind,

    /// Product temperature at time 0 (°C).
    pub initial_temp: f64,

    /// Target ambient temperature the environment fluctuates around (°C).
    pub target_env_temp: f64,

    /// Base ambient relative humidity (%).
    pub base_humidity: f64,

    /// Amplitude of the uniform ambient-temperature noise (± °C).
    pub temp_fluctuation: f64,

    /// Hour at which an ambient-temperature spike begins, if any.  The spike
    /// lasts 4 hours and replaces the base sample.  Must be paired with
    /// `temp_spike_value`.
    pub temp_spike_hour: Option<f64>,

    /// Ambient temperature during the spike window (°C).
    pub temp_spike_value: Option<f64>,

    /// Packaging barrier quality in `[0, 1]`: 0 = hermetic/vacuum, 1 = fully
    /// open.  Scales moisture loss linearly and fat-oxidation oxygen exposure
    /// affinely.
    pub packaging_factor: f64,

    /// Total simulated duration (hours).  The step grid is inclusive of the
    /// endpoint when it lands on the grid.
    pub duration_hours: f64,
}

impl SimulationConfig {
    /// The ambient-temperature override for the spike window, if one applies
    /// at `time_h`.  Returns the spike target; the driver adds its own
    /// reduced-amplitude noise on top.
    #[inline]
    pub fn spike_override(&self, time_h: f64) -> Option<f64> {
        match (self.temp_spike_hour, self.temp_spike_value) {
            (Some(hour), Some(value)) if time_h >= hour && time_h <= hour + 4.0 => Some(value),
            _ => None,
        }
    }

    /// Collaborator-side invariant check.
    ///
    /// The driver itself never calls this: a malformed configuration yields
    /// degenerate but well-defined output (e.g. an empty step sequence for a
    /// negative duration) rather than a fault.
    pub fn validate(&self) -> MqResult<()> {
        if self.duration_hours < 0.0 {
            return Err(MqError::Config(format!(
                "duration_hours must be >= 0, got {}",
                self.duration_hours
            )));
        }
        if !(0.0..=1.0).contains(&self.packaging_factor) {
            return Err(MqError::Config(format!(
                "packaging_factor must be in [0, 1], got {}",
                self.packaging_factor
            )));
        }
        if self.temp_spike_hour.is_some() != self.temp_spike_value.is_some() {
            return Err(MqError::Config(
                "temp_spike_hour and temp_spike_value must be set together".to_string(),
            ));
        }
        Ok(())
    }
}
