//! The driver's running state.

use mq_core::SimulationConfig;
use mq_kinetics::INITIAL_MICROBES;

/// Initial product moisture (%).
pub const INITIAL_MOISTURE: f64 = 74.0;

/// Initial protein / fat integrity (%, relative).
pub const INITIAL_INTEGRITY: f64 = 100.0;

/// The evolving state of one run.
///
/// Owned exclusively by the driver and replaced wholesale each step — never
/// partially mutated — so each step is a pure function of the previous state
/// plus that step's sampled environment.  Full precision is kept throughout;
/// rounding happens only when a record is emitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    /// Ambient temperature as sampled for the most recent step (°C).
    pub t_env: f64,
    /// Product temperature (°C).
    pub t_prod: f64,
    /// Microbial density (CFU/g), never below the seed floor.
    pub microbes: f64,
    /// Product moisture (%).
    pub moisture: f64,
    /// Protein integrity (%).
    pub protein: f64,
    /// Fat integrity (%).
    pub fat: f64,
}

impl SimulationState {
    /// The fixed time-zero state for a configuration.
    pub fn initial(config: &SimulationConfig) -> Self {
        Self {
            t_env:    config.target_env_temp,
            t_prod:   config.initial_temp,
            microbes: INITIAL_MICROBES,
            moisture: INITIAL_MOISTURE,
            protein:  INITIAL_INTEGRITY,
            fat:      INITIAL_INTEGRITY,
        }
    }
}
