//! The `Sim` struct and its step loop.

use mq_core::step::{round1, round2};
use mq_core::{DT_HOURS, NoiseRng, NoiseSource, SimulationConfig, SimulationStep, TimeGrid};
use mq_kinetics::{
    DecayTarget, cooling_rate, decay_integrity, grow_microbes, moisture_loss_rate, quality_index,
};

use crate::{NoopObserver, SimObserver, SimulationState};

/// Residual jitter amplitude during a temperature-spike window (°C).
const SPIKE_NOISE_C: f64 = 0.5;

/// Humidity sensor noise amplitude (%), independent of configuration.
const HUMIDITY_NOISE_PCT: f64 = 5.0;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner for one configuration.
///
/// `Sim<N>` owns the running state and the injected noise source for the
/// lifetime of one run.  [`run`][Sim::run] consumes the `Sim`: a run is an
/// atomic unit of work, and a second run starts from a fresh time-zero state
/// by constructing a new `Sim`.  Independent runs share nothing and may be
/// executed in parallel by a caller (see [`run_batch`][crate::run_batch]).
pub struct Sim<N: NoiseSource> {
    /// Read-only scenario configuration.
    pub config: SimulationConfig,

    /// The running state, replaced wholesale each step.
    pub state: SimulationState,

    /// The single source of per-step randomness.
    noise: N,
}

impl<N: NoiseSource> Sim<N> {
    /// Create a runner at the fixed time-zero state for `config`.
    pub fn new(config: SimulationConfig, noise: N) -> Self {
        let state = SimulationState::initial(&config);
        Self { config, state, noise }
    }

    /// Run to completion and return the ordered step sequence.
    ///
    /// Emits one record per grid time in `0, 0.5, …, ≤ duration_hours`
    /// (empty for a negative duration — the driver performs no validation).
    /// Observer hooks fire per record and once at the end; use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> Vec<SimulationStep> {
        let grid = TimeGrid::new(self.config.duration_hours);
        let mut steps = Vec::with_capacity(grid.step_count());

        for (_, time) in grid.iter() {
            let step = self.advance(time);
            observer.on_step(&step);
            steps.push(step);
        }

        observer.on_run_end(&steps);
        steps
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// Advance the state across one `Δt` and emit the rounded record.
    fn advance(&mut self, time: f64) -> SimulationStep {
        let config = &self.config;
        let prev = self.state;

        // ── Virtual sensors ───────────────────────────────────────────────
        //
        // Base ambient sample, then the two scenario overrides in order: a
        // spike window REPLACES the base sample (keeping only a small
        // residual jitter); the cyclic term is ADDITIVE and composes with
        // the spike when both apply.
        let mut t_env = config.target_env_temp + self.noise.sample(config.temp_fluctuation);
        if let Some(spike) = config.spike_override(time) {
            t_env = spike + self.noise.sample(SPIKE_NOISE_C);
        }
        if config.scenario.is_cyclic() {
            t_env += 3.0 * (0.5 * time).sin();
        }
        let humidity = config.base_humidity + self.noise.sample(HUMIDITY_NOISE_PCT);

        // ── Rate laws, in fixed order ─────────────────────────────────────
        //
        // Growth and both decays use the UPDATED product temperature; each
        // law otherwise reads the previous state.  The ordering is part of
        // the model contract.
        let t_prod = prev.t_prod + cooling_rate(prev.t_prod, t_env) * DT_HOURS;

        let microbes = grow_microbes(prev.microbes, t_prod, DT_HOURS);

        let moisture = prev.moisture
            + moisture_loss_rate(prev.moisture, humidity, config.packaging_factor) * DT_HOURS;

        let protein = decay_integrity(
            prev.protein, t_prod, DecayTarget::Protein, config.packaging_factor, DT_HOURS,
        );
        let fat = decay_integrity(
            prev.fat, t_prod, DecayTarget::Fat, config.packaging_factor, DT_HOURS,
        );

        let quality = quality_index(microbes, protein, fat);

        // ── Wholesale state replacement + rounded snapshot ────────────────
        self.state = SimulationState { t_env, t_prod, microbes, moisture, protein, fat };

        SimulationStep {
            time:          round1(time),
            t_env:         round2(t_env),
            t_prod:        round2(t_prod),
            humidity:      round1(humidity),
            microbes:      microbes.round(),
            moisture:      round2(moisture),
            protein:       round2(protein),
            fat_oxidation: round2(100.0 - fat),
            quality_index: round2(quality),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run `config` to completion with a seeded production noise source.
///
/// This is the engine's one external entry point: configuration in, ordered
/// step sequence out.  The same `(config, seed)` pair always produces an
/// identical sequence.
pub fn run_simulation(config: &SimulationConfig, seed: u64) -> Vec<SimulationStep> {
    Sim::new(config.clone(), NoiseRng::new(seed)).run(&mut NoopObserver)
}
