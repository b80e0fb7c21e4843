//! Batch execution of independent configurations.
//!
//! Each run owns its configuration, state, and a child-seeded noise source,
//! so no synchronisation is needed.  The `parallel` Cargo feature moves the
//! map onto Rayon's thread pool; because child seeds depend only on the batch
//! seed and the run's index, results are identical either way.

use mq_core::{NoiseRng, SimulationConfig, SimulationStep};

use crate::{NoopObserver, Sim};

/// Run every configuration to completion, one independent run each.
///
/// Run `i` uses the seed derived from `(batch_seed, i)`, so appending
/// configurations to the batch never perturbs earlier runs' output.
pub fn run_batch(configs: &[SimulationConfig], batch_seed: u64) -> Vec<Vec<SimulationStep>> {
    #[cfg(not(feature = "parallel"))]
    {
        configs
            .iter()
            .enumerate()
            .map(|(i, config)| run_one(config, batch_seed, i as u64))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs
            .par_iter()
            .enumerate()
            .map(|(i, config)| run_one(config, batch_seed, i as u64))
            .collect()
    }
}

fn run_one(config: &SimulationConfig, batch_seed: u64, index: u64) -> Vec<SimulationStep> {
    let noise = NoiseRng::child(batch_seed, index);
    Sim::new(config.clone(), noise).run(&mut NoopObserver)
}
