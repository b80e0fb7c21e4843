//! `mq-sim` — the fixed-step driver for the meat-quality decay model.
//!
//! # Per-step algorithm
//!
//! ```text
//! for each grid time t in 0, 0.5, …, ≤ duration_hours:
//!   ① Sample ambient temperature: target + noise(fluctuation),
//!      replaced by the spike target (+ noise(0.5)) inside a spike window,
//!      then += 3·sin(0.5·t) for cyclic scenarios.
//!   ② Sample ambient humidity: base + noise(5).
//!   ③ Thermal relaxation     → new product temperature.
//!   ④ Microbial growth       → new density (uses the NEW temperature; floored).
//!   ⑤ Moisture diffusion     → new moisture.
//!   ⑥ Chemical decay ×2      → new protein and fat integrity.
//!   ⑦ Quality index, wholesale state replacement, emit rounded record.
//! ```
//!
//! The loop is synchronous and owns its state exclusively; one call, one
//! complete run.  The only non-determinism is the injected [`NoiseSource`],
//! so substituting [`ZeroNoise`][mq_core::ZeroNoise] (or reusing a seed)
//! reproduces a run exactly.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mq_core::ScenarioKind;
//! use mq_sim::run_simulation;
//!
//! let steps = run_simulation(&ScenarioKind::ColdStorage.preset(), 42);
//! ```

pub mod batch;
pub mod observer;
pub mod sim;
pub mod state;


pub use batch::run_batch;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, run_simulation};
pub use state::SimulationState;
