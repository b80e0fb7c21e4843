//! `mq-core` — foundational types for the meat-quality simulation workspace.
//!
//! This crate is a dependency of every other `mq-*` crate.  It intentionally
//! has no `mq-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`config`] | `SimulationConfig`, `ScenarioKind`, scenario presets  |
//! | [`time`]   | `DT_HOURS`, `TimeGrid`                                |
//! | [`rng`]    | `NoiseSource`, `NoiseRng`, `ZeroNoise`                |
//! | [`step`]   | `SimulationStep` output record                        |
//! | [`error`]  | `MqError`, `MqResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod rng;
pub mod step;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ScenarioKind, SimulationConfig};
pub use error::{MqError, MqResult};
pub use rng::{NoiseRng, NoiseSource, ZeroNoise};
pub use step::SimulationStep;
pub use time::{DT_HOURS, TimeGrid};
