//! `mq-kinetics` — the empirical rate laws driving meat-quality decay.
//!
//! Every function here is pure: explicit numeric arguments in, an
//! instantaneous rate (or coefficient, or index) out.  The driver in `mq-sim`
//! owns integration and ordering; these functions own nothing but the
//! formulas, so they can be unit-tested without constructing a full run.
//!
//! | Module       | Rate law                                              |
//! |--------------|-------------------------------------------------------|
//! | [`thermal`]  | Newton cooling of product toward ambient              |
//! | [`microbial`]| Logistic bacterial growth, temperature-gated          |
//! | [`moisture`] | Packaging-scaled drying against a humidity gradient   |
//! | [`chemical`] | Arrhenius-style protein/fat integrity decay           |
//! | [`quality`]  | Aggregate quality index over density and integrity    |
//!
//! The formulas are empirical fits; none of the named physical models
//! (Ratkowsky, Arrhenius) are load-bearing beyond the coefficients used.
//! Reproducing them exactly — including the deliberate absence of a lower
//! clamp on chemical integrity — is the contract.

pub mod chemical;
pub mod microbial;
pub mod moisture;
pub mod quality;
pub mod thermal;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use chemical::{DecayTarget, decay_coefficient, decay_integrity};
pub use microbial::{INITIAL_MICROBES, MAX_MICROBES, grow_microbes, growth_rate};
pub use moisture::moisture_loss_rate;
pub use quality::{SPOILAGE_THRESHOLD, quality_index};
pub use thermal::cooling_rate;
