//! Deterministic sensor-noise sources.
//!
//! # Determinism strategy
//!
//! The driver draws one temperature and one humidity perturbation per step
//! from a single [`NoiseSource`].  Keeping that source behind a trait means:
//!
//! - Production runs seed a [`NoiseRng`] from entropy (or a recorded seed)
//!   and get realistic sensor jitter.
//! - Tests substitute [`ZeroNoise`] and get byte-identical output for
//!   identical configurations.
//! - Batch runs derive one child seed per configuration, so adding or
//!   removing configurations at the end of the batch does not disturb the
//!   seeds of existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Derive a per-run seed from a batch-level seed and a run index.
///
/// The mixing constant spreads consecutive indices uniformly across the seed
/// space, so adjacent runs never share RNG state.
#[inline]
pub fn child_seed(batch_seed: u64, index: u64) -> u64 {
    batch_seed ^ index.wrapping_mul(MIXING_CONSTANT)
}

// ── NoiseSource ───────────────────────────────────────────────────────────────

/// A source of symmetric sensor noise.
///
/// `sample(a)` draws uniformly from `[-a, a]`.  This is the single injection
/// point for all randomness in a run: substitute a deterministic
/// implementation to make runs reproducible.
pub trait NoiseSource {
    /// Draw a perturbation uniformly from `[-amplitude, amplitude]`.
    fn sample(&mut self, amplitude: f64) -> f64;
}

// ── NoiseRng ──────────────────────────────────────────────────────────────────

/// Seedable production noise source backed by `SmallRng`.
///
/// The same seed always produces the same perturbation sequence.
pub struct NoiseRng(SmallRng);

impl NoiseRng {
    pub fn new(seed: u64) -> Self {
        NoiseRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `NoiseRng` for run `index` of a batch seeded with
    /// `batch_seed`.
    pub fn child(batch_seed: u64, index: u64) -> Self {
        NoiseRng::new(child_seed(batch_seed, index))
    }
}

impl NoiseSource for NoiseRng {
    #[inline]
    fn sample(&mut self, amplitude: f64) -> f64 {
        // gen_range panics on an empty range; a zero amplitude is a valid
        // configuration (fluctuation disabled) and must sample exactly 0.
        if amplitude <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-amplitude..=amplitude)
    }
}

// ── ZeroNoise ─────────────────────────────────────────────────────────────────

/// A [`NoiseSource`] that always returns 0.  Use in tests to make the
/// environment sampling fully deterministic.
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    #[inline]
    fn sample(&mut self, _amplitude: f64) -> f64 {
        0.0
    }
}
