//! Aggregate quality index Q(t).

use crate::microbial::INITIAL_MICROBES;

/// Microbial density at which the product counts as spoiled (CFU/g).
///
/// Shared by the quality index and the consumer-side spoilage scan so the
/// two always agree.
pub const SPOILAGE_THRESHOLD: f64 = 1.0e7;

/// Weighting of the microbial term vs. the chemical term in Q.
const MICROBE_WEIGHT: f64 = 0.8;
const CHEMICAL_WEIGHT: f64 = 0.2;

/// Spoilage-proximity index in `[0, 1]`: 1 at the seed density, 0 at (or
/// beyond) the spoilage threshold, log-linear in between.
#[inline]
pub fn microbe_index(microbes: f64) -> f64 {
    let span = SPOILAGE_THRESHOLD.log10() - INITIAL_MICROBES.log10();
    let progress = (microbes.log10() - INITIAL_MICROBES.log10()) / span;
    (1.0 - progress).max(0.0)
}

/// Mean of the two integrity pools, mapped to `[0, 1]` at full integrity.
///
/// Not clamped below: integrities have no floor, so with extreme inputs this
/// term can go negative (a known, preserved edge case).
#[inline]
pub fn chemical_index(protein: f64, fat: f64) -> f64 {
    (protein + fat) / 200.0
}

/// Blended quality index, clamped at 0.  1.0 is pristine.
#[inline]
pub fn quality_index(microbes: f64, protein: f64, fat: f64) -> f64 {
    let q = MICROBE_WEIGHT * microbe_index(microbes) + CHEMICAL_WEIGHT * chemical_index(protein, fat);
    q.max(0.0)
}
