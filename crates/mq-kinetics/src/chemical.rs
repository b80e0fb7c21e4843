//! Chemical decay — Arrhenius-style degradation of protein and fat integrity.

/// Celsius → Kelvin offset.
const KELVIN_OFFSET: f64 = 273.15;

/// Arrhenius exponent numerator (K).
const ACTIVATION_SCALE: f64 = 4_000.0;

/// Pre-exponential normalisation for the simulation's time scale.
const BASE_SCALE: f64 = 10_000.0;

/// Per-target scale: protein hydrolyses slowly, fat degrades roughly 5×
/// faster per unit of base coefficient.
const PROTEIN_SCALE: f64 = 0.01;
const FAT_SCALE: f64 = 0.05;

/// Which integrity pool a decay coefficient applies to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DecayTarget {
    Protein,
    Fat,
}

impl DecayTarget {
    /// Oxygen-exposure factor.  Fat oxidation is suppressed under hermetic
    /// packaging; protein hydrolysis is not packaging-sensitive in this model.
    #[inline]
    fn oxygen_factor(self, packaging_factor: f64) -> f64 {
        match self {
            DecayTarget::Protein => 1.0,
            DecayTarget::Fat     => 0.2 + 0.8 * packaging_factor,
        }
    }

    #[inline]
    fn scale(self) -> f64 {
        match self {
            DecayTarget::Protein => PROTEIN_SCALE,
            DecayTarget::Fat     => FAT_SCALE,
        }
    }
}

/// Scaled decay-rate coefficient `k` (per hour) for the given target at the
/// updated product temperature.
#[inline]
pub fn decay_coefficient(temp_c: f64, target: DecayTarget, packaging_factor: f64) -> f64 {
    let t_kelvin = temp_c + KELVIN_OFFSET;
    let k = (-ACTIVATION_SCALE / t_kelvin).exp() * BASE_SCALE * target.oxygen_factor(packaging_factor);
    k * target.scale()
}

/// One Euler step of proportional integrity decay:
/// `integrity − k · integrity · Δt`.
///
/// No floor is enforced.  Over modeled durations the value stays positive
/// empirically; the clamp is deliberately absent to keep output reproducible
/// against the reference formulas.
#[inline]
pub fn decay_integrity(
    integrity: f64,
    temp_c: f64,
    target: DecayTarget,
    packaging_factor: f64,
    dt_hours: f64,
) -> f64 {
    let k = decay_coefficient(temp_c, target, packaging_factor);
    integrity - k * integrity * dt_hours
}
