//! Microbial growth — logistic growth with a temperature-gated rate.

/// Seed bacterial density at time 0 (CFU/g), and the hard floor the
/// population never drops below.  Models an irreducible baseline population,
/// not measurement noise.
pub const INITIAL_MICROBES: f64 = 1_000.0;

/// Logistic carrying capacity of the medium (CFU/g).
pub const MAX_MICROBES: f64 = 1.0e8;

/// Temperature below which growth stops entirely (°C).
pub const GROWTH_CUTOFF_C: f64 = -2.0;

/// Specific growth rate μ(T) (per hour).
///
/// Empirical Ratkowsky/Arrhenius-style fit: effectively dormant near 0 °C,
/// fast at 20–30 °C.  Exactly zero below the cutoff.
#[inline]
pub fn growth_rate(temp_c: f64) -> f64 {
    if temp_c < GROWTH_CUTOFF_C {
        return 0.0;
    }
    0.05 * (0.12 * temp_c).exp()
}

/// One Euler step of logistic growth, with the floor clamp applied.
///
/// `dN/dt = μ(T) · N · (1 − N / N_max)`.  The caller passes the *updated*
/// product temperature for the step; that ordering is part of the model.
/// There is no upper clamp beyond the logistic term itself.
#[inline]
pub fn grow_microbes(microbes: f64, temp_c: f64, dt_hours: f64) -> f64 {
    let mu = growth_rate(temp_c);
    let logistic = 1.0 - microbes / MAX_MICROBES;
    let delta = mu * microbes * logistic * dt_hours;
    (microbes + delta).max(INITIAL_MICROBES)
}
