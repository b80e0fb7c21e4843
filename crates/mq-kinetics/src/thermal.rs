//! Thermal relaxation — Newton's law of cooling.

/// Heat-exchange coefficient (per hour).
pub const K_COOL: f64 = 0.3;

/// Instantaneous rate of product-temperature change (°C per hour) toward the
/// ambient temperature sampled for this step.
///
/// Negative when the product is warmer than the environment.  With the fixed
/// integration step of 0.5 h the product relaxes geometrically toward ambient
/// and never overshoots (the per-step contraction factor is `1 − 0.15`).
#[inline]
pub fn cooling_rate(t_prod: f64, t_env: f64) -> f64 {
    -K_COOL * (t_prod - t_env)
}
