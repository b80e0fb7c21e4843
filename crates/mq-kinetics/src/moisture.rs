//! Moisture diffusion — packaging-scaled drying against a humidity gradient.

/// Base drying coefficient at fully open packaging (per hour).
pub const K_DRY_BASE: f64 = 0.005;

/// Instantaneous moisture-loss rate (percentage points per hour).
///
/// Driving force is `moisture − humidity / 2`; when it is zero or negative
/// the rate is exactly zero — no moisture gain is modeled.  More open
/// packaging (higher factor) dries the product linearly faster.
#[inline]
pub fn moisture_loss_rate(moisture: f64, humidity: f64, packaging_factor: f64) -> f64 {
    let driving_force = moisture - humidity / 2.0;
    if driving_force <= 0.0 {
        return 0.0;
    }
    let k_dry = K_DRY_BASE * packaging_factor;
    -k_dry * driving_force
}
