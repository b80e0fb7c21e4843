//! The per-step output record.

/// One sample of the simulation time series, immutable once created.
///
/// Values are rounded to fixed decimal precision at record-assembly time;
/// rounding is a presentation concern of the record only.  The driver's
/// internal running state keeps full precision across steps, so rounding
/// error never compounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationStep {
    /// Simulated time (hours, 1 decimal).
    pub time: f64,
    /// Sampled ambient temperature (°C, 2 decimals).
    pub t_env: f64,
    /// Product temperature (°C, 2 decimals).
    pub t_prod: f64,
    /// Sampled ambient humidity (%, 1 decimal).
    pub humidity: f64,
    /// Microbial density (CFU/g, nearest integer).
    pub microbes: f64,
    /// Product moisture (%, 2 decimals).
    pub moisture: f64,
    /// Protein integrity (%, 2 decimals).
    pub protein: f64,
    /// Fat oxidation, i.e. `100 − fat integrity` (%, 2 decimals).
    pub fat_oxidation: f64,
    /// Aggregate quality index in `[0, 1]` (2 decimals).
    pub quality_index: f64,
}

/// Round to 1 decimal place.
#[inline]
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to 2 decimal places.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
