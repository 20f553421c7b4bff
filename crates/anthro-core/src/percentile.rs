//! Percentile equivalents of SD scores.

use anthro_model::{GrowthError, Indicator, Result, StatusLabel};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::classify::classify;

/// Percentile (0..100) of an SD score under the standard normal.
pub fn percentile(z: f64) -> f64 {
    100.0 * Normal::standard().cdf(z)
}

/// SD score at a percentile. `p` must lie strictly between 0 and 100.
pub fn z_for_percentile(p: f64) -> Result<f64> {
    if p.is_nan() || p <= 0.0 || p >= 100.0 {
        return Err(GrowthError::InvalidPercentile { value: p });
    }
    Ok(Normal::standard().inverse_cdf(p / 100.0))
}

/// Status for a measurement reported as a percentile.
pub fn classify_percentile(indicator: Indicator, p: f64) -> Result<StatusLabel> {
    Ok(classify(indicator, z_for_percentile(p)?))
}
