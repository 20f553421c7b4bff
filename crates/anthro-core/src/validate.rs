//! Input checks applied before scoring.

use anthro_model::{GrowthError, Indicator, InvalidReason, Result};

/// Rejects values that cannot be a real measurement for the indicator.
/// Values are never clamped.
pub fn validate_value(indicator: Indicator, value: f64) -> Result<()> {
    let reason = if !value.is_finite() {
        Some(InvalidReason::NonFinite)
    } else if value <= 0.0 {
        Some(InvalidReason::NotPositive)
    } else {
        let (min, max) = indicator.value_range();
        if value < min {
            Some(InvalidReason::BelowRange { min })
        } else if value > max {
            Some(InvalidReason::AboveRange { max })
        } else {
            None
        }
    };

    match reason {
        Some(reason) => Err(GrowthError::InvalidMeasurement {
            indicator,
            value,
            reason,
        }),
        None => Ok(()),
    }
}

/// Rejects an `x` outside the indicator's declared domain.
pub fn validate_x(indicator: Indicator, x: f64) -> Result<()> {
    let (min, max) = indicator.domain();
    if x.is_finite() && x >= min && x <= max {
        Ok(())
    } else {
        Err(GrowthError::out_of_domain(indicator, x))
    }
}
