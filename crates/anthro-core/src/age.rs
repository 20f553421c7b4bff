//! Age and measuring-position helpers.

use anthro_model::{GrowthError, MeasuredPosition, Result};
use chrono::NaiveDate;

/// WHO average month length in days (365.25 / 12).
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Age at which WHO switches from recumbent length to standing height.
pub const LENGTH_TO_HEIGHT_MONTHS: f64 = 24.0;

/// Average difference between recumbent length and standing height.
pub const POSITION_OFFSET_CM: f64 = 0.7;

/// Fractional age in months between two dates.
pub fn age_in_months(birth: NaiveDate, measured_on: NaiveDate) -> Result<f64> {
    if measured_on < birth {
        return Err(GrowthError::InvalidDates { birth, measured_on });
    }
    let days = (measured_on - birth).num_days();
    Ok(days as f64 / DAYS_PER_MONTH)
}

/// Converts a length/height to the position the reference expects at `age`.
///
/// Below 24 months the reference is recumbent length, so a standing height
/// gains 0.7 cm. From 24 months it is standing height, so a recumbent length
/// loses 0.7 cm.
pub fn adjust_for_position(age_months: f64, value: f64, position: MeasuredPosition) -> f64 {
    match position {
        MeasuredPosition::Standing if age_months < LENGTH_TO_HEIGHT_MONTHS => {
            value + POSITION_OFFSET_CM
        }
        MeasuredPosition::Recumbent if age_months >= LENGTH_TO_HEIGHT_MONTHS => {
            value - POSITION_OFFSET_CM
        }
        _ => value,
    }
}
