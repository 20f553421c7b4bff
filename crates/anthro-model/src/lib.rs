//! Data model for the WHO child growth standards engine.

pub mod enums;
pub mod error;
pub mod lms;
pub mod measurement;
pub mod options;
pub mod status;

pub use enums::{Axis, Indicator, MeasuredPosition, Sex};
pub use error::{GrowthError, InvalidReason, Result};
pub use lms::{Lms, LmsRow};
pub use measurement::{ClassificationResult, Measurement, ReferenceCurvePoint};
pub use options::ClassificationOptions;
pub use status::StatusLabel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_point_values_are_ordered_by_sd() {
        let point = ReferenceCurvePoint {
            x: 12.0,
            sd3neg: 1.0,
            sd2neg: 2.0,
            sd1neg: 3.0,
            median: 4.0,
            sd1pos: 5.0,
            sd2pos: 6.0,
            sd3pos: 7.0,
        };
        assert_eq!(point.values(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn error_messages_name_the_indicator() {
        let error = GrowthError::out_of_domain(Indicator::WeightForLength, 120.0);
        assert_eq!(
            error.to_string(),
            "weight-for-length/height has no reference data at x = 120 (covered range 45..=110)"
        );
    }
}
