use chrono::NaiveDate;
use thiserror::Error;

use crate::enums::Indicator;

/// Why a measured value was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidReason {
    NonFinite,
    NotPositive,
    BelowRange { min: f64 },
    AboveRange { max: f64 },
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::NonFinite => write!(f, "value is not a finite number"),
            InvalidReason::NotPositive => write!(f, "value must be greater than zero"),
            InvalidReason::BelowRange { min } => write!(f, "value is below the minimum of {min}"),
            InvalidReason::AboveRange { max } => write!(f, "value is above the maximum of {max}"),
        }
    }
}

/// Errors returned by growth-standard calculations.
///
/// None of these are ever mapped to a default status; callers decide how to
/// present them.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GrowthError {
    /// Measured value is not usable for the indicator.
    #[error("invalid {indicator} measurement {value}: {reason}")]
    InvalidMeasurement {
        indicator: Indicator,
        value: f64,
        reason: InvalidReason,
    },

    /// Requested x is not covered by the reference table.
    #[error("{indicator} has no reference data at x = {x} (covered range {min}..={max})")]
    OutOfDomain {
        indicator: Indicator,
        x: f64,
        min: f64,
        max: f64,
    },

    /// An indicator, sex or position string that does not name a known value.
    #[error("unknown {kind}: '{value}'")]
    UnknownIndicatorOrSex { kind: &'static str, value: String },

    /// Curve range is reversed or cannot be sampled with the given step count.
    #[error("invalid curve range {start}..={end} with {step_count} steps")]
    InvalidRange {
        start: f64,
        end: f64,
        step_count: usize,
    },

    /// Percentile must lie strictly between 0 and 100.
    #[error("percentile {value} is outside (0, 100)")]
    InvalidPercentile { value: f64 },

    /// Measurement date precedes the date of birth.
    #[error("measurement date {measured_on} is before date of birth {birth}")]
    InvalidDates {
        birth: NaiveDate,
        measured_on: NaiveDate,
    },
}

impl GrowthError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownIndicatorOrSex {
            kind,
            value: value.to_string(),
        }
    }

    pub fn out_of_domain(indicator: Indicator, x: f64) -> Self {
        let (min, max) = indicator.domain();
        Self::OutOfDomain {
            indicator,
            x,
            min,
            max,
        }
    }
}

pub type Result<T> = std::result::Result<T, GrowthError>;
