//! WHO child growth standards engine.
//!
//! Scores anthropometric measurements against the WHO 2006 LMS reference
//! tables, classifies the resulting z-scores into nutritional-status bands
//! and generates the seven SD reference curves used for growth charts.
//!
//! ```no_run
//! use anthro_core::{Indicator, Sex, StatusLabel, classify_measurement};
//!
//! let result = classify_measurement(Indicator::WeightForAge, Sex::Female, 24.0, 11.5)?;
//! assert_eq!(result.status, StatusLabel::Normal);
//! # Ok::<(), anthro_core::EngineError>(())
//! ```

pub mod age;
pub mod classify;
pub mod curve;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod percentile;
pub mod validate;
pub mod zscore;

pub use age::{adjust_for_position, age_in_months};
pub use anthro_model::{
    ClassificationOptions, ClassificationResult, GrowthError, Indicator, Lms, LmsRow,
    MeasuredPosition, Measurement, ReferenceCurvePoint, Sex, StatusLabel,
};
pub use anthro_standards::ReferenceTables;
pub use classify::{
    Band, BandInterval, Bound, CutPoints, FlagLimits, classify, cut_points, flag_limits,
    is_implausible,
};
pub use curve::ReferenceCurve;
pub use engine::GrowthEngine;
pub use error::{EngineError, Result};
pub use percentile::{classify_percentile, percentile, z_for_percentile};
pub use zscore::{restricted_z_score, value_at_z, z_score};

/// Classifies a measurement against the embedded tables with default
/// options.
pub fn classify_measurement(
    indicator: Indicator,
    sex: Sex,
    x: f64,
    value: f64,
) -> Result<ClassificationResult> {
    let engine = GrowthEngine::embedded()?;
    Ok(engine.classify_measurement(indicator, sex, x, value)?)
}

/// Reference curve points from the embedded tables.
pub fn get_reference_curve(
    indicator: Indicator,
    sex: Sex,
    start: f64,
    end: f64,
    step_count: usize,
) -> Result<Vec<ReferenceCurvePoint>> {
    let engine = GrowthEngine::embedded()?;
    Ok(engine.get_reference_curve(indicator, sex, start, end, step_count)?)
}
