//! Growth engine facade over a set of reference tables.

use anthro_model::{
    ClassificationOptions, ClassificationResult, GrowthError, Indicator, Lms, Measurement,
    ReferenceCurvePoint, Sex,
};
use anthro_standards::{ReferenceTables, StandardsError};

use crate::age::adjust_for_position;
use crate::classify::{classify, is_implausible};
use crate::curve::ReferenceCurve;
use crate::interpolate::interpolate_series;
use crate::percentile::percentile;
use crate::validate::validate_value;
use crate::zscore::{restricted_z_score, value_at_z, z_score};

/// Scores measurements and builds reference curves against borrowed tables.
///
/// The engine holds no state besides the table reference and its options,
/// so it is `Copy` and can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct GrowthEngine<'a> {
    tables: &'a ReferenceTables,
    options: ClassificationOptions,
}

impl GrowthEngine<'static> {
    /// Engine over the embedded WHO 2006 tables with default options.
    pub fn embedded() -> Result<Self, StandardsError> {
        Ok(Self::new(ReferenceTables::embedded()?))
    }
}

impl<'a> GrowthEngine<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self {
            tables,
            options: ClassificationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ClassificationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ClassificationOptions {
        self.options
    }

    pub fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    /// LMS parameters at `x` for one indicator and sex.
    pub fn interpolate(&self, indicator: Indicator, sex: Sex, x: f64) -> Result<Lms, GrowthError> {
        interpolate_series(self.tables.series(indicator, sex), indicator, x)
    }

    /// SD score of `value` at `x`, restricted beyond ±3 SD when the options
    /// and indicator call for it.
    pub fn z_score(
        &self,
        indicator: Indicator,
        sex: Sex,
        x: f64,
        value: f64,
    ) -> Result<f64, GrowthError> {
        let lms = self.interpolate(indicator, sex, x)?;
        validate_value(indicator, value)?;
        Ok(self.score(indicator, value, lms))
    }

    /// Measured value at SD score `z`.
    pub fn value_at_z(
        &self,
        indicator: Indicator,
        sex: Sex,
        x: f64,
        z: f64,
    ) -> Result<f64, GrowthError> {
        Ok(value_at_z(z, self.interpolate(indicator, sex, x)?))
    }

    pub fn classify_measurement(
        &self,
        indicator: Indicator,
        sex: Sex,
        x: f64,
        value: f64,
    ) -> Result<ClassificationResult, GrowthError> {
        self.classify(&Measurement::new(indicator, sex, x, value))
    }

    /// Classifies one measurement.
    ///
    /// Fails on an `x` outside the table or an implausible raw value; an
    /// extreme z-score is reported with `implausible` set instead.
    pub fn classify(&self, measurement: &Measurement) -> Result<ClassificationResult, GrowthError> {
        let Measurement {
            indicator,
            sex,
            x,
            value,
            position,
        } = *measurement;

        let lms = self.interpolate(indicator, sex, x)?;
        validate_value(indicator, value)?;

        let value = match position {
            Some(position)
                if indicator == Indicator::LengthHeightForAge
                    && self.options.apply_position_correction =>
            {
                adjust_for_position(x, value, position)
            }
            _ => value,
        };

        let z_score = self.score(indicator, value, lms);
        let status = classify(indicator, z_score);
        let implausible = is_implausible(indicator, z_score);
        if implausible {
            tracing::warn!(
                indicator = %indicator,
                sex = %sex,
                x,
                value,
                z_score,
                "z-score outside plausible range"
            );
        }

        tracing::debug!(
            indicator = %indicator,
            sex = %sex,
            x,
            value,
            z_score,
            status = %status,
            "classified measurement"
        );

        Ok(ClassificationResult {
            indicator,
            sex,
            x,
            value,
            z_score,
            status,
            implausible,
            percentile: percentile(z_score),
        })
    }

    /// Lazy reference curve over `[start, end]` with `step_count` intervals.
    pub fn reference_curve(
        &self,
        indicator: Indicator,
        sex: Sex,
        start: f64,
        end: f64,
        step_count: usize,
    ) -> Result<ReferenceCurve<'a>, GrowthError> {
        tracing::debug!(
            indicator = %indicator,
            sex = %sex,
            start,
            end,
            step_count,
            "building reference curve"
        );
        ReferenceCurve::new(
            self.tables.series(indicator, sex),
            indicator,
            start,
            end,
            step_count,
        )
    }

    /// Collected form of [`GrowthEngine::reference_curve`].
    pub fn get_reference_curve(
        &self,
        indicator: Indicator,
        sex: Sex,
        start: f64,
        end: f64,
        step_count: usize,
    ) -> Result<Vec<ReferenceCurvePoint>, GrowthError> {
        Ok(self
            .reference_curve(indicator, sex, start, end, step_count)?
            .collect())
    }

    fn score(&self, indicator: Indicator, value: f64, lms: Lms) -> f64 {
        if self.options.restricted_tails && indicator.uses_restricted_tails() {
            restricted_z_score(value, lms)
        } else {
            z_score(value, lms)
        }
    }
}
