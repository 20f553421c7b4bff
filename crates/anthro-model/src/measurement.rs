//! Measurement inputs and classification outputs.

use serde::{Deserialize, Serialize};

use crate::enums::{Indicator, MeasuredPosition, Sex};
use crate::status::StatusLabel;

/// A single anthropometric measurement supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub indicator: Indicator,
    pub sex: Sex,
    /// Age in months, or length/height in cm for weight-for-length/height.
    pub x: f64,
    /// Measured weight (kg), length/height (cm) or head circumference (cm).
    pub value: f64,
    /// Position a length/height was measured in, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<MeasuredPosition>,
}

impl Measurement {
    pub fn new(indicator: Indicator, sex: Sex, x: f64, value: f64) -> Self {
        Self {
            indicator,
            sex,
            x,
            value,
            position: None,
        }
    }

    pub fn with_position(mut self, position: MeasuredPosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// Result of classifying one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub indicator: Indicator,
    pub sex: Sex,
    pub x: f64,
    /// Value that was scored, after any position correction.
    pub value: f64,
    /// SD score used for classification.
    pub z_score: f64,
    pub status: StatusLabel,
    /// Set when the z-score is beyond the WHO plausibility limits for the
    /// indicator. The status is still reported.
    pub implausible: bool,
    /// Percentile equivalent of `z_score`, 0..100.
    pub percentile: f64,
}

/// One sample of the seven reference SD curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCurvePoint {
    pub x: f64,
    pub sd3neg: f64,
    pub sd2neg: f64,
    pub sd1neg: f64,
    pub median: f64,
    pub sd1pos: f64,
    pub sd2pos: f64,
    pub sd3pos: f64,
}

impl ReferenceCurvePoint {
    /// Curve values ordered from -3 SD to +3 SD.
    pub fn values(&self) -> [f64; 7] {
        [
            self.sd3neg,
            self.sd2neg,
            self.sd1neg,
            self.median,
            self.sd1pos,
            self.sd2pos,
            self.sd3pos,
        ]
    }
}
