//! Nutritional-status labels.
//!
//! The enum is shared by all indicators; which labels an indicator can
//! produce is decided by its cut-point table in the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutritional-status category for a classified measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum StatusLabel {
    // weight-for-age
    SeverelyUnderweight,
    Underweight,
    // length/height-for-age
    SeverelyStunted,
    Stunted,
    Tall,
    // weight-for-length/height
    SeverelyWasted,
    Wasted,
    PossibleRiskOfOverweight,
    Obese,
    // head-circumference-for-age
    SevereMicrocephaly,
    Microcephaly,
    Macrocephaly,
    SevereMacrocephaly,
    // shared
    Normal,
    Overweight,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::SeverelyUnderweight => "severely-underweight",
            StatusLabel::Underweight => "underweight",
            StatusLabel::SeverelyStunted => "severely-stunted",
            StatusLabel::Stunted => "stunted",
            StatusLabel::Tall => "tall",
            StatusLabel::SeverelyWasted => "severely-wasted",
            StatusLabel::Wasted => "wasted",
            StatusLabel::PossibleRiskOfOverweight => "possible-risk-of-overweight",
            StatusLabel::Obese => "obese",
            StatusLabel::SevereMicrocephaly => "severe-microcephaly",
            StatusLabel::Microcephaly => "microcephaly",
            StatusLabel::Macrocephaly => "macrocephaly",
            StatusLabel::SevereMacrocephaly => "severe-macrocephaly",
            StatusLabel::Normal => "normal",
            StatusLabel::Overweight => "overweight",
        }
    }

    /// Returns true for any label other than [`StatusLabel::Normal`].
    pub fn needs_attention(&self) -> bool {
        !matches!(self, StatusLabel::Normal)
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
