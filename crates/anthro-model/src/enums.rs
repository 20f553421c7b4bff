//! Type-safe enumerations for growth-standard concepts.
//!
//! Reference tables, manifests and CLI flags carry these as strings; inside
//! the engine they are always one of the enums below, so an unknown
//! indicator or sex can only surface at a parsing boundary.
//!
//! # WHO Reference
//!
//! - WHO Child Growth Standards (2006), methods and development
//! - Indonesian MoH regulation No. 2/2020 on child anthropometry standards

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GrowthError;

/// Biological sex. Every reference table is sex-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Position of this sex in [`Sex::ALL`].
    pub const fn index(&self) -> usize {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    /// Accepts English names, WHO file naming (boys/girls), the common
    /// single-letter codes and the Indonesian forms used by posyandu records
    /// (L = laki-laki, P = perempuan).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "boy" | "boys" | "1" | "l" | "laki-laki" => Ok(Sex::Male),
            "female" | "f" | "girl" | "girls" | "2" | "p" | "perempuan" => Ok(Sex::Female),
            _ => Err(GrowthError::unknown("sex", s)),
        }
    }
}

/// What the independent variable `x` of an indicator measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Age in months (fractional).
    AgeMonths,
    /// Recumbent length or standing height in centimetres.
    LengthCm,
}

impl Axis {
    pub fn unit(&self) -> &'static str {
        match self {
            Axis::AgeMonths => "months",
            Axis::LengthCm => "cm",
        }
    }
}

/// Growth indicator per the WHO Child Growth Standards.
///
/// Each indicator owns its own LMS table, its own valid domain for `x`, a
/// physical sanity range for the measured value, and its own cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    /// Weight-for-age (BB/U), kg against months.
    #[serde(rename = "weight-for-age")]
    WeightForAge,
    /// Length/height-for-age (PB/U, TB/U), cm against months.
    ///
    /// Rows up to 23 months are recumbent length and rows from 24 months are
    /// standing height, so `x` strictly between 23 and 24 blends the two.
    #[serde(rename = "length/height-for-age", alias = "length-height-for-age")]
    LengthHeightForAge,
    /// Head-circumference-for-age, cm against months.
    #[serde(rename = "head-circumference-for-age")]
    HeadCircumferenceForAge,
    /// Weight-for-length/height (BB/PB, BB/TB), kg against cm.
    #[serde(rename = "weight-for-length/height", alias = "weight-for-length")]
    WeightForLength,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::WeightForAge,
        Indicator::LengthHeightForAge,
        Indicator::HeadCircumferenceForAge,
        Indicator::WeightForLength,
    ];

    /// Short code used in WHO file names and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Indicator::WeightForAge => "wfa",
            Indicator::LengthHeightForAge => "lhfa",
            Indicator::HeadCircumferenceForAge => "hcfa",
            Indicator::WeightForLength => "wfl",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::WeightForAge => "weight-for-age",
            Indicator::LengthHeightForAge => "length/height-for-age",
            Indicator::HeadCircumferenceForAge => "head-circumference-for-age",
            Indicator::WeightForLength => "weight-for-length/height",
        }
    }

    /// Position of this indicator in [`Indicator::ALL`].
    pub const fn index(&self) -> usize {
        match self {
            Indicator::WeightForAge => 0,
            Indicator::LengthHeightForAge => 1,
            Indicator::HeadCircumferenceForAge => 2,
            Indicator::WeightForLength => 3,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Indicator::WeightForLength => Axis::LengthCm,
            _ => Axis::AgeMonths,
        }
    }

    /// Inclusive range of `x` covered by the published table.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Indicator::WeightForLength => (45.0, 110.0),
            _ => (0.0, 60.0),
        }
    }

    /// Largest spacing between consecutive rows of the published table.
    pub fn table_step(&self) -> f64 {
        match self {
            Indicator::WeightForLength => 0.5,
            _ => 1.0,
        }
    }

    /// Unit of the measured value.
    pub fn value_unit(&self) -> &'static str {
        match self {
            Indicator::WeightForAge | Indicator::WeightForLength => "kg",
            Indicator::LengthHeightForAge | Indicator::HeadCircumferenceForAge => "cm",
        }
    }

    /// Inclusive physical sanity range for the measured value.
    pub fn value_range(&self) -> (f64, f64) {
        match self {
            Indicator::WeightForAge | Indicator::WeightForLength => (0.5, 50.0),
            Indicator::LengthHeightForAge => (30.0, 200.0),
            Indicator::HeadCircumferenceForAge => (20.0, 70.0),
        }
    }

    /// Weight-based indicators use the WHO restricted LMS transform beyond ±3 SD.
    pub fn uses_restricted_tails(&self) -> bool {
        matches!(self, Indicator::WeightForAge | Indicator::WeightForLength)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "wfa" | "weight-for-age" | "bb/u" => Ok(Indicator::WeightForAge),
            "lhfa" | "lfa" | "hfa" | "length-for-age" | "height-for-age"
            | "length/height-for-age" | "pb/u" | "tb/u" => Ok(Indicator::LengthHeightForAge),
            "hcfa" | "head-circumference-for-age" => Ok(Indicator::HeadCircumferenceForAge),
            "wfl" | "wfh" | "wflh" | "weight-for-length" | "weight-for-height"
            | "weight-for-length/height" | "bb/pb" | "bb/tb" => Ok(Indicator::WeightForLength),
            _ => Err(GrowthError::unknown("indicator", s)),
        }
    }
}

/// How a length/height measurement was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasuredPosition {
    /// Lying down (length). Expected below 24 months.
    Recumbent,
    /// Standing up (height). Expected from 24 months.
    Standing,
}

impl MeasuredPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasuredPosition::Recumbent => "recumbent",
            MeasuredPosition::Standing => "standing",
        }
    }
}

impl fmt::Display for MeasuredPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasuredPosition {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recumbent" | "lying" | "length" | "l" => Ok(MeasuredPosition::Recumbent),
            "standing" | "height" | "h" => Ok(MeasuredPosition::Standing),
            _ => Err(GrowthError::unknown("position", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("girls".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("P".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" laki-laki ".parse::<Sex>().unwrap(), Sex::Male);
        assert!(matches!(
            "x".parse::<Sex>(),
            Err(GrowthError::UnknownIndicatorOrSex { kind: "sex", .. })
        ));
    }

    #[test]
    fn test_indicator_from_str() {
        assert_eq!(
            "wfa".parse::<Indicator>().unwrap(),
            Indicator::WeightForAge
        );
        assert_eq!(
            "Weight_For_Height".parse::<Indicator>().unwrap(),
            Indicator::WeightForLength
        );
        assert_eq!(
            "TB/U".parse::<Indicator>().unwrap(),
            Indicator::LengthHeightForAge
        );
        assert!("bmi".parse::<Indicator>().is_err());
    }

    #[test]
    fn test_indicator_codes_round_trip() {
        for indicator in Indicator::ALL {
            assert_eq!(indicator.code().parse::<Indicator>().unwrap(), indicator);
            assert_eq!(Indicator::ALL[indicator.index()], indicator);
        }
    }

    #[test]
    fn test_domains_match_axis() {
        for indicator in Indicator::ALL {
            let (min, max) = indicator.domain();
            assert!(min < max);
            match indicator.axis() {
                Axis::AgeMonths => assert_eq!((min, max), (0.0, 60.0)),
                Axis::LengthCm => assert_eq!((min, max), (45.0, 110.0)),
            }
        }
    }
}
