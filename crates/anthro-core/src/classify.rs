//! Nutritional-status cut points.
//!
//! Every indicator owns an ordered list of bands that partitions the real
//! line. A band stores only its upper bound; its lower bound is the
//! complement of the previous band's upper bound, so gaps and overlaps
//! cannot be expressed.
//!
//! # WHO Reference
//!
//! - WHO Child Growth Standards (2006), interpretation of growth indicators
//! - Indonesian MoH regulation No. 2/2020, Table 1 (anthropometric index
//!   categories and thresholds)
//! - WHO Anthro flagging limits for implausible z-scores

use std::fmt;

use anthro_model::{Indicator, StatusLabel};
use serde::Serialize;

/// Upper edge of a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Bound {
    /// `z < t`
    Below(f64),
    /// `z ≤ t`
    AtMost(f64),
    /// Last band; no upper edge.
    Unbounded,
}

impl Bound {
    pub fn admits(&self, z: f64) -> bool {
        match *self {
            Bound::Below(t) => z < t,
            Bound::AtMost(t) => z <= t,
            Bound::Unbounded => true,
        }
    }

    fn threshold(&self) -> Option<f64> {
        match *self {
            Bound::Below(t) | Bound::AtMost(t) => Some(t),
            Bound::Unbounded => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub upper: Bound,
    pub status: StatusLabel,
}

const fn band(upper: Bound, status: StatusLabel) -> Band {
    Band { upper, status }
}

/// Ordered band list for one indicator.
#[derive(Debug, Clone, Copy)]
pub struct CutPoints {
    pub indicator: Indicator,
    bands: &'static [Band],
}

const WEIGHT_FOR_AGE: &[Band] = &[
    band(Bound::Below(-3.0), StatusLabel::SeverelyUnderweight),
    band(Bound::Below(-2.0), StatusLabel::Underweight),
    band(Bound::AtMost(1.0), StatusLabel::Normal),
    band(Bound::Unbounded, StatusLabel::Overweight),
];

const LENGTH_HEIGHT_FOR_AGE: &[Band] = &[
    band(Bound::Below(-3.0), StatusLabel::SeverelyStunted),
    band(Bound::Below(-2.0), StatusLabel::Stunted),
    band(Bound::AtMost(3.0), StatusLabel::Normal),
    band(Bound::Unbounded, StatusLabel::Tall),
];

const WEIGHT_FOR_LENGTH: &[Band] = &[
    band(Bound::Below(-3.0), StatusLabel::SeverelyWasted),
    band(Bound::Below(-2.0), StatusLabel::Wasted),
    band(Bound::AtMost(1.0), StatusLabel::Normal),
    band(Bound::AtMost(2.0), StatusLabel::PossibleRiskOfOverweight),
    band(Bound::AtMost(3.0), StatusLabel::Overweight),
    band(Bound::Unbounded, StatusLabel::Obese),
];

const HEAD_CIRCUMFERENCE_FOR_AGE: &[Band] = &[
    band(Bound::Below(-3.0), StatusLabel::SevereMicrocephaly),
    band(Bound::Below(-2.0), StatusLabel::Microcephaly),
    band(Bound::AtMost(2.0), StatusLabel::Normal),
    band(Bound::AtMost(3.0), StatusLabel::Macrocephaly),
    band(Bound::Unbounded, StatusLabel::SevereMacrocephaly),
];

/// Cut points for an indicator.
pub fn cut_points(indicator: Indicator) -> CutPoints {
    let bands = match indicator {
        Indicator::WeightForAge => WEIGHT_FOR_AGE,
        Indicator::LengthHeightForAge => LENGTH_HEIGHT_FOR_AGE,
        Indicator::HeadCircumferenceForAge => HEAD_CIRCUMFERENCE_FOR_AGE,
        Indicator::WeightForLength => WEIGHT_FOR_LENGTH,
    };
    CutPoints { indicator, bands }
}

/// Status label for an SD score.
pub fn classify(indicator: Indicator, z: f64) -> StatusLabel {
    cut_points(indicator).classify(z)
}

impl CutPoints {
    pub fn bands(&self) -> &'static [Band] {
        self.bands
    }

    /// First band whose upper bound admits `z`.
    pub fn classify(&self, z: f64) -> StatusLabel {
        for band in self.bands {
            if band.upper.admits(z) {
                return band.status;
            }
        }
        // Not reached: the last band is unbounded.
        self.bands[self.bands.len() - 1].status
    }

    /// Bands with both edges spelled out, lowest first.
    pub fn intervals(&self) -> Vec<BandInterval> {
        let mut lower = None;
        let mut intervals = Vec::with_capacity(self.bands.len());
        for band in self.bands {
            let upper = match band.upper {
                Bound::Below(t) => Some(Edge {
                    value: t,
                    inclusive: false,
                }),
                Bound::AtMost(t) => Some(Edge {
                    value: t,
                    inclusive: true,
                }),
                Bound::Unbounded => None,
            };
            intervals.push(BandInterval {
                status: band.status,
                lower,
                upper,
            });
            // The next band starts where this one stops, with the opposite inclusiveness.
            lower = upper.map(|edge| Edge {
                value: edge.value,
                inclusive: !edge.inclusive,
            });
        }
        intervals
    }

    /// Finite thresholds in ascending order.
    pub fn thresholds(&self) -> Vec<f64> {
        self.bands.iter().filter_map(|b| b.upper.threshold()).collect()
    }
}

/// One end of a [`BandInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub value: f64,
    pub inclusive: bool,
}

/// A band with explicit lower and upper edges. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandInterval {
    pub status: StatusLabel,
    pub lower: Option<Edge>,
    pub upper: Option<Edge>,
}

impl BandInterval {
    pub fn contains(&self, z: f64) -> bool {
        let above_lower = match self.lower {
            Some(Edge {
                value,
                inclusive: true,
            }) => z >= value,
            Some(Edge { value, .. }) => z > value,
            None => true,
        };
        let below_upper = match self.upper {
            Some(Edge {
                value,
                inclusive: true,
            }) => z <= value,
            Some(Edge { value, .. }) => z < value,
            None => true,
        };
        above_lower && below_upper
    }
}

impl fmt::Display for BandInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (None, None) => write!(f, "any z"),
            (None, Some(upper)) => write!(f, "z {} {}", upper_op(upper), signed(upper.value)),
            (Some(lower), None) => write!(f, "z {} {}", lower_op(lower), signed(lower.value)),
            (Some(lower), Some(upper)) => write!(
                f,
                "{} {} z {} {}",
                signed(lower.value),
                if lower.inclusive { "≤" } else { "<" },
                upper_op(upper),
                signed(upper.value)
            ),
        }
    }
}

fn upper_op(edge: Edge) -> &'static str {
    if edge.inclusive { "≤" } else { "<" }
}

fn lower_op(edge: Edge) -> &'static str {
    if edge.inclusive { "≥" } else { ">" }
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else {
        format!("{value}")
    }
}

/// Range of SD scores WHO considers biologically plausible for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlagLimits {
    pub low: f64,
    pub high: f64,
}

pub fn flag_limits(indicator: Indicator) -> FlagLimits {
    match indicator {
        Indicator::WeightForAge => FlagLimits {
            low: -6.0,
            high: 5.0,
        },
        Indicator::LengthHeightForAge => FlagLimits {
            low: -6.0,
            high: 6.0,
        },
        Indicator::WeightForLength | Indicator::HeadCircumferenceForAge => FlagLimits {
            low: -5.0,
            high: 5.0,
        },
    }
}

/// True when `z` is beyond the WHO flagging limits. Annotation only.
pub fn is_implausible(indicator: Indicator, z: f64) -> bool {
    let limits = flag_limits(indicator);
    z < limits.low || z > limits.high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_for_age_edges() {
        let wfa = Indicator::WeightForAge;
        assert_eq!(classify(wfa, -3.0001), StatusLabel::SeverelyUnderweight);
        assert_eq!(classify(wfa, -3.0), StatusLabel::Underweight);
        assert_eq!(classify(wfa, -2.0), StatusLabel::Normal);
        assert_eq!(classify(wfa, 1.0), StatusLabel::Normal);
        assert_eq!(classify(wfa, 1.0001), StatusLabel::Overweight);
    }

    #[test]
    fn length_for_age_edges() {
        let lhfa = Indicator::LengthHeightForAge;
        assert_eq!(classify(lhfa, -3.5), StatusLabel::SeverelyStunted);
        assert_eq!(classify(lhfa, -2.5), StatusLabel::Stunted);
        assert_eq!(classify(lhfa, 3.0), StatusLabel::Normal);
        assert_eq!(classify(lhfa, 3.01), StatusLabel::Tall);
    }

    #[test]
    fn weight_for_length_edges() {
        let wfl = Indicator::WeightForLength;
        assert_eq!(classify(wfl, -3.1), StatusLabel::SeverelyWasted);
        assert_eq!(classify(wfl, -2.1), StatusLabel::Wasted);
        assert_eq!(classify(wfl, 0.0), StatusLabel::Normal);
        assert_eq!(classify(wfl, 1.5), StatusLabel::PossibleRiskOfOverweight);
        assert_eq!(classify(wfl, 2.0), StatusLabel::PossibleRiskOfOverweight);
        assert_eq!(classify(wfl, 2.5), StatusLabel::Overweight);
        assert_eq!(classify(wfl, 3.0), StatusLabel::Overweight);
        assert_eq!(classify(wfl, 3.2), StatusLabel::Obese);
    }

    #[test]
    fn head_circumference_edges() {
        let hcfa = Indicator::HeadCircumferenceForAge;
        assert_eq!(classify(hcfa, -3.2), StatusLabel::SevereMicrocephaly);
        assert_eq!(classify(hcfa, -2.2), StatusLabel::Microcephaly);
        assert_eq!(classify(hcfa, 2.0), StatusLabel::Normal);
        assert_eq!(classify(hcfa, 2.5), StatusLabel::Macrocephaly);
        assert_eq!(classify(hcfa, 3.5), StatusLabel::SevereMacrocephaly);
    }

    #[test]
    fn intervals_chain_without_gaps() {
        for indicator in Indicator::ALL {
            let intervals = cut_points(indicator).intervals();
            assert!(intervals.first().unwrap().lower.is_none());
            assert!(intervals.last().unwrap().upper.is_none());
            for pair in intervals.windows(2) {
                let upper = pair[0].upper.unwrap();
                let lower = pair[1].lower.unwrap();
                assert_eq!(upper.value, lower.value);
                assert_ne!(upper.inclusive, lower.inclusive);
            }
        }
    }

    #[test]
    fn thresholds_ascend() {
        for indicator in Indicator::ALL {
            let thresholds = cut_points(indicator).thresholds();
            assert!(thresholds.windows(2).all(|w| w[0] < w[1]), "{indicator}");
        }
    }

    #[test]
    fn interval_display() {
        let intervals = cut_points(Indicator::WeightForAge).intervals();
        let text: Vec<String> = intervals.iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            ["z < -3", "-3 ≤ z < -2", "-2 ≤ z ≤ +1", "z > +1"]
        );
    }

    #[test]
    fn flag_limits_per_indicator() {
        assert!(is_implausible(Indicator::WeightForAge, -6.1));
        assert!(!is_implausible(Indicator::WeightForAge, -6.0));
        assert!(is_implausible(Indicator::WeightForAge, 5.1));
        assert!(!is_implausible(Indicator::LengthHeightForAge, 5.9));
        assert!(is_implausible(Indicator::LengthHeightForAge, 6.1));
        assert!(is_implausible(Indicator::WeightForLength, -5.1));
        assert!(is_implausible(Indicator::HeadCircumferenceForAge, 5.1));
    }
}
