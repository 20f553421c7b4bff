//! Reference SD curves for growth charts.

use std::iter::FusedIterator;

use anthro_model::{GrowthError, Indicator, LmsRow, ReferenceCurvePoint, Result};

use crate::interpolate::lms_at;
use crate::validate::validate_x;
use crate::zscore::value_at_z;

/// Lazy sequence of evenly spaced curve points over `[start, end]`.
///
/// Yields `step_count + 1` points and the last one sits exactly on `end`.
/// Clones are independent and continue from the position they were cloned
/// at. Building a new curve with the same inputs yields the same points.
#[derive(Debug, Clone)]
pub struct ReferenceCurve<'a> {
    rows: &'a [LmsRow],
    indicator: Indicator,
    start: f64,
    end: f64,
    step_count: usize,
    next: usize,
}

impl<'a> ReferenceCurve<'a> {
    /// Validates the range up front; the iterator itself cannot fail.
    pub fn new(
        rows: &'a [LmsRow],
        indicator: Indicator,
        start: f64,
        end: f64,
        step_count: usize,
    ) -> Result<Self> {
        validate_x(indicator, start)?;
        validate_x(indicator, end)?;
        let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
            return Err(GrowthError::out_of_domain(indicator, start));
        };
        if start < first.x {
            return Err(GrowthError::out_of_domain(indicator, start));
        }
        if end > last.x {
            return Err(GrowthError::out_of_domain(indicator, end));
        }
        // `step_count + 1` points must be countable.
        if start > end || (step_count == 0 && start != end) || step_count == usize::MAX {
            return Err(GrowthError::InvalidRange {
                start,
                end,
                step_count,
            });
        }

        Ok(Self {
            rows,
            indicator,
            start,
            end,
            step_count,
            next: 0,
        })
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    fn x_at(&self, i: usize) -> f64 {
        if i >= self.step_count {
            return self.end;
        }
        let offset = (self.end - self.start) * i as f64 / self.step_count as f64;
        (self.start + offset).min(self.end)
    }

    fn point_at(&self, x: f64) -> ReferenceCurvePoint {
        let lms = lms_at(self.rows, x);
        ReferenceCurvePoint {
            x,
            sd3neg: value_at_z(-3.0, lms),
            sd2neg: value_at_z(-2.0, lms),
            sd1neg: value_at_z(-1.0, lms),
            median: lms.m,
            sd1pos: value_at_z(1.0, lms),
            sd2pos: value_at_z(2.0, lms),
            sd3pos: value_at_z(3.0, lms),
        }
    }
}

impl Iterator for ReferenceCurve<'_> {
    type Item = ReferenceCurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.step_count {
            return None;
        }
        let x = self.x_at(self.next);
        self.next += 1;
        Some(self.point_at(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.step_count + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ReferenceCurve<'_> {}

impl FusedIterator for ReferenceCurve<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use anthro_model::Sex;

    fn rows() -> Vec<LmsRow> {
        (0..=60)
            .map(|i| LmsRow {
                x: f64::from(i),
                sex: Sex::Female,
                l: 1.0,
                m: 50.0 + f64::from(i),
                s: 0.04,
            })
            .collect()
    }

    #[test]
    fn yields_step_count_plus_one() {
        let rows = rows();
        let curve = ReferenceCurve::new(&rows, Indicator::LengthHeightForAge, 0.0, 60.0, 12).unwrap();
        assert_eq!(curve.len(), 13);
        let points: Vec<_> = curve.collect();
        assert_eq!(points.len(), 13);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[12].x, 60.0);
        assert_eq!(points[1].x, 5.0);
    }

    #[test]
    fn len_tracks_progress() {
        let rows = rows();
        let mut curve =
            ReferenceCurve::new(&rows, Indicator::LengthHeightForAge, 0.0, 10.0, 4).unwrap();
        curve.next();
        curve.next();
        assert_eq!(curve.len(), 3);
        let clone = curve.clone();
        assert_eq!(clone.count(), curve.count());
    }

    #[test]
    fn single_point_when_start_equals_end() {
        let rows = rows();
        let points: Vec<_> = ReferenceCurve::new(&rows, Indicator::WeightForAge, 6.0, 6.0, 0)
            .unwrap()
            .collect();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 6.0);
        assert_eq!(points[0].median, 56.0);
    }

    #[test]
    fn rejects_bad_ranges() {
        let rows = rows();
        assert!(matches!(
            ReferenceCurve::new(&rows, Indicator::WeightForAge, 10.0, 5.0, 5),
            Err(GrowthError::InvalidRange { .. })
        ));
        assert!(matches!(
            ReferenceCurve::new(&rows, Indicator::WeightForAge, 0.0, 5.0, 0),
            Err(GrowthError::InvalidRange { .. })
        ));
        assert!(matches!(
            ReferenceCurve::new(&rows, Indicator::WeightForAge, 0.0, 61.0, 10),
            Err(GrowthError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn uncountable_step_count_is_rejected() {
        let rows = rows();
        assert!(matches!(
            ReferenceCurve::new(&rows, Indicator::WeightForAge, 0.0, 60.0, usize::MAX),
            Err(GrowthError::InvalidRange { step_count: usize::MAX, .. })
        ));
        let curve =
            ReferenceCurve::new(&rows, Indicator::WeightForAge, 0.0, 60.0, usize::MAX - 1).unwrap();
        assert_eq!(curve.len(), usize::MAX);
    }

    #[test]
    fn linear_l_gives_symmetric_curves() {
        let rows = rows();
        let point = ReferenceCurve::new(&rows, Indicator::LengthHeightForAge, 24.0, 24.0, 0)
            .unwrap()
            .next()
            .unwrap();
        assert!((point.sd2pos - point.median - (point.median - point.sd2neg)).abs() < 1e-9);
        assert!((point.sd1pos - 74.0 * 1.04).abs() < 1e-9);
    }
}
