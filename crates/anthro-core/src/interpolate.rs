//! Linear interpolation of LMS parameters between table rows.

use anthro_model::{GrowthError, Indicator, Lms, LmsRow, Result};

/// Interpolated L, M and S for `x` within one sorted series.
///
/// An exact node returns that row unchanged. `x` must be finite and inside
/// both the indicator's domain and the rows' coverage; nothing is
/// extrapolated.
///
/// Length/height-for-age rows change from recumbent length to standing
/// height at 24 months; between 23 and 24 the result blends both bases.
pub fn interpolate_series(rows: &[LmsRow], indicator: Indicator, x: f64) -> Result<Lms> {
    let (min, max) = indicator.domain();
    let covered = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => first.x <= x && x <= last.x,
        _ => false,
    };
    if !x.is_finite() || x < min || x > max || !covered {
        return Err(GrowthError::out_of_domain(indicator, x));
    }
    Ok(lms_at(rows, x))
}

/// Interpolation without the domain check. `rows` must be non-empty and `x`
/// is clamped to their coverage.
pub(crate) fn lms_at(rows: &[LmsRow], x: f64) -> Lms {
    let last = rows.len() - 1;
    let x = x.clamp(rows[0].x, rows[last].x);
    let i = rows.partition_point(|row| row.x < x);
    let hi = rows[i];
    if hi.x == x || i == 0 {
        return hi.lms();
    }
    let lo = rows[i - 1];
    let t = (x - lo.x) / (hi.x - lo.x);
    Lms::new(
        lerp(lo.l, hi.l, t),
        lerp(lo.m, hi.m, t),
        lerp(lo.s, hi.s, t),
    )
}

fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo + (hi - lo) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use anthro_model::Sex;

    fn rows() -> Vec<LmsRow> {
        (0..=60)
            .map(|i| {
                let x = f64::from(i);
                LmsRow {
                    x,
                    sex: Sex::Male,
                    l: 0.1 * x,
                    m: 3.0 + 0.25 * x,
                    s: 0.14 - 0.001 * x,
                }
            })
            .collect()
    }

    #[test]
    fn exact_node_returns_row() {
        let rows = rows();
        let lms = interpolate_series(&rows, Indicator::WeightForAge, 12.0).unwrap();
        assert_eq!(lms, rows[12].lms());
    }

    #[test]
    fn midpoint_is_average_of_neighbours() {
        let rows = rows();
        let lms = interpolate_series(&rows, Indicator::WeightForAge, 12.5).unwrap();
        assert!((lms.m - (rows[12].m + rows[13].m) / 2.0).abs() < 1e-12);
        assert!((lms.l - (rows[12].l + rows[13].l) / 2.0).abs() < 1e-12);
        assert!((lms.s - (rows[12].s + rows[13].s) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn domain_edges_are_included() {
        let rows = rows();
        assert!(interpolate_series(&rows, Indicator::WeightForAge, 0.0).is_ok());
        assert!(interpolate_series(&rows, Indicator::WeightForAge, 60.0).is_ok());
    }

    #[test]
    fn outside_domain_is_rejected() {
        let rows = rows();
        for x in [-1.0, 61.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                interpolate_series(&rows, Indicator::WeightForAge, x),
                Err(GrowthError::OutOfDomain { .. })
            ));
        }
    }

    #[test]
    fn empty_series_is_out_of_domain() {
        assert!(matches!(
            interpolate_series(&[], Indicator::WeightForAge, 3.0),
            Err(GrowthError::OutOfDomain { .. })
        ));
    }
}
