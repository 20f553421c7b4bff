//! LMS transform between measured values and SD scores.
//!
//! # WHO Reference
//!
//! - Cole & Green (1992), smoothing reference centile curves: the LMS method
//! - WHO Child Growth Standards (2006), computation of centiles and z-scores,
//!   restricted application of the LMS method for weight-based indicators

use anthro_model::Lms;

/// SD score of `value` under the LMS distribution.
///
/// Uses the log form when `l` is exactly zero.
pub fn z_score(value: f64, lms: Lms) -> f64 {
    let Lms { l, m, s } = lms;
    if l == 0.0 {
        (value / m).ln() / s
    } else {
        ((value / m).powf(l) - 1.0) / (l * s)
    }
}

/// Measured value that corresponds to SD score `z`.
pub fn value_at_z(z: f64, lms: Lms) -> f64 {
    let Lms { l, m, s } = lms;
    if l == 0.0 {
        m * (s * z).exp()
    } else {
        m * (1.0 + l * s * z).powf(1.0 / l)
    }
}

/// SD score with the WHO restricted tails.
///
/// Between -3 and +3 this equals [`z_score`]. Beyond them the distance past
/// the 3 SD curve is measured in units of the 2-to-3 SD interval on that
/// side.
pub fn restricted_z_score(value: f64, lms: Lms) -> f64 {
    let z = z_score(value, lms);
    if z > 3.0 {
        let sd2 = value_at_z(2.0, lms);
        let sd3 = value_at_z(3.0, lms);
        3.0 + (value - sd3) / (sd3 - sd2)
    } else if z < -3.0 {
        let sd2 = value_at_z(-2.0, lms);
        let sd3 = value_at_z(-3.0, lms);
        -3.0 + (value - sd3) / (sd2 - sd3)
    } else {
        z
    }
}
