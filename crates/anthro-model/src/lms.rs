//! LMS reference rows.

use serde::{Deserialize, Serialize};

use crate::enums::Sex;

/// Box-Cox power (L), median (M) and coefficient of variation (S) at one x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lms {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl Lms {
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }
}

/// One row of a published reference table.
///
/// `x` is age in months, or length in cm for weight-for-length/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsRow {
    pub x: f64,
    pub sex: Sex,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsRow {
    pub fn lms(&self) -> Lms {
        Lms::new(self.l, self.m, self.s)
    }
}
