//! Configuration options for classification.

use serde::{Deserialize, Serialize};

/// Options controlling how measurements are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationOptions {
    /// Apply the WHO restricted LMS transform beyond ±3 SD for
    /// weight-for-age and weight-for-length/height.
    ///
    /// WHO 2006: the LMS skewness term makes the tails of weight
    /// distributions unreliable past 3 SD, so distances there are measured
    /// in units of the fixed 2-to-3 SD interval instead.
    pub restricted_tails: bool,

    /// Correct length/height-for-age values taken in the wrong position
    /// (±0.7 cm around the 24 month switch from length to height).
    pub apply_position_correction: bool,
}

impl Default for ClassificationOptions {
    fn default() -> Self {
        Self {
            restricted_tails: true,
            apply_position_correction: true,
        }
    }
}

impl ClassificationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain LMS scoring with no WHO adjustments.
    pub fn unadjusted() -> Self {
        Self {
            restricted_tails: false,
            apply_position_correction: false,
        }
    }

    pub fn with_restricted_tails(mut self, enable: bool) -> Self {
        self.restricted_tails = enable;
        self
    }

    pub fn with_position_correction(mut self, enable: bool) -> Self {
        self.apply_position_correction = enable;
        self
    }
}
