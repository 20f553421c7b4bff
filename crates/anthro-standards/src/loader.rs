//! LMS table loading.
//!
//! Parses one WHO LMS CSV file into rows and checks the table invariants the
//! engine relies on: positive M and S, strictly increasing x, no gap wider
//! than the published step, and coverage of the indicator's whole domain.

use std::io::Cursor;

use anthro_model::{Indicator, LmsRow, Sex};
use serde::Deserialize;

use crate::error::{Result, StandardsError};

// Allowance for decimal parsing in the step check.
const STEP_TOLERANCE: f64 = 1e-9;

/// Row as it appears in the WHO CSV exports (`Month,L,M,S` or `Length,L,M,S`).
#[derive(Debug, Deserialize)]
struct LmsCsvRow {
    #[serde(
        rename = "x",
        alias = "Month",
        alias = "Length",
        alias = "Height",
        alias = "Day"
    )]
    x: f64,
    #[serde(rename = "L")]
    l: f64,
    #[serde(rename = "M")]
    m: f64,
    #[serde(rename = "S")]
    s: f64,
}

/// Parses and validates one LMS series from CSV text.
pub fn load_series_from_str(
    content: &str,
    file: &str,
    indicator: Indicator,
    sex: Sex,
) -> Result<Vec<LmsRow>> {
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(cursor);

    let mut rows = Vec::new();
    for result in reader.deserialize::<LmsCsvRow>() {
        let row = result.map_err(|e| StandardsError::CsvParse {
            file: file.to_string(),
            message: e.to_string(),
        })?;
        rows.push(LmsRow {
            x: row.x,
            sex,
            l: row.l,
            m: row.m,
            s: row.s,
        });
    }

    validate_series(&rows, file, indicator)?;
    tracing::debug!(
        file = %file,
        indicator = %indicator,
        sex = %sex,
        rows = rows.len(),
        "parsed LMS table"
    );
    Ok(rows)
}

/// Checks the invariants of a single `(indicator, sex)` series.
pub fn validate_series(rows: &[LmsRow], file: &str, indicator: Indicator) -> Result<()> {
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Err(StandardsError::invalid_table(file, "table has no rows"));
    };

    for (i, row) in rows.iter().enumerate() {
        let line = i + 2;
        if ![row.x, row.l, row.m, row.s].iter().all(|v| v.is_finite()) {
            return Err(StandardsError::invalid_table(
                file,
                format!("line {line}: non-finite value"),
            ));
        }
        if row.x < 0.0 {
            return Err(StandardsError::invalid_table(
                file,
                format!("line {line}: negative x {}", row.x),
            ));
        }
        if row.m <= 0.0 || row.s <= 0.0 {
            return Err(StandardsError::invalid_table(
                file,
                format!("line {line}: M and S must be positive (M={}, S={})", row.m, row.s),
            ));
        }
    }

    let step = indicator.table_step();
    for (i, pair) in rows.windows(2).enumerate() {
        let (lo, hi) = (pair[0], pair[1]);
        if hi.x <= lo.x {
            return Err(StandardsError::invalid_table(
                file,
                format!("line {}: x {} does not increase after {}", i + 3, hi.x, lo.x),
            ));
        }
        if hi.x - lo.x > step + STEP_TOLERANCE {
            return Err(StandardsError::invalid_table(
                file,
                format!("gap between x {} and {} exceeds step {step}", lo.x, hi.x),
            ));
        }
    }

    let (min, max) = indicator.domain();
    if first.x != min || last.x != max {
        return Err(StandardsError::invalid_table(
            file,
            format!(
                "table covers {}..={} but {indicator} requires {min}..={max}",
                first.x, last.x
            ),
        ));
    }

    Ok(())
}
