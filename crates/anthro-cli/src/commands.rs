use std::borrow::Cow;
use std::path::Path;

use anthro_core::{BandInterval, FlagLimits, GrowthEngine, age_in_months, cut_points, flag_limits};
use anthro_model::{ClassificationOptions, Indicator, Measurement};
use anthro_standards::{ReferenceTables, standards_dir_override};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use crate::cli::{ClassifyArgs, CurveArgs, CutpointsArgs, OutputFormatArg, TablesArgs};
use crate::output::{classification_table, curve_table, cutpoints_table, tables_table, to_json};

/// Embedded tables, or the tables in `dir` (falling back to
/// `ANTHRO_STANDARDS_DIR`) when one is given.
pub fn load_tables(dir: Option<&Path>) -> Result<Cow<'static, ReferenceTables>> {
    let dir = dir.map(Path::to_path_buf).or_else(standards_dir_override);
    match dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading reference tables from directory");
            let tables = ReferenceTables::load_from_dir(&dir)
                .with_context(|| format!("load reference tables from {}", dir.display()))?;
            Ok(Cow::Owned(tables))
        }
        None => {
            let tables = ReferenceTables::embedded().context("load embedded reference tables")?;
            Ok(Cow::Borrowed(tables))
        }
    }
}

pub fn run_classify(args: &ClassifyArgs, tables: &ReferenceTables) -> Result<String> {
    let span = info_span!("classify", indicator = %args.indicator, sex = %args.sex);
    let _guard = span.enter();

    let x = match (args.x, args.birth_date, args.measured_on) {
        (Some(x), _, _) => x,
        (None, Some(birth), Some(measured_on)) => {
            if args.indicator == Indicator::WeightForLength {
                bail!("weight-for-length/height is indexed by length; pass --x in cm");
            }
            age_in_months(birth, measured_on).context("compute age")?
        }
        _ => bail!("either --x or both --birth-date and --measured-on are required"),
    };

    let options = ClassificationOptions::new()
        .with_restricted_tails(!args.no_restricted_tails)
        .with_position_correction(!args.no_position_correction);
    let mut measurement = Measurement::new(args.indicator, args.sex, x, args.value);
    if let Some(position) = args.position {
        measurement = measurement.with_position(position);
    }

    let result = GrowthEngine::new(tables)
        .with_options(options)
        .classify(&measurement)
        .with_context(|| format!("classify {} measurement", args.indicator))?;

    match args.format {
        OutputFormatArg::Json => to_json(&result),
        OutputFormatArg::Table => Ok(classification_table(&result).to_string()),
    }
}

pub fn run_curve(args: &CurveArgs, tables: &ReferenceTables) -> Result<String> {
    let span = info_span!("curve", indicator = %args.indicator, sex = %args.sex);
    let _guard = span.enter();

    let (min, max) = args.indicator.domain();
    let start = args.from.unwrap_or(min);
    let end = args.to.unwrap_or(max);
    let steps = args
        .steps
        .unwrap_or_else(|| default_steps(start, end, args.indicator.table_step()));

    let points = GrowthEngine::new(tables)
        .get_reference_curve(args.indicator, args.sex, start, end, steps)
        .with_context(|| format!("build {} reference curve", args.indicator))?;
    info!(points = points.len(), "reference curve ready");

    match args.format {
        OutputFormatArg::Json => to_json(&points),
        OutputFormatArg::Table => Ok(curve_table(args.indicator, &points).to_string()),
    }
}

/// One interval per table step, at least one when the range is non-empty.
fn default_steps(start: f64, end: f64, step: f64) -> usize {
    if end <= start {
        return 0;
    }
    let steps = ((end - start) / step).round();
    if steps < 1.0 { 1 } else { steps as usize }
}

pub fn run_tables(args: &TablesArgs, tables: &ReferenceTables) -> Result<String> {
    let summary = tables.summary();
    match args.format {
        OutputFormatArg::Json => to_json(&summary),
        OutputFormatArg::Table => {
            let release = &summary.release;
            let mut out = format!(
                "{} {} ({})\n",
                release.standard, release.version, release.publisher
            );
            if let Some(notes) = &release.notes {
                out.push_str(notes);
                out.push('\n');
            }
            out.push_str(&tables_table(&summary).to_string());
            out.push_str(&format!("\n{} rows in total", summary.row_count));
            Ok(out)
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndicatorCutPoints {
    indicator: Indicator,
    bands: Vec<BandInterval>,
    flag_limits: FlagLimits,
}

pub fn run_cutpoints(args: &CutpointsArgs) -> Result<String> {
    let indicators: Vec<Indicator> = match args.indicator {
        Some(indicator) => vec![indicator],
        None => Indicator::ALL.to_vec(),
    };

    match args.format {
        OutputFormatArg::Json => {
            let all: Vec<IndicatorCutPoints> = indicators
                .into_iter()
                .map(|indicator| IndicatorCutPoints {
                    indicator,
                    bands: cut_points(indicator).intervals(),
                    flag_limits: flag_limits(indicator),
                })
                .collect();
            to_json(&all)
        }
        OutputFormatArg::Table => {
            let tables: Vec<String> = indicators
                .into_iter()
                .map(|indicator| {
                    cutpoints_table(
                        indicator,
                        &cut_points(indicator).intervals(),
                        flag_limits(indicator),
                    )
                    .to_string()
                })
                .collect();
            Ok(tables.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_steps_follow_table_step() {
        assert_eq!(default_steps(0.0, 60.0, 1.0), 60);
        assert_eq!(default_steps(45.0, 110.0, 0.5), 130);
        assert_eq!(default_steps(12.0, 12.0, 1.0), 0);
        assert_eq!(default_steps(12.0, 12.2, 1.0), 1);
    }
}
