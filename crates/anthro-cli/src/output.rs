//! Table and JSON rendering of command results.

use anthro_core::{BandInterval, FlagLimits};
use anthro_model::{Axis, ClassificationResult, Indicator, ReferenceCurvePoint, StatusLabel};
use anthro_standards::TablesSummary;
use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize output")
}

pub fn classification_table(result: &ClassificationResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let axis = result.indicator.axis();
    table.add_row(vec![Cell::new("Indicator"), Cell::new(result.indicator)]);
    table.add_row(vec![Cell::new("Sex"), Cell::new(result.sex)]);
    table.add_row(vec![
        Cell::new(match axis {
            Axis::AgeMonths => "Age",
            Axis::LengthCm => "Length/height",
        }),
        Cell::new(format!("{:.2} {}", result.x, axis.unit())),
    ]);
    table.add_row(vec![
        Cell::new("Value"),
        Cell::new(format!("{:.2} {}", result.value, result.indicator.value_unit())),
    ]);
    table.add_row(vec![
        Cell::new("Z-score"),
        Cell::new(format!("{:+.2}", result.z_score)),
    ]);
    table.add_row(vec![
        Cell::new("Percentile"),
        Cell::new(format!("{:.1}", result.percentile)),
    ]);
    table.add_row(vec![Cell::new("Status"), status_cell(result.status)]);
    if result.implausible {
        table.add_row(vec![
            Cell::new("Flag"),
            Cell::new("implausible z-score, check the measurement")
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn curve_table(indicator: Indicator, points: &[ReferenceCurvePoint]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(indicator.axis().unit()),
        header_cell("-3 SD"),
        header_cell("-2 SD"),
        header_cell("-1 SD"),
        header_cell("Median"),
        header_cell("+1 SD"),
        header_cell("+2 SD"),
        header_cell("+3 SD"),
    ]);
    apply_table_style(&mut table);
    for point in points {
        let mut row = vec![Cell::new(format!("{:.2}", point.x))];
        for (i, value) in point.values().into_iter().enumerate() {
            let cell = Cell::new(format!("{value:.3}"));
            row.push(if i == 3 {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            });
        }
        table.add_row(row);
    }
    for index in 0..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn tables_table(summary: &TablesSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Sex"),
        header_cell("Rows"),
        header_cell("Coverage"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    for series in &summary.series {
        table.add_row(vec![
            Cell::new(series.indicator.code()),
            Cell::new(series.sex),
            Cell::new(series.rows),
            Cell::new(format!(
                "{}..={} {}",
                series.x_min,
                series.x_max,
                series.indicator.axis().unit()
            )),
            dim_cell(&series.file),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

pub fn cutpoints_table(
    indicator: Indicator,
    intervals: &[BandInterval],
    limits: FlagLimits,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(indicator.as_str()), header_cell("Status")]);
    apply_table_style(&mut table);
    for interval in intervals {
        table.add_row(vec![Cell::new(interval), status_cell(interval.status)]);
    }
    table.add_row(vec![
        dim_cell(format!("z < {} or z > {}", limits.low, limits.high)),
        dim_cell("implausible (flag)"),
    ]);
    table
}

pub fn status_cell(status: StatusLabel) -> Cell {
    let cell = Cell::new(status).add_attribute(Attribute::Bold);
    if status.needs_attention() {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::Green)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
