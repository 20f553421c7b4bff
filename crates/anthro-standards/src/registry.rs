//! Reference table registry.
//!
//! All rows live in one read-only arena; each `(indicator, sex)` series is a
//! contiguous, sorted slice of it. Tables are loaded once and shared as
//! `&'static` for the lifetime of the process.

use std::collections::BTreeSet;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anthro_model::{Indicator, LmsRow, Sex};
use serde::Serialize;

use crate::embedded;
use crate::error::{Result, StandardsError};
use crate::loader::{load_series_from_str, validate_series};
use crate::manifest::{MANIFEST_FILE, Manifest, Release, verify_digest};

const SERIES_COUNT: usize = Indicator::ALL.len() * Sex::ALL.len();

static EMBEDDED: OnceLock<ReferenceTables> = OnceLock::new();

/// A loaded and verified series as handed to [`ReferenceTables::from_series`].
#[derive(Debug, Clone)]
pub struct SeriesSource {
    pub indicator: Indicator,
    pub sex: Sex,
    /// File the rows were read from, for diagnostics.
    pub file: String,
    pub rows: Vec<LmsRow>,
}

#[derive(Debug, Clone, Default)]
struct SeriesSlot {
    range: Range<usize>,
    file: String,
}

/// Immutable LMS reference tables for every indicator and sex.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    release: Release,
    rows: Vec<LmsRow>,
    slots: [SeriesSlot; SERIES_COUNT],
}

/// Row counts and coverage per series.
#[derive(Debug, Clone, Serialize)]
pub struct TablesSummary {
    pub release: Release,
    pub row_count: usize,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub indicator: Indicator,
    pub sex: Sex,
    pub file: String,
    pub rows: usize,
    pub x_min: f64,
    pub x_max: f64,
}

fn slot_index(indicator: Indicator, sex: Sex) -> usize {
    indicator.index() * Sex::ALL.len() + sex.index()
}

impl ReferenceTables {
    /// Process-wide tables built from the embedded dataset.
    ///
    /// The first call verifies digests and invariants; later calls return
    /// the same instance.
    pub fn embedded() -> Result<&'static ReferenceTables> {
        if let Some(tables) = EMBEDDED.get() {
            return Ok(tables);
        }
        let tables = Self::load_embedded()?;
        Ok(EMBEDDED.get_or_init(|| tables))
    }

    /// Loads and verifies the embedded dataset into a fresh instance.
    pub fn load_embedded() -> Result<Self> {
        let manifest = Manifest::parse(embedded::MANIFEST, MANIFEST_FILE)?;
        let entries = manifest.validate()?;

        let mut series = Vec::with_capacity(entries.len());
        for entry in entries {
            let content =
                embedded::table_file(&entry.path).ok_or_else(|| StandardsError::MissingFile {
                    path: PathBuf::from(embedded::DATASET_DIR).join(&entry.path),
                })?;
            verify_digest(&entry, content.as_bytes())?;
            let rows = load_series_from_str(content, &entry.path, entry.indicator, entry.sex)?;
            series.push(SeriesSource {
                indicator: entry.indicator,
                sex: entry.sex,
                file: entry.path,
                rows,
            });
        }

        Self::from_series(manifest.release, series)
    }

    /// Loads a dataset directory containing `manifest.toml` and the CSV
    /// files it lists. Any CSV file not listed in the manifest is rejected.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let text = std::fs::read_to_string(&manifest_path)
            .map_err(|e| StandardsError::io(&manifest_path, e))?;
        let manifest = Manifest::parse(&text, &manifest_path.display().to_string())?;
        let entries = manifest.validate()?;

        let listed: BTreeSet<PathBuf> = entries.iter().map(|e| dir.join(&e.path)).collect();
        for path in list_csv_files(dir)? {
            if !listed.contains(&path) {
                return Err(StandardsError::UnexpectedFile { path });
            }
        }

        let mut series = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = dir.join(&entry.path);
            let bytes = std::fs::read(&path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    StandardsError::MissingFile { path: path.clone() }
                } else {
                    StandardsError::io(&path, e)
                }
            })?;
            verify_digest(&entry, &bytes)?;
            let content = String::from_utf8(bytes).map_err(|e| StandardsError::CsvParse {
                file: entry.path.clone(),
                message: e.to_string(),
            })?;
            let rows = load_series_from_str(&content, &entry.path, entry.indicator, entry.sex)?;
            series.push(SeriesSource {
                indicator: entry.indicator,
                sex: entry.sex,
                file: entry.path,
                rows,
            });
        }

        tracing::info!(dir = %dir.display(), "loaded reference tables from directory");
        Self::from_series(manifest.release, series)
    }

    /// Builds tables from already-parsed series, checking the same
    /// invariants as the file loaders. Every `(indicator, sex)` pair must be
    /// present exactly once.
    pub fn from_series(
        release: Release,
        series: impl IntoIterator<Item = SeriesSource>,
    ) -> Result<Self> {
        let mut rows: Vec<LmsRow> = Vec::new();
        let mut slots: [SeriesSlot; SERIES_COUNT] = std::array::from_fn(|_| SeriesSlot::default());
        let mut filled = [false; SERIES_COUNT];

        for source in series {
            let index = slot_index(source.indicator, source.sex);
            if filled[index] {
                return Err(StandardsError::DuplicateSeries {
                    indicator: source.indicator,
                    sex: source.sex,
                });
            }
            validate_series(&source.rows, &source.file, source.indicator)?;
            if let Some(row) = source.rows.iter().find(|r| r.sex != source.sex) {
                return Err(StandardsError::invalid_table(
                    &source.file,
                    format!("row at x {} is tagged {} in a {} table", row.x, row.sex, source.sex),
                ));
            }
            let start = rows.len();
            rows.extend_from_slice(&source.rows);
            slots[index] = SeriesSlot {
                range: start..rows.len(),
                file: source.file,
            };
            filled[index] = true;
        }

        for indicator in Indicator::ALL {
            for sex in Sex::ALL {
                if !filled[slot_index(indicator, sex)] {
                    return Err(StandardsError::MissingSeries { indicator, sex });
                }
            }
        }

        tracing::info!(
            standard = %release.standard,
            version = %release.version,
            series = SERIES_COUNT,
            rows = rows.len(),
            "reference tables ready"
        );

        Ok(Self {
            release,
            rows,
            slots,
        })
    }

    /// Sorted rows for one indicator and sex. Never empty.
    pub fn series(&self, indicator: Indicator, sex: Sex) -> &[LmsRow] {
        &self.rows[self.slots[slot_index(indicator, sex)].range.clone()]
    }

    /// File the series was loaded from.
    pub fn source_file(&self, indicator: Indicator, sex: Sex) -> &str {
        &self.slots[slot_index(indicator, sex)].file
    }

    pub fn release(&self) -> &Release {
        &self.release
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn summary(&self) -> TablesSummary {
        let mut series = Vec::with_capacity(SERIES_COUNT);
        for indicator in Indicator::ALL {
            for sex in Sex::ALL {
                let rows = self.series(indicator, sex);
                let (x_min, x_max) = match (rows.first(), rows.last()) {
                    (Some(first), Some(last)) => (first.x, last.x),
                    _ => (f64::NAN, f64::NAN),
                };
                series.push(SeriesSummary {
                    indicator,
                    sex,
                    file: self.source_file(indicator, sex).to_string(),
                    rows: rows.len(),
                    x_min,
                    x_max,
                });
            }
        }
        TablesSummary {
            release: self.release.clone(),
            row_count: self.rows.len(),
            series,
        }
    }
}

fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| StandardsError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StandardsError::io(dir, e))?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
