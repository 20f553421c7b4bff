use std::path::Path;

use anthro_model::{Indicator, LmsRow, Sex};
use anthro_standards::manifest::MANIFEST_FILE;
use anthro_standards::{
    ReferenceTables, SeriesSource, StandardsError, embedded, manifest::Manifest, sha256_hex,
};
use tempfile::TempDir;

fn write_dataset(dir: &Path) {
    std::fs::write(dir.join(MANIFEST_FILE), embedded::MANIFEST).unwrap();
    for (name, content) in embedded::table_files() {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

#[test]
fn embedded_tables_load_and_cover_every_series() {
    let tables = ReferenceTables::embedded().unwrap();
    assert_eq!(tables.release().version, "2006");
    for indicator in Indicator::ALL {
        let (min, max) = indicator.domain();
        for sex in Sex::ALL {
            let rows = tables.series(indicator, sex);
            assert_eq!(rows.first().unwrap().x, min, "{indicator} {sex}");
            assert_eq!(rows.last().unwrap().x, max, "{indicator} {sex}");
            assert!(rows.iter().all(|row| row.sex == sex));
        }
    }
    assert_eq!(tables.series(Indicator::WeightForLength, Sex::Male).len(), 131);
}

#[test]
fn embedded_returns_the_same_instance() {
    let a = ReferenceTables::embedded().unwrap();
    let b = ReferenceTables::embedded().unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn manifest_digests_match_embedded_content() {
    let manifest = Manifest::parse(embedded::MANIFEST, MANIFEST_FILE).unwrap();
    for entry in manifest.validate().unwrap() {
        let content = embedded::table_file(&entry.path).unwrap();
        assert_eq!(sha256_hex(content.as_bytes()), entry.sha256, "{}", entry.path);
    }
}

#[test]
fn female_weight_for_age_row_at_two_years() {
    let tables = ReferenceTables::embedded().unwrap();
    let row = tables.series(Indicator::WeightForAge, Sex::Female)[24];
    assert_eq!(row.x, 24.0);
    assert_eq!(row.l, -0.2941);
    assert_eq!(row.m, 11.4775);
    assert_eq!(row.s, 0.12390);
}

#[test]
fn directory_copy_loads_identically() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path());

    let loaded = ReferenceTables::load_from_dir(dir.path()).unwrap();
    let embedded = ReferenceTables::embedded().unwrap();
    assert_eq!(loaded.release(), embedded.release());
    for indicator in Indicator::ALL {
        for sex in Sex::ALL {
            assert_eq!(loaded.series(indicator, sex), embedded.series(indicator, sex));
        }
    }
}

#[test]
fn tampered_table_fails_digest_check() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path());
    let path = dir.path().join("wfa_girls_0_to_60_months.csv");
    let tampered = embedded::WFA_GIRLS.replacen("11.4775", "11.4776", 1);
    std::fs::write(&path, tampered).unwrap();

    let err = ReferenceTables::load_from_dir(dir.path()).unwrap_err();
    match err {
        StandardsError::Sha256Mismatch { file, .. } => {
            assert_eq!(file, "wfa_girls_0_to_60_months.csv");
        }
        other => panic!("expected digest mismatch, got {other}"),
    }
}

#[test]
fn unlisted_csv_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path());
    std::fs::write(dir.path().join("bmi_boys.csv"), "Month,L,M,S\n").unwrap();

    assert!(matches!(
        ReferenceTables::load_from_dir(dir.path()),
        Err(StandardsError::UnexpectedFile { .. })
    ));
}

#[test]
fn missing_table_is_reported() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path());
    std::fs::remove_file(dir.path().join("hcfa_boys_0_to_60_months.csv")).unwrap();

    assert!(matches!(
        ReferenceTables::load_from_dir(dir.path()),
        Err(StandardsError::MissingFile { .. })
    ));
}

#[test]
fn missing_manifest_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        ReferenceTables::load_from_dir(dir.path()),
        Err(StandardsError::Io { .. })
    ));
}

fn embedded_sources() -> Vec<SeriesSource> {
    let tables = ReferenceTables::embedded().unwrap();
    let mut sources = Vec::new();
    for indicator in Indicator::ALL {
        for sex in Sex::ALL {
            sources.push(SeriesSource {
                indicator,
                sex,
                file: tables.source_file(indicator, sex).to_string(),
                rows: tables.series(indicator, sex).to_vec(),
            });
        }
    }
    sources
}

#[test]
fn from_series_requires_every_series() {
    let tables = ReferenceTables::embedded().unwrap();
    let mut sources = embedded_sources();
    sources.retain(|s| !(s.indicator == Indicator::WeightForLength && s.sex == Sex::Female));

    assert!(matches!(
        ReferenceTables::from_series(tables.release().clone(), sources),
        Err(StandardsError::MissingSeries {
            indicator: Indicator::WeightForLength,
            sex: Sex::Female
        })
    ));
}

#[test]
fn from_series_rejects_invalid_rows() {
    let tables = ReferenceTables::embedded().unwrap();
    let mut sources = embedded_sources();
    let rows: &mut Vec<LmsRow> = &mut sources[0].rows;
    rows[12].s = 0.0;

    assert!(matches!(
        ReferenceTables::from_series(tables.release().clone(), sources),
        Err(StandardsError::InvalidTable { .. })
    ));
}

#[test]
fn from_series_rejects_mixed_sex_rows() {
    let tables = ReferenceTables::embedded().unwrap();
    let mut sources = embedded_sources();
    sources[0].rows[3].sex = Sex::Female;

    assert!(matches!(
        ReferenceTables::from_series(tables.release().clone(), sources),
        Err(StandardsError::InvalidTable { .. })
    ));
}
