//! Dataset manifest: release pins and per-file SHA-256 digests.

use std::collections::BTreeSet;
use std::path::{Component, Path};

use anthro_model::{Indicator, Sex};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::error::{Result, StandardsError};

pub const MANIFEST_FILE: &str = "manifest.toml";
pub const MANIFEST_SCHEMA: &str = "anthro.growth-reference-manifest";
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    pub release: Release,
    pub tables: Vec<ManifestTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

/// Publication the tables were transcribed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub publisher: String,
    pub standard: String,
    pub version: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestTable {
    pub path: String,
    pub sha256: String,
    pub indicator: String,
    pub sex: String,
}

/// A manifest entry with its indicator and sex resolved.
#[derive(Debug, Clone)]
pub struct TableEntry {
    pub path: String,
    pub sha256: String,
    pub indicator: Indicator,
    pub sex: Sex,
}

impl Manifest {
    pub fn parse(contents: &str, file: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| StandardsError::Toml {
            file: file.to_string(),
            source,
        })
    }

    /// Validates the header and every entry, returning entries sorted by
    /// indicator then sex.
    pub fn validate(&self) -> Result<Vec<TableEntry>> {
        if self.manifest.schema != MANIFEST_SCHEMA {
            return Err(StandardsError::InvalidManifest {
                message: format!("unsupported schema: {}", self.manifest.schema),
            });
        }
        if self.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
            return Err(StandardsError::InvalidManifest {
                message: format!(
                    "unsupported schema_version: {}",
                    self.manifest.schema_version
                ),
            });
        }

        let mut seen: BTreeSet<(Indicator, Sex)> = BTreeSet::new();
        let mut entries = Vec::with_capacity(self.tables.len());
        for table in &self.tables {
            let indicator: Indicator =
                table
                    .indicator
                    .parse()
                    .map_err(|e| StandardsError::InvalidManifest {
                        message: format!("{}: {e}", table.path),
                    })?;
            let sex: Sex = table
                .sex
                .parse()
                .map_err(|e| StandardsError::InvalidManifest {
                    message: format!("{}: {e}", table.path),
                })?;
            if !seen.insert((indicator, sex)) {
                return Err(StandardsError::DuplicateSeries { indicator, sex });
            }
            validate_sha(&table.sha256, &table.path)?;
            validate_path(&table.path)?;
            entries.push(TableEntry {
                path: table.path.clone(),
                sha256: table.sha256.to_ascii_lowercase(),
                indicator,
                sex,
            });
        }

        for indicator in Indicator::ALL {
            for sex in Sex::ALL {
                if !seen.contains(&(indicator, sex)) {
                    return Err(StandardsError::MissingSeries { indicator, sex });
                }
            }
        }

        entries.sort_by_key(|e| (e.indicator, e.sex));
        Ok(entries)
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

/// Checks file content against the digest pinned in the manifest.
pub fn verify_digest(entry: &TableEntry, bytes: &[u8]) -> Result<()> {
    let actual = sha256_hex(bytes);
    if actual != entry.sha256 {
        return Err(StandardsError::Sha256Mismatch {
            file: entry.path.clone(),
            expected: entry.sha256.clone(),
            actual,
        });
    }
    Ok(())
}

fn validate_sha(value: &str, path: &str) -> Result<()> {
    if value.len() != 64 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StandardsError::InvalidManifest {
            message: format!("invalid sha256 for {path}: expected 64 hex characters"),
        });
    }
    Ok(())
}

fn validate_path(value: &str) -> Result<()> {
    let path = Path::new(value);
    let plain = path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if value.is_empty() || !plain {
        return Err(StandardsError::InvalidManifest {
            message: format!("table path must be relative to the dataset directory: {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "3f945feb3312b29e0100fd5d03e1dd9a0b604b664773aa4a7e72140f801cac96";

    fn manifest_with(tables: &str) -> String {
        format!(
            r#"[manifest]
schema = "anthro.growth-reference-manifest"
schema_version = 1

[release]
publisher = "World Health Organization"
standard = "WHO Child Growth Standards"
version = "2006"
{tables}"#
        )
    }

    fn table(path: &str, indicator: &str, sex: &str) -> String {
        format!(
            "\n[[tables]]\npath = \"{path}\"\nsha256 = \"{DIGEST}\"\nindicator = \"{indicator}\"\nsex = \"{sex}\"\n"
        )
    }

    fn full_set() -> String {
        let mut tables = String::new();
        for indicator in Indicator::ALL {
            for sex in Sex::ALL {
                tables.push_str(&table(
                    &format!("{}_{}.csv", indicator.code(), sex),
                    indicator.code(),
                    sex.as_str(),
                ));
            }
        }
        tables
    }

    #[test]
    fn validates_complete_manifest() {
        let manifest = Manifest::parse(&manifest_with(&full_set()), "manifest.toml").unwrap();
        let entries = manifest.validate().unwrap();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].indicator, Indicator::WeightForAge);
        assert_eq!(entries[0].sex, Sex::Male);
    }

    #[test]
    fn rejects_unknown_indicator() {
        let text = manifest_with(&table("bmi.csv", "bmi", "male"));
        let manifest = Manifest::parse(&text, "manifest.toml").unwrap();
        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("unknown indicator: 'bmi'"));
    }

    #[test]
    fn rejects_duplicate_series() {
        let mut tables = full_set();
        tables.push_str(&table("again.csv", "wfa", "boys"));
        let manifest = Manifest::parse(&manifest_with(&tables), "manifest.toml").unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(StandardsError::DuplicateSeries {
                indicator: Indicator::WeightForAge,
                sex: Sex::Male
            })
        ));
    }

    #[test]
    fn rejects_missing_series() {
        let text = manifest_with(&table("wfa_boys.csv", "wfa", "male"));
        let manifest = Manifest::parse(&text, "manifest.toml").unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(StandardsError::MissingSeries {
                sex: Sex::Female,
                ..
            })
        ));
    }

    #[test]
    fn rejects_escaping_paths() {
        let mut tables = full_set();
        tables = tables.replacen("wfa_male.csv", "../wfa_male.csv", 1);
        let manifest = Manifest::parse(&manifest_with(&tables), "manifest.toml").unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(StandardsError::InvalidManifest { .. })
        ));
    }

    #[test]
    fn digest_mismatch_is_reported() {
        let entry = TableEntry {
            path: "wfa.csv".to_string(),
            sha256: DIGEST.to_string(),
            indicator: Indicator::WeightForAge,
            sex: Sex::Male,
        };
        assert!(matches!(
            verify_digest(&entry, b"tampered"),
            Err(StandardsError::Sha256Mismatch { .. })
        ));
    }
}
