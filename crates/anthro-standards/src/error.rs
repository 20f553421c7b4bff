//! Error types for reference table loading.

use std::path::PathBuf;

use anthro_model::{Indicator, Sex};
use thiserror::Error;

/// Errors that can occur while loading or verifying reference tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML manifest {file}: {source}")]
    Toml {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("missing file listed in manifest: {path}")]
    MissingFile { path: PathBuf },

    #[error("unexpected table file not listed in manifest: {path}")]
    UnexpectedFile { path: PathBuf },

    #[error("sha256 mismatch for {file} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        file: String,
        expected: String,
        actual: String,
    },

    #[error("invalid reference table {file}: {message}")]
    InvalidTable { file: String, message: String },

    #[error("manifest lists more than one table for {indicator} ({sex})")]
    DuplicateSeries { indicator: Indicator, sex: Sex },

    #[error("no reference table for {indicator} ({sex})")]
    MissingSeries { indicator: Indicator, sex: Sex },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_table(file: &str, message: impl Into<String>) -> Self {
        Self::InvalidTable {
            file: file.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for reference table operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
