//! Reference data directory resolution.

use std::path::PathBuf;

use crate::embedded::DATASET_DIR;

/// Environment variable for loading tables from a directory instead of the
/// embedded copy.
pub const STANDARDS_ENV_VAR: &str = "ANTHRO_STANDARDS_DIR";

/// Directory named by `ANTHRO_STANDARDS_DIR`, if set and non-empty.
pub fn standards_dir_override() -> Option<PathBuf> {
    std::env::var_os(STANDARDS_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Source directory of the dataset that is embedded in the binary.
///
/// Only meaningful on the machine the crate was built on; used by tests and
/// by tooling that regenerates the manifest.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(DATASET_DIR)
}
