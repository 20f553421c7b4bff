//! WHO Child Growth Standards reference data.
//!
//! The 2006 LMS tables are embedded in the binary and verified against the
//! SHA-256 digests in their manifest before first use. A directory with the
//! same layout can be loaded instead for alternative data releases.
//!
//! ```no_run
//! use anthro_model::{Indicator, Sex};
//! use anthro_standards::ReferenceTables;
//!
//! let tables = ReferenceTables::embedded()?;
//! let rows = tables.series(Indicator::WeightForAge, Sex::Female);
//! assert_eq!(rows.len(), 61);
//! # Ok::<(), anthro_standards::StandardsError>(())
//! ```

pub mod embedded;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod paths;
pub mod registry;

pub use error::{Result, StandardsError};
pub use loader::{load_series_from_str, validate_series};
pub use manifest::{Manifest, Release, TableEntry, sha256_hex, verify_digest};
pub use paths::{STANDARDS_ENV_VAR, bundled_data_dir, standards_dir_override};
pub use registry::{ReferenceTables, SeriesSource, SeriesSummary, TablesSummary};
