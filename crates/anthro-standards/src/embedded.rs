//! Embedded reference data.
//!
//! The WHO 2006 LMS tables are compiled into the binary with `include_str!()`
//! so the engine never touches the filesystem at runtime. The manifest pins a
//! SHA-256 digest for every file; the registry checks them on first load.
//!
//! # Structure
//!
//! ```text
//! data/who-2006/
//! ├── manifest.toml
//! ├── wfa_{boys,girls}_0_to_60_months.csv
//! ├── lhfa_{boys,girls}_0_to_60_months.csv
//! ├── hcfa_{boys,girls}_0_to_60_months.csv
//! └── wfl_{boys,girls}_45_to_110_cm.csv
//! ```

/// Directory name of the bundled dataset version.
pub const DATASET_DIR: &str = "who-2006";

/// Manifest for the bundled dataset.
pub const MANIFEST: &str = include_str!("../data/who-2006/manifest.toml");

// =============================================================================
// Weight-for-age
// =============================================================================

pub const WFA_BOYS: &str = include_str!("../data/who-2006/wfa_boys_0_to_60_months.csv");
pub const WFA_GIRLS: &str = include_str!("../data/who-2006/wfa_girls_0_to_60_months.csv");

// =============================================================================
// Length/height-for-age
// =============================================================================

pub const LHFA_BOYS: &str = include_str!("../data/who-2006/lhfa_boys_0_to_60_months.csv");
pub const LHFA_GIRLS: &str = include_str!("../data/who-2006/lhfa_girls_0_to_60_months.csv");

// =============================================================================
// Head-circumference-for-age
// =============================================================================

pub const HCFA_BOYS: &str = include_str!("../data/who-2006/hcfa_boys_0_to_60_months.csv");
pub const HCFA_GIRLS: &str = include_str!("../data/who-2006/hcfa_girls_0_to_60_months.csv");

// =============================================================================
// Weight-for-length/height
// =============================================================================

pub const WFL_BOYS: &str = include_str!("../data/who-2006/wfl_boys_45_to_110_cm.csv");
pub const WFL_GIRLS: &str = include_str!("../data/who-2006/wfl_girls_45_to_110_cm.csv");

const TABLE_FILES: &[(&str, &str)] = &[
    ("wfa_boys_0_to_60_months.csv", WFA_BOYS),
    ("wfa_girls_0_to_60_months.csv", WFA_GIRLS),
    ("lhfa_boys_0_to_60_months.csv", LHFA_BOYS),
    ("lhfa_girls_0_to_60_months.csv", LHFA_GIRLS),
    ("hcfa_boys_0_to_60_months.csv", HCFA_BOYS),
    ("hcfa_girls_0_to_60_months.csv", HCFA_GIRLS),
    ("wfl_boys_45_to_110_cm.csv", WFL_BOYS),
    ("wfl_girls_45_to_110_cm.csv", WFL_GIRLS),
];

/// All embedded table files as `(file name, content)` pairs.
pub fn table_files() -> &'static [(&'static str, &'static str)] {
    TABLE_FILES
}

/// Embedded content for a manifest path.
pub fn table_file(path: &str) -> Option<&'static str> {
    TABLE_FILES
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, content)| *content)
}
