//! CLI argument definitions for the growth standards tool.

use std::path::PathBuf;

use anthro_model::{Indicator, MeasuredPosition, Sex};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "anthro",
    version,
    about = "WHO Child Growth Standards - z-scores, nutritional status and reference curves",
    long_about = "Score child anthropometric measurements against the WHO 2006 Child Growth \
                  Standards.\n\n\
                  Covers weight-for-age, length/height-for-age, head-circumference-for-age \
                  and weight-for-length/height for children aged 0 to 60 months."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Load reference tables from a directory instead of the embedded copy.
    ///
    /// The directory must contain `manifest.toml` and the CSV files it lists.
    /// Falls back to the ANTHRO_STANDARDS_DIR environment variable.
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the z-score and nutritional status of one measurement.
    Classify(ClassifyArgs),

    /// Print the seven SD reference curves over a range.
    Curve(CurveArgs),

    /// List the loaded reference tables after verification.
    Tables(TablesArgs),

    /// Print the status cut points for one or all indicators.
    Cutpoints(CutpointsArgs),
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Indicator code or name (wfa, lhfa, hcfa, wfl).
    #[arg(long, short = 'i')]
    pub indicator: Indicator,

    /// Sex of the child (male/female, boy/girl, L/P).
    #[arg(long, short = 's')]
    pub sex: Sex,

    /// Age in months, or length/height in cm for weight-for-length/height.
    #[arg(
        long,
        required_unless_present = "birth_date",
        conflicts_with = "birth_date"
    )]
    pub x: Option<f64>,

    /// Date of birth (YYYY-MM-DD); age is derived from --measured-on.
    #[arg(long = "birth-date", value_name = "DATE", requires = "measured_on")]
    pub birth_date: Option<NaiveDate>,

    /// Date of the measurement (YYYY-MM-DD).
    #[arg(long = "measured-on", value_name = "DATE", requires = "birth_date")]
    pub measured_on: Option<NaiveDate>,

    /// Measured value: weight in kg, length/height or head circumference in cm.
    #[arg(long)]
    pub value: f64,

    /// Position a length/height was measured in (recumbent or standing).
    #[arg(long)]
    pub position: Option<MeasuredPosition>,

    /// Score weight-based indicators with the plain LMS transform beyond ±3 SD.
    #[arg(long = "no-restricted-tails")]
    pub no_restricted_tails: bool,

    /// Do not correct length/height for the measuring position.
    #[arg(long = "no-position-correction")]
    pub no_position_correction: bool,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct CurveArgs {
    #[arg(long, short = 'i')]
    pub indicator: Indicator,

    #[arg(long, short = 's')]
    pub sex: Sex,

    /// Start of the range (default: start of the table).
    #[arg(long)]
    pub from: Option<f64>,

    /// End of the range (default: end of the table).
    #[arg(long)]
    pub to: Option<f64>,

    /// Number of intervals; one more point than this is printed
    /// (default: one per table step).
    #[arg(long)]
    pub steps: Option<usize>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct TablesArgs {
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct CutpointsArgs {
    /// Only print this indicator.
    #[arg(long, short = 'i')]
    pub indicator: Option<Indicator>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

/// Output rendering for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
