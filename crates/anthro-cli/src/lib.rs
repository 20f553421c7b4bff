//! Library side of the `anthro` command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
