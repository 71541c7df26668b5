//! Subcommand interface for `jjbcov`.
//!
//! - [`args`] - clap definitions (source of truth for flags)
//! - [`commands`] - one handler per subcommand
//! - [`entrypoint`] - logging setup and exit-code mapping

pub mod args;
pub mod commands;
pub mod entrypoint;

pub use args::{CheckArgs, Cli, Command, RenderArgs, SummaryArgs};
pub use entrypoint::run;

/// Path value meaning stdin (for inputs) or stdout (for outputs).
pub const STDIO_PATH: &str = "-";

/// Default output file for `jjbcov render`.
pub const DEFAULT_OUTPUT: &str = "jjb_report.html";
