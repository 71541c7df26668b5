//! clap definitions for `jjbcov`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jjbcov")]
#[command(about = "Render and inspect job-builder coverage reports")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Config file (default: .jjbcov/config.toml in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a self-contained HTML page
    Render(RenderArgs),
    /// Print coverage totals
    Summary(SummaryArgs),
    /// Report structural problems; exits 1 when any are found
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Report JSON (`-` reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// HTML output (`-` writes stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Detail lists: `true` (jobs and values), `jobs` or `values`
    #[arg(long, value_name = "MODE", value_parser = ["true", "jobs", "values"])]
    pub detailed: Option<String>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Report JSON (`-` reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Summarise one item, addressed by `>`-separated path (e.g. `project>builders`)
    #[arg(long, value_name = "PATH")]
    pub item: Option<String>,

    /// Machine-readable output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Report JSON (`-` reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Machine-readable output
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "jjbcov",
            "render",
            "--input",
            "in.json",
            "-o",
            "-",
            "--detailed",
            "jobs",
        ])
        .expect("valid args");

        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.input, Some(PathBuf::from("in.json")));
        assert_eq!(args.output, Some(PathBuf::from("-")));
        assert_eq!(args.detailed.as_deref(), Some("jobs"));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn rejects_unknown_detail_mode() {
        let result = Cli::try_parse_from(["jjbcov", "render", "--detailed", "everything"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "jjbcov",
            "check",
            "--log-level",
            "debug",
            "--config",
            "custom.toml",
        ])
        .expect("valid args");
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
