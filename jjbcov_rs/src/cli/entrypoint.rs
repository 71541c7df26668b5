//! Shared `main()` body: parse flags, set up logging, load config, dispatch.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use super::args::{Cli, Command};
use super::commands;
use crate::config::JjbcovConfig;

/// Run the CLI and map the outcome to a process exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match dispatch(&cli) {
        Ok(code) => code,
        Err(e) => {
            let err_str = format!("{:?}", e);
            if err_str.contains("Broken pipe") || err_str.contains("os error 32") {
                ExitCode::SUCCESS
            } else {
                eprintln!("[jjbcov] Error: {:#}", e);
                ExitCode::FAILURE
            }
        }
    }
}

/// Logs go to stderr; stdout carries HTML, summaries and check results.
fn init_tracing(log_level: &str) {
    // A second init (e.g. from tests in one process) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .try_init();
}

fn load_config(cli: &Cli) -> JjbcovConfig {
    match &cli.config {
        Some(path) => JjbcovConfig::load_explicit(path),
        None => JjbcovConfig::load(Path::new(".")),
    }
}

/// Execute a parsed command line.
pub fn dispatch(cli: &Cli) -> Result<ExitCode> {
    let config = load_config(cli);
    debug!(?config, "effective config");

    match &cli.command {
        Command::Render(args) => commands::render(args, &config),
        Command::Summary(args) => commands::summary(args, &config),
        Command::Check(args) => commands::check(args, &config),
    }
}
