//! Subcommand handlers.
//!
//! Every handler reads the document, does its work and returns the process
//! exit code. Output goes to stdout; logging goes to stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use jjb_coverage_report::lint::{LintIssue, lint};
use jjb_coverage_report::model::{DetailMode, format_percent};
use jjb_coverage_report::summary::{
    BucketSummary, CoverageSummary, ItemSummary, summarize, summarize_item,
};
use jjb_coverage_report::types::CoverageDocument;
use jjb_coverage_report::{DEFAULT_SOURCE, DEFAULT_TITLE, ReportOptions, render_report};

use super::args::{CheckArgs, RenderArgs, SummaryArgs};
use super::{DEFAULT_OUTPUT, STDIO_PATH};
use crate::config::{JjbcovConfig, ReportConfig};

/// Render settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ReportOptions,
}

impl RenderPlan {
    pub fn resolve(args: &RenderArgs, config: &ReportConfig) -> Self {
        let detailed = args.detailed.as_deref().or(config.detailed.as_deref());
        if let Some(value) = detailed.filter(|v| DetailMode::from_value(Some(*v)) == DetailMode::Off) {
            warn!("Unknown detail mode {:?}, rendering without detail lists", value);
        }

        RenderPlan {
            input: resolve_input(args.input.as_ref(), config),
            output: args
                .output
                .clone()
                .or_else(|| config.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            options: ReportOptions {
                title: args
                    .title
                    .clone()
                    .or_else(|| config.title.clone())
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                detail: DetailMode::from_value(detailed),
            },
        }
    }
}

fn resolve_input(flag: Option<&PathBuf>, config: &ReportConfig) -> PathBuf {
    flag.cloned()
        .or_else(|| config.input.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE))
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Read and decode a report. `-` reads stdin.
pub fn load_document(path: &Path) -> Result<CoverageDocument> {
    let text = if is_stdio(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read report from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read report {}", path.display()))?
    };

    let document = CoverageDocument::from_json(&text)
        .with_context(|| format!("Failed to decode {}", describe_source(path)))?;
    debug!(
        source = %describe_source(path),
        items = document.functions.item_count(),
        "decoded report"
    );
    Ok(document)
}

fn describe_source(path: &Path) -> String {
    if is_stdio(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(contents.as_bytes())
            .context("Failed to write to stdout")?;
        return stdout.flush().context("Failed to flush stdout");
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// `jjbcov render`
pub fn render(args: &RenderArgs, config: &JjbcovConfig) -> Result<ExitCode> {
    let plan = RenderPlan::resolve(args, &config.report);
    let document = load_document(&plan.input)?;

    for issue in lint(&document) {
        warn!("{}", issue);
    }

    let html = render_report(&document, &plan.options);
    write_output(&plan.output, &html)?;

    if !is_stdio(&plan.output) {
        info!(
            "Report written to {} ({} items)",
            plan.output.display(),
            document.functions.item_count()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// `jjbcov summary`
pub fn summary(args: &SummaryArgs, config: &JjbcovConfig) -> Result<ExitCode> {
    let input = resolve_input(args.input.as_ref(), &config.report);
    let document = load_document(&input)?;

    let output = match &args.item {
        Some(path) => {
            let Some(node) = document.functions.descendant(path) else {
                bail!("No item {:?} in {}", path, describe_source(&input));
            };
            let item = summarize_item(path, node);
            if args.json {
                serde_json::to_string_pretty(&item)?
            } else {
                format_item(&item)
            }
        }
        None => {
            let summary = summarize(&document);
            if args.json {
                serde_json::to_string_pretty(&summary)?
            } else {
                format_summary(&summary)
            }
        }
    };

    println!("{}", output.trim_end());
    Ok(ExitCode::SUCCESS)
}

/// `jjbcov check`
pub fn check(args: &CheckArgs, config: &JjbcovConfig) -> Result<ExitCode> {
    let input = resolve_input(args.input.as_ref(), &config.report);
    let document = load_document(&input)?;
    let issues = lint(&document);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else {
        print!("{}", format_issues(&issues));
    }

    if issues.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

// ============================================================================
// Text formatting
// ============================================================================

fn format_buckets(buckets: &BucketSummary) -> String {
    format!(
        "{} supported ({}%), {} ignored ({}%), {} unsupported ({}%)",
        buckets.counts.supported,
        format_percent(buckets.supported_pct),
        buckets.counts.ignored,
        format_percent(buckets.ignored_pct),
        buckets.counts.unsupported,
        format_percent(buckets.unsupported_pct),
    )
}

fn format_item_line(item: &ItemSummary) -> String {
    let support = item.support.as_deref().unwrap_or("-");
    let mut line = format!("{} [{}] {} jobs", item.name, support, item.jobs);
    if item.children.total > 0 {
        line.push_str(&format!("; children: {}", format_buckets(&item.children)));
    }
    line
}

pub fn format_summary(summary: &CoverageSummary) -> String {
    let mut out = String::new();
    if let Some(total) = summary.total_jobs {
        out.push_str(&format!("Jobs:    {}\n", total));
    }
    out.push_str(&format!("Items:   {}\n", summary.items));
    out.push_str(&format!("Overall: {}\n", format_buckets(&summary.overall)));

    if !summary.top_level.is_empty() {
        out.push('\n');
        for item in &summary.top_level {
            out.push_str(&format!("  {}\n", format_item_line(item)));
        }
    }
    out
}

pub fn format_item(item: &ItemSummary) -> String {
    format!("{}\n", format_item_line(item))
}

pub fn format_issues(issues: &[LintIssue]) -> String {
    if issues.is_empty() {
        return "No issues found.\n".to_string();
    }

    let mut out = String::new();
    for issue in issues {
        out.push_str(&format!("  {}\n", issue));
    }
    out.push_str(&format!("{} issue(s) found.\n", issues.len()));
    out
}
