//! # jjb-coverage-report
//!
//! Leptos SSR renderer for job-builder coverage reports.
//!
//! The input is the `jjb_report.json` document written by the coverage
//! generator: a tree of configuration items, each tagged with the jobs that
//! use it, the values those jobs set and whether the job runner supports it.
//! The output is a collapsible panel tree with tri-colour progress bars.
//!
//! ## Quick Start
//!
//! ```rust
//! use jjb_coverage_report::{render_report, ReportOptions, types::CoverageDocument};
//!
//! let doc = CoverageDocument::from_json(
//!     r#"{"functions": {"A": {"_support": "supported", "_jobs": ["job1", "job2"]}}}"#,
//! ).unwrap();
//!
//! let html = render_report(&doc, &ReportOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("2 jobs have this item"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Decoded document shape
//! - [`model`] - Pure panel outline (no HTML)
//! - [`summary`] - Totals for the header and CLI
//! - [`lint`] - Structural checks
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering is two-step: [`model::outline`] turns the tree into
//! [`model::PanelModel`]s, then the components turn those into HTML with
//! Leptos 0.8's `RenderHtml::to_html`. No reactive runtime or hydration.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod lint;
pub mod model;
pub mod styles;
pub mod summary;
pub mod types;

use components::{LoadError, PanelTree, ReportDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use model::{DetailMode, outline};
use types::CoverageDocument;

/// Default page title.
pub const DEFAULT_TITLE: &str = "JJB Coverage Report";

/// Default report location, relative to the page.
pub const DEFAULT_SOURCE: &str = "jjb_report.json";

/// Page-level rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// `<title>` and header text.
    pub title: String,
    /// Which detail lists to render.
    pub detail: DetailMode,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            title: DEFAULT_TITLE.to_string(),
            detail: DetailMode::Off,
        }
    }
}

/// Render a complete, self-contained HTML page.
///
/// # Example
///
/// ```rust
/// use jjb_coverage_report::{render_report, ReportOptions, model::DetailMode, types::CoverageDocument};
///
/// let doc = CoverageDocument::from_json(r#"{"functions": {}}"#).unwrap();
/// let options = ReportOptions { detail: DetailMode::All, ..Default::default() };
/// let html = render_report(&doc, &options);
/// assert!(html.contains("report_container"));
/// ```
pub fn render_report(document: &CoverageDocument, options: &ReportOptions) -> String {
    let doc = view! {
        <ReportDocument document=document.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the panel tree, for injection into an existing page.
pub fn render_fragment(document: &CoverageDocument, detail: DetailMode) -> String {
    let panels = outline(&document.functions, detail);
    view! { <PanelTree panels=panels /> }.to_html()
}

/// Render the notice shown when the report cannot be loaded.
pub fn render_load_error(source: &str, message: &str) -> String {
    view! { <LoadError source=source.to_string() message=message.to_string() /> }.to_html()
}
