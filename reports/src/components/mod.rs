//! Leptos UI components for the coverage report.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── SummaryHeader
//! │   └── ProgressBar (whole report)
//! └── PanelTree
//!     └── PanelView (per item, recursive)
//!         ├── ProgressBar (item's children)
//!         ├── StatsBlock
//!         └── PanelView ...
//! ```
//!
//! Components are normally driven through [`crate::render_report`] and
//! [`crate::render_fragment`]; [`LoadError`] is used by the browser loader.

mod document;
mod header;
mod icons;
mod load_error;
mod panel;
mod progress;
mod stats;

pub use document::ReportDocument;
pub use header::SummaryHeader;
pub use icons::{Icon, ReportIcon};
pub use load_error::LoadError;
pub use panel::{PanelTree, PanelView};
pub use progress::ProgressBar;
pub use stats::StatsBlock;
