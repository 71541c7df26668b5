//! # jjbcov
//!
//! Command-line front end for job-builder coverage reports.
//!
//! `jjbcov` reads the `jjb_report.json` document written by the coverage
//! generator and turns it into a self-contained HTML page, a text or JSON
//! summary, or a list of structural problems:
//!
//! ```bash
//! jjbcov render --input jjb_report.json --output index.html --detailed jobs
//! jjbcov summary --json
//! jjbcov check
//! ```
//!
//! Decoding and rendering live in [`jjb_coverage_report`]; this crate adds
//! file handling, configuration and logging.

pub mod cli;
pub mod config;

pub use config::{JjbcovConfig, ReportConfig};
