//! Structural checks for coverage documents.
//!
//! The renderer is lenient (a missing `_jobs` weighs zero), but documents
//! that trip these checks usually come from a broken generator run.

use std::fmt;

use crate::types::{CoverageDocument, ReportNode, SupportStatus, join_path};
use serde::Serialize;

/// What is wrong with an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintKind {
    /// `_support` without `_jobs`: the item cannot be weighted.
    SupportWithoutJobs,
    /// `_support` holds a label the generator never writes.
    UnknownSupport {
        /// The raw label.
        label: String,
    },
    /// `_jobs` is present but empty.
    EmptyJobs,
}

/// One finding, located by item path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LintIssue {
    /// `>`-separated item path.
    pub path: String,
    /// The finding.
    #[serde(flatten)]
    pub kind: LintKind,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LintKind::SupportWithoutJobs => {
                write!(f, "{}: has `_support` but no `_jobs`", self.path)
            }
            LintKind::UnknownSupport { label } => {
                write!(f, "{}: unknown `_support` label {:?}", self.path, label)
            }
            LintKind::EmptyJobs => write!(f, "{}: `_jobs` is empty", self.path),
        }
    }
}

/// Check every item of the document, depth first in document order.
pub fn lint(document: &CoverageDocument) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    lint_children(&document.functions, "", &mut issues);
    issues
}

fn lint_children(node: &ReportNode, parent_path: &str, issues: &mut Vec<LintIssue>) {
    for (key, child) in &node.children {
        let path = join_path(parent_path, key);

        if let Some(label) = &child.support_label {
            if child.jobs.is_none() {
                issues.push(LintIssue {
                    path: path.clone(),
                    kind: LintKind::SupportWithoutJobs,
                });
            }
            if !SupportStatus::is_known_label(label) {
                issues.push(LintIssue {
                    path: path.clone(),
                    kind: LintKind::UnknownSupport {
                        label: label.clone(),
                    },
                });
            }
        }
        if child.jobs.as_ref().is_some_and(Vec::is_empty) {
            issues.push(LintIssue {
                path: path.clone(),
                kind: LintKind::EmptyJobs,
            });
        }

        lint_children(child, &path, issues);
    }
}
