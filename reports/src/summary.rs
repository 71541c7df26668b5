//! Coverage totals for the report header and the `summary` command.

use crate::model::Progress;
use crate::types::{CoverageDocument, ReportNode, SupportStatus};
use serde::Serialize;

/// Bucket counts with their percentages.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BucketSummary {
    /// Raw counts.
    #[serde(flatten)]
    pub counts: Progress,
    /// Sum of all buckets.
    pub total: usize,
    /// Supported share in percent.
    pub supported_pct: f64,
    /// Ignored share in percent.
    pub ignored_pct: f64,
    /// Unsupported share in percent.
    pub unsupported_pct: f64,
}

impl From<Progress> for BucketSummary {
    fn from(counts: Progress) -> Self {
        BucketSummary {
            total: counts.total(),
            supported_pct: counts.percent(SupportStatus::Supported),
            ignored_pct: counts.percent(SupportStatus::Ignored),
            unsupported_pct: counts.percent(SupportStatus::Unsupported),
            counts,
        }
    }
}

/// Totals for one item and its immediate children.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemSummary {
    /// Item name (or path when summarising a subtree).
    pub name: String,
    /// Raw `_support` label.
    pub support: Option<String>,
    /// Jobs referencing the item.
    pub jobs: usize,
    /// Breakdown of the item's children.
    pub children: BucketSummary,
}

/// Whole-report totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CoverageSummary {
    /// Jobs processed by the generator, when recorded.
    pub total_jobs: Option<u64>,
    /// Number of items in the tree.
    pub items: usize,
    /// Breakdown of the root's children.
    pub overall: BucketSummary,
    /// One entry per top-level item.
    pub top_level: Vec<ItemSummary>,
}

/// Summarise a whole document.
pub fn summarize(document: &CoverageDocument) -> CoverageSummary {
    let root = &document.functions;
    CoverageSummary {
        total_jobs: document.total_jobs,
        items: root.item_count(),
        overall: Progress::of_children(root).into(),
        top_level: root
            .children
            .iter()
            .map(|(name, child)| summarize_item(name, child))
            .collect(),
    }
}

/// Summarise a single item.
pub fn summarize_item(name: &str, node: &ReportNode) -> ItemSummary {
    ItemSummary {
        name: name.to_string(),
        support: node.support_label.clone(),
        jobs: node.job_count(),
        children: Progress::of_children(node).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"{
        "functions": {
            "_support": "unsupported",
            "project": {
                "_support": "supported", "_jobs": ["a", "b", "c"],
                "builders": {"_support": "supported", "_jobs": ["a", "b"]},
                "scm": {"_support": "ignored", "_jobs": ["c"]},
                "triggers": {"_support": "unsupported", "_jobs": ["a"]}
            },
            "matrix-project": {"_support": "unsupported", "_jobs": ["d"]}
        },
        "total_jobs": 4
    }"#;

    #[test]
    fn summarizes_root_and_top_level() {
        let doc = CoverageDocument::from_json(DOC).unwrap();
        let summary = summarize(&doc);

        assert_eq!(summary.total_jobs, Some(4));
        assert_eq!(summary.items, 5);
        assert_eq!(summary.overall.counts.supported, 3);
        assert_eq!(summary.overall.counts.unsupported, 1);
        assert_eq!(summary.overall.supported_pct, 75.0);

        assert_eq!(summary.top_level.len(), 2);
        let project = &summary.top_level[0];
        assert_eq!(project.name, "project");
        assert_eq!(project.support.as_deref(), Some("supported"));
        assert_eq!(project.jobs, 3);
        assert_eq!(project.children.total, 4);
        assert_eq!(project.children.supported_pct, 50.0);
        assert_eq!(project.children.ignored_pct, 25.0);
        assert_eq!(project.children.unsupported_pct, 25.0);
    }

    #[test]
    fn empty_document_summarizes_to_zero() {
        let doc = CoverageDocument::from_json(r#"{"functions": {}}"#).unwrap();
        let summary = summarize(&doc);
        assert_eq!(summary.items, 0);
        assert_eq!(summary.overall, BucketSummary::default());
        assert!(summary.top_level.is_empty());
    }

    #[test]
    fn serializes_counts_inline() {
        let doc = CoverageDocument::from_json(DOC).unwrap();
        let json = serde_json::to_value(summarize(&doc)).unwrap();
        assert_eq!(json["overall"]["supported"], 3);
        assert_eq!(json["overall"]["total"], 4);
        assert_eq!(json["top_level"][1]["name"], "matrix-project");
    }
}
