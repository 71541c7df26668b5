//! Report data types for the job-builder coverage document.
//!
//! The generator writes a loosely shaped JSON tree where keys starting with
//! `_` carry metadata and every other key is a nested configuration item.
//! These types decode that tree once, up front, into an explicit shape so the
//! renderer never has to sniff key prefixes.
//!
//! # Example
//!
//! ```rust
//! use jjb_coverage_report::types::{CoverageDocument, SupportStatus};
//!
//! let doc = CoverageDocument::from_json(
//!     r#"{"functions": {"project": {"_support": "supported", "_jobs": ["gate-nova"]}}}"#,
//! ).unwrap();
//!
//! let project = doc.functions.child("project").unwrap();
//! assert_eq!(project.status(), SupportStatus::Supported);
//! assert_eq!(project.job_count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Prefix shared by every metadata key.
pub const METADATA_PREFIX: &str = "_";
/// Support status key.
pub const SUPPORT_KEY: &str = "_support";
/// Jobs referencing an item.
pub const JOBS_KEY: &str = "_jobs";
/// Per-job values observed for an item.
pub const VALUES_KEY: &str = "_values";
/// Separator used for item paths, matching the generator's `project>builders` notation.
pub const PATH_SEPARATOR: char = '>';

/// Errors raised while decoding a coverage document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level value is not an object with a `functions` object.
    #[error("report has no `functions` object at the top level")]
    MissingRoot,
    /// A child item is not a JSON object.
    #[error("`{path}` is not an object")]
    NotAnObject {
        /// Item path, `>`-separated.
        path: String,
    },
    /// A metadata key has the wrong JSON shape.
    #[error("`{path}`: `{key}` must be {expected}")]
    InvalidMetadata {
        /// Item path, `>`-separated.
        path: String,
        /// Offending metadata key.
        key: &'static str,
        /// Human description of the expected shape.
        expected: &'static str,
    },
}

/// Tri-state support classification of a configuration item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportStatus {
    /// Handled by the job runner.
    Supported,
    /// Deliberately skipped without affecting the job.
    Ignored,
    /// Anything else, including missing or unrecognised labels.
    Unsupported,
}

impl SupportStatus {
    /// All statuses in progress-bar order.
    pub const ALL: [SupportStatus; 3] = [
        SupportStatus::Supported,
        SupportStatus::Ignored,
        SupportStatus::Unsupported,
    ];

    /// Classify a raw `_support` label. Unknown labels are unsupported.
    pub fn from_label(label: &str) -> Self {
        match label {
            "supported" => SupportStatus::Supported,
            "ignored" => SupportStatus::Ignored,
            _ => SupportStatus::Unsupported,
        }
    }

    /// Whether the generator is known to emit this label.
    pub fn is_known_label(label: &str) -> bool {
        matches!(label, "supported" | "ignored" | "unsupported")
    }

    /// Lowercase label, as written by the generator.
    pub fn as_label(&self) -> &'static str {
        match self {
            SupportStatus::Supported => "supported",
            SupportStatus::Ignored => "ignored",
            SupportStatus::Unsupported => "unsupported",
        }
    }

    /// Background class for panel headings.
    pub fn heading_class(&self) -> &'static str {
        match self {
            SupportStatus::Supported => "bg-success",
            SupportStatus::Ignored => "bg-warning",
            SupportStatus::Unsupported => "bg-danger",
        }
    }

    /// Segment class for progress bars.
    pub fn bar_class(&self) -> &'static str {
        match self {
            SupportStatus::Supported => "progress-bar-success",
            SupportStatus::Ignored => "progress-bar-warning",
            SupportStatus::Unsupported => "progress-bar-danger",
        }
    }
}

/// One item of the coverage tree.
///
/// Children keep the order they had in the JSON document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ReportNode {
    /// Raw `_support` label, if present.
    pub support_label: Option<String>,
    /// Jobs that use this item (`_jobs`).
    pub jobs: Option<Vec<String>>,
    /// Values per job (`_values`), in document order.
    pub values: Option<Vec<(String, Vec<String>)>>,
    /// Nested items, in document order.
    pub children: Vec<(String, ReportNode)>,
    /// Number of unrecognised `_` keys skipped while decoding.
    pub other_metadata: usize,
}

impl ReportNode {
    /// Decode a node from a JSON object. `path` is used in error messages only.
    pub fn from_map(map: Map<String, Value>, path: &str) -> Result<Self, DecodeError> {
        let mut node = ReportNode::default();

        for (key, value) in map {
            if key == SUPPORT_KEY {
                node.support_label = Some(scalar_text(value));
            } else if key == JOBS_KEY {
                node.jobs = Some(decode_jobs(value, path)?);
            } else if key == VALUES_KEY {
                node.values = Some(decode_values(value, path)?);
            } else if key.starts_with(METADATA_PREFIX) {
                // Unknown metadata is carried by newer generators; skip it.
                node.other_metadata += 1;
            } else {
                let child_path = join_path(path, &key);
                let Value::Object(child) = value else {
                    return Err(DecodeError::NotAnObject { path: child_path });
                };
                let child = ReportNode::from_map(child, &child_path)?;
                node.children.push((key, child));
            }
        }

        Ok(node)
    }

    /// Parsed support status, `None` when `_support` is absent.
    pub fn support(&self) -> Option<SupportStatus> {
        self.support_label.as_deref().map(SupportStatus::from_label)
    }

    /// Support status used for aggregation: absent counts as unsupported.
    pub fn status(&self) -> SupportStatus {
        self.support().unwrap_or(SupportStatus::Unsupported)
    }

    /// Number of jobs referencing this item (0 when `_jobs` is absent).
    pub fn job_count(&self) -> usize {
        self.jobs.as_ref().map_or(0, Vec::len)
    }

    /// Keys in the JSON object, minus one for `_support` and one each for
    /// `_jobs` and `_values` when present. The `_support` slot is always
    /// subtracted, so a node without it needs two children to count as
    /// nested. A positive count puts a progress bar on the item.
    pub fn sub_item_count(&self) -> usize {
        let keys = self.children.len()
            + self.other_metadata
            + usize::from(self.support_label.is_some())
            + usize::from(self.jobs.is_some())
            + usize::from(self.values.is_some());
        keys.saturating_sub(
            1 + usize::from(self.jobs.is_some()) + usize::from(self.values.is_some()),
        )
    }

    /// Direct child by name.
    pub fn child(&self, name: &str) -> Option<&ReportNode> {
        self.children
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    /// Descendant by `>`-separated path, e.g. `project>builders`.
    ///
    /// An empty path returns `self`.
    pub fn descendant(&self, path: &str) -> Option<&ReportNode> {
        if path.is_empty() {
            return Some(self);
        }
        path.split(PATH_SEPARATOR)
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Total number of items below this node.
    pub fn item_count(&self) -> usize {
        self.children
            .iter()
            .map(|(_, child)| 1 + child.item_count())
            .sum()
    }
}

impl TryFrom<Map<String, Value>> for ReportNode {
    type Error = DecodeError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        ReportNode::from_map(map, ROOT_KEY)
    }
}

/// Key of the root node in the top-level document.
pub const ROOT_KEY: &str = "functions";

/// The whole `jjb_report.json` document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct CoverageDocument {
    /// Root of the item tree (`functions`).
    pub functions: ReportNode,
    /// Number of jobs the generator processed, when recorded.
    pub total_jobs: Option<u64>,
}

impl CoverageDocument {
    /// Decode a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        CoverageDocument::try_from(value)
    }

    /// Decode a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(bytes)?;
        CoverageDocument::try_from(value)
    }
}

impl TryFrom<Value> for CoverageDocument {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut top) = value else {
            return Err(DecodeError::MissingRoot);
        };
        let Some(Value::Object(root)) = top.remove(ROOT_KEY) else {
            return Err(DecodeError::MissingRoot);
        };

        Ok(CoverageDocument {
            functions: ReportNode::from_map(root, ROOT_KEY)?,
            total_jobs: top.get("total_jobs").and_then(Value::as_u64),
        })
    }
}

/// Join an item path with a child key.
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", parent, PATH_SEPARATOR, key)
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn decode_jobs(value: Value, path: &str) -> Result<Vec<String>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items.into_iter().map(scalar_text).collect()),
        _ => Err(DecodeError::InvalidMetadata {
            path: path.to_string(),
            key: JOBS_KEY,
            expected: "an array of job names",
        }),
    }
}

fn decode_values(value: Value, path: &str) -> Result<Vec<(String, Vec<String>)>, DecodeError> {
    let invalid = || DecodeError::InvalidMetadata {
        path: path.to_string(),
        key: VALUES_KEY,
        expected: "an object mapping job names to arrays of values",
    };

    let Value::Object(per_job) = value else {
        return Err(invalid());
    };

    per_job
        .into_iter()
        .map(|(job, values)| match values {
            Value::Array(items) => Ok((job, items.into_iter().map(scalar_text).collect())),
            _ => Err(invalid()),
        })
        .collect()
}
