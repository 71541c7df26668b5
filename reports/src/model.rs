//! Pure view model for the coverage tree.
//!
//! [`outline`] walks a [`ReportNode`] and produces [`PanelModel`]s, one per
//! item, carrying everything the components need: heading status, progress
//! aggregation and the stats block. Nothing here touches HTML, so the same
//! outline feeds the static page and the browser loader.

use crate::types::{ReportNode, SupportStatus, join_path};
use serde::Serialize;

/// How much job/value detail the stats blocks carry.
///
/// Mirrors the page's `detailed` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DetailMode {
    /// Counts only.
    #[default]
    Off,
    /// Counts plus job-name lists.
    Jobs,
    /// Counts plus per-job value lists.
    Values,
    /// Both lists.
    All,
}

impl DetailMode {
    /// Interpret a `detailed` parameter value. Unrecognised values disable detail.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("true") => DetailMode::All,
            Some("jobs") => DetailMode::Jobs,
            Some("values") => DetailMode::Values,
            _ => DetailMode::Off,
        }
    }

    /// Read the mode from a location search string such as `?detailed=jobs`.
    ///
    /// Only a `detailed=` pair that follows `?` or `&` counts, and the value
    /// runs to the next `?` or `&`.
    pub fn from_query(search: &str) -> Self {
        let value = search
            .split(['?', '&'])
            .skip(1)
            .find_map(|pair| pair.strip_prefix("detailed="));
        DetailMode::from_value(value)
    }

    /// Parameter value that selects this mode.
    pub fn as_value(&self) -> Option<&'static str> {
        match self {
            DetailMode::Off => None,
            DetailMode::Jobs => Some("jobs"),
            DetailMode::Values => Some("values"),
            DetailMode::All => Some("true"),
        }
    }

    /// Whether job-name lists are rendered.
    pub fn shows_jobs(&self) -> bool {
        matches!(self, DetailMode::Jobs | DetailMode::All)
    }

    /// Whether per-job value lists are rendered.
    pub fn shows_values(&self) -> bool {
        matches!(self, DetailMode::Values | DetailMode::All)
    }
}

/// Visibility of a collapsible element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Rendered with its default display.
    Shown,
    /// `display: none`.
    Hidden,
}

impl Visibility {
    /// Classify an inline `display` value; only `none` hides.
    pub fn from_display(display: &str) -> Self {
        if display.trim() == "none" {
            Visibility::Hidden
        } else {
            Visibility::Shown
        }
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    /// Value for the inline `display` property (empty restores the default).
    pub fn display_value(&self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hidden => "none",
        }
    }

    /// Inline style attribute for the initial render.
    pub fn style(&self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hidden => "display: none",
        }
    }
}

/// Job counts per support bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Jobs on supported items.
    pub supported: usize,
    /// Jobs on ignored items.
    pub ignored: usize,
    /// Jobs on unsupported items.
    pub unsupported: usize,
}

impl Progress {
    /// Aggregate the immediate children of `node`, weighting each by its job count.
    pub fn of_children(node: &ReportNode) -> Self {
        let mut progress = Progress::default();
        for (_, child) in &node.children {
            progress.add(child.status(), child.job_count());
        }
        progress
    }

    /// Add `jobs` to the bucket for `status`.
    pub fn add(&mut self, status: SupportStatus, jobs: usize) {
        match status {
            SupportStatus::Supported => self.supported += jobs,
            SupportStatus::Ignored => self.ignored += jobs,
            SupportStatus::Unsupported => self.unsupported += jobs,
        }
    }

    /// Count for one bucket.
    pub fn count(&self, status: SupportStatus) -> usize {
        match status {
            SupportStatus::Supported => self.supported,
            SupportStatus::Ignored => self.ignored,
            SupportStatus::Unsupported => self.unsupported,
        }
    }

    /// Sum of all buckets.
    pub fn total(&self) -> usize {
        self.supported + self.ignored + self.unsupported
    }

    /// Share of one bucket in percent; 0 when the total is 0.
    pub fn percent(&self, status: SupportStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        100.0 * self.count(status) as f64 / total as f64
    }

    /// Segments in bar order: supported, ignored, unsupported.
    pub fn segments(&self) -> [(SupportStatus, f64); 3] {
        SupportStatus::ALL.map(|status| (status, self.percent(status)))
    }

    /// Short tooltip text, e.g. `3 supported / 1 ignored / 0 unsupported`.
    pub fn describe(&self) -> String {
        format!(
            "{} supported / {} ignored / {} unsupported",
            self.supported, self.ignored, self.unsupported
        )
    }
}

/// Format a percentage for CSS widths: at most two decimals, no trailing zeros.
pub fn format_percent(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Content of a panel's stats block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsModel {
    /// Number of jobs, when `_jobs` is present.
    pub job_count: Option<usize>,
    /// Job names, only in job-detail mode.
    pub job_names: Option<Vec<String>>,
    /// Number of jobs with values, when `_values` is present.
    pub valued_job_count: Option<usize>,
    /// Values per job, only in value-detail mode.
    pub job_values: Option<Vec<(String, Vec<String>)>>,
}

impl StatsModel {
    /// Build the stats block for `node` under `mode`.
    pub fn of(node: &ReportNode, mode: DetailMode) -> Self {
        let jobs = node.jobs.as_ref();
        let values = node.values.as_ref();

        StatsModel {
            job_count: jobs.map(Vec::len),
            job_names: jobs.filter(|_| mode.shows_jobs()).cloned(),
            valued_job_count: values.map(Vec::len),
            job_values: values.filter(|_| mode.shows_values()).cloned(),
        }
    }
}

/// One collapsible panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelModel {
    /// Item name, shown in the heading.
    pub title: String,
    /// `>`-separated item path from the root.
    pub path: String,
    /// Heading colour, `None` leaves the heading neutral.
    pub status: Option<SupportStatus>,
    /// Bar over the item's own children, `None` for leaves.
    pub progress: Option<Progress>,
    /// Stats shown at the top of the panel body.
    pub stats: StatsModel,
    /// Nested panels, in document order.
    pub children: Vec<PanelModel>,
}

/// Build the panel outline for every child of `node`.
pub fn outline(node: &ReportNode, mode: DetailMode) -> Vec<PanelModel> {
    outline_at(node, "", mode)
}

fn outline_at(node: &ReportNode, parent_path: &str, mode: DetailMode) -> Vec<PanelModel> {
    node.children
        .iter()
        .map(|(key, child)| {
            let path = join_path(parent_path, key);
            PanelModel {
                title: key.clone(),
                status: heading_status(node, child),
                progress: (child.sub_item_count() > 0).then(|| Progress::of_children(child)),
                stats: StatsModel::of(child, mode),
                children: outline_at(child, &path, mode),
                path,
            }
        })
        .collect()
}

/// Headings are coloured when either side of the edge carries `_support`;
/// the colour always comes from the child.
fn heading_status(parent: &ReportNode, child: &ReportNode) -> Option<SupportStatus> {
    if parent.support_label.is_some() || child.support_label.is_some() {
        Some(child.status())
    } else {
        None
    }
}

/// Count panels in an outline, nested ones included.
pub fn count_panels(panels: &[PanelModel]) -> usize {
    panels
        .iter()
        .map(|panel| 1 + count_panels(&panel.children))
        .sum()
}
