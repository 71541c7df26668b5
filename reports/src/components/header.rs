//! Report header: title, totals, overall bar and tree controls.

use super::{Icon, ProgressBar, ReportIcon};
use crate::model::DetailMode;
use crate::summary::CoverageSummary;
use crate::types::SupportStatus;
use leptos::prelude::*;

/// Header shown above the panel tree on the static page.
#[component]
pub fn SummaryHeader(title: String, summary: CoverageSummary, detail: DetailMode) -> impl IntoView {
    let overall = summary.overall.clone();

    let mut meta = match summary.total_jobs {
        Some(jobs) => format!("{} jobs · {} configuration items", jobs, summary.items),
        None => format!("{} configuration items", summary.items),
    };
    if let Some(value) = detail.as_value() {
        meta.push_str(&format!(" · detailed={}", value));
    }

    view! {
        <header class="report-header">
            <h1>
                <Icon icon=ReportIcon::Overview size=20 />
                " "
                {title}
            </h1>
            <p class="report-meta">{meta}</p>
            {(overall.total > 0).then(|| view! { <ProgressBar progress=overall.counts /> })}
            <div class="legend">
                {SupportStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let count = overall.counts.count(status);
                        view! {
                            <span>
                                <span class=format!("legend-swatch {}", status.bar_class())></span>
                                {format!("{} {}", count, status.as_label())}
                            </span>
                        }
                    })
                    .collect_view()}
                <button class="tree-btn" data-role="expand-all" title="Expand all">
                    <Icon icon=ReportIcon::Expand size=14 />
                    "Expand all"
                </button>
                <button class="tree-btn" data-role="collapse-all" title="Collapse all">
                    <Icon icon=ReportIcon::Collapse size=14 />
                    "Collapse all"
                </button>
            </div>
        </header>
    }
}
