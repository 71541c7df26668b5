//! Tri-colour progress bar over an item's children.

use crate::model::{Progress, format_percent};
use leptos::prelude::*;

/// Stacked bar: supported, ignored, unsupported.
///
/// Segment widths are shares of the total job weight; a zero total renders
/// three 0% segments rather than a broken bar.
#[component]
pub fn ProgressBar(progress: Progress) -> impl IntoView {
    view! {
        <div class="progress" title={progress.describe()}>
            {progress
                .segments()
                .into_iter()
                .map(|(status, pct)| {
                    view! {
                        <div
                            class=format!("progress-bar {}", status.bar_class())
                            style=format!("width: {}%", format_percent(pct))
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
