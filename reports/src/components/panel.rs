//! Collapsible panel tree.
//!
//! Each [`PanelModel`] becomes a heading plus an initially hidden body; the
//! body holds the stats block followed by the nested panels. Headings carry
//! `data-role="toggle"` and the toggle script flips their next sibling.

use super::{ProgressBar, StatsBlock};
use crate::model::{PanelModel, Visibility};
use leptos::prelude::*;

/// Top-level list of panels.
#[component]
pub fn PanelTree(panels: Vec<PanelModel>) -> impl IntoView {
    if panels.is_empty() {
        return view! {
            <div class="panel-tree">
                <p class="muted">"No configuration items in this report"</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="panel-tree">
            {panels
                .into_iter()
                .map(|panel| view! { <PanelView panel=panel /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// One item: heading, hidden body, nested items.
#[component]
pub fn PanelView(panel: PanelModel) -> impl IntoView {
    let PanelModel {
        title,
        path,
        status,
        progress,
        stats,
        children,
    } = panel;

    let heading_class = match status {
        Some(status) => format!("panel-heading {}", status.heading_class()),
        None => "panel-heading".to_string(),
    };

    view! {
        <div class="panel panel-default" data-path=path>
            <div class=heading_class data-role="toggle">
                <span class="panel-title">{title}</span>
                {progress.map(|progress| view! { <ProgressBar progress=progress /> })}
            </div>
            <div class="panel-body" style={Visibility::Hidden.style()}>
                <StatsBlock stats=stats />
                {children
                    .into_iter()
                    .map(|child| view! { <PanelView panel=child /> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
