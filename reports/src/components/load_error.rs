//! Error notice shown in place of the tree when the report cannot be loaded.

use super::{Icon, ReportIcon};
use leptos::prelude::*;

/// Visible load failure message.
#[component]
pub fn LoadError(source: String, message: String) -> impl IntoView {
    view! {
        <div class="load-error" role="alert">
            <Icon icon=ReportIcon::Warning />
            " Could not load "
            <code>{source}</code>
            ": "
            {message}
        </div>
    }
}
