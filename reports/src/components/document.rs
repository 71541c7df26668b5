//! Root document component - the complete HTML page

use super::{PanelTree, SummaryHeader};
use crate::model::outline;
use crate::styles::{CSP, REPORT_CSS};
use crate::summary::summarize;
use crate::types::CoverageDocument;
use crate::ReportOptions;
use leptos::prelude::*;

/// The complete HTML document for the report
#[component]
pub fn ReportDocument(document: CoverageDocument, options: ReportOptions) -> impl IntoView {
    let summary = summarize(&document);
    let panels = outline(&document.functions, options.detail);
    let ReportOptions { title, detail } = options;

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title.clone()}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <div class="container">
                    <SummaryHeader title=title summary=summary detail=detail />
                    <div id="report_container">
                        <PanelTree panels=panels />
                    </div>
                </div>
                <script>{TOGGLE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Expand/collapse wiring for the static page.
///
/// Every `[data-role="toggle"]` element flips the inline `display` of its
/// next sibling; the header buttons open or close every panel body at once.
pub const TOGGLE_SCRIPT: &str = r#"
(() => {
  const flip = (el) => {
    el.style.display = el.style.display === 'none' ? '' : 'none';
  };

  document.querySelectorAll('[data-role="toggle"]').forEach(el => {
    el.addEventListener('click', () => {
      const target = el.nextElementSibling;
      if (target) {
        flip(target);
      }
    });
  });

  const setAll = (display) => {
    document.querySelectorAll('.panel-body').forEach(body => {
      body.style.display = display;
    });
  };

  const expandAll = document.querySelector('[data-role="expand-all"]');
  if (expandAll) {
    expandAll.addEventListener('click', () => setAll(''));
  }

  const collapseAll = document.querySelector('[data-role="collapse-all"]');
  if (collapseAll) {
    collapseAll.addEventListener('click', () => setAll('none'));
  }
})();
"#;
