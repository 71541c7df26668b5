//! Browser loader for job-builder coverage reports.
//!
//! `load()` fetches `jjb_report.json`, renders the collapsible panel tree into
//! `#report_container` and wires the expand/collapse clicks. Decoding and
//! markup come from `jjb-coverage-report`, so the browser page and the static
//! page produced by `jjbcov render` are the same tree.
//!
//! ```js
//! import init, { load, report_css } from './pkg/jjb_coverage_wasm.js';
//! await init();
//! await load();            // jjb_report.json -> #report_container
//! ```

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, Response, Window};

use jjb_coverage_report::model::{DetailMode, Visibility};
use jjb_coverage_report::styles::REPORT_CSS;
use jjb_coverage_report::types::CoverageDocument;
use jjb_coverage_report::{DEFAULT_SOURCE, render_fragment, render_load_error};

/// Element the tree is rendered into when no id is given.
pub const CONTAINER_ID: &str = "report_container";

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ============================================================================
// WASM Exports
// ============================================================================

/// Fetch a coverage report and render it into the page.
///
/// # Arguments
/// * `source_url` - Report location (default `jjb_report.json`)
/// * `container_id` - Target element id (default `report_container`)
///
/// The detail mode comes from the page's `?detailed=` query parameter. On
/// any failure the container shows an error notice, the message is logged to
/// the console and the returned promise rejects.
#[wasm_bindgen]
pub async fn load(source_url: Option<String>, container_id: Option<String>) -> Result<(), JsValue> {
    let source = source_url.unwrap_or_else(|| DEFAULT_SOURCE.to_string());
    let container_id = container_id.unwrap_or_else(|| CONTAINER_ID.to_string());

    let window = web_sys::window().ok_or_else(|| js_error("no window available"))?;
    let document = window
        .document()
        .ok_or_else(|| js_error("no document available"))?;
    let container = document
        .get_element_by_id(&container_id)
        .ok_or_else(|| js_error(&format!("missing #{} element", container_id)))?;

    let search = window.location().search().unwrap_or_default();
    let detail = DetailMode::from_query(&search);

    match fetch_document(&window, &source).await {
        Ok(report) => {
            container.set_inner_html(&render_fragment(&report, detail));
            wire_toggles(&container)
        }
        Err(message) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "[jjb-coverage] failed to load {}: {}",
                source, message
            )));
            container.set_inner_html(&render_load_error(&source, &message));
            Err(js_error(&message))
        }
    }
}

/// Render a report from JSON text without touching the DOM.
///
/// `detailed` takes the same values as the query parameter.
#[wasm_bindgen]
pub fn render_report_html(json_data: &str, detailed: Option<String>) -> Result<String, JsValue> {
    render_html(json_data, detailed.as_deref()).map_err(|message| js_error(&message))
}

/// Stylesheet for host pages that do not ship their own panel styles.
#[wasm_bindgen]
pub fn report_css() -> String {
    REPORT_CSS.to_string()
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("jjb-coverage-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

// ============================================================================
// Internals
// ============================================================================

fn render_html(json_data: &str, detailed: Option<&str>) -> Result<String, String> {
    let report = CoverageDocument::from_json(json_data).map_err(|e| e.to_string())?;
    Ok(render_fragment(&report, DetailMode::from_value(detailed)))
}

async fn fetch_document(window: &Window, source: &str) -> Result<CoverageDocument, String> {
    let response = JsFuture::from(window.fetch_with_str(source))
        .await
        .map_err(describe_js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let body = response.text().map_err(describe_js_error)?;
    let text = JsFuture::from(body).await.map_err(describe_js_error)?;
    let text = text
        .as_string()
        .ok_or_else(|| "response body is not text".to_string())?;

    CoverageDocument::from_json(&text).map_err(|e| e.to_string())
}

/// Bind one click handler per `[data-role="toggle"]` element. Each closure
/// owns its own trigger element.
fn wire_toggles(container: &Element) -> Result<(), JsValue> {
    let triggers = container.query_selector_all("[data-role=\"toggle\"]")?;

    for idx in 0..triggers.length() {
        let Some(node) = triggers.item(idx) else {
            continue;
        };
        let Ok(trigger) = node.dyn_into::<Element>() else {
            continue;
        };

        let owner = trigger.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            if let Some(target) = owner.next_element_sibling() {
                toggle_display(&target);
            }
        });
        trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // Handlers live as long as the page.
        on_click.forget();
    }

    Ok(())
}

fn toggle_display(target: &Element) {
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = target.style();
    let current = style.get_property_value("display").unwrap_or_default();
    if let Err(err) = style.set_property("display", next_display(&current)) {
        web_sys::console::warn_1(&err);
    }
}

/// Inline `display` value after one toggle.
fn next_display(current: &str) -> &'static str {
    Visibility::from_display(current).toggled().display_value()
}

fn describe_js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{"functions": {
        "project": {"_support": "supported", "_jobs": ["a", "b"],
            "builders": {"_support": "supported", "_jobs": ["a"], "_values": {"a": ["x"]}}}
    }}"#;

    #[test]
    fn renders_fragment_from_json() {
        let html = render_html(REPORT, None).unwrap();
        assert!(html.contains("panel-tree"));
        assert!(html.contains("2 jobs have this item"));
        assert!(!html.contains("<html"));
        assert!(!html.contains("job-list"));
    }

    #[test]
    fn detail_value_is_honoured() {
        let html = render_html(REPORT, Some("values")).unwrap();
        assert!(html.contains("value-list"));
        assert!(!html.contains("job-list"));
    }

    #[test]
    fn malformed_reports_surface_a_message() {
        let err = render_html(r#"{"nope": {}}"#, None).unwrap_err();
        assert!(err.contains("functions"));

        let err = render_html("{", None).unwrap_err();
        assert!(err.starts_with("invalid JSON"));
    }

    #[test]
    fn toggling_twice_restores_display() {
        assert_eq!(next_display(""), "none");
        assert_eq!(next_display("none"), "");
        for start in ["", "none"] {
            assert_eq!(next_display(next_display(start)), start);
        }
        // any explicit display counts as shown
        assert_eq!(next_display("block"), "none");
    }

    #[test]
    fn health_check_reports_version() {
        assert!(health_check().contains(env!("CARGO_PKG_VERSION")));
    }
}
