//! CSS styles for the coverage report.
//!
//! Panel, heading and progress-bar class names follow the Bootstrap 3
//! vocabulary the report has always used (`panel-heading`, `bg-success`,
//! `progress-bar-danger`, ...), so pages that still load Bootstrap render the
//! same way. The embedded sheet makes the page self-contained.
//!
//! # Customization
//!
//! ```rust
//! use jjb_coverage_report::styles::REPORT_CSS;
//!
//! let my_css = ".panel-heading { font-size: 15px; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! ```

/// Complete CSS for the report.
pub const REPORT_CSS: &str = r#"
:root {
    --bg-page: #f7f7f7;
    --bg-panel: #ffffff;
    --text-main: #333333;
    --text-dim: #777777;
    --border-panel: #dddddd;
    --status-supported: rgb(223, 240, 216);
    --status-ignored: rgb(252, 248, 227);
    --status-unsupported: rgb(242, 222, 222);
    --bar-supported: #5cb85c;
    --bar-ignored: #f0ad4e;
    --bar-unsupported: #d9534f;
    --font-sans: -apple-system, 'Helvetica Neue', Helvetica, Arial, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    font-size: 14px;
    line-height: 1.45;
    background: var(--bg-page);
    color: var(--text-main);
    margin: 0;
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 24px;
}

/* Header */
.report-header {
    margin-bottom: 24px;
}

.report-header h1 {
    font-size: 22px;
    margin: 0 0 8px 0;
}

.report-meta {
    color: var(--text-dim);
    font-size: 13px;
    margin: 0 0 12px 0;
}

.legend {
    display: flex;
    gap: 16px;
    font-size: 12px;
    color: var(--text-dim);
    margin-top: 8px;
}

.legend-swatch {
    display: inline-block;
    width: 10px;
    height: 10px;
    border-radius: 2px;
    margin-right: 6px;
    vertical-align: middle;
}

/* Panels */
.panel {
    background: var(--bg-panel);
    border: 1px solid var(--border-panel);
    border-radius: 4px;
    margin-bottom: 8px;
}

.panel-heading {
    padding: 8px 12px;
    cursor: pointer;
    user-select: none;
    border-radius: 3px;
}

.panel-heading:hover {
    filter: brightness(0.97);
}

.panel-title {
    font-weight: 600;
    word-break: break-all;
}

.panel-body {
    padding: 8px 12px 8px 24px;
    border-top: 1px solid var(--border-panel);
}

.bg-success {
    background-color: var(--status-supported);
}

.bg-warning {
    background-color: var(--status-ignored);
}

.bg-danger {
    background-color: var(--status-unsupported);
}

/* Progress bars */
.progress {
    display: flex;
    height: 12px;
    margin-top: 6px;
    overflow: hidden;
    background-color: #f5f5f5;
    border-radius: 4px;
    box-shadow: inset 0 1px 2px rgba(0, 0, 0, 0.1);
}

.progress-bar {
    height: 100%;
}

.progress-bar-success {
    background-color: var(--bar-supported);
}

.progress-bar-warning {
    background-color: var(--bar-ignored);
}

.progress-bar-danger {
    background-color: var(--bar-unsupported);
}

/* Stats */
.stats p {
    margin: 4px 0;
}

.stat-line.clickable {
    cursor: pointer;
    text-decoration: underline dotted;
}

.job-list, .value-list {
    margin: 4px 0 8px 0;
    padding-left: 20px;
    font-family: ui-monospace, 'SFMono-Regular', Menlo, monospace;
    font-size: 12px;
}

.value-list ul {
    padding-left: 16px;
}

.value-job {
    font-weight: 600;
}

.tree-btn {
    margin-left: auto;
    display: inline-flex;
    align-items: center;
    gap: 4px;
    font-size: 12px;
    padding: 2px 8px;
    border: 1px solid var(--border-panel);
    border-radius: 4px;
    background: var(--bg-panel);
    color: var(--text-main);
    cursor: pointer;
}

.tree-btn + .tree-btn {
    margin-left: 0;
}

.icon {
    vertical-align: -2px;
}

.muted {
    color: var(--text-dim);
}

.load-error {
    padding: 12px 16px;
    border: 1px solid var(--bar-unsupported);
    background: var(--status-unsupported);
    border-radius: 4px;
}
"#;

/// Content Security Policy for the static page: inline styles and the inline
/// toggle script only, no network access.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
