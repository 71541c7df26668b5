//! Basic report generation example.
//!
//! Run with: `cargo run --example basic_report`

use jjb_coverage_report::{ReportOptions, model::DetailMode, render_report, types::CoverageDocument};

const REPORT: &str = r#"{
    "functions": {
        "_support": "unsupported",
        "project": {
            "_support": "supported",
            "_jobs": ["gate-nova-python27", "gate-nova-pep8"],
            "builders": {
                "_support": "supported",
                "_jobs": ["gate-nova-python27", "gate-nova-pep8"],
                "hudson.tasks.Shell": {
                    "_support": "supported",
                    "_jobs": ["gate-nova-python27", "gate-nova-pep8"],
                    "command": {
                        "_support": "supported",
                        "_jobs": ["gate-nova-python27", "gate-nova-pep8"],
                        "_values": {
                            "gate-nova-python27": ["tox -e py27"],
                            "gate-nova-pep8": ["tox -e pep8"]
                        }
                    }
                }
            },
            "publishers": {"_support": "ignored", "_jobs": ["gate-nova-python27"]},
            "triggers": {"_support": "unsupported", "_jobs": ["gate-nova-pep8"]}
        }
    },
    "total_jobs": 2
}"#;

fn main() {
    let doc = CoverageDocument::from_json(REPORT).expect("example report is valid");

    let options = ReportOptions {
        detail: DetailMode::All,
        ..Default::default()
    };

    let html = render_report(&doc, &options);

    let output_path = "basic_report.html";
    std::fs::write(output_path, &html).expect("Failed to write report");

    println!("Report written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
