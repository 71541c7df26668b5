//! End-to-end CLI tests for jjbcov

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_path().join(name)
}

/// Get a command pointing to the jjbcov binary, isolated from any
/// `.jjbcov/config.toml` in the developer's working directory.
fn jjbcov(cwd: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("jjbcov");
    cmd.current_dir(cwd.path()).env_remove("RUST_LOG");
    cmd
}

fn workdir() -> TempDir {
    TempDir::new().expect("temp dir")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("summary"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_detail_mode() {
        let cwd = workdir();
        jjbcov(&cwd)
            .args(["render", "--detailed", "everything"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("everything"));
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_html_page() {
        let cwd = workdir();
        let out = cwd.path().join("report.html");

        jjbcov(&cwd)
            .arg("render")
            .arg("--input")
            .arg(fixture("jjb_report.json"))
            .arg("--output")
            .arg(&out)
            .assert()
            .success();

        let html = fs::read_to_string(&out).expect("report written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("JJB Coverage Report"));
        assert_eq!(html.matches("class=\"panel panel-default\"").count(), 6);
        assert!(html.contains("3 jobs have this item"));
        assert!(!html.contains("class=\"job-list\""));
        assert!(!html.contains("class=\"value-list\""));
    }

    #[test]
    fn defaults_to_files_in_working_directory() {
        let cwd = workdir();
        fs::copy(fixture("jjb_report.json"), cwd.path().join("jjb_report.json"))
            .expect("copy fixture");

        jjbcov(&cwd).arg("render").assert().success();

        assert!(cwd.path().join("jjb_report.html").exists());
    }

    #[test]
    fn writes_stdout_and_reads_stdin() {
        let cwd = workdir();
        let json = fs::read_to_string(fixture("jjb_report.json")).expect("fixture");

        jjbcov(&cwd)
            .args(["render", "--input", "-", "--output", "-", "--detailed", "true"])
            .write_stdin(json)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("class=\"job-list\""))
            .stdout(predicate::str::contains("class=\"value-list\""))
            .stdout(predicate::str::contains("tox -e pep8"));
    }

    #[test]
    fn title_flag_sets_page_title() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("render")
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .args(["-o", "-", "--title", "Zuul migration"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<title>Zuul migration</title>"));
    }

    #[test]
    fn config_file_supplies_defaults() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("--config")
            .arg(fixture("config.toml"))
            .arg("render")
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .args(["-o", "-"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configured Coverage"))
            .stdout(predicate::str::contains("class=\"job-list\""))
            .stdout(predicate::str::contains("class=\"value-list\"").not());
    }

    #[test]
    fn flags_override_config_file() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("--config")
            .arg(fixture("config.toml"))
            .arg("render")
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .args(["-o", "-", "--detailed", "values", "--title", "Flag title"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Flag title"))
            .stdout(predicate::str::contains("class=\"value-list\""))
            .stdout(predicate::str::contains("class=\"job-list\"").not());
    }

    #[test]
    fn missing_config_file_warns_and_uses_defaults() {
        let cwd = workdir();
        jjbcov(&cwd)
            .args(["--config", "absent.toml", "render", "-o", "-"])
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .assert()
            .success()
            .stderr(predicate::str::contains("WARN"))
            .stderr(predicate::str::contains("absent.toml"))
            .stdout(predicate::str::contains("JJB Coverage Report"));
    }

    #[test]
    fn malformed_report_fails_with_path() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("render")
            .arg("-i")
            .arg(fixture("malformed.json"))
            .args(["-o", "-"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[jjbcov] Error"))
            .stderr(predicate::str::contains("project>builders"));
    }

    #[test]
    fn missing_report_fails() {
        let cwd = workdir();
        jjbcov(&cwd)
            .args(["render", "-i", "nope.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.json"));
    }

    #[test]
    fn lint_issues_are_logged_but_render_succeeds() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("render")
            .arg("-i")
            .arg(fixture("lint_issues.json"))
            .args(["-o", "-"])
            .assert()
            .success()
            .stderr(predicate::str::contains("project>publishers"));
    }
}

// ============================================
// Summary Tests
// ============================================

mod summary {
    use super::*;

    #[test]
    fn prints_text_totals() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("summary")
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Jobs:    4"))
            .stdout(predicate::str::contains("Items:   6"))
            .stdout(predicate::str::contains("3 supported (75%)"))
            .stdout(predicate::str::contains("matrix-project [unsupported] 1 jobs"));
    }

    #[test]
    fn prints_json_totals() {
        let cwd = workdir();
        let output = jjbcov(&cwd)
            .arg("summary")
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .arg("--json")
            .output()
            .expect("run jjbcov");
        assert!(output.status.success());

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("summary is JSON");
        assert_eq!(json["total_jobs"], 4);
        assert_eq!(json["items"], 6);
        assert_eq!(json["overall"]["supported"], 3);
        assert_eq!(json["overall"]["total"], 4);
        assert_eq!(json["top_level"][0]["name"], "project");
        assert_eq!(json["top_level"][0]["children"]["unsupported"], 3);
    }

    #[test]
    fn summarizes_one_item() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("summary")
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .args(["--item", "project>builders"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "project>builders [supported] 2 jobs; children: 2 supported (100%)",
            ));
    }

    #[test]
    fn unknown_item_fails() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("summary")
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .args(["--item", "project>publishers"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("project>publishers"));
    }
}

// ============================================
// Check Tests
// ============================================

mod check {
    use super::*;

    #[test]
    fn clean_report_passes() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("check")
            .arg("-i")
            .arg(fixture("jjb_report.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn issues_exit_with_code_one() {
        let cwd = workdir();
        jjbcov(&cwd)
            .arg("check")
            .arg("-i")
            .arg(fixture("lint_issues.json"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("project>wrappers"))
            .stdout(predicate::str::contains("\"maybe\""))
            .stdout(predicate::str::contains("project>publishers"))
            .stdout(predicate::str::contains("project>properties"))
            .stdout(predicate::str::contains("3 issue(s) found."));
    }

    #[test]
    fn json_issues_are_tagged() {
        let cwd = workdir();
        let output = jjbcov(&cwd)
            .arg("check")
            .arg("-i")
            .arg(fixture("lint_issues.json"))
            .arg("--json")
            .output()
            .expect("run jjbcov");
        assert_eq!(output.status.code(), Some(1));

        let issues: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("issues are JSON");
        let kinds: Vec<&str> = issues
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|issue| issue["kind"].as_str())
            .collect();
        assert_eq!(kinds, ["unknown_support", "support_without_jobs", "empty_jobs"]);
    }
}
