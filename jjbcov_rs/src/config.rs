//! Configuration file support for jjbcov.
//!
//! Loads optional `.jjbcov/config.toml` from the working directory, or the
//! file passed with `--config`. Command-line flags override every value.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JjbcovConfig {
    pub report: ReportConfig,
}

/// `[report]` table
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report JSON to read (default `jjb_report.json`).
    pub input: Option<PathBuf>,
    /// HTML file to write (default `jjb_report.html`).
    pub output: Option<PathBuf>,
    /// Page title.
    pub title: Option<String>,
    /// Detail mode: `true`, `jobs` or `values`.
    pub detailed: Option<String>,
}

impl JjbcovConfig {
    /// Load config from `.jjbcov/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".jjbcov").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load a config file named with `--config`; a missing file logs a warning.
    pub fn load_explicit(path: &Path) -> Self {
        if !path.exists() {
            warn!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        Self::load_from_path(path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = JjbcovConfig::default();
        assert!(config.report.input.is_none());
        assert!(config.report.output.is_none());
        assert!(config.report.title.is_none());
        assert!(config.report.detailed.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = JjbcovConfig::load(temp.path());
        assert_eq!(config, JjbcovConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = temp.path().join(".jjbcov");
        std::fs::create_dir_all(&config_dir).expect("create .jjbcov");

        let config_path = config_dir.join("config.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
[report]
input = "public_html/jjb_report.json"
output = "public_html/index.html"
title = "Zuul job coverage"
detailed = "jobs"
"#
        )
        .expect("write config");

        let config = JjbcovConfig::load(temp.path());
        assert_eq!(
            config.report.input,
            Some(PathBuf::from("public_html/jjb_report.json"))
        );
        assert_eq!(
            config.report.output,
            Some(PathBuf::from("public_html/index.html"))
        );
        assert_eq!(config.report.title.as_deref(), Some("Zuul job coverage"));
        assert_eq!(config.report.detailed.as_deref(), Some("jobs"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[report]\ntitle = \"Only a title\"\n").expect("write config");

        let config = JjbcovConfig::load_from_path(&path);
        assert_eq!(config.report.title.as_deref(), Some("Only a title"));
        assert!(config.report.input.is_none());
    }

    #[test]
    fn test_explicit_missing_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        let config = JjbcovConfig::load_explicit(&temp.path().join("absent.toml"));
        assert_eq!(config, JjbcovConfig::default());
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("named.toml");
        std::fs::write(&path, "[report]\ndetailed = \"values\"\n").expect("write config");

        let config = JjbcovConfig::load_explicit(&path);
        assert_eq!(config.report.detailed.as_deref(), Some("values"));
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[report\ntitle = ").expect("write config");

        let config = JjbcovConfig::load_from_path(&path);
        assert_eq!(config, JjbcovConfig::default());
    }
}
