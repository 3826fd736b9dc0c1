//! Configuration file support for the exporter.
//!
//! Loads `jm-site.toml` from the working directory, or the file given with
//! `--config`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jm_site::SiteConfig;
use serde::Deserialize;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "jm-site.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Document settings, passed through to the renderer
    pub site: SiteConfig,
    pub output: OutputConfig,
}

/// Where `render` writes the page
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            file_name: "index.html".into(),
        }
    }
}

impl CliConfig {
    /// Load the explicit config file, or `./jm-site.toml` if it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Apply a `--year` override.
    pub fn with_year(mut self, year: Option<i32>) -> Self {
        if year.is_some() {
            self.site.year = year;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.site.validate().context("Invalid [site] settings")?;

        let name = self.output.file_name.trim();
        if name.is_empty() {
            bail!("Invalid [output] settings: `file_name` must not be empty");
        }
        if name.contains(['/', '\\']) {
            bail!(
                "Invalid [output] settings: `file_name` must be a bare file name, got `{}`",
                self.output.file_name
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, body).expect("write config");
        path
    }

    #[test]
    fn test_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[site]
title = "J&M Industry"
lang = "es-MX"
canonical_url = "https://jymindustry.com/"
year = 2025

[output]
dir = "public"
file_name = "home.html"
"#,
        );

        let config = CliConfig::load(Some(&path)).expect("load");
        assert_eq!(config.site.title, "J&M Industry");
        assert_eq!(config.site.lang, "es-MX");
        assert_eq!(
            config.site.canonical_url.as_deref(),
            Some("https://jymindustry.com/")
        );
        assert_eq!(config.site.year, Some(2025));
        assert_eq!(config.output.dir, PathBuf::from("public"));
        assert_eq!(config.output.file_name, "home.html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let config = CliConfig::load(Some(&path)).expect("load");
        assert_eq!(config.site, SiteConfig::default());
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.output.file_name, "index.html");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = CliConfig::load(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config"));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[deploy]\ntarget = \"s3\"\n");

        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_year_override() {
        let config = CliConfig::default().with_year(Some(2031));
        assert_eq!(config.site.year, Some(2031));

        let kept = config.with_year(None);
        assert_eq!(kept.site.year, Some(2031));
    }

    #[test]
    fn test_validate_rejects_nested_file_name() {
        let mut config = CliConfig::default();
        config.output.file_name = "pages/index.html".into();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("bare file name"));
    }

    #[test]
    fn test_validate_reports_site_errors() {
        let mut config = CliConfig::default();
        config.site.lang = "es_ES".into();

        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("invalid language tag `es_ES`"));
    }
}
