//! Document-level settings.
//!
//! Page copy is fixed (see [`crate::content`]); what varies between
//! deployments is the `<head>` and the footer year. The CLI reads these from
//! the `[site]` table of `jm-site.toml`.

use serde::Deserialize;
use thiserror::Error;

/// Settings for one rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `<title>`
    pub title: String,
    /// `<meta name="description">`
    pub description: String,
    /// `<html lang>`
    pub lang: String,
    /// `<link rel="canonical">`, omitted when unset
    pub canonical_url: Option<String>,
    /// Footer copyright year. `None` uses the current year.
    pub year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "J&M Industry | Automatización con IA".into(),
            description: "Transformamos operaciones complejas en sistemas autónomos eficientes con soluciones de Inteligencia Artificial a medida.".into(),
            lang: "es".into(),
            canonical_url: None,
            year: None,
        }
    }
}

/// Invalid [`SiteConfig`] value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required text field is blank.
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),
    /// `lang` is not a language tag.
    #[error("invalid language tag `{0}`")]
    InvalidLang(String),
    /// `canonical_url` is not an absolute http(s) URL.
    #[error("canonical_url must start with http:// or https://, got `{0}`")]
    InvalidUrl(String),
    /// `year` is outside 1970..=9999.
    #[error("year {0} is out of range (1970..=9999)")]
    YearOutOfRange(i32),
}

impl SiteConfig {
    /// Check every field, reporting the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyField("title"));
        }

        let lang_ok = !self.lang.is_empty()
            && self
                .lang
                .split('-')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !lang_ok {
            return Err(ConfigError::InvalidLang(self.lang.clone()));
        }

        if let Some(url) = &self.canonical_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }

        match self.year {
            Some(year) if !(1970..=9999).contains(&year) => {
                return Err(ConfigError::YearOutOfRange(year));
            }
            _ => {}
        }

        Ok(())
    }

    /// Year shown in the footer.
    pub fn footer_year(&self) -> i32 {
        self.year.unwrap_or_else(current_year)
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
