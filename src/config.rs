//! Site configuration.
//!
//! The generator runs with no arguments. Every path and the site title have
//! fixed defaults that match the expected project layout:
//!
//! ```text
//! project/
//! ├── site.toml              # Optional overrides (this module)
//! ├── content/               # One folder per video
//! ├── templates/             # video_template.html, index_template.html, style.css
//! └── html/                  # Generated site
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//! site_title = "Data PipeLine"
//! content_dir = "content"
//! output_dir = "html"
//! templates_dir = "templates"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional override file, looked up in the working directory.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration, loaded from `site.toml` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Shown in every page title and header.
    pub site_title: String,
    /// Root directory holding one folder per video.
    pub content_dir: PathBuf,
    /// Where the generated site is written.
    pub output_dir: PathBuf,
    /// Directory holding the page templates and `style.css`.
    pub templates_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Data PipeLine".to_string(),
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("html"),
            templates_dir: PathBuf::from("templates"),
        }
    }
}

impl SiteConfig {
    /// Resolve the relative paths in this config against `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.content_dir = base.join(&self.content_dir);
        self.output_dir = base.join(&self.output_dir);
        self.templates_dir = base.join(&self.templates_dir);
        self
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.output_dir.join("assets")
    }

    /// Name of the content folder as shown to readers of the index page.
    pub fn content_dir_name(&self) -> String {
        self.content_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.content_dir.display().to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_title must not be empty".into(),
            ));
        }
        if self.output_dir == self.content_dir {
            return Err(ConfigError::Validation(
                "output_dir must differ from content_dir".into(),
            ));
        }
        Ok(())
    }
}

/// Load `site.toml` from `dir`, falling back to defaults when it is absent.
///
/// Relative paths in the result are resolved against `dir`.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config = match fs::read_to_string(dir.join(CONFIG_FILE)) {
        Ok(content) => toml::from_str(&content)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => SiteConfig::default(),
        Err(e) => return Err(e.into()),
    };
    config.validate()?;
    Ok(config.rooted_at(dir))
}
