//! Site generation.
//!
//! Runs the whole build in one pass: load content, write video pages, write
//! the index, copy the stylesheet.
//!
//! ## Output Structure
//!
//! ```text
//! html/
//! ├── index.html                 # Category-grouped video index
//! ├── style.css                  # Copied from templates/
//! ├── kafka_intro.html           # One page per video
//! ├── spark_tuning.html
//! └── assets/
//!     ├── kafka_intro/
//!     │   ├── audio.mp3
//!     │   └── thumbnail.jpg
//!     └── spark_tuning/
//!         └── cover.png
//! ```
//!
//! ## Skipped Output
//!
//! Templates are supplied by the site owner. When `video_template.html` is
//! missing no video pages are written and the index lists nothing; when
//! `index_template.html` is missing the index is not written. Both cases are
//! logged and the build still completes. An empty template counts as
//! missing. Files from earlier builds are never removed.
//!
//! A video folder named `index` would write its page over the site index, so
//! it is skipped with a warning.

use crate::config::SiteConfig;
use crate::render;
use crate::scan::{self, ScanError};
use crate::template::Template;
use crate::types::VideoRecord;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};

pub const VIDEO_TEMPLATE: &str = "video_template.html";
pub const INDEX_TEMPLATE: &str = "index_template.html";
pub const STYLESHEET: &str = "style.css";
pub const INDEX_PAGE: &str = "index.html";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Why a loaded video got no page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoVideoTemplate,
    /// The page filename would overwrite the site index.
    ReservedName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoVideoTemplate => f.write_str("no video template"),
            SkipReason::ReservedName => write!(f, "would overwrite {INDEX_PAGE}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub slug: String,
    pub reason: SkipReason,
}

/// What a build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Videos whose page was written, in slug order.
    pub pages: Vec<VideoRecord>,
    /// Videos that were loaded but got no page.
    pub skipped: Vec<Skipped>,
    pub index_written: bool,
    pub stylesheet_copied: bool,
}

/// Build the whole site described by `config`.
pub fn build(config: &SiteConfig) -> Result<BuildSummary, GenerateError> {
    let assets_dir = config.assets_dir();
    fs::create_dir_all(&config.output_dir)?;
    fs::create_dir_all(&assets_dir)?;

    let records = scan::load_videos(&config.content_dir, &assets_dir)?;

    let mut summary = BuildSummary::default();
    let video_template = load_template(&config.templates_dir, VIDEO_TEMPLATE)?;
    for mut record in records {
        let Some(template) = &video_template else {
            summary.skip(record.slug, SkipReason::NoVideoTemplate);
            continue;
        };
        let filename = record.page_filename();
        if filename.eq_ignore_ascii_case(INDEX_PAGE) {
            warn!("Skipping video '{}': its page would overwrite {INDEX_PAGE}", record.slug);
            summary.skip(record.slug, SkipReason::ReservedName);
            continue;
        }
        let html = render::render_video_page(&record, template, &config.site_title);
        fs::write(config.output_dir.join(&filename), html)?;
        record.html_filename = Some(filename);
        summary.pages.push(record);
    }

    if let Some(template) = load_template(&config.templates_dir, INDEX_TEMPLATE)? {
        let html = render::render_index(
            &summary.pages,
            &template,
            &config.site_title,
            &config.content_dir_name(),
        );
        fs::write(config.output_dir.join(INDEX_PAGE), html)?;
        info!("Generated {INDEX_PAGE}");
        summary.index_written = true;
    }

    summary.stylesheet_copied = copy_stylesheet(&config.templates_dir, &config.output_dir)?;
    Ok(summary)
}

impl BuildSummary {
    fn skip(&mut self, slug: String, reason: SkipReason) {
        self.skipped.push(Skipped { slug, reason });
    }
}

/// Load a template, logging an error when the file is missing or empty.
fn load_template(dir: &Path, name: &str) -> Result<Option<Template>, GenerateError> {
    let path = dir.join(name);
    match Template::load(&path)? {
        None => {
            error!("Template not found at {}", path.display());
            Ok(None)
        }
        Some(template) if template.is_blank() => {
            error!("Template at {} is empty", path.display());
            Ok(None)
        }
        Some(template) => Ok(Some(template)),
    }
}

fn copy_stylesheet(templates_dir: &Path, output_dir: &Path) -> Result<bool, GenerateError> {
    let source = templates_dir.join(STYLESHEET);
    if !source.is_file() {
        warn!("{STYLESHEET} not found at {}", source.display());
        return Ok(false);
    }
    fs::copy(&source, output_dir.join(STYLESHEET))?;
    info!("Copied {STYLESHEET}");
    Ok(true)
}
