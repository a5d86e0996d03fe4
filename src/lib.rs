//! # vidsite
//!
//! A minimal static site generator for video transcript archives. Your
//! filesystem is the data source: each folder under `content/` is one video,
//! and its metadata, transcript, audio and thumbnail become one HTML page.
//! An index page groups every video by category.
//!
//! # Architecture: Load, Render, Write
//!
//! ```text
//! 1. Load     content/{slug}/   →  Vec<VideoRecord>   (+ media copied to html/assets/)
//! 2. Render   record + template →  HTML string
//! 3. Write    html/{slug}.html, html/index.html, html/style.css
//! ```
//!
//! Each build starts from scratch: records are assembled fresh from the
//! content folders, rendered, written, and dropped. Nothing is cached between
//! runs, and the same inputs always produce byte-identical HTML.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content root, reads each video folder, copies media |
//! | [`metadata`] | `metadata.yaml` parsing with per-key defaults |
//! | [`template`] | `{NAME}` placeholder templates |
//! | [`render`] | Video page and category index rendering using Maud fragments |
//! | [`generate`] | The build driver: directories, pages, index, stylesheet |
//! | [`config`] | Optional `site.toml` overrides for paths and site title |
//! | [`types`] | `VideoRecord`, shared between loading and rendering |
//! | [`naming`] | Slug and category display names |
//! | [`output`] | End-of-build summary formatting |
//!
//! # Design Decisions
//!
//! ## Owner-Supplied Templates
//!
//! Page chrome lives in plain HTML files under `templates/` so the site owner
//! can restyle without rebuilding the binary. Only the generated fragments
//! (player, description, audio, transcript, category list) come from Rust,
//! where Maud escapes every interpolated value.
//!
//! ## Degrade, Don't Abort
//!
//! A video folder with broken or missing metadata still gets a page with
//! slug-derived defaults. Missing templates skip the affected output. Only
//! real filesystem failures stop a build.

pub mod config;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod template;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
