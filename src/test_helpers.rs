//! Shared test utilities for the vidsite test suite.
//!
//! Provides a throwaway project layout, a builder for video folders, and
//! lookup helpers that panic with a readable message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = TestSite::new();
//! site.video("kafka_intro")
//!     .metadata("title: Kafka Intro\ncategory: streaming\n")
//!     .transcript("hello")
//!     .file("audio.mp3", b"ID3")
//!     .create();
//!
//! let records = load_videos(&site.content(), &site.assets()).unwrap();
//! assert_eq!(find_record(&records, "kafka_intro").category, "streaming");
//! ```

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::types::VideoRecord;

pub const VIDEO_TEMPLATE_HTML: &str = "<html><head><title>{PAGE_TITLE}</title></head><body>\
<header>{SITE_TITLE}</header><h1>{VIDEO_TITLE}</h1>{YOUTUBE_PLAYER_HTML}\
{DESCRIPTION_SECTION_HTML}{AUDIO_SECTION_HTML}{TRANSCRIPT_SECTION_HTML}</body></html>";

pub const INDEX_TEMPLATE_HTML: &str =
    "<html><head><title>{SITE_TITLE}</title></head><body>{VIDEO_LIST_HTML}</body></html>";

// =========================================================================
// Project layout
// =========================================================================

/// A temporary project directory with `content/` created.
pub struct TestSite {
    pub root: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("content")).unwrap();
        Self { root }
    }

    /// Same as [`TestSite::new`] plus both templates and a stylesheet.
    pub fn with_templates() -> Self {
        let site = Self::new();
        site.write_template("video_template.html", VIDEO_TEMPLATE_HTML);
        site.write_template("index_template.html", INDEX_TEMPLATE_HTML);
        site.write_template("style.css", "body { margin: 0 }");
        site
    }

    pub fn write_template(&self, name: &str, content: &str) {
        let dir = self.templates();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    pub fn content(&self) -> PathBuf {
        self.root.path().join("content")
    }

    pub fn templates(&self) -> PathBuf {
        self.root.path().join("templates")
    }

    pub fn output(&self) -> PathBuf {
        self.root.path().join("html")
    }

    pub fn assets(&self) -> PathBuf {
        self.output().join("assets")
    }

    pub fn config(&self) -> SiteConfig {
        SiteConfig::default().rooted_at(self.root.path())
    }

    pub fn video(&self, slug: &str) -> VideoFolder {
        VideoFolder {
            dir: self.content().join(slug),
            files: Vec::new(),
        }
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output().join(name)).unwrap()
    }
}

/// Builder for one `content/{slug}/` folder.
pub struct VideoFolder {
    dir: PathBuf,
    files: Vec<(String, Vec<u8>)>,
}

impl VideoFolder {
    pub fn metadata(self, yaml: &str) -> Self {
        self.file("metadata.yaml", yaml.as_bytes())
    }

    pub fn transcript(self, text: &str) -> Self {
        self.file("transcript.txt", text.as_bytes())
    }

    /// Add a file at a path relative to the video folder.
    pub fn file(mut self, rel: &str, bytes: &[u8]) -> Self {
        self.files.push((rel.to_string(), bytes.to_vec()));
        self
    }

    pub fn create(self) -> PathBuf {
        fs::create_dir_all(&self.dir).unwrap();
        for (rel, bytes) in &self.files {
            let path = self.dir.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, bytes).unwrap();
        }
        self.dir
    }
}

// =========================================================================
// Record helpers
// =========================================================================

/// A record as the driver would hold it after writing the page.
pub fn rendered_record(slug: &str, title: &str, category: &str) -> VideoRecord {
    let mut record = VideoRecord::with_defaults(slug);
    record.title = title.to_string();
    record.category = category.to_string();
    record.html_filename = Some(record.page_filename());
    record
}

/// Find a record by slug. Panics if not found.
pub fn find_record<'a>(records: &'a [VideoRecord], slug: &str) -> &'a VideoRecord {
    records.iter().find(|r| r.slug == slug).unwrap_or_else(|| {
        let available = slugs(records);
        panic!("record '{slug}' not found. Available: {available:?}")
    })
}

/// All slugs in record order.
pub fn slugs(records: &[VideoRecord]) -> Vec<&str> {
    records.iter().map(|r| r.slug.as_str()).collect()
}

/// Byte offset of `needle` in `haystack`. Panics if absent.
pub fn position_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in output"))
}
