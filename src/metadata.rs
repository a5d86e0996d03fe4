//! Per-video `metadata.yaml` parsing.
//!
//! Each video folder may carry a small YAML document:
//!
//! ```yaml
//! title: Building a Data Pipeline
//! youtube_video_id: dQw4w9WgXcQ
//! category: data_engineering
//! description: |
//!   First line.
//!   Second line.
//! ```
//!
//! ## Field resolution
//!
//! Every recognized key is optional and resolves independently: a document
//! with only `title` still gets the default category and an empty
//! description. Keys the loader does not know about are ignored, so the same
//! file can carry notes for other tools.
//!
//! Values may be any YAML scalar. Numeric ids (`youtube_video_id: 12345`)
//! and booleans are kept as their textual form. `null` and blank strings
//! count as missing.
//!
//! ## Failure handling
//!
//! A document that fails to parse, is not a mapping, or gives a sequence or
//! mapping for a recognized key is reported as [`MetadataError`]. The loader
//! treats every variant except [`MetadataError::Io`] as "malformed" and falls
//! back to the slug-derived defaults for the whole record.
//!
//! A key repeated within the document is not an error: the last occurrence
//! wins, matching common YAML loaders.

use crate::types::VideoRecord;
use serde::Deserialize;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_yaml::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Fixed name of the metadata document inside each video folder.
pub const METADATA_FILE: &str = "metadata.yaml";

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Recognized keys of `metadata.yaml`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub youtube_video_id: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

// Hand-written so that repeated keys overwrite instead of failing, which
// both the derived impl and `serde_yaml::Mapping` would do.
impl<'de> Deserialize<'de> for VideoMetadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MetadataVisitor)
    }
}

struct MetadataVisitor;

impl<'de> Visitor<'de> for MetadataVisitor {
    type Value = VideoMetadata;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of metadata keys")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(VideoMetadata::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut meta = VideoMetadata::default();
        while let Some(key) = map.next_key::<Value>()? {
            let slot = match key.as_str() {
                Some("title") => &mut meta.title,
                Some("youtube_video_id") => &mut meta.youtube_video_id,
                Some("description") => &mut meta.description,
                Some("category") => &mut meta.category,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            *slot = scalar(map.next_value()?).map_err(de::Error::custom)?;
        }
        Ok(meta)
    }
}

impl VideoMetadata {
    /// Overlay the present fields onto `record`, leaving defaults elsewhere.
    pub fn apply_to(self, record: &mut VideoRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        record.youtube_id = self.youtube_video_id;
    }
}

/// Parse a metadata document.
///
/// An empty or comment-only document yields all-default metadata.
pub fn parse_metadata(content: &str) -> Result<VideoMetadata, MetadataError> {
    if is_blank_document(content) {
        return Ok(VideoMetadata::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Read `metadata.yaml` from a video folder.
///
/// Returns `Ok(None)` when the folder has no metadata file.
pub fn read_metadata(video_dir: &Path) -> Result<Option<VideoMetadata>, MetadataError> {
    let bytes = match fs::read(video_dir.join(METADATA_FILE)) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let content = String::from_utf8(bytes)?;
    parse_metadata(&content).map(Some)
}

fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Accept any YAML scalar as text; `null` and blank strings become `None`.
fn scalar(value: Value) -> Result<Option<String>, String> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => return Err(format!("expected a scalar, found {}", kind(&other))),
    };
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}
