//! Content loading.
//!
//! Stage 1 of the build. Walks the content root and produces one
//! [`VideoRecord`] per video folder, copying each video's media into the
//! output asset tree on the way.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── kafka_intro/                 # Folder name is the slug
//! │   ├── metadata.yaml            # title, youtube_video_id, description, category
//! │   ├── transcript.txt           # Plain text transcript
//! │   ├── audio.mp3                # Audio track
//! │   └── thumbnail.jpg            # Index thumbnail (jpg, jpeg or png)
//! └── spark_tuning/
//!     ├── audio/                   # Media may also live in a folder of the same name
//!     │   └── episode-12.mp3
//!     └── thumbnail/
//!         └── cover.png
//! ```
//!
//! Every file is optional. A folder containing nothing at all still becomes a
//! record with a slug-derived title.
//!
//! ## Output
//!
//! Media files are copied to `{output}/assets/{slug}/` and the record keeps
//! the output-relative path (`assets/kafka_intro/audio.mp3`) that pages link
//! to.

use crate::metadata::{self, MetadataError};
use crate::types::VideoRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to read metadata for {0}: {1}")]
    Metadata(String, io::Error),
    #[error("Failed to copy {0}: {1}")]
    Copy(PathBuf, io::Error),
}

pub const TRANSCRIPT_FILE: &str = "transcript.txt";

/// Where to look for a kind of media inside a video folder.
#[derive(Debug, Clone, Copy)]
pub struct AssetKind {
    /// Human name used in log messages.
    pub label: &'static str,
    /// File stem (`audio.mp3`) or folder name (`audio/`).
    pub base_name: &'static str,
    /// Accepted extensions, highest priority first.
    pub extensions: &'static [&'static str],
}

pub const AUDIO: AssetKind = AssetKind {
    label: "audio file",
    base_name: "audio",
    extensions: &["mp3"],
};

pub const THUMBNAIL: AssetKind = AssetKind {
    label: "thumbnail",
    base_name: "thumbnail",
    extensions: &["jpg", "jpeg", "png"],
};

/// Load every video folder under `content_root`, sorted by slug.
///
/// A missing or empty content root is not an error: it is logged and yields
/// no records.
pub fn load_videos(content_root: &Path, assets_dir: &Path) -> Result<Vec<VideoRecord>, ScanError> {
    let entries = match collect_entries(content_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                "Content directory '{}' does not exist",
                content_root.display()
            );
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    if entries.is_empty() {
        warn!("Content directory '{}' is empty", content_root.display());
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for dir in entries.iter().filter(|p| p.is_dir()) {
        let slug = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if slug.starts_with('.') {
            continue;
        }
        info!("Processing video: {slug}");
        records.push(load_video(dir, &slug, assets_dir)?);
    }
    Ok(records)
}

/// Assemble the record for one video folder.
pub fn load_video(video_dir: &Path, slug: &str, assets_dir: &Path) -> Result<VideoRecord, ScanError> {
    let mut record = VideoRecord::with_defaults(slug);

    match metadata::read_metadata(video_dir) {
        Ok(Some(meta)) => {
            if meta.youtube_video_id.is_none() {
                warn!("'youtube_video_id' not found or empty in metadata for {slug}");
            }
            meta.apply_to(&mut record);
        }
        Ok(None) => warn!("{} not found for {slug}, using defaults", metadata::METADATA_FILE),
        Err(MetadataError::Io(e)) => return Err(ScanError::Metadata(slug.to_string(), e)),
        Err(e) => error!("Error parsing {} for {slug}: {e}", metadata::METADATA_FILE),
    }

    record.transcript = read_transcript(video_dir)?;

    let video_assets = assets_dir.join(slug);
    fs::create_dir_all(&video_assets)?;

    record.audio_path = copy_asset(video_dir, slug, &video_assets, AUDIO)?;
    record.thumbnail_path = copy_asset(video_dir, slug, &video_assets, THUMBNAIL)?;

    Ok(record)
}

/// Trimmed contents of `transcript.txt`, or an empty string.
fn read_transcript(video_dir: &Path) -> Result<String, ScanError> {
    match fs::read(video_dir.join(TRANSCRIPT_FILE)) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).trim().to_string()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Copy the first matching media file into `dest_dir`.
///
/// Returns the output-relative path, or `None` if the folder has no such file.
fn copy_asset(
    video_dir: &Path,
    slug: &str,
    dest_dir: &Path,
    kind: AssetKind,
) -> Result<Option<String>, ScanError> {
    let Some(source) = find_asset(&video_dir.join(kind.base_name), kind.extensions)? else {
        info!("No {} found for {slug}", kind.label);
        return Ok(None);
    };
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    fs::copy(&source, dest_dir.join(&filename)).map_err(|e| ScanError::Copy(source.clone(), e))?;
    Ok(Some(format!("assets/{slug}/{filename}")))
}

/// Find a media file for `base`, trying `extensions` in order.
///
/// Sibling files (`audio.mp3`) win over a folder of the same name
/// (`audio/*.mp3`). Files are considered in name order and extensions match
/// case-insensitively in both places.
pub fn find_asset(base: &Path, extensions: &[&str]) -> io::Result<Option<PathBuf>> {
    let siblings: Vec<PathBuf> = match (base.parent(), base.file_name()) {
        (Some(parent), Some(name)) if parent.is_dir() => collect_entries(parent)?
            .into_iter()
            .filter(|p| p.is_file() && p.file_stem() == Some(name))
            .collect(),
        _ => Vec::new(),
    };
    if let Some(found) = first_with_extension(&siblings, extensions) {
        return Ok(Some(found));
    }

    if !base.is_dir() {
        return Ok(None);
    }
    let files: Vec<PathBuf> = collect_entries(base)?
        .into_iter()
        .filter(|p| p.is_file())
        .collect();
    Ok(first_with_extension(&files, extensions))
}

fn first_with_extension(files: &[PathBuf], extensions: &[&str]) -> Option<PathBuf> {
    extensions
        .iter()
        .find_map(|ext| files.iter().find(|p| has_extension(p, ext)).cloned())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

fn collect_entries(path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();
    Ok(entries)
}
