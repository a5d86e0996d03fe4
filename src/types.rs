//! Shared types passed from the loader to the renderer.

use crate::naming;

/// Category used when a video's metadata does not name one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// One video's content, assembled from its folder under the content root.
///
/// Every optional field may be absent; the renderer degrades each one to
/// placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    /// Folder name under the content root. Unique within a run.
    pub slug: String,
    pub title: String,
    /// Raw category key, e.g. `data_engineering`.
    pub category: String,
    pub youtube_id: Option<String>,
    /// Free text; empty when absent.
    pub description: String,
    /// Trimmed transcript text; empty when absent.
    pub transcript: String,
    /// Output-relative path of the copied audio file (`assets/{slug}/audio.mp3`).
    pub audio_path: Option<String>,
    /// Output-relative path of the copied thumbnail.
    pub thumbnail_path: Option<String>,
    /// `{slug}.html`, set once the video page has been written.
    pub html_filename: Option<String>,
}

impl VideoRecord {
    /// A record with every field at its default, derived from the slug alone.
    pub fn with_defaults(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: naming::display_name(slug),
            category: DEFAULT_CATEGORY.to_string(),
            youtube_id: None,
            description: String::new(),
            transcript: String::new(),
            audio_path: None,
            thumbnail_path: None,
            html_filename: None,
        }
    }

    /// Filename the video page is written to.
    pub fn page_filename(&self) -> String {
        format!("{}.html", self.slug)
    }
}
