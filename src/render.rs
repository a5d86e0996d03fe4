//! HTML rendering for video pages and the index.
//!
//! Stage 2 of the build. Turns loaded records into HTML by filling the
//! site owner's templates (see [`crate::template`]).
//!
//! ## Fragments
//!
//! The variable parts of each page are built here with
//! [maud](https://maud.lambda.xyz/) and then dropped into the template as
//! pre-rendered strings. Maud escapes every interpolated value, so titles,
//! descriptions and transcripts can never inject markup into the page.
//!
//! ## Video page placeholders
//!
//! | Placeholder | Content |
//! |-------------|---------|
//! | `{PAGE_TITLE}` | `"{title} - {site title}"` |
//! | `{SITE_TITLE}` | site title |
//! | `{VIDEO_TITLE}` | video title |
//! | `{YOUTUBE_PLAYER_HTML}` | embedded player, or a "not provided" note |
//! | `{DESCRIPTION_SECTION_HTML}` | description with line breaks, or nothing |
//! | `{AUDIO_SECTION_HTML}` | audio player and download link, or a note |
//! | `{TRANSCRIPT_SECTION_HTML}` | transcript in a `<pre>`, or a note |
//!
//! ## Index page placeholders
//!
//! | Placeholder | Content |
//! |-------------|---------|
//! | `{SITE_TITLE}` | site title |
//! | `{VIDEO_LIST_HTML}` | collapsible category blocks, or a "no videos" note |

use crate::naming;
use crate::template::{Template, Values};
use crate::types::VideoRecord;
use maud::{Markup, html};
use std::collections::BTreeMap;
use tracing::debug;

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

// ============================================================================
// Video page
// ============================================================================

/// Render one video's page from the video template.
pub fn render_video_page(record: &VideoRecord, template: &Template, site_title: &str) -> String {
    let page_title = format!("{} - {}", record.title, site_title);

    let mut values = Values::new();
    values.insert("PAGE_TITLE", text(&page_title));
    values.insert("SITE_TITLE", text(site_title));
    values.insert("VIDEO_TITLE", text(&record.title));
    values.insert(
        "YOUTUBE_PLAYER_HTML",
        youtube_player(record.youtube_id.as_deref()).into_string(),
    );
    values.insert(
        "DESCRIPTION_SECTION_HTML",
        description_section(&record.description).into_string(),
    );
    values.insert(
        "AUDIO_SECTION_HTML",
        audio_section(record.audio_path.as_deref()).into_string(),
    );
    values.insert(
        "TRANSCRIPT_SECTION_HTML",
        transcript_section(&record.transcript).into_string(),
    );

    fill(template, &values, &record.slug)
}

/// Embedded YouTube player, or a note when the video has no id.
pub fn youtube_player(youtube_id: Option<&str>) -> Markup {
    html! {
        @if let Some(id) = youtube_id.filter(|id| !id.trim().is_empty()) {
            div.video-container {
                iframe width="560" height="315" src={ (YOUTUBE_EMBED_BASE) (id.trim()) }
                    frameborder="0" allow=(PLAYER_ALLOW) allowfullscreen {}
            }
        } @else {
            p { "YouTube video ID not provided or invalid." }
        }
    }
}

/// Description block with one `<br>` per line break; empty for no description.
pub fn description_section(description: &str) -> Markup {
    let description = description.trim();
    html! {
        @if !description.is_empty() {
            h3 { "Description" }
            div.video-description {
                p {
                    @for (i, line) in description.lines().enumerate() {
                        @if i > 0 {
                            br;
                            "\n"
                        }
                        (line)
                    }
                }
            }
        }
    }
}

/// Audio player with a download link, or a note when there is no audio.
pub fn audio_section(audio_path: Option<&str>) -> Markup {
    html! {
        h3 { "Audio" }
        @if let Some(path) = audio_path {
            audio controls src=(path) {}
            p { a href=(path) download { "Download " (download_label(path)) } }
        } @else {
            p { "No audio file provided." }
        }
    }
}

/// Transcript in a preformatted block. Always present.
pub fn transcript_section(transcript: &str) -> Markup {
    let transcript = transcript.trim();
    html! {
        h3 { "Transcript" }
        div.transcript {
            pre {
                @if transcript.is_empty() {
                    "No transcript provided."
                } @else {
                    (transcript)
                }
            }
        }
    }
}

fn download_label(path: &str) -> String {
    path.rsplit_once('.')
        .map(|(_, ext)| ext.to_uppercase())
        .filter(|ext| !ext.contains('/'))
        .unwrap_or_else(|| "audio".to_string())
}

// ============================================================================
// Index page
// ============================================================================

/// Group records by raw category key.
///
/// Categories iterate in key order; videos within a category are sorted by
/// slug.
pub fn group_by_category(records: &[VideoRecord]) -> BTreeMap<&str, Vec<&VideoRecord>> {
    let mut groups: BTreeMap<&str, Vec<&VideoRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.category.as_str()).or_default().push(record);
    }
    for videos in groups.values_mut() {
        videos.sort_by(|a, b| a.slug.cmp(&b.slug));
    }
    groups
}

/// Render the index page listing every record, grouped by category.
///
/// `content_dir_name` is only used in the hint shown when there are no
/// videos at all.
pub fn render_index(
    records: &[VideoRecord],
    template: &Template,
    site_title: &str,
    content_dir_name: &str,
) -> String {
    let mut values = Values::new();
    values.insert("SITE_TITLE", text(site_title));
    values.insert(
        "VIDEO_LIST_HTML",
        video_list(records, content_dir_name).into_string(),
    );
    fill(template, &values, "index")
}

/// All category blocks, or the "no videos" note.
pub fn video_list(records: &[VideoRecord], content_dir_name: &str) -> Markup {
    let groups = group_by_category(records);
    html! {
        @if groups.is_empty() {
            p { "No videos found. Add content to the '" (content_dir_name) "' folder." }
        } @else {
            @for (category, videos) in &groups {
                (category_block(category, videos))
            }
        }
    }
}

/// One collapsible category: header with toggle, then the video list.
fn category_block(category: &str, videos: &[&VideoRecord]) -> Markup {
    html! {
        div.category-block {
            div.category-header {
                h2 { (naming::display_name(category)) }
                span.toggle-icon { ">" }
            }
            div.category-content {
                ul.video-list {
                    @for video in videos {
                        (video_item(video))
                    }
                }
            }
        }
    }
}

fn video_item(video: &VideoRecord) -> Markup {
    let href = video
        .html_filename
        .clone()
        .unwrap_or_else(|| video.page_filename());
    html! {
        li.video-item {
            a href=(href) {
                @if let Some(thumbnail) = &video.thumbnail_path {
                    img.thumbnail src=(thumbnail) alt={ (video.title) " Thumbnail" };
                } @else {
                    div.thumbnail-placeholder { "No Thumbnail" }
                }
                h3 { (video.title) }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Escape plain text for insertion into a template.
fn text(value: &str) -> String {
    let escaped = html! { (value) };
    escaped.into_string()
}

fn fill(template: &Template, values: &Values, page: &str) -> String {
    let unresolved = template.unresolved(values);
    if !unresolved.is_empty() {
        debug!("Unresolved placeholders in {page}: {unresolved:?}");
    }
    template.render(values)
}

// ============================================================================
// Tests
// ============================================================================
