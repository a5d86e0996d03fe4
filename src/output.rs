//! CLI output formatting for the build summary.
//!
//! Diagnostics raised while a build runs go through `tracing`. Once the
//! build finishes, this module prints an inventory of what was produced:
//!
//! ```text
//! Videos
//! 001 Kafka Intro → kafka_intro.html
//!     Category: Streaming
//!     Audio: assets/kafka_intro/audio.mp3
//!     Thumbnail: assets/kafka_intro/thumbnail.jpg
//! 002 Spark Tuning → spark_tuning.html
//!     Category: Batch
//!
//! Skipped
//!     index (would overwrite index.html)
//!
//! Index → index.html
//! Stylesheet → style.css
//!
//! Generated 2 video pages in html
//! ```
//!
//! `format_*` functions are pure and return lines for testability; the
//! `print_*` wrapper writes them to stdout.

use crate::generate::BuildSummary;
use crate::naming;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format the end-of-build inventory.
pub fn format_build_output(summary: &BuildSummary, output_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    if !summary.pages.is_empty() {
        lines.push("Videos".to_string());
        for (i, record) in summary.pages.iter().enumerate() {
            let page = record
                .html_filename
                .clone()
                .unwrap_or_else(|| record.page_filename());
            lines.push(format!("{} {} → {}", format_index(i + 1), record.title, page));
            lines.push(format!(
                "{}Category: {}",
                indent(1),
                naming::display_name(&record.category)
            ));
            if let Some(audio) = &record.audio_path {
                lines.push(format!("{}Audio: {audio}", indent(1)));
            }
            if let Some(thumbnail) = &record.thumbnail_path {
                lines.push(format!("{}Thumbnail: {thumbnail}", indent(1)));
            }
        }
        lines.push(String::new());
    }

    if !summary.skipped.is_empty() {
        lines.push("Skipped".to_string());
        for skipped in &summary.skipped {
            lines.push(format!("{}{} ({})", indent(1), skipped.slug, skipped.reason));
        }
        lines.push(String::new());
    }

    if summary.index_written {
        lines.push("Index → index.html".to_string());
    } else {
        lines.push("Index → not written (no index template)".to_string());
    }
    if summary.stylesheet_copied {
        lines.push("Stylesheet → style.css".to_string());
    }
    lines.push(String::new());

    lines.push(format!(
        "Generated {} in {}",
        plural(summary.pages.len(), "video page"),
        output_dir.display()
    ));
    lines
}

pub fn print_build_output(summary: &BuildSummary, output_dir: &Path) {
    for line in format_build_output(summary, output_dir) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{SkipReason, Skipped};
    use crate::test_helpers::rendered_record;

    fn summary_with_two_pages() -> BuildSummary {
        let mut first = rendered_record("kafka_intro", "Kafka Intro", "streaming");
        first.audio_path = Some("assets/kafka_intro/audio.mp3".into());
        first.thumbnail_path = Some("assets/kafka_intro/thumbnail.jpg".into());
        BuildSummary {
            pages: vec![first, rendered_record("spark_tuning", "Spark Tuning", "batch")],
            skipped: vec![],
            index_written: true,
            stylesheet_copied: true,
        }
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(999), "999");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "video page"), "1 video page");
        assert_eq!(plural(0, "video page"), "0 video pages");
    }

    #[test]
    fn lists_pages_with_context_lines() {
        let lines = format_build_output(&summary_with_two_pages(), Path::new("html"));
        assert_eq!(lines[0], "Videos");
        assert_eq!(lines[1], "001 Kafka Intro → kafka_intro.html");
        assert_eq!(lines[2], "    Category: Streaming");
        assert_eq!(lines[3], "    Audio: assets/kafka_intro/audio.mp3");
        assert_eq!(lines[4], "    Thumbnail: assets/kafka_intro/thumbnail.jpg");
        assert_eq!(lines[5], "002 Spark Tuning → spark_tuning.html");
    }

    #[test]
    fn ends_with_page_count() {
        let lines = format_build_output(&summary_with_two_pages(), Path::new("html"));
        assert_eq!(lines.last().unwrap(), "Generated 2 video pages in html");
        assert!(lines.contains(&"Index → index.html".to_string()));
        assert!(lines.contains(&"Stylesheet → style.css".to_string()));
    }

    #[test]
    fn skipped_section_lists_slugs() {
        let summary = BuildSummary {
            skipped: vec![
                Skipped {
                    slug: "orphan".into(),
                    reason: SkipReason::NoVideoTemplate,
                },
                Skipped {
                    slug: "index".into(),
                    reason: SkipReason::ReservedName,
                },
            ],
            index_written: false,
            ..Default::default()
        };
        let lines = format_build_output(&summary, Path::new("html"));
        assert_eq!(lines[0], "Skipped");
        assert_eq!(lines[1], "    orphan (no video template)");
        assert_eq!(lines[2], "    index (would overwrite index.html)");
        assert!(lines.contains(&"Index → not written (no index template)".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 0 video pages in html");
    }

    #[test]
    fn empty_build_has_no_video_section() {
        let summary = BuildSummary {
            index_written: true,
            ..Default::default()
        };
        let lines = format_build_output(&summary, Path::new("html"));
        assert!(!lines.contains(&"Videos".to_string()));
        assert_eq!(lines[0], "Index → index.html");
    }
}
