//! Placeholder templates.
//!
//! Page templates are plain HTML files supplied by the site owner, with
//! `{NAME}` tokens marking where generated content goes:
//!
//! ```html
//! <title>{PAGE_TITLE}</title>
//! <h1>{VIDEO_TITLE}</h1>
//! {TRANSCRIPT_SECTION_HTML}
//! ```
//!
//! A token name is one or more of `A-Z`, `0-9` and `_`. Anything else between
//! braces (CSS rules, inline scripts) is not a token and is copied as-is.
//!
//! Rendering is a single left-to-right pass over the template text. A token
//! with a value in the map is replaced; a token without one stays in the
//! output verbatim. Inserted values are never scanned again, so a transcript
//! that happens to contain `{SITE_TITLE}` is left alone.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Values for named placeholders, keyed by token name without braces.
pub type Values<'a> = BTreeMap<&'a str, String>;

/// Template text with `{NAME}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template file. Returns `Ok(None)` if it does not exist.
    pub fn load(path: &Path) -> io::Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(source) => Ok(Some(Self::new(source))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// True when the source has nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Substitute `values` into the template. Never fails.
    pub fn render(&self, values: &Values) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open..];
            match token_at(after) {
                Some(name) => {
                    match values.get(name) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&after[..name.len() + 2]),
                    }
                    rest = &after[name.len() + 2..];
                }
                None => {
                    out.push('{');
                    rest = &after[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Distinct placeholder names, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let mut rest = self.source.as_str();
        while let Some(open) = rest.find('{') {
            let after = &rest[open..];
            match token_at(after) {
                Some(name) => {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                    rest = &after[name.len() + 2..];
                }
                None => rest = &after[1..],
            }
        }
        names
    }

    /// Placeholders in the template that `values` does not cover.
    pub fn unresolved<'t>(&'t self, values: &Values) -> Vec<&'t str> {
        self.placeholders()
            .into_iter()
            .filter(|name| !values.contains_key(*name))
            .collect()
    }
}

/// If `text` starts with a `{NAME}` token, return `NAME`.
fn token_at(text: &str) -> Option<&str> {
    let body = text.strip_prefix('{')?;
    let end = body.find('}')?;
    let name = &body[..end];
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_');
    valid.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn values(pairs: &[(&'static str, &str)]) -> Values<'static> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn substitutes_named_placeholders() {
        let t = Template::new("<title>{PAGE_TITLE}</title><h1>{VIDEO_TITLE}</h1>");
        let html = t.render(&values(&[("PAGE_TITLE", "A - Site"), ("VIDEO_TITLE", "A")]));
        assert_eq!(html, "<title>A - Site</title><h1>A</h1>");
    }

    #[test]
    fn repeated_placeholder_replaced_everywhere() {
        let t = Template::new("{SITE_TITLE} | {SITE_TITLE}");
        assert_eq!(t.render(&values(&[("SITE_TITLE", "S")])), "S | S");
    }

    #[test]
    fn unknown_placeholder_left_verbatim() {
        let t = Template::new("<p>{FOOTER_HTML}</p>");
        assert_eq!(t.render(&Values::new()), "<p>{FOOTER_HTML}</p>");
    }

    #[test]
    fn css_braces_are_not_tokens() {
        let source = "<style>body { margin: 0 }</style>{SITE_TITLE}";
        let t = Template::new(source);
        assert_eq!(
            t.render(&values(&[("SITE_TITLE", "S")])),
            "<style>body { margin: 0 }</style>S"
        );
    }

    #[test]
    fn lowercase_names_are_not_tokens() {
        let t = Template::new("{site_title}");
        assert!(t.placeholders().is_empty());
        assert_eq!(t.render(&Values::new()), "{site_title}");
    }

    #[test]
    fn unclosed_brace_copied() {
        let t = Template::new("a { b {SITE_TITLE");
        assert_eq!(t.render(&values(&[("SITE_TITLE", "S")])), "a { b {SITE_TITLE");
    }

    #[test]
    fn brace_directly_before_token() {
        let t = Template::new("{{SITE_TITLE}}");
        assert_eq!(t.render(&values(&[("SITE_TITLE", "S")])), "{S}");
    }

    #[test]
    fn inserted_values_are_not_rescanned() {
        let t = Template::new("{TRANSCRIPT_SECTION_HTML}");
        let html = t.render(&values(&[
            ("TRANSCRIPT_SECTION_HTML", "says {SITE_TITLE}"),
            ("SITE_TITLE", "S"),
        ]));
        assert_eq!(html, "says {SITE_TITLE}");
    }

    #[test]
    fn placeholders_in_first_appearance_order() {
        let t = Template::new("{B} {A} {B} {C_2}");
        assert_eq!(t.placeholders(), vec!["B", "A", "C_2"]);
    }

    #[test]
    fn unresolved_lists_missing_values() {
        let t = Template::new("{SITE_TITLE} {EXTRA}");
        assert_eq!(t.unresolved(&values(&[("SITE_TITLE", "S")])), vec!["EXTRA"]);
    }

    #[test]
    fn multibyte_text_survives() {
        let t = Template::new("— {SITE_TITLE} —");
        assert_eq!(t.render(&values(&[("SITE_TITLE", "日本")])), "— 日本 —");
    }

    #[test]
    fn blank_source() {
        assert!(Template::new("").is_blank());
        assert!(Template::new("  \n").is_blank());
        assert!(!Template::new("{SITE_TITLE}").is_blank());
    }

    #[test]
    fn load_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(Template::load(&tmp.path().join("nope.html")).unwrap().is_none());
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("t.html");
        fs::write(&path, "{SITE_TITLE}").unwrap();
        let t = Template::load(&path).unwrap().unwrap();
        assert_eq!(t.placeholders(), vec!["SITE_TITLE"]);
    }
}
