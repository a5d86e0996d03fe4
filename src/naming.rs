//! Display names derived from folder and category keys.
//!
//! Slugs and category keys are written with underscores (`data_pipelines`,
//! `intro_to_rust`). For display they go through the same two steps:
//!
//! - underscores become spaces
//! - the result is title-cased
//!
//! Title-casing works on alphabetic runs: the first letter of each run is
//! upper-cased and the rest are lower-cased. Any non-letter (space, digit,
//! apostrophe) ends a run, so `"part2b"` becomes `"Part2B"`.
//!
//! | key | display |
//! |-----|---------|
//! | `intro_to_rust` | Intro To Rust |
//! | `ETL_basics` | Etl Basics |
//! | `b_cat` | B Cat |

/// Title-case a string the way headlines are cased on the index page.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Display name for a slug or category key: `_` → space, then title case.
pub fn display_name(key: &str) -> String {
    title_case(&key.replace('_', " "))
}
