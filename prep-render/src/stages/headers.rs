//! Stage 4: headings
//!
//! One to three `#` followed by a space at the start of a line. Deeper headings are not
//! recognized: `#### x` has no space after the third `#`, so it falls through and is wrapped
//! as a paragraph with its hashes intact.

use crate::options::RenderOptions;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,3}) (.*)$").expect("valid header regex"));

pub fn apply(text: &str, _options: &RenderOptions) -> String {
    HEADER_RE
        .replace_all(text, |caps: &Captures| {
            let level = caps[1].len();
            format!(
                "<h{level} class=\"prep-h{level}\">{}</h{level}>",
                caps[2].trim()
            )
        })
        .into_owned()
}

/// Text of a heading line, as recognized by this stage.
pub fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    line[hashes..].strip_prefix(' ').map(str::trim)
}
