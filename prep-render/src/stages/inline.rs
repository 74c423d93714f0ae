//! Stages 3, 5 and 6: inline spans
//!
//! Inline code runs before headers and emphasis and protects its body, so `` `**x**` `` keeps
//! its asterisks. Emphasis is single level: bold is matched before italic so `**x**` is never
//! half consumed by the single asterisk rule, and nothing spans a newline. Images are matched
//! before links so the link rule never sees the `!`. Link and image targets are protected
//! like code, and so is link text, so a `|` in either never reads as a table cell boundary.

use super::attribute;
use crate::options::RenderOptions;
use crate::protect;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("valid inline code regex"));

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("valid bold regex"));

// Delimiters must hug non-space text, which keeps `* item` bullets and `a * b` intact.
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*").expect("valid italic regex")
});

static STRIKE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~~([^~\n]+)~~").expect("valid strikethrough regex"));

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\n]+)\)").expect("valid image regex"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").expect("valid link regex"));

pub fn inline_code(text: &str, _options: &RenderOptions) -> String {
    INLINE_CODE_RE
        .replace_all(text, |caps: &Captures| {
            format!(
                "<code class=\"prep-inline-code\">{}</code>",
                protect::protect(&caps[1])
            )
        })
        .into_owned()
}

pub fn emphasis(text: &str, _options: &RenderOptions) -> String {
    let text = BOLD_RE.replace_all(text, "<strong class=\"prep-strong\">$1</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em class=\"prep-em\">$1</em>");
    STRIKE_RE
        .replace_all(&text, "<del class=\"prep-del\">$1</del>")
        .into_owned()
}

pub fn links(text: &str, options: &RenderOptions) -> String {
    let text = IMAGE_RE.replace_all(text, |caps: &Captures| {
        format!(
            "<img src=\"{}\" alt=\"{}\" class=\"prep-image\" />",
            protect::protect(&attribute(caps[2].trim())),
            protect::protect(&attribute(&caps[1])),
        )
    });
    let target = if options.open_links_in_new_tab {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    LINK_RE
        .replace_all(&text, |caps: &Captures| {
            format!(
                "<a href=\"{}\" class=\"prep-link\"{target}>{}</a>",
                protect::protect(&attribute(caps[2].trim())),
                protect::protect(&caps[1]),
            )
        })
        .into_owned()
}
