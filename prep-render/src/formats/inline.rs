//! Inline format: the lightweight formatter used for chat messages
//!
//! Only strong, emphasis, inline code and line breaks. Input is entity-escaped first, and code
//! spans are converted before emphasis so their bodies keep their delimiters. Underscore
//! delimiters must start and end at a word boundary, which leaves `snake_case` names alone.

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use crate::protect;
use crate::stages::escape;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("valid code regex"));

static STRONG_STAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("valid strong regex"));

static STRONG_UNDERSCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\W)__([^_\n]+)__\b").expect("valid strong regex"));

static EM_STAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").expect("valid emphasis regex"));

static EM_UNDERSCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\W)_([^_\n]+)_\b").expect("valid emphasis regex"));

/// Render a chat message with the inline formatter.
pub fn format_inline(text: &str) -> String {
    let text = escape::apply(text, &RenderOptions::default());
    let text = CODE_RE.replace_all(&text, |caps: &Captures| {
        format!("<code>{}</code>", protect::protect(&caps[1]))
    });
    let text = STRONG_STAR_RE.replace_all(&text, "<strong>$1</strong>");
    let text = STRONG_UNDERSCORE_RE.replace_all(&text, "$1<strong>$2</strong>");
    let text = EM_STAR_RE.replace_all(&text, "<em>$1</em>");
    let text = EM_UNDERSCORE_RE.replace_all(&text, "$1<em>$2</em>");
    protect::restore(&text.replace('\n', "<br />"))
}

/// Format implementation for chat messages
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormat;

impl Format for InlineFormat {
    fn name(&self) -> &str {
        "inline"
    }

    fn description(&self) -> &str {
        "Inline-only markup for chat messages"
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(format_inline(source))
    }
}
