//! Stages 12 and 13: whitespace normalization and sentinel restoration
//!
//! The output is single-line markup, so every run of newlines collapses to one space. Protected
//! code newlines are sentinels at this point and survive; `restore` turns them back into real
//! newlines together with every other protected character.

use crate::options::RenderOptions;
use crate::protect;
use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("valid newline regex"));

pub fn normalize(text: &str, _options: &RenderOptions) -> String {
    NEWLINES_RE.replace_all(text, " ").trim().to_string()
}

pub fn restore(text: &str, _options: &RenderOptions) -> String {
    protect::restore(text)
}
