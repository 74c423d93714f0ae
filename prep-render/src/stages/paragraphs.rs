//! Stage 11: paragraph wrapping
//!
//! Every non-empty line still left is wrapped in its own paragraph, unless an earlier block
//! stage produced it. Lines that merely start with inline markup (`<strong>`, `<code>`, a link)
//! are ordinary text and do get wrapped.

use super::is_block_markup;
use crate::options::RenderOptions;

pub fn apply(text: &str, _options: &RenderOptions) -> String {
    text.split('\n')
        .map(|line| {
            let line = line.trim();
            if line.is_empty() || is_block_markup(line) {
                line.to_string()
            } else {
                format!("<p class=\"prep-paragraph\">{line}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
