//! Stage 10: horizontal rules

use crate::options::RenderOptions;

pub fn apply(text: &str, _options: &RenderOptions) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim() == "---" {
                "<hr class=\"prep-rule\" />"
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
