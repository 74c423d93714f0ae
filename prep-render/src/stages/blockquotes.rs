//! Stage 7: blockquotes
//!
//! `>` was escaped in stage 1, so quoted lines start with `&gt;`. A run of consecutive quoted
//! lines becomes one `<blockquote>` holding a paragraph per non-blank line; a bare `&gt;`
//! continues the run without adding a paragraph. Quotes do not nest.

use crate::options::RenderOptions;

pub fn apply(text: &str, _options: &RenderOptions) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Option<String> = None;

    for line in text.split('\n') {
        match quoted(line) {
            Some(content) => {
                let quote = run.get_or_insert_with(String::new);
                if !content.trim().is_empty() {
                    quote.push_str("<p class=\"prep-quote-line\">");
                    quote.push_str(content.trim_end());
                    quote.push_str("</p>");
                }
            }
            None => {
                if let Some(quote) = run.take() {
                    out.push(close(&quote));
                }
                out.push(line.to_string());
            }
        }
    }
    if let Some(quote) = run.take() {
        out.push(close(&quote));
    }

    out.join("\n")
}

fn quoted(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("&gt;")?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix(' ')
    }
}

fn close(quote: &str) -> String {
    format!("<blockquote class=\"prep-blockquote\">{quote}</blockquote>")
}
