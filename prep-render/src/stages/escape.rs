//! Stage 1: entity escaping
//!
//! Runs exactly once, before any markup exists, so no tag a later stage injects is ever
//! escaped. Also the point where sentinel characters in the input are neutralized.

use crate::options::RenderOptions;
use crate::protect;

pub fn apply(source: &str, _options: &RenderOptions) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 8);
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' if chars.peek() == Some(&'\n') => {}
            c if protect::is_sentinel(c) => out.push_str(&protect::entity(c)),
            c => out.push(c),
        }
    }
    out
}
