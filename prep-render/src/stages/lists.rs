//! Stage 8: lists
//!
//! Bullet (`-`, `*`, `+`) and numbered (`1.`) lines become `<li>` elements tagged with a
//! nesting level taken from their indentation, two columns per level. Consecutive items of the
//! same kind share one container; a kind change or any other line closes it.

use crate::options::RenderOptions;
use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)[-*+] (.*)$").expect("valid bullet regex"));

static ORDERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)\d+\. (.*)$").expect("valid ordered item regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul class=\"prep-list\">",
            ListKind::Ordered => "<ol class=\"prep-list prep-list-ordered\">",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// A recognized list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub kind: ListKind,
    pub level: usize,
    pub content: &'a str,
}

/// Classify a single line.
pub fn list_item(line: &str) -> Option<ListItem<'_>> {
    let (kind, caps) = if let Some(caps) = BULLET_RE.captures(line) {
        (ListKind::Unordered, caps)
    } else {
        (ListKind::Ordered, ORDERED_RE.captures(line)?)
    };
    let indent = caps.get(1).map_or("", |m| m.as_str());
    let content = caps.get(2).map_or("", |m| m.as_str());
    Some(ListItem {
        kind,
        level: indent_level(indent),
        content,
    })
}

fn indent_level(indent: &str) -> usize {
    let columns: usize = indent
        .chars()
        .map(|c| if c == '\t' { 2 } else { 1 })
        .sum();
    columns / 2
}

pub fn apply(text: &str, _options: &RenderOptions) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Option<(ListKind, String)> = None;

    for line in text.split('\n') {
        match list_item(line) {
            Some(item) => {
                if run.as_ref().is_some_and(|(kind, _)| *kind != item.kind) {
                    if let Some(list) = run.take() {
                        out.push(close(list));
                    }
                }
                let (_, items) = run.get_or_insert_with(|| (item.kind, String::new()));
                items.push_str(&format!(
                    "<li class=\"prep-list-item prep-list-level-{}\">{}</li>",
                    item.level,
                    item.content.trim_end()
                ));
            }
            None => {
                if let Some(list) = run.take() {
                    out.push(close(list));
                }
                out.push(line.to_string());
            }
        }
    }
    if let Some(list) = run.take() {
        out.push(close(list));
    }

    out.join("\n")
}

fn close((kind, items): (ListKind, String)) -> String {
    format!("{}{items}{}", kind.open_tag(), kind.close_tag())
}
