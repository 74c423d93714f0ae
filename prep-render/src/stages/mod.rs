//! Pipeline stages
//!
//! Each stage is a pure `(&str, &RenderOptions) -> String` rewrite; see `pipeline.rs` for the
//! order they run in and what each may assume about its input.

pub mod blockquotes;
pub mod code_blocks;
pub mod escape;
pub mod headers;
pub mod inline;
pub mod lists;
pub mod paragraphs;
pub mod rules;
pub mod tables;
pub mod whitespace;

/// Opening tags of the block elements stages emit at the start of a line.
const BLOCK_TAGS: [&str; 11] = [
    "<div", "<h1", "<h2", "<h3", "<blockquote", "<ul", "<ol", "<table", "<hr", "<p ", "<pre",
];

/// Whether a (trimmed) line was produced by a block stage.
pub(crate) fn is_block_markup(line: &str) -> bool {
    BLOCK_TAGS.iter().any(|tag| line.starts_with(tag))
}

/// Escape a value injected into a double-quoted attribute.
///
/// `&`, `<` and `>` are already entities by the time any attribute is built; quotes are not.
pub(crate) fn attribute(value: &str) -> String {
    value.replace('"', "&quot;")
}
