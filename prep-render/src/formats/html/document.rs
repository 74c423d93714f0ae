//! Standalone document wrapping

use super::HtmlOptions;
use crate::options::RenderOptions;
use crate::stages::{code_blocks, headers};

const DEFAULT_CSS: &str = include_str!("../../../css/default.css");

/// The stylesheet embedded in standalone documents.
pub fn get_default_css() -> &'static str {
    DEFAULT_CSS
}

/// Document title: the first heading line of the source, else a fixed fallback.
///
/// Fenced code is folded away first, so a `#` comment inside a fence is never a title.
pub(super) fn title_of(source: &str) -> String {
    code_blocks::apply(source, &RenderOptions::default())
        .lines()
        .find_map(headers::heading_text)
        .map(str::to_string)
        .unwrap_or_else(|| "Prep Document".to_string())
}

/// Wrap the content in a complete HTML document with embedded CSS
pub fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="prep-render">
  <title>{escaped_title}</title>
  <style>
{DEFAULT_CSS}
{custom_css}
  </style>
</head>
<body>
<div class="prep-document">
{body_html}
</div>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
