//! HTML format implementation
//!
//! Runs the markdown transformer (see `pipeline.rs`) and returns its single-line markup. With
//! `standalone` the markup is wrapped in a complete HTML5 document whose `<style>` carries the
//! default stylesheet, plus any custom CSS.
//!
//! # CSS Classes
//!
//! Every element the transformer emits carries a `prep-*` class, so presentation lives entirely
//! in CSS:
//!
//! | Markdown            | Markup                                                             |
//! |---------------------|--------------------------------------------------------------------|
//! | `# .. ###`          | `<h1 class="prep-h1">` .. `<h3 class="prep-h3">`                   |
//! | paragraph line      | `<p class="prep-paragraph">`                                       |
//! | `**b**` `*i*` `~~s~~` | `prep-strong`, `prep-em`, `prep-del`                              |
//! | `` `code` ``        | `<code class="prep-inline-code">`                                  |
//! | fenced code         | `prep-code-block` > `prep-code-header` + `pre.prep-code-body`      |
//! | `[a](u)` `![a](u)`  | `prep-link`, `prep-image`                                          |
//! | `> quote`           | `prep-blockquote` > `p.prep-quote-line`                            |
//! | `-` / `1.` items    | `prep-list` (+ `prep-list-ordered`), `li.prep-list-level-N`        |
//! | pipe table          | `prep-table`, `th.prep-table-header`, `td.prep-table-cell`         |
//! | `---`               | `<hr class="prep-rule" />`                                         |
//!
//! The copy button carries `data-action="copy-code"`; wiring it up is left to the host page.
//!
//! # Options
//!
//! `default-language`, `links-new-tab`, `copy-label`, `standalone`, `css-path`.

mod document;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use crate::pipeline::Pipeline;
use std::collections::HashMap;

pub use document::{get_default_css, wrap_in_document};

/// Options for HTML rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlOptions {
    pub render: RenderOptions,
    /// Wrap the markup in a complete HTML document
    pub standalone: bool,
    /// Optional custom CSS appended after the default stylesheet
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn new(render: RenderOptions) -> Self {
        Self {
            render,
            ..Self::default()
        }
    }

    pub fn standalone(mut self) -> Self {
        self.standalone = true;
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    fn render_with(&self, source: &str, options: &HtmlOptions) -> String {
        let body = Pipeline::new(options.render.clone()).run(source);
        if options.standalone {
            document::wrap_in_document(&body, &document::title_of(source), options)
        } else {
            body
        }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Styled HTML markup (fragment or standalone document)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(self.render_with(source, &self.options))
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut effective = self.options.clone();
        for (key, value) in options {
            match key.as_str() {
                "default-language" => effective.render.default_language = value.clone(),
                "links-new-tab" => {
                    effective.render.open_links_in_new_tab = super::parse_bool(key, value)?
                }
                "copy-label" => effective.render.copy_label = value.clone(),
                "standalone" => effective.standalone = super::parse_bool(key, value)?,
                "css-path" => {
                    let css = std::fs::read_to_string(value).map_err(|e| {
                        FormatError::SerializationError(format!(
                            "Failed to read CSS file '{value}': {e}"
                        ))
                    })?;
                    effective.custom_css = Some(css);
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' does not support option '{other}'"
                    )))
                }
            }
        }
        Ok(self.render_with(source, &effective))
    }
}
