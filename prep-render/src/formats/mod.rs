//! Format implementations
//!
//! - `html`: the full markdown transformer, optionally wrapped in a standalone document
//! - `inline`: the lightweight chat formatter (emphasis, inline code, line breaks)

pub mod html;
pub mod inline;

pub use html::{get_default_css, wrap_in_document, HtmlFormat, HtmlOptions};
pub use inline::InlineFormat;

/// Parse a boolean option value.
pub(crate) fn parse_bool(key: &str, raw: &str) -> Result<bool, crate::error::FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(crate::error::FormatError::InvalidOption(format!(
            "'{other}' is not a boolean value for '{key}'"
        ))),
    }
}
