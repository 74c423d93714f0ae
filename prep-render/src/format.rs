//! Format trait definition
//!
//! A format turns markdown source into output text. Every renderer the crate ships, and any a
//! caller adds, goes through this one interface so the registry can pick them by name.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn render(&self, source: &str) -> Result<String, FormatError> {
///         Ok(source.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "inline")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for detecting the format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render markdown source with the format's defaults.
    fn render(&self, source: &str) -> Result<String, FormatError>;

    /// Render markdown source, using extra parameters.
    ///
    /// The default implementation accepts no parameters: an empty map delegates to
    /// [`Format::render`], anything else is rejected.
    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.render(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
