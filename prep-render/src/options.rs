//! Rendering options shared by every pipeline stage

/// Language label used for fenced code blocks opened without a tag.
pub const DEFAULT_LANGUAGE: &str = "text";

/// Knobs that change the markup the pipeline emits.
///
/// None of them change which constructs are recognized, only how the recognized ones are
/// written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Label (and `language-*` class) for code fences without a language tag.
    pub default_language: String,
    /// Add `target="_blank" rel="noopener noreferrer"` to links.
    pub open_links_in_new_tab: bool,
    /// Text of the copy button in code block headers.
    pub copy_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            open_links_in_new_tab: true,
            copy_label: "Copy".to_string(),
        }
    }
}
