//! Shared configuration loader for the prep toolchain.
//!
//! `defaults/prep.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PrepConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use prep_render::chat::ChatSettings;
use prep_render::RenderOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/prep.default.toml");

/// Top-level configuration consumed by prep applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PrepConfig {
    pub render: RenderConfig,
    pub convert: ConvertConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs exposed by the markdown transformer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub default_language: String,
    pub open_links_in_new_tab: bool,
    pub copy_label: String,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            default_language: config.default_language,
            open_links_in_new_tab: config.open_links_in_new_tab,
            copy_label: config.copy_label,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            default_language: config.default_language.clone(),
            open_links_in_new_tab: config.open_links_in_new_tab,
            copy_label: config.copy_label.clone(),
        }
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub standalone: bool,
    #[serde(default)]
    pub custom_css: Option<String>,
}

/// Overrides for the display settings stored in chat sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatConfig {
    pub render_markdown: Option<bool>,
    pub show_timestamps: Option<bool>,
}

impl ChatConfig {
    /// Overwrite the settings this config sets, leaving the rest as saved.
    pub fn apply_to(&self, settings: &mut ChatSettings) {
        if let Some(render_markdown) = self.render_markdown {
            settings.render_markdown = render_markdown;
        }
        if let Some(show_timestamps) = self.show_timestamps {
            settings.show_timestamps = show_timestamps;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PrepConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PrepConfig, ConfigError> {
    Loader::new().build()
}
