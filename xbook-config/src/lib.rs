//! Shared configuration loader for xbook.
//!
//! `defaults/xbook.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`XbookConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use xbook_babel::BookOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/xbook.default.toml");

/// Top-level configuration consumed by xbook applications.
#[derive(Debug, Clone, Deserialize)]
pub struct XbookConfig {
    pub book: BookConfig,
    pub output: OutputConfig,
}

/// Where things live inside the source book.
#[derive(Debug, Clone, Deserialize)]
pub struct BookConfig {
    pub manifest: String,
    pub nav: String,
    pub images_dir: String,
    pub module_name: String,
}

/// Layout of the generated catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub assets_dir: String,
    pub nav_file: String,
    pub static_files: bool,
}

impl From<&XbookConfig> for BookOptions {
    fn from(config: &XbookConfig) -> Self {
        BookOptions {
            manifest: config.book.manifest.clone(),
            nav: config.book.nav.clone(),
            images_dir: config.book.images_dir.clone(),
            module_name: config.book.module_name.clone(),
            assets_dir: config.output.assets_dir.clone(),
            nav_output: config.output.nav_file.clone(),
            write_static_files: config.output.static_files,
        }
    }
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
    pub fn build(self) -> Result<XbookConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
