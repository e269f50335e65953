//! Configuration loader
//!
//! `defaults/conlang.default.toml` is embedded into the library so that the
//! documented defaults and runtime behavior stay in sync. Callers layer user
//! files and command-line overrides on top through [`Loader`] before
//! deserializing into [`ConlangConfig`].

use crate::conlang::parsing::ParserOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use log::info;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/conlang.default.toml");

/// Name of the optional per-directory configuration file
pub const USER_CONFIG_FILE: &str = "conlang.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ConlangConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub max_depth: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub truncate: usize,
}

impl ConlangConfig {
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            max_depth: self.parser.max_depth,
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

    /// Layer a configuration file. Missing files trigger an error at build time.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        info!("layering config file {}", path.as_ref().display());
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that may be absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        if path.as_ref().exists() {
            info!("layering config file {}", path.as_ref().display());
        }
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
    pub fn build(self) -> Result<ConlangConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.parser.max_depth, 128);
        assert_eq!(config.output.format, "treeviz");
        assert_eq!(config.output.truncate, 30);
        assert_eq!(config.parser_options(), ParserOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.max_depth", 8i64)
            .expect("override to apply")
            .set_override("output.format", "sexp")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser_options().max_depth, 8);
        assert_eq!(config.output.format, "sexp");
    }

    #[test]
    fn layers_files_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\ntruncate = 12").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.output.truncate, 12);
        assert_eq!(config.output.format, "treeviz");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/definitely/not/here.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here.toml")
            .build()
            .unwrap();
        assert_eq!(config.parser.max_depth, 128);
    }
}
