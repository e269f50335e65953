//! File processing API
//!
//! A processing spec names a stage and a format, joined by a dash:
//!
//! - `token-simple`, `token-json`: the scanner's token stream
//! - `ast-<format>`: the parsed document in any registered format
//!   (`ast-treeviz`, `ast-sexp`, `ast-json`, ...)
//!
//! ```rust,ignore
//! let spec = ProcessingSpec::from_string("ast-sexp")?;
//! let out = process_source("subj:Mary.", &spec)?;
//! assert_eq!(out, "(complement subj (word Mary))\n");
//! ```

use crate::conlang::config::ConlangConfig;
use crate::conlang::formats::{tokens_to_json, tokens_to_simple, FormatError, FormatRegistry, TreevizFormatter};
use crate::conlang::lexing::tokenize;
use crate::conlang::parsing::{parse_document_with, ParseError, ParserOptions};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Token names run together
    Simple,
    /// Token records as JSON
    Json,
    /// A document format looked up in the [`FormatRegistry`] by name
    Document(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        match stage {
            "token" => {
                let format = match format {
                    "simple" => OutputFormat::Simple,
                    "json" => OutputFormat::Json,
                    other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
                };
                Ok(ProcessingSpec {
                    stage: ProcessingStage::Token,
                    format,
                })
            }
            "ast" => {
                if !FormatRegistry::with_defaults().has(format) {
                    return Err(ProcessingError::InvalidFormatType(format.to_string()));
                }
                Ok(ProcessingSpec {
                    stage: ProcessingStage::Ast,
                    format: OutputFormat::Document(format.to_string()),
                })
            }
            other => Err(ProcessingError::InvalidStage(other.to_string())),
        }
    }

    pub fn ast(format: &str) -> Result<Self, ProcessingError> {
        Self::from_string(&format!("ast-{}", format))
    }

    pub fn as_string(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match &self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Document(name) => name.as_str(),
        };
        format!("{}-{}", stage, format)
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// `message` carries the 1-based line and column of the failure
    #[error("{message}")]
    Parse { message: String, source: ParseError },
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ProcessingError {
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            ProcessingError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Settings that shape processing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOptions {
    pub parser: ParserOptions,
    /// Label truncation for treeviz output
    pub truncate: usize,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            parser: ParserOptions::default(),
            truncate: crate::conlang::formats::treeviz::DEFAULT_TRUNCATE,
        }
    }
}

impl From<&ConlangConfig> for ProcessOptions {
    fn from(config: &ConlangConfig) -> Self {
        Self {
            parser: config.parser_options(),
            truncate: config.output.truncate,
        }
    }
}

pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_source_with(source, spec, &ProcessOptions::default())
}

pub fn process_source_with(
    source: &str,
    spec: &ProcessingSpec,
    options: &ProcessOptions,
) -> Result<String, ProcessingError> {
    match (&spec.stage, &spec.format) {
        (ProcessingStage::Token, OutputFormat::Simple) => Ok(tokens_to_simple(&tokenize(source))),
        (ProcessingStage::Token, OutputFormat::Json) => Ok(tokens_to_json(source, &tokenize(source))?),
        (ProcessingStage::Ast, OutputFormat::Document(name)) => {
            let doc = parse_document_with(source, &options.parser).map_err(|error| {
                ProcessingError::Parse {
                    message: error.render(source),
                    source: error,
                }
            })?;
            let mut registry = FormatRegistry::with_defaults();
            registry.register(TreevizFormatter::with_truncate(options.truncate));
            Ok(registry.serialize(&doc, name)?)
        }
        _ => Err(ProcessingError::InvalidFormatType(spec.as_string())),
    }
}

/// Process a conlang file according to the given specification
pub fn process_file<P: AsRef<Path>>(file_path: P, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_file_with(file_path, spec, &ProcessOptions::default())
}

pub fn process_file_with<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &ProcessOptions,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ProcessingError::FileNotFound(file_path.display().to_string()),
        _ => ProcessingError::Io(e),
    })?;
    process_source_with(&content, spec, options)
}

/// All format strings accepted by [`ProcessingSpec::from_string`]
pub fn available_formats() -> Vec<String> {
    let mut formats = vec!["token-simple".to_string(), "token-json".to_string()];
    formats.extend(
        FormatRegistry::with_defaults()
            .list_formats()
            .into_iter()
            .map(|name| format!("ast-{}", name)),
    );
    formats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conlang::parsing::ErrorKind;

    #[test]
    fn test_spec_parsing() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Token);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
        assert_eq!(spec.format, OutputFormat::Document("treeviz".to_string()));
        assert_eq!(spec.as_string(), "ast-treeviz");
    }

    #[test]
    fn test_invalid_specs() {
        assert!(matches!(
            ProcessingSpec::from_string("token"),
            Err(ProcessingError::InvalidFormat(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ir-simple"),
            Err(ProcessingError::InvalidStage(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-xml"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("token-treeviz"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_process_source_ast() {
        let spec = ProcessingSpec::ast("sexp").unwrap();
        let out = process_source("subj:Mary.", &spec).unwrap();
        assert_eq!(out, "(complement subj (word Mary))\n");
    }

    #[test]
    fn test_process_source_tokens() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        assert_eq!(process_source("a.", &spec).unwrap(), "<word><stop>\n");
    }

    #[test]
    fn test_parse_failure_carries_location() {
        let spec = ProcessingSpec::ast("sexp").unwrap();
        let err = process_source("a.\nb; c, d.", &spec).unwrap_err();
        assert_eq!(err.parse_error().map(|e| e.kind), Some(ErrorKind::InconsistentDelimiter));
        assert!(err.to_string().starts_with("2:5: inconsistent delimiter"));
    }

    #[test]
    fn test_options_reach_the_parser_and_formatter() {
        let spec = ProcessingSpec::ast("treeviz").unwrap();
        let options = ProcessOptions {
            parser: ParserOptions { max_depth: 1 },
            truncate: 2,
        };
        let err = process_source_with("a:b.", &spec, &options).unwrap_err();
        assert_eq!(err.parse_error().map(|e| e.kind), Some(ErrorKind::NestingTooDeep));

        let out = process_source_with("abcdef.", &spec, &options).unwrap();
        assert!(out.contains("ab..."));
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::ast("sexp").unwrap();
        let err = process_file("/no/such/file.conlang", &spec).unwrap_err();
        assert!(matches!(err, ProcessingError::FileNotFound(_)));
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert!(formats.contains(&"token-simple".to_string()));
        assert!(formats.contains(&"ast-treeviz".to_string()));
        for format in &formats {
            assert!(ProcessingSpec::from_string(format).is_ok(), "{}", format);
        }
    }
}
