//! Format registry for AST serialization
//!
//! Each format implements the `Formatter` trait and can be registered with
//! `FormatRegistry` under its name.

use crate::conlang::ast::Document;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for document formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "sexp")
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of document formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a document using the named format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// All registered format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name and description of every format, sorted by name
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .map(|name| {
                let description = self
                    .get(&name)
                    .map(|f| f.description().to_string())
                    .unwrap_or_default();
                (name, description)
            })
            .collect()
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreevizFormatter::default());
        registry.register(super::TagFormatter);
        registry.register(super::SexpFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::CanonicalFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
