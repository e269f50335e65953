//! Document and sentence elements
//!
//! A sentence is one value followed by `.`; a document is the sentences of one
//! input in order.

use crate::conlang::ast::elements::Value;
use crate::conlang::ast::traits::AstNode;
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    value: Value,
    /// Covers the value and the terminating `.`
    span: Range<usize>,
}

impl Sentence {
    pub fn new(value: Value, span: Range<usize>) -> Self {
        Self { value, span }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl AstNode for Sentence {
    fn node_type(&self) -> &'static str {
        "Sentence"
    }

    fn display_label(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sentences(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Values of every sentence, in order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.sentences.iter().map(Sentence::value)
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} sentence(s)", self.sentences.len())
    }
}
