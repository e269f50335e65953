//! Sequence element
//!
//! A sequence is one or more values separated by a single delimiter character.
//! Sequences produced by folding complement tails have no delimiter in the
//! source and are tagged [`Delimiter::Synthetic`].

use crate::conlang::ast::elements::Value;
use crate::conlang::ast::traits::AstNode;
use crate::conlang::lexing::Token;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    Comma,
    Semicolon,
    Synthetic,
}

impl Delimiter {
    pub fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Comma => Some(Delimiter::Comma),
            Token::Semicolon => Some(Delimiter::Semicolon),
            _ => None,
        }
    }

    /// The literal character, if the delimiter appears in source text
    pub fn as_char(&self) -> Option<char> {
        match self {
            Delimiter::Comma => Some(','),
            Delimiter::Semicolon => Some(';'),
            Delimiter::Synthetic => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "{}", c),
            None => f.write_str(self.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence {
    delimiter: Delimiter,
    elements: Vec<Value>,
    span: Range<usize>,
}

impl Sequence {
    pub fn new(delimiter: Delimiter, elements: Vec<Value>, span: Range<usize>) -> Self {
        debug_assert!(!elements.is_empty(), "a sequence never has zero elements");
        Self {
            delimiter,
            elements,
            span,
        }
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_synthetic(&self) -> bool {
        self.delimiter == Delimiter::Synthetic
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl AstNode for Sequence {
    fn node_type(&self) -> &'static str {
        "Sequence"
    }

    fn display_label(&self) -> String {
        format!("{} ({})", self.delimiter.name(), self.elements.len())
    }
}
