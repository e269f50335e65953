//! Word element
//!
//! A word is a maximal run of characters that are neither whitespace nor one of
//! the reserved characters `" ' . : , ;`.

use crate::conlang::ast::traits::AstNode;
use crate::conlang::lexing::is_word_char;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Word {
    text: String,
    span: Range<usize>,
}

impl Word {
    pub fn new(text: impl Into<String>, span: Range<usize>) -> Self {
        let text = text.into();
        debug_assert!(Self::is_valid(&text), "invalid word text {:?}", text);
        Self { text, span }
    }

    /// Whether `text` could be read back as a single word
    pub fn is_valid(text: &str) -> bool {
        !text.is_empty() && text.chars().all(is_word_char)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AstNode for Word {
    fn node_type(&self) -> &'static str {
        "Word"
    }

    fn display_label(&self) -> String {
        self.text.clone()
    }
}
