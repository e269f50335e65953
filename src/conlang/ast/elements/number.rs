//! Number element
//!
//! Numbers keep the exact literal text they were read from next to the parsed
//! magnitude, so `1.50` and `1.5` stay distinguishable.

use crate::conlang::ast::traits::AstNode;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Number {
    raw: String,
    value: f64,
    span: Range<usize>,
}

impl Number {
    /// Build a number from an already validated literal.
    /// Use [`crate::conlang::parsing::number::parse_number`] to validate text.
    pub fn new(raw: impl Into<String>, value: f64, span: Range<usize>) -> Self {
        Self {
            raw: raw.into(),
            value,
            span,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AstNode for Number {
    fn node_type(&self) -> &'static str {
        "Number"
    }

    fn display_label(&self) -> String {
        self.raw.clone()
    }
}
