//! Complement element
//!
//! A complement is a prefixed head value plus any number of further values
//! carrying the same prefix:
//!
//! ```text
//! item:a item:b item:c
//! ```
//!
//! The tail is stored already folded: absent, a single value, or a synthetic
//! sequence when more than one tail value was present.

use crate::conlang::ast::elements::{Sequence, Value, Word};
use crate::conlang::ast::traits::AstNode;
use serde::Serialize;
use std::ops::Range;

/// A prefix word joined to a value by `:`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixedValue {
    prefix: Word,
    value: Value,
}

impl PrefixedValue {
    pub fn new(prefix: Word, value: Value) -> Self {
        Self { prefix, value }
    }

    pub fn prefix(&self) -> &Word {
        &self.prefix
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn span(&self) -> Range<usize> {
        self.prefix.span().start..self.value.span().end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Complement {
    head: PrefixedValue,
    tail: Option<Value>,
    span: Range<usize>,
}

impl Complement {
    pub fn new(head: PrefixedValue, tail: Option<Value>) -> Self {
        let end = tail
            .as_ref()
            .map(|t| t.span().end)
            .unwrap_or_else(|| head.span().end);
        let span = head.span().start..end;
        Self { head, tail, span }
    }

    pub fn head(&self) -> &PrefixedValue {
        &self.head
    }

    pub fn prefix(&self) -> &Word {
        self.head.prefix()
    }

    pub fn head_value(&self) -> &Value {
        self.head.value()
    }

    pub fn tail(&self) -> Option<&Value> {
        self.tail.as_ref()
    }

    /// Tail values in source order, looking through a synthetic fold
    pub fn tail_values(&self) -> Vec<&Value> {
        match &self.tail {
            None => Vec::new(),
            Some(Value::Sequence(seq)) if seq.is_synthetic() => seq.elements().iter().collect(),
            Some(value) => vec![value],
        }
    }

    /// The synthetic sequence holding the tail, when two or more tails were folded
    pub fn folded_tail(&self) -> Option<&Sequence> {
        match &self.tail {
            Some(Value::Sequence(seq)) if seq.is_synthetic() => Some(seq),
            _ => None,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl AstNode for Complement {
    fn node_type(&self) -> &'static str {
        "Complement"
    }

    fn display_label(&self) -> String {
        self.prefix().text().to_string()
    }
}
