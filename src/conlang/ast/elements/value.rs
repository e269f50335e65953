//! Value - the closed set of things a sentence can say
//!
//! Every consumer matches on all four variants; there is no catch-all node type.

use crate::conlang::ast::elements::{Complement, Number, Sequence, Word};
use crate::conlang::ast::traits::AstNode;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Value {
    Word(Word),
    Number(Number),
    Sequence(Sequence),
    Complement(Box<Complement>),
}

impl Value {
    pub fn span(&self) -> Range<usize> {
        match self {
            Value::Word(w) => w.span(),
            Value::Number(n) => n.span(),
            Value::Sequence(s) => s.span(),
            Value::Complement(c) => c.span(),
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Value::Word(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_complement(&self) -> Option<&Complement> {
        match self {
            Value::Complement(c) => Some(c),
            _ => None,
        }
    }

    /// Direct children, in source order
    pub fn children(&self) -> Vec<&Value> {
        match self {
            Value::Word(_) | Value::Number(_) => Vec::new(),
            Value::Sequence(s) => s.elements().iter().collect(),
            Value::Complement(c) => {
                let mut children = vec![c.head_value()];
                children.extend(c.tail());
                children
            }
        }
    }

}

impl From<Word> for Value {
    fn from(w: Word) -> Value {
        Value::Word(w)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Value {
        Value::Sequence(s)
    }
}

impl From<Complement> for Value {
    fn from(c: Complement) -> Value {
        Value::Complement(Box::new(c))
    }
}

impl AstNode for Value {
    fn node_type(&self) -> &'static str {
        match self {
            Value::Word(w) => w.node_type(),
            Value::Number(n) => n.node_type(),
            Value::Sequence(s) => s.node_type(),
            Value::Complement(c) => c.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Value::Word(w) => w.display_label(),
            Value::Number(n) => n.display_label(),
            Value::Sequence(s) => s.display_label(),
            Value::Complement(c) => c.display_label(),
        }
    }
}

/// Compact debugging form: words and numbers as written, composites in brackets
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Word(w) => write!(f, "{}", w),
            Value::Number(n) => write!(f, "{}", n),
            Value::Sequence(s) => {
                write!(f, "[")?;
                for (i, element) in s.elements().iter().enumerate() {
                    if i > 0 {
                        match s.delimiter().as_char() {
                            Some(c) => write!(f, "{} ", c)?,
                            None => write!(f, " | ")?,
                        }
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Value::Complement(c) => {
                write!(f, "({}:{}", c.prefix(), c.head_value())?;
                if let Some(tail) = c.tail() {
                    write!(f, " . {}", tail)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conlang::ast::elements::Delimiter;

    #[test]
    fn test_display() {
        let seq = Sequence::new(
            Delimiter::Comma,
            vec![Word::new("a", 0..1).into(), Word::new("b", 3..4).into()],
            0..4,
        );
        assert_eq!(Value::from(seq).to_string(), "[a, b]");
    }

    #[test]
    fn test_accessors() {
        let value: Value = Number::new("-2.5", -2.5, 0..4).into();
        assert!(value.as_word().is_none());
        assert_eq!(value.as_number().map(Number::value), Some(-2.5));
        assert_eq!(value.node_type(), "Number");
        assert_eq!(value.display_label(), "-2.5");
    }
}
