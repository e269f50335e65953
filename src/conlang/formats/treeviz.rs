//! Treeviz formatter
//!
//! One line per node, with box-drawing connectors for structure:
//!
//! ```text
//! └─ Sentence: (item:a . [b | c])
//!   └─ Complement: item
//!     ├─ Word: a
//!     └─ Sequence: synthetic (2)
//!       ├─ Word: b
//!       └─ Word: c
//! ```
//!
//! Labels are truncated to a fixed number of characters (30 unless configured).

use crate::conlang::ast::{AstNode, Document, Value};
use crate::conlang::formats::registry::{FormatError, Formatter};

pub const DEFAULT_TRUNCATE: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with(doc, DEFAULT_TRUNCATE)
}

pub fn to_treeviz_str_with(doc: &Document, max_chars: usize) -> String {
    let mut result = String::new();
    let count = doc.len();
    for (i, sentence) in doc.sentences().iter().enumerate() {
        let is_last = i + 1 == count;
        push_line(&mut result, sentence, "", is_last, max_chars);
        let prefix = child_prefix("", is_last);
        append_value(&mut result, sentence.value(), &prefix, true, max_chars);
    }
    result
}

fn push_line(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool, max_chars: usize) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        truncate(&node.display_label(), max_chars)
    ));
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_value(result: &mut String, value: &Value, prefix: &str, is_last: bool, max_chars: usize) {
    push_line(result, value, prefix, is_last, max_chars);

    let children = value.children();
    let new_prefix = child_prefix(prefix, is_last);
    for (i, child) in children.iter().enumerate() {
        append_value(result, child, &new_prefix, i + 1 == children.len(), max_chars);
    }
}

#[derive(Debug, Clone)]
pub struct TreevizFormatter {
    truncate: usize,
}

impl TreevizFormatter {
    pub fn with_truncate(truncate: usize) -> Self {
        Self { truncate }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::with_truncate(DEFAULT_TRUNCATE)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with(doc, self.truncate))
    }

    fn description(&self) -> &str {
        "Visual tree with one line per node"
    }
}
