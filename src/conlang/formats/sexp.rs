//! S-expression rendering, one line per sentence
//!
//! ```text
//! (complement item (word a) (sequence synthetic (word b) (word c)))
//! ```
//!
//! Spans are left out, so two parses of differently spaced text compare equal.

use crate::conlang::ast::{Document, Value};
use crate::conlang::formats::registry::{FormatError, Formatter};

pub fn value_to_sexp(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Word(w) => {
            out.push_str("(word ");
            out.push_str(w.text());
        }
        Value::Number(n) => {
            out.push_str("(number ");
            out.push_str(n.raw());
        }
        Value::Sequence(s) => {
            out.push_str("(sequence ");
            out.push_str(s.delimiter().name());
            for element in s.elements() {
                out.push(' ');
                write_value(element, out);
            }
        }
        Value::Complement(c) => {
            out.push_str("(complement ");
            out.push_str(c.prefix().text());
            out.push(' ');
            write_value(c.head_value(), out);
            if let Some(tail) = c.tail() {
                out.push(' ');
                write_value(tail, out);
            }
        }
    }
    out.push(')');
}

pub fn to_sexp(doc: &Document) -> String {
    doc.values()
        .map(|value| format!("{}\n", value_to_sexp(value)))
        .collect()
}

pub struct SexpFormatter;

impl Formatter for SexpFormatter {
    fn name(&self) -> &str {
        "sexp"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_sexp(doc))
    }

    fn description(&self) -> &str {
        "One s-expression per sentence, without spans"
    }
}
