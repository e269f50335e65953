//! Canonical conlang text
//!
//! Writes a document back as notation: one sentence per line, single spaces,
//! `", "` and `"; "` between sequence elements, and every folded tail value
//! repeated with its complement's prefix. Reading the output again yields the
//! same tree, though not the same bytes as the original input.

use crate::conlang::ast::{Complement, Document, Value};
use crate::conlang::formats::registry::{FormatError, Formatter};

pub fn to_conlang(doc: &Document) -> String {
    let mut out = String::new();
    for value in doc.values() {
        write_value(value, &mut out);
        out.push_str(".\n");
    }
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Word(w) => out.push_str(w.text()),
        Value::Number(n) => out.push_str(n.raw()),
        Value::Sequence(s) => {
            let separator = match s.delimiter().as_char() {
                Some(c) => format!("{} ", c),
                None => " ".to_string(),
            };
            for (i, element) in s.elements().iter().enumerate() {
                if i > 0 {
                    out.push_str(&separator);
                }
                write_value(element, out);
            }
        }
        Value::Complement(c) => write_complement(c, out),
    }
}

fn write_complement(complement: &Complement, out: &mut String) {
    let prefix = complement.prefix().text();
    out.push_str(prefix);
    out.push(':');
    write_value(complement.head_value(), out);
    for tail in complement.tail_values() {
        out.push(' ');
        out.push_str(prefix);
        out.push(':');
        write_value(tail, out);
    }
}

pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn name(&self) -> &str {
        "conlang"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_conlang(doc))
    }

    fn description(&self) -> &str {
        "Canonical notation text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conlang::formats::to_sexp;
    use crate::conlang::parsing::parse_document;

    #[test]
    fn test_normalizes_spacing() {
        let doc = parse_document("  a ,b,c .  x;  -1.5e3 .").unwrap();
        assert_eq!(to_conlang(&doc), "a, b, c.\nx; -1.5e3.\n");
    }

    #[test]
    fn test_folded_tails_are_unfolded() {
        let doc = parse_document("item:a   item:b item:c.").unwrap();
        assert_eq!(to_conlang(&doc), "item:a item:b item:c.\n");
    }

    #[test]
    fn test_reparse_gives_same_tree() {
        for source in [
            "o:i:1 i:2 o:3.",
            "a, k:b, c.",
            "o:a; b o:c, d.",
            "outer:inner:5.",
            "1.5x.",
            "k:-1.5x, y.",
        ] {
            let first = parse_document(source).unwrap();
            let text = to_conlang(&first);
            let second = parse_document(&text).unwrap();
            assert_eq!(to_sexp(&first), to_sexp(&second), "{}", text);
        }
    }
}
