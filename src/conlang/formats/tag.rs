//! XML-like AST tag serialization
//!
//! - Node type → tag name
//! - Label (prefix, delimiter) → text content
//! - Children → nested in a `<children>` tag
//!
//! ```text
//! <document>
//!   <sentence>
//!     <complement>item<children>
//!       <word>a</word>
//!       <sequence>synthetic<children>
//!         <word>b</word>
//!         <word>c</word>
//!       </children></sequence>
//!     </children></complement>
//!   </sentence>
//! </document>
//! ```

use crate::conlang::ast::{Document, Value};
use crate::conlang::formats::registry::{FormatError, Formatter};

pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for sentence in doc.sentences() {
        result.push_str("  <sentence>\n");
        serialize_value(sentence.value(), 2, &mut result);
        result.push_str("  </sentence>\n");
    }
    result.push_str("</document>");
    result
}

fn serialize_value(value: &Value, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    let (tag, label) = match value {
        Value::Word(w) => ("word", w.text()),
        Value::Number(n) => ("number", n.raw()),
        Value::Sequence(s) => ("sequence", s.delimiter().name()),
        Value::Complement(c) => ("complement", c.prefix().text()),
    };

    let children = value.children();
    if children.is_empty() {
        output.push_str(&format!("{}<{}>{}</{}>\n", indent, tag, escape_xml(label), tag));
        return;
    }

    output.push_str(&format!("{}<{}>{}<children>\n", indent, tag, escape_xml(label)));
    for child in children {
        serialize_value(child, indent_level + 1, output);
    }
    output.push_str(&format!("{}</children></{}>\n", indent, tag));
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }

    fn description(&self) -> &str {
        "XML-like tags mirroring the AST"
    }
}
