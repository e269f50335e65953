//! Parsing for conlang notation
//!
//! [`parse_document`] is the entry point for whole texts. [`parse_value_at`]
//! reads a single value from any position and reports where it stopped, for
//! callers that embed the notation in something else.
//!
//! The [`reference`] module holds a second, combinator-based parser for the
//! same grammar. It is not used by the processing pipeline.

pub mod complement;
pub mod document;
pub mod error;
pub mod number;
pub mod parser;
pub mod reference;
pub mod sequence;

pub use error::{ErrorKind, ParseError};
pub use number::{is_number_literal, number_at, parse_number};
pub use parser::{Parser, ParserOptions, DEFAULT_MAX_DEPTH};
pub use reference::parse_reference;

use crate::conlang::ast::{Document, Value};

/// Parse a complete document with default options
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    parse_document_with(source, &ParserOptions::default())
}

pub fn parse_document_with(source: &str, options: &ParserOptions) -> Result<Document, ParseError> {
    Parser::new(source).with_options(*options).parse_document()
}

/// Parse one value starting exactly at byte offset `start`
///
/// Returns the value and the offset just past it. Whitespace before `start`
/// is not skipped and whitespace after the value is not consumed.
pub fn parse_value_at(source: &str, start: usize) -> Result<(Value, usize), ParseError> {
    let mut parser = Parser::at(source, start)?;
    let value = parser.parse_value()?;
    Ok((value, parser.position()))
}
