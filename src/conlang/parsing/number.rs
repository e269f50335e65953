//! Decimal number literals
//!
//! ```text
//! number   := sign? digits fraction? exponent?
//! fraction := '.' digits
//! exponent := ('e' | 'E') sign? digits
//! ```
//!
//! The parser uses [`number_at`], which takes the longest literal starting at a
//! position and leaves a fraction or exponent without digits unconsumed, so
//! `5.` reads as the number `5` followed by the sentence stop. When the longest
//! literal runs into a word character, the integer part alone is tried, so
//! `1.5x.` reads as the number `1`, a stop, then the word `5x`. [`parse_number`]
//! is the strict form for callers holding a standalone literal.

use crate::conlang::ast::Number;
use crate::conlang::lexing::is_word_char;
use crate::conlang::parsing::error::{ErrorKind, ParseError};

/// Result of scanning for a literal
struct Scan {
    end: usize,
    /// End of the sign and integer digits
    integer_end: usize,
    /// Offset where digits were required after a `.` or exponent marker
    dangling: Option<usize>,
}

fn digits_at(bytes: &[u8], at: usize) -> usize {
    bytes
        .get(at..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

fn is_sign(byte: Option<&u8>) -> bool {
    matches!(byte, Some(b'+' | b'-'))
}

/// Longest literal at `start`; `Err` holds the offset where a digit was required.
fn scan(bytes: &[u8], start: usize) -> Result<Scan, usize> {
    let mut i = start;
    if is_sign(bytes.get(i)) {
        i += 1;
    }

    let whole = digits_at(bytes, i);
    if whole == 0 {
        return Err(i);
    }
    i += whole;
    let integer_end = i;

    let mut dangling = None;
    if bytes.get(i) == Some(&b'.') {
        let fraction = digits_at(bytes, i + 1);
        if fraction > 0 {
            i += 1 + fraction;
        } else {
            dangling = Some(i + 1);
        }
    }

    if dangling.is_none() && matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if is_sign(bytes.get(j)) {
            j += 1;
        }
        let exponent = digits_at(bytes, j);
        if exponent > 0 {
            i = j + exponent;
        } else {
            dangling = Some(j);
        }
    }

    Ok(Scan {
        end: i,
        integer_end,
        dangling,
    })
}

fn describe_at(text: &str, offset: usize) -> String {
    text.get(offset..)
        .and_then(|rest| rest.chars().next())
        .map(|c| format!("{:?}", c))
        .unwrap_or_else(|| "end of input".to_string())
}

fn missing_digit(text: &str, offset: usize, expected: &str) -> ParseError {
    let kind = if offset >= text.len() {
        ErrorKind::IncompleteInput
    } else {
        ErrorKind::Lexical
    };
    ParseError::new(kind, offset, expected, describe_at(text, offset))
}

fn to_number(raw: &str, start: usize) -> Result<Number, ParseError> {
    raw.parse::<f64>()
        .map(|value| Number::new(raw, value, start..start + raw.len()))
        .map_err(|e| ParseError::new(ErrorKind::Lexical, start, "a decimal number", e.to_string()))
}

/// Parse `text` as one complete literal
pub fn parse_number(text: &str) -> Result<Number, ParseError> {
    let bytes = text.as_bytes();
    let scanned = scan(bytes, 0).map_err(|offset| missing_digit(text, offset, "a digit"))?;

    if scanned.end < text.len() {
        return Err(match scanned.dangling {
            Some(offset) => missing_digit(text, offset, "a digit"),
            None => ParseError::new(
                ErrorKind::Lexical,
                scanned.end,
                "end of number",
                describe_at(text, scanned.end),
            ),
        });
    }

    to_number(text, 0)
}

pub fn is_number_literal(text: &str) -> bool {
    parse_number(text).is_ok()
}

fn is_boundary(source: &str, at: usize) -> bool {
    source[at..].chars().next().map_or(true, |c| !is_word_char(c))
}

/// Read the longest literal at `start` that ends on a word boundary
///
/// `123abc` and `5e` are words, not numbers followed by a word. If the full
/// literal is followed by a word character, the integer part is used when it
/// ends on a boundary itself.
pub fn number_at(source: &str, start: usize) -> Option<Number> {
    let scanned = scan(source.as_bytes(), start).ok()?;
    let end = [scanned.end, scanned.integer_end]
        .into_iter()
        .find(|&end| is_boundary(source, end))?;
    to_number(&source[start..end], start).ok()
}
