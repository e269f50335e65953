//! Token stream renderers

use crate::conlang::formats::registry::FormatError;
use crate::conlang::lexing::Token;
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    token: Token,
    start: usize,
    end: usize,
    text: &'a str,
}

/// Token names run together, with a line break after each sentence stop
pub fn tokens_to_simple(tokens: &[(Token, Range<usize>)]) -> String {
    let mut result = String::new();
    for (token, _) in tokens {
        result.push_str(&token.to_string());
        if *token == Token::Stop {
            result.push('\n');
        }
    }
    result
}

pub fn tokens_to_json(source: &str, tokens: &[(Token, Range<usize>)]) -> Result<String, FormatError> {
    let records: Vec<TokenRecord> = tokens
        .iter()
        .map(|(token, span)| TokenRecord {
            token: *token,
            start: span.start,
            end: span.end,
            text: source.get(span.clone()).unwrap_or_default(),
        })
        .collect();
    serde_json::to_string_pretty(&records).map_err(|e| FormatError::SerializationError(e.to_string()))
}
