//! Pull-based scanner over conlang source text
//!
//! The parser never tokenizes the whole input up front. It asks the scanner for
//! the lexeme at the cursor, decides, and moves the cursor. Restarting logos at
//! an arbitrary offset is what lets the number parser and the prefix check look
//! at raw characters and then resume token scanning wherever they stopped.

use crate::conlang::lexing::tokens::Token;
use crate::conlang::parsing::error::{ErrorKind, ParseError};
use logos::Logos;
use std::ops::Range;

/// A token together with the byte range it covers in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub span: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    cursor: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Create a scanner positioned at `position`.
    ///
    /// A position past the end of input or inside a multi-byte character is a
    /// caller defect, not a grammar error.
    pub fn at(source: &'src str, position: usize) -> Result<Self, ParseError> {
        if position > source.len() || !source.is_char_boundary(position) {
            return Err(ParseError::new(
                ErrorKind::InvalidPosition,
                position,
                format!("a character boundary within 0..={}", source.len()),
                "an offset outside the input",
            ));
        }
        Ok(Self {
            source,
            cursor: position,
        })
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Move the cursor back to a previously observed position
    pub fn reset(&mut self, position: usize) {
        debug_assert!(self.source.is_char_boundary(position));
        self.cursor = position;
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Remaining unscanned text
    pub fn rest(&self) -> &'src str {
        &self.source[self.cursor..]
    }

    pub fn slice(&self, span: Range<usize>) -> &'src str {
        &self.source[span]
    }

    /// Look at the lexeme under the cursor without consuming it
    pub fn peek(&self) -> Result<Option<Lexeme>, ParseError> {
        let mut lexer = Token::lexer(self.rest());
        match lexer.next() {
            None => Ok(None),
            Some(Ok(token)) => {
                let span = lexer.span();
                Ok(Some(Lexeme {
                    token,
                    span: self.cursor + span.start..self.cursor + span.end,
                }))
            }
            Some(Err(())) => {
                let found = self
                    .rest()
                    .chars()
                    .next()
                    .map(|c| format!("{:?}", c))
                    .unwrap_or_else(|| "end of input".to_string());
                Err(ParseError::new(
                    ErrorKind::Lexical,
                    self.cursor,
                    "a word, number or punctuation",
                    found,
                ))
            }
        }
    }

    /// Consume and return the lexeme under the cursor
    pub fn advance(&mut self) -> Result<Option<Lexeme>, ParseError> {
        let lexeme = self.peek()?;
        if let Some(lexeme) = &lexeme {
            self.cursor = lexeme.span.end;
        }
        Ok(lexeme)
    }

    /// Consume a run of ASCII whitespace. Returns whether anything was skipped.
    pub fn skip_whitespace(&mut self) -> bool {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
        self.cursor += skipped;
        skipped > 0
    }

}
