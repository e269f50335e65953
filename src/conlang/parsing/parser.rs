//! Recursive-descent value parser
//!
//! Dispatch at a position is ordered, first match wins:
//!
//! 1. a word run immediately followed by `:` starts a complement
//! 2. a decimal literal ending on a word boundary is a number
//! 3. any other word run is a word
//!
//! A full value then looks past optional whitespace for `,` or `;` and, if one
//! is there, becomes the first element of a sequence. Sequence elements are
//! parsed with the dispatch step only, so `a, b, c` stays flat.
//!
//! The complement and sequence assemblers live in their own modules as further
//! `impl` blocks on [`Parser`].

use crate::conlang::ast::{Value, Word};
use crate::conlang::lexing::{Lexeme, Scanner, Token};
use crate::conlang::parsing::error::{ErrorKind, ParseError};
use crate::conlang::parsing::number::{is_number_literal, number_at};
use log::{trace, warn};

/// Default bound on value nesting
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest allowed nesting of values; deeper input fails with `NestingTooDeep`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parser<'src> {
    pub(super) scanner: Scanner<'src>,
    depth: usize,
    options: ParserOptions,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
            depth: 0,
            options: ParserOptions::default(),
        }
    }

    /// Start parsing at byte offset `start`
    pub fn at(source: &'src str, start: usize) -> Result<Self, ParseError> {
        Ok(Self {
            scanner: Scanner::at(source, start)?,
            depth: 0,
            options: ParserOptions::default(),
        })
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    /// Consume whitespace at the cursor
    pub fn skip_whitespace(&mut self) -> bool {
        self.scanner.skip_whitespace()
    }

    pub fn is_at_end(&self) -> bool {
        self.scanner.is_at_end()
    }

    /// Parse one full value: a term, extended into a sequence when a delimiter follows
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.depth += 1;
        let result = if self.depth > self.options.max_depth {
            warn!(
                "nesting bound of {} exceeded at offset {}",
                self.options.max_depth,
                self.position()
            );
            Err(ParseError::new(
                ErrorKind::NestingTooDeep,
                self.position(),
                format!("at most {} nested values", self.options.max_depth),
                "deeper nesting",
            ))
        } else {
            self.parse_term()
                .and_then(|first| self.continue_sequence(first))
        };
        self.depth -= 1;
        result
    }

    /// Dispatch without sequence lookahead: complement, number or word
    pub(super) fn parse_term(&mut self) -> Result<Value, ParseError> {
        let position = self.position();
        let lexeme = match self.scanner.peek()? {
            Some(lexeme) => lexeme,
            None => {
                return Err(ParseError::new(
                    ErrorKind::IncompleteInput,
                    position,
                    "a value",
                    "end of input",
                ))
            }
        };

        match lexeme.token {
            Token::Word | Token::Digits => {
                if let Some(prefix) = self.prefix_at(&lexeme) {
                    trace!("complement {:?} at {}", prefix.text(), position);
                    self.consume_prefix(&prefix);
                    return self.parse_complement(prefix).map(Value::from);
                }
                if let Some(number) = number_at(self.scanner.source(), position) {
                    trace!("number {:?} at {}", number.raw(), position);
                    self.scanner.reset(number.span().end);
                    return Ok(number.into());
                }
                trace!("word at {}", position);
                self.scanner.reset(lexeme.span.end);
                let text = self.scanner.slice(lexeme.span.clone());
                Ok(Word::new(text, lexeme.span).into())
            }
            Token::Quote => Err(ParseError::new(
                ErrorKind::Lexical,
                position,
                "a value",
                self.describe(&lexeme),
            )),
            _ => Err(ParseError::new(
                ErrorKind::UnexpectedToken,
                position,
                "a value",
                self.describe(&lexeme),
            )),
        }
    }

    /// The prefix word if `lexeme` is a word run immediately followed by `:`
    ///
    /// A word run that is a complete number literal is never a prefix.
    pub(super) fn prefix_at(&self, lexeme: &Lexeme) -> Option<Word> {
        if !lexeme.token.is_word_run() {
            return None;
        }
        let source = self.scanner.source();
        if !source[lexeme.span.end..].starts_with(':') {
            return None;
        }
        let text = self.scanner.slice(lexeme.span.clone());
        if is_number_literal(text) {
            return None;
        }
        Some(Word::new(text, lexeme.span.clone()))
    }

    /// Move past a prefix word and its `:`
    pub(super) fn consume_prefix(&mut self, prefix: &Word) {
        self.scanner.reset(prefix.span().end + ':'.len_utf8());
    }

    /// Describe a lexeme for the `found` part of an error
    pub(super) fn describe(&self, lexeme: &Lexeme) -> String {
        let text = self.scanner.slice(lexeme.span.clone());
        match lexeme.token {
            Token::Word | Token::Digits => format!("{} {:?}", lexeme.token.describe(), text),
            Token::Quote => format!("quote character {:?}", text),
            _ => lexeme.token.describe().to_string(),
        }
    }

    pub(super) fn describe_next(&self) -> Result<String, ParseError> {
        Ok(match self.scanner.peek()? {
            Some(lexeme) => self.describe(&lexeme),
            None => "end of input".to_string(),
        })
    }
}
