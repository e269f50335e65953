//! Complement assembler
//!
//! After the head `prefix:value`, further `prefix:value` pairs with the same
//! prefix text are collected greedily. The first pair with another prefix, or
//! anything that is not a prefix at all, ends collection without being consumed.

use crate::conlang::ast::{Complement, Delimiter, PrefixedValue, Sequence, Value, Word};
use crate::conlang::lexing::Token;
use crate::conlang::parsing::error::{ErrorKind, ParseError};
use crate::conlang::parsing::parser::Parser;
use log::trace;

/// Outcome of looking for another tail occurrence
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TailProbe {
    /// Same prefix; the prefix and its `:` have been consumed
    Same(Word),
    /// A prefix, but a different one
    Mismatch(Word),
    /// No prefix at the cursor
    Absent,
}

/// Fold tail values: none, the single value itself, or a synthetic sequence
pub(crate) fn fold_tail(tails: Vec<PrefixedValue>) -> Option<Value> {
    let mut values: Vec<Value> = tails.into_iter().map(PrefixedValue::into_value).collect();
    match values.len() {
        0 => None,
        1 => values.pop(),
        _ => {
            let start = values.first().map_or(0, |v| v.span().start);
            let end = values.last().map_or(start, |v| v.span().end);
            Some(Sequence::new(Delimiter::Synthetic, values, start..end).into())
        }
    }
}

impl<'src> Parser<'src> {
    /// Parse a complement whose head prefix and `:` were just consumed
    pub(super) fn parse_complement(&mut self, prefix: Word) -> Result<Complement, ParseError> {
        let value = self.parse_prefixed_body()?;
        let head = PrefixedValue::new(prefix, value);

        let mut tails = Vec::new();
        loop {
            let checkpoint = self.position();
            self.scanner.skip_whitespace();
            match self.probe_tail(head.prefix().text())? {
                TailProbe::Same(prefix) => {
                    let value = self.parse_prefixed_body()?;
                    tails.push(PrefixedValue::new(prefix, value));
                }
                TailProbe::Mismatch(other) => {
                    trace!(
                        "tail collection for {:?} stops at prefix {:?}",
                        head.prefix().text(),
                        other.text()
                    );
                    self.scanner.reset(checkpoint);
                    break;
                }
                TailProbe::Absent => {
                    self.scanner.reset(checkpoint);
                    break;
                }
            }
        }

        Ok(Complement::new(head, fold_tail(tails)))
    }

    fn probe_tail(&mut self, expected: &str) -> Result<TailProbe, ParseError> {
        let lexeme = match self.scanner.peek()? {
            Some(lexeme) => lexeme,
            None => return Ok(TailProbe::Absent),
        };
        Ok(match self.prefix_at(&lexeme) {
            Some(prefix) if prefix.text() == expected => {
                self.consume_prefix(&prefix);
                TailProbe::Same(prefix)
            }
            Some(prefix) => TailProbe::Mismatch(prefix),
            None => TailProbe::Absent,
        })
    }

    /// The value after `:`, which must start right at the cursor
    fn parse_prefixed_body(&mut self) -> Result<Value, ParseError> {
        let position = self.position();
        match self.scanner.peek()? {
            None => Err(ParseError::new(
                ErrorKind::IncompleteInput,
                position,
                "a value after ':'",
                "end of input",
            )),
            Some(lexeme) if lexeme.token == Token::Whitespace => Err(ParseError::new(
                ErrorKind::UnexpectedToken,
                position,
                "a value directly after ':'",
                self.describe_next()?,
            )),
            Some(_) => self.parse_value(),
        }
    }
}
