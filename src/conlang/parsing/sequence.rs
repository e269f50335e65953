//! Sequence assembler
//!
//! The first delimiter after a value fixes the delimiter for the whole sequence.
//! A different delimiter later on is an error, not the end of the sequence.

use crate::conlang::ast::{Delimiter, Sequence, Value};
use crate::conlang::parsing::error::{ErrorKind, ParseError};
use crate::conlang::parsing::parser::Parser;

impl<'src> Parser<'src> {
    /// Extend `first` into a sequence if a delimiter follows it
    pub(super) fn continue_sequence(&mut self, first: Value) -> Result<Value, ParseError> {
        let checkpoint = self.position();
        self.scanner.skip_whitespace();
        let delimiter = match self.scanner.peek()? {
            Some(lexeme) => Delimiter::from_token(lexeme.token),
            None => None,
        };
        let delimiter = match delimiter {
            Some(delimiter) => delimiter,
            None => {
                self.scanner.reset(checkpoint);
                return Ok(first);
            }
        };

        let start = first.span().start;
        let mut elements = vec![first];
        loop {
            // cursor sits on the delimiter
            self.scanner.advance()?;
            self.scanner.skip_whitespace();
            elements.push(self.parse_term()?);

            let checkpoint = self.position();
            self.scanner.skip_whitespace();
            match self.scanner.peek()? {
                Some(lexeme) if Delimiter::from_token(lexeme.token) == Some(delimiter) => continue,
                Some(lexeme) if lexeme.token.is_delimiter() => {
                    return Err(ParseError::new(
                        ErrorKind::InconsistentDelimiter,
                        lexeme.span.start,
                        format!("'{}' as in the rest of the sequence", delimiter),
                        self.describe(&lexeme),
                    ));
                }
                _ => {
                    self.scanner.reset(checkpoint);
                    break;
                }
            }
        }

        let end = elements.last().map_or(start, |v| v.span().end);
        Ok(Sequence::new(delimiter, elements, start..end).into())
    }
}
