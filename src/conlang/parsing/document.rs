//! Sentence and document reader

use crate::conlang::ast::{Document, Sentence};
use crate::conlang::lexing::Token;
use crate::conlang::parsing::error::{ErrorKind, ParseError};
use crate::conlang::parsing::parser::Parser;
use log::debug;

impl<'src> Parser<'src> {
    /// Read sentences until the input runs out
    ///
    /// End of input between sentences ends the document; anywhere else it is
    /// an `IncompleteInput` error.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut sentences = Vec::new();
        loop {
            self.scanner.skip_whitespace();
            if self.scanner.is_at_end() {
                break;
            }
            let sentence = self.parse_sentence()?;
            debug!(
                "sentence {} at {:?}: {}",
                sentences.len() + 1,
                sentence.span(),
                sentence.value()
            );
            sentences.push(sentence);
        }
        debug!("document complete with {} sentence(s)", sentences.len());
        Ok(Document::with_sentences(sentences))
    }

    /// One value followed by `.`
    pub fn parse_sentence(&mut self) -> Result<Sentence, ParseError> {
        let value = self.parse_value()?;
        self.scanner.skip_whitespace();

        let position = self.position();
        match self.scanner.peek()? {
            Some(lexeme) if lexeme.token == Token::Stop => {
                self.scanner.advance()?;
                let start = value.span().start;
                Ok(Sentence::new(value, start..lexeme.span.end))
            }
            Some(lexeme) if lexeme.token == Token::Quote => Err(ParseError::new(
                ErrorKind::Lexical,
                position,
                "'.' to end the sentence",
                self.describe(&lexeme),
            )),
            Some(lexeme) => Err(ParseError::new(
                ErrorKind::UnexpectedToken,
                position,
                "'.' to end the sentence",
                self.describe(&lexeme),
            )),
            None => Err(ParseError::new(
                ErrorKind::IncompleteInput,
                position,
                "'.' to end the sentence",
                "end of input",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::conlang::parsing::error::ErrorKind;
    use crate::conlang::parsing::parser::Parser;

    #[test]
    fn test_sentences() {
        let doc = Parser::new("a. b, c.\n  k:v .").parse_document().unwrap();
        assert_eq!(doc.len(), 3);
        let rendered: Vec<String> = doc.values().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["a", "[b, c]", "(k:v)"]);
        assert_eq!(doc.sentences()[2].span(), 11..16);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(Parser::new("").parse_document().unwrap().is_empty());
        assert!(Parser::new(" \n\t ").parse_document().unwrap().is_empty());
    }

    #[test]
    fn test_missing_stop_at_end() {
        let err = Parser::new("a. b").parse_document().unwrap_err();
        assert_eq!(err.kind, ErrorKind::IncompleteInput);
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_two_values_without_stop() {
        let err = Parser::new("a b.").parse_document().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.position, 2);
        assert_eq!(err.found, "word \"b\"");
    }

    #[test]
    fn test_spaced_colon_is_not_a_complement() {
        let err = Parser::new("item : a.").parse_document().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.position, 5);
        assert_eq!(err.found, "':'");
    }

    #[test]
    fn test_quote_after_value() {
        let err = Parser::new("a'.").parse_document().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.position, 1);
    }
}
