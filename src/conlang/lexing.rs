//! Lexer module for the conlang notation
//!
//! Token classes are declared with logos in [`tokens`]. The parser consumes them
//! on demand through the [`Scanner`]; [`tokenize`] exists for tools that want the
//! whole stream at once, such as the token output formats.

pub mod scanner;
pub mod tokens;

pub use scanner::{Lexeme, Scanner};
pub use tokens::{is_word_char, Token, RESERVED_CHARS};

use logos::Logos;
use std::ops::Range;

/// Tokenize a whole source string, keeping the byte range of every token
///
/// Characters logos cannot classify are dropped; every character of the
/// notation belongs to some token class, so in practice the spans tile the input.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_spans(pairs: Vec<(Token, Range<usize>)>) -> Vec<Token> {
        pairs.into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_simple_sentence() {
        let tokens = strip_spans(tokenize("subj:Mary."));
        assert_eq!(
            tokens,
            vec![Token::Word, Token::Decline, Token::Word, Token::Stop]
        );
    }

    #[test]
    fn test_sequence() {
        let tokens = strip_spans(tokenize("a, b; 3"));
        assert_eq!(
            tokens,
            vec![
                Token::Word,
                Token::Comma,
                Token::Whitespace,
                Token::Word,
                Token::Semicolon,
                Token::Whitespace,
                Token::Digits
            ]
        );
    }

    #[test]
    fn test_spans_tile_the_input() {
        let source = "item:a  item:b,\n'x'.";
        let tokens = tokenize(source);
        let mut expected_start = 0;
        for (_, span) in &tokens {
            assert_eq!(span.start, expected_start);
            expected_start = span.end;
        }
        assert_eq!(expected_start, source.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
