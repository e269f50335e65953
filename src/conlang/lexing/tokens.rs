//! Token definitions for the conlang notation
//!
//! Tokens are declared with the logos derive macro. A token carries no text of
//! its own; the scanner pairs every token with the byte range it covers and
//! callers slice the source when they need the text.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Characters that may never appear inside a word, besides ASCII whitespace.
pub const RESERVED_CHARS: &str = "\"'.:,;";

/// All possible tokens in the conlang notation
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Token {
    /// Only ASCII whitespace separates; other Unicode spaces are word text
    #[regex(r"[ \t\n\r\f]+")]
    Whitespace,

    /// `.` terminates a sentence
    #[token(".")]
    Stop,

    /// `:` joins a prefix to its value
    #[token(":")]
    Decline,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    /// `"` and `'` are reserved out of words but have no grammar rule
    #[regex(r#"["']"#)]
    Quote,

    // Wins ties against Word; a longer word run (`123abc`) still wins by length
    #[regex(r"[0-9]+", priority = 3)]
    Digits,

    #[regex(r#"[^ \t\n\r\f"'.:,;]+"#)]
    Word,
}

impl Token {
    /// Check if this token starts a word run (digit runs are word runs too)
    pub fn is_word_run(&self) -> bool {
        matches!(self, Token::Word | Token::Digits)
    }

    /// Check if this token is a sequence delimiter
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::Comma | Token::Semicolon)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Human-readable description used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Whitespace => "whitespace",
            Token::Stop => "'.'",
            Token::Decline => "':'",
            Token::Comma => "','",
            Token::Semicolon => "';'",
            Token::Quote => "quote character",
            Token::Digits => "digits",
            Token::Word => "word",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::Whitespace => "whitespace",
            Token::Stop => "stop",
            Token::Decline => "decline",
            Token::Comma => "comma",
            Token::Semicolon => "semicolon",
            Token::Quote => "quote",
            Token::Digits => "digits",
            Token::Word => "word",
        };
        write!(f, "<{}>", name)
    }
}

/// Whether `c` may appear inside a word run
pub fn is_word_char(c: char) -> bool {
    !(c.is_ascii_whitespace() || RESERVED_CHARS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            lex_all(".:,;"),
            vec![Token::Stop, Token::Decline, Token::Comma, Token::Semicolon]
        );
    }

    #[test]
    fn test_quotes_are_their_own_token() {
        assert_eq!(lex_all("\"'"), vec![Token::Quote, Token::Quote]);
    }

    #[test]
    fn test_digits_win_ties_against_words() {
        assert_eq!(lex_all("123"), vec![Token::Digits]);
        assert_eq!(lex_all("123abc"), vec![Token::Word]);
        assert_eq!(lex_all("n3"), vec![Token::Word]);
        assert_eq!(lex_all("-5"), vec![Token::Word]);
    }

    #[test]
    fn test_whitespace_runs_are_one_token() {
        assert_eq!(
            lex_all("a \t\n b"),
            vec![Token::Word, Token::Whitespace, Token::Word]
        );
    }

    #[test]
    fn test_non_ascii_spaces_are_word_text() {
        assert_eq!(lex_all("a\u{00A0}b"), vec![Token::Word]);
        assert_eq!(lex_all("a\u{2003} \u{3000}"), vec![Token::Word, Token::Whitespace, Token::Word]);
        assert!(is_word_char('\u{00A0}'));
        assert!(!is_word_char('\x0C'));
    }

    #[test]
    fn test_number_with_fraction_splits_on_stop() {
        assert_eq!(
            lex_all("3.14"),
            vec![Token::Digits, Token::Stop, Token::Digits]
        );
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Word.is_word_run());
        assert!(Token::Digits.is_word_run());
        assert!(!Token::Decline.is_word_run());
        assert!(Token::Comma.is_delimiter());
        assert!(Token::Semicolon.is_delimiter());
        assert!(!Token::Stop.is_delimiter());
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('-'));
        assert!(is_word_char('é'));
        for c in RESERVED_CHARS.chars() {
            assert!(!is_word_char(c));
        }
        assert!(!is_word_char(' '));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Decline.to_string(), "<decline>");
        assert_eq!(Token::Whitespace.to_string(), "<whitespace>");
    }
}
