//! Parse error types
//!
//! Every failure is reported where recognition broke, as a single
//! [`ParseError`]. There is no recovery and no partial AST.

use crate::conlang::ast::location::{Position, SourceLocation};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// An illegal character where a word, number or punctuation was required
    Lexical,
    /// A required token is missing or a different one is present
    UnexpectedToken,
    /// A sequence element is preceded by a delimiter other than the sequence's first
    InconsistentDelimiter,
    /// Input ended in the middle of a construct
    IncompleteInput,
    /// Values are nested deeper than the configured bound
    NestingTooDeep,
    /// A caller asked to start parsing outside the input
    InvalidPosition,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::Lexical => "lexical error",
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::InconsistentDelimiter => "inconsistent delimiter",
            ErrorKind::IncompleteInput => "incomplete input",
            ErrorKind::NestingTooDeep => "nesting too deep",
            ErrorKind::InvalidPosition => "invalid position",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind} at offset {position}: expected {expected}, found {found}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Byte offset into the source
    pub position: usize,
    pub expected: String,
    pub found: String,
}

impl ParseError {
    pub fn new(
        kind: ErrorKind,
        position: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            position,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Line/column of the error within `source`
    pub fn location(&self, source: &str) -> Position {
        SourceLocation::new(source).byte_to_position(self.position.min(source.len()))
    }

    /// True when more input could still complete the construct
    pub fn is_incomplete(&self) -> bool {
        self.kind == ErrorKind::IncompleteInput
    }

    /// Message with a 1-based `line:column` prefix, for people
    pub fn render(&self, source: &str) -> String {
        let location = self.location(source);
        format!(
            "{}:{}: {}: expected {}, found {}",
            location.line + 1,
            location.column + 1,
            self.kind,
            self.expected,
            self.found
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::new(ErrorKind::UnexpectedToken, 4, "'.'", "':'");
        assert_eq!(
            err.to_string(),
            "unexpected token at offset 4: expected '.', found ':'"
        );
    }

    #[test]
    fn test_render_uses_one_based_line_and_column() {
        let source = "a.\nb c.";
        let err = ParseError::new(ErrorKind::UnexpectedToken, 5, "'.'", "word \"c\"");
        assert_eq!(err.location(source), Position::new(1, 2));
        assert_eq!(
            err.render(source),
            "2:3: unexpected token: expected '.', found word \"c\""
        );
    }

    #[test]
    fn test_is_incomplete() {
        assert!(ParseError::new(ErrorKind::IncompleteInput, 0, "x", "y").is_incomplete());
        assert!(!ParseError::new(ErrorKind::Lexical, 0, "x", "y").is_incomplete());
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn test_error_is_send_sync_static() {
        _assert_send_sync_static::<ParseError>();
    }
}
