//! # conlang
//!
//! A parser for the conlang notation: words, numbers, delimiter-consistent
//! sequences and prefix complements, read sentence by sentence into an AST.
//!
//! ```text
//! item:a item:b item:c.
//! ```
//!
//! parses into a complement with prefix `item`, head `a` and the tail values
//! `b` and `c` folded into a synthetic sequence.
//!
//! ## Testing
//!
//! Sample documents live in `docs/samples`. See the [testing module](conlang::testing)
//! for the loader used by the integration tests.

pub mod conlang;

pub use conlang::ast::{Complement, Delimiter, Document, Number, PrefixedValue, Sentence, Sequence, Value, Word};
pub use conlang::parsing::{parse_document, parse_value_at, ErrorKind, ParseError, ParserOptions};
