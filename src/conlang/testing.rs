//! Testing utilities
//!
//! Tests that need realistic conlang text should load it from the sample
//! documents in `docs/samples` rather than inlining it, so a change to the
//! notation means updating one set of files:
//!
//! ```rust,ignore
//! use conlang::conlang::testing::samples::{find_sample, SampleKind};
//!
//! let sample = find_sample(SampleKind::Valid, 4).unwrap();
//! let doc = sample.parse().unwrap();
//! ```
//!
//! Invalid samples carry their expected error kind in the file name
//! (`02-unexpected-token-spaced-colon.conlang`).
//!
//! [`sexp_of`] gives the structural rendering used to compare two parses.

pub mod samples;

use crate::conlang::formats::to_sexp;
use crate::conlang::parsing::{parse_document, ParseError};

/// Parse `source` and render it as s-expressions
pub fn sexp_of(source: &str) -> Result<String, ParseError> {
    parse_document(source).map(|doc| to_sexp(&doc))
}
