//! Output formats for parsed documents
//!
//! Each format implements [`Formatter`] and is looked up by name through a
//! [`FormatRegistry`]. Token streams have their own small set of renderers in
//! [`tokens`].

pub mod canonical;
pub mod json;
pub mod registry;
pub mod sexp;
pub mod tag;
pub mod tokens;
pub mod treeviz;

pub use canonical::{to_conlang, CanonicalFormatter};
pub use json::{JsonFormatter, YamlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use sexp::{to_sexp, value_to_sexp, SexpFormatter};
pub use tag::{serialize_document as serialize_ast_tag, TagFormatter};
pub use tokens::{tokens_to_json, tokens_to_simple};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
