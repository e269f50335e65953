//! AST for the conlang notation
//!
//! The tree is built once by the parser and never mutated. Every node owns its
//! children outright and records the byte range it was read from.
//!
//! ```text
//! Document
//! └─ Sentence*
//!    └─ Value = Word | Number | Sequence | Complement
//! ```

pub mod elements;
pub mod location;
pub mod traits;

pub use elements::{
    Complement, Delimiter, Document, Number, PrefixedValue, Sentence, Sequence, Value, Word,
};
pub use location::{Position, SourceLocation};
pub use traits::AstNode;
