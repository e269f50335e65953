//! Element types for the conlang AST

pub mod complement;
pub mod document;
pub mod number;
pub mod sequence;
pub mod value;
pub mod word;

pub use complement::{Complement, PrefixedValue};
pub use document::{Document, Sentence};
pub use number::Number;
pub use sequence::{Delimiter, Sequence};
pub use value::Value;
pub use word::Word;
