//! Main module for conlang library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod repl;
pub mod testing;
