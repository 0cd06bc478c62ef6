//! Source code parsing.
//!
//! - `python`: Python source parser (uses tree-sitter, lowers into `ast`)
//! - `ast`: the closed expression tree the analyzer walks
//! - `literal`: Python string literal decoding

pub mod ast;
pub mod literal;
pub mod python;

pub use python::{ParseFailure, PythonParser};
