//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `file_scanner`: lazy discovery of `.py` files under the scan root
//! - `parsers`: tree-sitter based Python parsing, lowered to a small AST
//! - `extract`: per-file translation call analysis
//! - `aggregate`: cross-file merging of extracted strings
//! - `catalog`: per-language catalog files (parse, reconcile, write)
//! - `context`: the pipeline tying the above together

pub mod aggregate;
pub mod catalog;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use aggregate::{StringAggregator, StringLocations};
pub use context::{CatalogOutcome, ScanContext, ScanOutcome};
pub use data::ExtractedString;
pub use file_scanner::PathNotFound;
