//! Core data types shared by the extraction and catalog phases.
//!
//! - `extracted`: ExtractedString (one literal text found at one call site)

pub mod extracted;

pub use extracted::ExtractedString;
