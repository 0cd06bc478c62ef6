//! Extraction: per-file translation call analysis.
//!
//! Each source file is parsed and walked independently. The result is a list
//! of `ExtractedString`s (valid call sites) and a list of `Diagnostic`s
//! (malformed call sites), which the scan context then hands to the
//! aggregator and the reporter.

pub mod call_analyzer;


pub use call_analyzer::{
    CallAnalyzer, EXPECTED_ARGUMENT_COUNT, FileAnalysisResult, TranslationRules, analyze_source,
};
