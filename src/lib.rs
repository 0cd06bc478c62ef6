//! msgscan - translatable string extraction for Python projects
//!
//! msgscan walks a tree of Python sources, finds calls of the translation
//! function (`_(ctx, "text")`), reports malformed calls and keeps one catalog
//! file per target language in sync with the sources, preserving the
//! translations already filled in.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit status)
//! - `config`: Configuration file loading and validation
//! - `core`: Extraction pipeline and catalog handling
//! - `issues`: Diagnostic and catalog warning types

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
