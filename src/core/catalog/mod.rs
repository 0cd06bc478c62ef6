//! Per-language translation catalogs.
//!
//! A catalog maps each literal text to the places that request it and the
//! translation a human supplied for it. Catalogs are stored in a small
//! line-oriented format:
//!
//! ```text
//! # file: modules/base/module.py:10:4
//! msgid Save
//! msgstr Uložit
//!
//! ```
//!
//! ## Module Structure
//!
//! - `parser`: line-by-line state machine loading the format
//! - `writer`: serialization back to the format
//! - `store`: one catalog file on disk (load, update, save)

pub mod parser;
pub mod store;
pub mod writer;

use indexmap::IndexMap;

use crate::core::StringLocations;

pub use parser::{ParsedCatalog, parse_catalog};
pub use store::CatalogFile;
pub use writer::render_catalog;

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The literal text; unique within a catalog.
    pub text: String,
    /// Location identifiers (`file:line:column`), in scan order.
    pub locations: Vec<String>,
    /// `None` until a translator fills it in.
    pub translation: Option<String>,
}

impl CatalogEntry {
    pub fn new(text: impl Into<String>, locations: Vec<String>, translation: Option<String>) -> Self {
        Self {
            text: text.into(),
            locations,
            translation,
        }
    }

    pub fn is_translated(&self) -> bool {
        self.translation.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Counts from one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Texts that were not in the catalog before.
    pub added: usize,
    /// Texts that were already in the catalog (translation carried over).
    pub kept: usize,
    /// Texts no longer found in the sources, removed from the catalog.
    pub pruned: usize,
    /// How many of the pruned texts had a translation.
    pub pruned_translations: usize,
}

/// Ordered text -> entry mapping for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.text.clone(), entry);
    }

    pub fn get(&self, text: &str) -> Option<&CatalogEntry> {
        self.entries.get(text)
    }

    pub fn translation(&self, text: &str) -> Option<&str> {
        self.get(text).and_then(|entry| entry.translation.as_deref())
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries carrying a non-empty translation.
    pub fn translated_count(&self) -> usize {
        self.entries().filter(|entry| entry.is_translated()).count()
    }

    /// Replace the catalog contents with a fresh scan.
    ///
    /// Every scanned text keeps the translation it had before, if any. Texts
    /// that are no longer found in the sources are pruned together with
    /// their translations.
    pub fn reconcile(&mut self, fresh: &StringLocations) -> ReconcileSummary {
        let mut previous = std::mem::take(&mut self.entries);
        let mut summary = ReconcileSummary::default();

        for (text, locations) in fresh {
            let translation = match previous.swap_remove(text) {
                Some(entry) => {
                    summary.kept += 1;
                    entry.translation
                }
                None => {
                    summary.added += 1;
                    None
                }
            };
            self.insert(CatalogEntry::new(text.clone(), locations.clone(), translation));
        }

        summary.pruned = previous.len();
        summary.pruned_translations = previous.values().filter(|e| e.is_translated()).count();
        summary
    }
}
