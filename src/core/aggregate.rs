//! Cross-file string aggregation.
//!
//! Folds the `ExtractedString`s of every file, in scan order, into one
//! insertion-ordered mapping from text to the location identifiers where the
//! text is requested.

use indexmap::IndexMap;

use crate::core::ExtractedString;

/// Text -> location identifiers, in first-occurrence order.
pub type StringLocations = IndexMap<String, Vec<String>>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StringAggregator {
    strings: StringLocations,
}

impl StringAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's strings. Existing keys keep their position and get
    /// the new locations appended; identical identifiers are not deduplicated.
    pub fn add_strings<'s>(&mut self, strings: impl IntoIterator<Item = &'s ExtractedString>) {
        for string in strings {
            self.strings
                .entry(string.text.clone())
                .or_default()
                .push(string.identifier());
        }
    }

    /// Number of distinct texts.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn strings(&self) -> &StringLocations {
        &self.strings
    }

    pub fn into_strings(self) -> StringLocations {
        self.strings
    }
}
