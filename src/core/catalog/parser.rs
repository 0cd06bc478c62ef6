//! Catalog file parser.
//!
//! The format has no explicit record delimiters the parser can rely on, so it
//! is read with a small state machine: `# file:` lines accumulate locations,
//! a `msgid` line sets the pending key, and a `msgstr` line commits the record
//! and resets the state. Blank lines carry no meaning. Anything else is
//! dropped and reported as a warning.

use crate::core::catalog::{Catalog, CatalogEntry};
use crate::issues::{CatalogWarning, CatalogWarningReason};

pub const LOCATION_PREFIX: &str = "# file: ";
pub const MSGID_KEYWORD: &str = "msgid";
pub const MSGSTR_KEYWORD: &str = "msgstr";

/// Result of parsing one catalog file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedCatalog {
    pub catalog: Catalog,
    pub warnings: Vec<CatalogWarning>,
}

/// Classification of a single catalog line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Location(&'a str),
    MsgId(&'a str),
    MsgStr(Option<&'a str>),
    Unrecognized,
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Line::Blank;
    }

    if let Some(rest) = line.strip_prefix(LOCATION_PREFIX) {
        let location = rest.trim();
        return if location.is_empty() {
            Line::Unrecognized
        } else {
            Line::Location(location)
        };
    }

    if let Some(rest) = line.strip_prefix(MSGID_KEYWORD) {
        // The text is everything after the separator, trailing spaces included.
        if rest.is_empty() {
            return Line::MsgId("");
        }
        if let Some(text) = rest.strip_prefix(' ') {
            return Line::MsgId(text);
        }
    }

    if let Some(rest) = line.strip_prefix(MSGSTR_KEYWORD)
        && (rest.is_empty() || rest.starts_with(char::is_whitespace))
    {
        let translation = rest.trim();
        return Line::MsgStr((!translation.is_empty()).then_some(translation));
    }

    Line::Unrecognized
}

#[derive(Debug, Default)]
struct CatalogParser {
    /// `# file:` identifiers of the record under construction.
    pending_locations: Vec<String>,
    /// `msgid` of the record under construction.
    pending_key: Option<String>,
    /// First line of the record under construction, for warnings.
    pending_start: Option<(usize, String)>,

    catalog: Catalog,
    warnings: Vec<CatalogWarning>,
}

impl CatalogParser {
    fn feed(&mut self, number: usize, raw: &str) {
        match classify(raw) {
            Line::Blank => {}
            Line::Location(location) => {
                self.mark_start(number, raw);
                self.pending_locations.push(location.to_string());
            }
            Line::MsgId(text) => {
                self.mark_start(number, raw);
                self.pending_key = Some(text.to_string());
            }
            Line::MsgStr(translation) => self.commit(number, raw, translation),
            Line::Unrecognized => self.warn(number, raw, CatalogWarningReason::UnrecognizedLine),
        }
    }

    fn mark_start(&mut self, number: usize, raw: &str) {
        if self.pending_start.is_none() {
            self.pending_start = Some((number, raw.to_string()));
        }
    }

    fn commit(&mut self, number: usize, raw: &str, translation: Option<&str>) {
        let locations = std::mem::take(&mut self.pending_locations);
        self.pending_start = None;

        match self.pending_key.take() {
            Some(text) => self.catalog.insert(CatalogEntry::new(
                text,
                locations,
                translation.map(str::to_string),
            )),
            None => self.warn(number, raw, CatalogWarningReason::TranslationWithoutMsgid),
        }
    }

    fn warn(&mut self, number: usize, raw: &str, reason: CatalogWarningReason) {
        self.warnings.push(CatalogWarning {
            line: number,
            content: raw.to_string(),
            reason,
        });
    }

    fn finish(mut self) -> ParsedCatalog {
        if let Some((number, raw)) = self.pending_start.take() {
            self.warn(number, &raw, CatalogWarningReason::UnterminatedRecord);
        }
        ParsedCatalog {
            catalog: self.catalog,
            warnings: self.warnings,
        }
    }
}

/// Parse catalog file contents.
///
/// Never fails: malformed lines are dropped and listed in
/// [`ParsedCatalog::warnings`].
pub fn parse_catalog(content: &str) -> ParsedCatalog {
    let mut parser = CatalogParser::default();
    for (index, line) in content.lines().enumerate() {
        parser.feed(index + 1, line);
    }
    parser.finish()
}
