//! Catalog serialization.

use crate::core::catalog::Catalog;
use crate::core::catalog::parser::{LOCATION_PREFIX, MSGID_KEYWORD, MSGSTR_KEYWORD};

/// Render a catalog in entry order.
///
/// Each entry is one `# file:` line per location, the `msgid` line, the
/// `msgstr` line (bare when untranslated) and a blank separator line.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for entry in catalog.entries() {
        for location in &entry.locations {
            out.push_str(LOCATION_PREFIX);
            out.push_str(location);
            out.push('\n');
        }

        out.push_str(MSGID_KEYWORD);
        out.push(' ');
        out.push_str(&entry.text);
        out.push('\n');

        out.push_str(MSGSTR_KEYWORD);
        if let Some(translation) = entry.translation.as_deref().filter(|t| !t.is_empty()) {
            out.push(' ');
            out.push_str(translation);
        }
        out.push_str("\n\n");
    }
    out
}
