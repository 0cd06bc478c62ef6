//! Issue types produced while scanning sources and loading catalogs.
//!
//! Issues are plain data. Nothing in `core` prints them; the CLI reporter
//! (`crate::cli::report`) decides how they are displayed.

use std::fmt;

// ============================================================
// Severity
// ============================================================

/// Severity level of an issue.
///
/// Source diagnostics are errors. Catalog lines and directory entries the scan
/// recovers from are reported as warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================
// Source diagnostics
// ============================================================

/// Why a translation call (or a whole file) could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `_(ctx)` or `_(ctx, "a", "b")`
    BadArgumentCount { expected: usize, got: usize },
    /// `_(self.ctx, "a")`, `_(context, "a")`
    BadContextName {
        accepted: Vec<String>,
        got: String,
    },
    /// `_(ctx, 123)`, `_(ctx, b"bytes")`
    WrongLiteralType { got: String },
    /// The file is not valid Python.
    ParseError { message: String },
    /// The file could not be read (permissions, invalid UTF-8, ...).
    UnreadableFile { message: String },
}

impl DiagnosticKind {
    /// Short rule name shown next to the message.
    pub fn rule(&self) -> &'static str {
        match self {
            DiagnosticKind::BadArgumentCount { .. } => "argument-count",
            DiagnosticKind::BadContextName { .. } => "context-name",
            DiagnosticKind::WrongLiteralType { .. } => "literal-type",
            DiagnosticKind::ParseError { .. } => "parse-error",
            DiagnosticKind::UnreadableFile { .. } => "unreadable-file",
        }
    }

    /// Whether the whole file was skipped because of this issue.
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::ParseError { .. } | DiagnosticKind::UnreadableFile { .. }
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::BadArgumentCount { expected, got } => {
                write!(f, "Bad argument count (expected {}, got {}).", expected, got)
            }
            DiagnosticKind::BadContextName { accepted, got } => write!(
                f,
                "Translation context variable has to have name {}, got '{}'.",
                quoted_alternatives(accepted),
                got
            ),
            DiagnosticKind::WrongLiteralType { got } => {
                write!(f, "Translation string has to be of type 'str', not '{}'.", got)
            }
            DiagnosticKind::ParseError { message } => write!(f, "{}.", message),
            DiagnosticKind::UnreadableFile { message } => {
                write!(f, "File could not be read: {}.", message)
            }
        }
    }
}

/// `["ctx", "tc"]` -> `'ctx' or 'tc'`; `["a", "b", "c"]` -> `'a', 'b' or 'c'`
fn quoted_alternatives(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// A malformed translation call or an unprocessable file.
///
/// Diagnostics are never fatal: the offending call contributes no string and
/// scanning continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path relative to the scan root.
    pub file: String,
    /// 1-indexed line.
    pub line: usize,
    /// 0-indexed byte column.
    pub column: usize,
    pub kind: DiagnosticKind,
    /// The source line the diagnostic points into (empty for file-level issues).
    pub source_line: String,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: {}:{}:{} {}",
            self.file, self.line, self.column, self.kind
        )
    }
}

// ============================================================
// Catalog warnings
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogWarningReason {
    /// Line matches none of the record prefixes.
    UnrecognizedLine,
    /// `msgstr` without a preceding `msgid`.
    TranslationWithoutMsgid,
    /// File ended after `# file:`/`msgid` lines without a `msgstr`.
    UnterminatedRecord,
}

impl fmt::Display for CatalogWarningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarningReason::UnrecognizedLine => write!(f, "unrecognized line"),
            CatalogWarningReason::TranslationWithoutMsgid => {
                write!(f, "msgstr without a preceding msgid")
            }
            CatalogWarningReason::UnterminatedRecord => write!(f, "record without msgstr"),
        }
    }
}

/// A catalog line that was dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    /// 1-indexed line in the catalog file.
    pub line: usize,
    pub content: String,
    pub reason: CatalogWarningReason,
}
