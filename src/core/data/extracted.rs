use std::fmt;

/// One literal text requested for translation at one source position.
///
/// Created by `CallAnalyzer` for every valid call site and handed over to
/// `StringAggregator`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExtractedString {
    /// Path relative to the scan root, `/`-separated.
    pub file: String,
    /// 1-indexed line.
    pub line: usize,
    /// 0-indexed byte column.
    pub column: usize,
    /// Runtime value of the literal (escapes already decoded).
    pub text: String,
}

impl ExtractedString {
    pub fn new(file: impl Into<String>, line: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            text: text.into(),
        }
    }

    /// Location identifier used in catalog `# file:` lines.
    pub fn identifier(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }
}

impl fmt::Display for ExtractedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.identifier(), self.text)
    }
}
