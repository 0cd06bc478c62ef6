//! Source file discovery.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

/// The scan root does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNotFound(pub PathBuf);

impl fmt::Display for PathNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path {} does not exist.", self.0.display())
    }
}

impl std::error::Error for PathNotFound {}

/// Lazy, single-pass sequence of `.py` files under a root.
///
/// Entries are sorted by file name within each directory so that repeated
/// scans of an unchanged tree yield the same order. Unreadable entries are
/// skipped and kept in [`SourceFiles::skipped`].
pub struct SourceFiles {
    root: PathBuf,
    walker: walkdir::IntoIter,
    ignores: Vec<Pattern>,
    skipped: Vec<walkdir::Error>,
}

impl SourceFiles {
    /// Errors for entries skipped so far.
    pub fn skipped(&self) -> &[walkdir::Error] {
        &self.skipped
    }

    pub fn into_skipped(self) -> Vec<walkdir::Error> {
        self.skipped
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.ignores.is_empty() {
            return false;
        }
        let relative = relative_path(&self.root, path);
        let full = path.to_string_lossy();
        self.ignores
            .iter()
            .any(|p| p.matches(&relative) || p.matches(&full))
    }
}

impl Iterator for SourceFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    self.skipped.push(err);
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_scannable_file(path) && !self.is_ignored(path) {
                return Some(entry.into_path());
            }
        }
    }
}

/// Start scanning `root` for Python sources.
///
/// Fails with [`PathNotFound`] if `root` does not exist, or if an ignore
/// pattern is not a valid glob.
pub fn scan_files(root: &Path, ignores: &[String]) -> Result<SourceFiles> {
    if !root.exists() {
        return Err(PathNotFound(root.to_path_buf()).into());
    }

    let ignores = ignores
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SourceFiles {
        root: root.to_path_buf(),
        walker: WalkDir::new(root).sort_by_file_name().into_iter(),
        ignores,
        skipped: Vec::new(),
    })
}

/// `path` relative to `root`, joined with `/` on every platform.
pub fn relative_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("py"))
}
