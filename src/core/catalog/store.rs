//! One catalog file on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::StringLocations;
use crate::core::catalog::{Catalog, ReconcileSummary, parse_catalog, render_catalog};
use crate::issues::CatalogWarning;

pub const CATALOG_EXTENSION: &str = "po";

/// A language catalog together with where it lives and what was read from disk.
#[derive(Debug)]
pub struct CatalogFile {
    pub path: PathBuf,
    pub language: String,
    pub catalog: Catalog,
    /// Lines dropped while loading.
    pub warnings: Vec<CatalogWarning>,
    /// File contents as loaded, `None` if the file did not exist.
    original: Option<String>,
}

impl CatalogFile {
    /// `<dir>/<language>.po`
    pub fn path_for(dir: &Path, language: &str) -> PathBuf {
        dir.join(format!("{}.{}", language, CATALOG_EXTENSION))
    }

    /// Load the catalog at `path`. A missing file is an empty catalog.
    pub fn load(path: PathBuf, language: impl Into<String>) -> Result<Self> {
        let original = if path.exists() {
            Some(
                fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog {}", path.display()))?,
            )
        } else {
            None
        };

        let parsed = original.as_deref().map(parse_catalog).unwrap_or_default();

        Ok(Self {
            path,
            language: language.into(),
            catalog: parsed.catalog,
            warnings: parsed.warnings,
            original,
        })
    }

    pub fn exists(&self) -> bool {
        self.original.is_some()
    }

    pub fn update(&mut self, fresh: &StringLocations) -> ReconcileSummary {
        self.catalog.reconcile(fresh)
    }

    pub fn render(&self) -> String {
        render_catalog(&self.catalog)
    }

    /// Whether saving would leave the file byte-identical.
    pub fn is_up_to_date(&self) -> bool {
        self.original.as_deref() == Some(self.render().as_str())
    }

    /// Write the catalog, creating the catalog directory if needed.
    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = self.render();
        fs::write(&self.path, &content)
            .with_context(|| format!("Failed to write catalog {}", self.path.display()))?;
        self.original = Some(content);
        Ok(())
    }
}
