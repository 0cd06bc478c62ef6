use std::{fs, path::PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    config::Config,
    core::{
        StringAggregator, StringLocations,
        catalog::{CatalogFile, ReconcileSummary},
        extract::{TranslationRules, analyze_source},
        file_scanner::{relative_path, scan_files},
        parsers::PythonParser,
    },
    issues::{CatalogWarning, Diagnostic, DiagnosticKind},
};

/// Output of the source scan.
pub struct ScanOutcome {
    /// Every extracted text with its locations, in scan order.
    pub aggregator: StringAggregator,
    /// Diagnostics of all files, in scan order.
    pub diagnostics: Vec<Diagnostic>,
    pub files_scanned: usize,
    /// Directory entries that could not be read.
    pub skipped: Vec<walkdir::Error>,
}

/// Result of reconciling one language catalog.
#[derive(Debug)]
pub struct CatalogOutcome {
    pub language: String,
    pub path: PathBuf,
    /// Entries with a translation after reconciliation.
    pub translated: usize,
    pub summary: ReconcileSummary,
    /// Lines dropped while loading the previous catalog.
    pub warnings: Vec<CatalogWarning>,
    /// Whether the file on disk already had the reconciled contents.
    pub up_to_date: bool,
}

/// Extraction pipeline for one project root.
///
/// # Pipeline
///
/// 1. `scan()`: walk the root, parse and analyze every `.py` file, aggregate
///    the extracted strings
/// 2. `update_catalogs()`: for every language, load the catalog, reconcile it
///    with the aggregate and write it back
pub struct ScanContext {
    /// Effective configuration (CLI overrides already applied).
    pub config: Config,

    /// Scan root. Location identifiers are relative to it.
    pub root_dir: PathBuf,

    /// Marker and context names taken from the configuration.
    pub rules: TranslationRules,

    /// Whether to print per-file progress.
    pub verbose: bool,
}

impl ScanContext {
    pub fn new(root_dir: PathBuf, config: Config, verbose: bool) -> Self {
        let rules = TranslationRules {
            marker: config.marker.clone(),
            context_names: config.context_names.clone(),
        };
        Self {
            config,
            root_dir,
            rules,
            verbose,
        }
    }

    /// `<root>/<catalogDir>`
    pub fn catalog_dir(&self) -> PathBuf {
        self.root_dir.join(&self.config.catalog_dir)
    }

    /// Scan every source file under the root, one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`PathNotFound`](crate::core::file_scanner::PathNotFound) if
    /// the root does not exist. Per-file problems become diagnostics.
    pub fn scan(&self) -> Result<ScanOutcome> {
        let mut files = scan_files(&self.root_dir, &self.config.ignores)?;
        let mut parser = PythonParser::new()?;
        let mut aggregator = StringAggregator::new();
        let mut diagnostics = Vec::new();
        let mut files_scanned = 0;

        for path in files.by_ref() {
            let file_path = relative_path(&self.root_dir, &path);
            if self.verbose {
                eprintln!("Scanning {}", file_path);
            }
            files_scanned += 1;

            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(err) => {
                    diagnostics.push(Diagnostic {
                        file: file_path,
                        line: 0,
                        column: 0,
                        kind: DiagnosticKind::UnreadableFile {
                            message: err.to_string(),
                        },
                        source_line: String::new(),
                    });
                    continue;
                }
            };

            let result = analyze_source(&mut parser, &file_path, &source, &self.rules);
            aggregator.add_strings(&result.strings);
            diagnostics.extend(result.diagnostics);
        }

        Ok(ScanOutcome {
            aggregator,
            diagnostics,
            files_scanned,
            skipped: files.into_skipped(),
        })
    }

    /// Reconcile every configured language catalog with `strings`.
    ///
    /// Languages are processed in parallel; the outcomes are returned in
    /// configuration order. With `check` set nothing is written.
    pub fn update_catalogs(
        &self,
        strings: &StringLocations,
        check: bool,
    ) -> Result<Vec<CatalogOutcome>> {
        let catalog_dir = self.catalog_dir();
        self.config
            .languages
            .par_iter()
            .map(|language| -> Result<CatalogOutcome> {
                let path = CatalogFile::path_for(&catalog_dir, language);
                let mut file = CatalogFile::load(path, language.as_str())?;
                let summary = file.update(strings);
                let up_to_date = file.is_up_to_date();
                if !check && !up_to_date {
                    file.save()?;
                }

                Ok(CatalogOutcome {
                    language: file.language,
                    translated: file.catalog.translated_count(),
                    path: file.path,
                    summary,
                    warnings: file.warnings,
                    up_to_date,
                })
            })
            .collect()
    }
}
