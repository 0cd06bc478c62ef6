use anyhow::Result;

use super::{args::Arguments, exit_status::ExitStatus, report};
use crate::{
    config::{Config, load_config},
    core::{PathNotFound, ScanContext},
};

/// Run one scan: extract, report, reconcile every catalog.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let Arguments {
        directory,
        languages,
        check,
        verbose,
    } = args;

    if !directory.exists() {
        return Err(PathNotFound(directory).into());
    }

    let config = effective_config(&directory, languages, verbose)?;
    let context = ScanContext::new(directory, config, verbose);

    let outcome = context.scan()?;
    if verbose {
        eprintln!("Scanned {} file(s)", outcome.files_scanned);
    }
    report::report(&outcome.diagnostics);
    report::print_skipped(&outcome.skipped, verbose);
    report::print_found(outcome.aggregator.len());

    let catalogs = context.update_catalogs(outcome.aggregator.strings(), check)?;
    for catalog in &catalogs {
        report::print_catalog_warnings(catalog, check, verbose);
        report::print_catalog(catalog, check);
    }

    if check && catalogs.iter().any(|c| !c.up_to_date) {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Config file (or defaults) with CLI overrides applied, validated.
fn effective_config(
    directory: &std::path::Path,
    languages: Vec<String>,
    verbose: bool,
) -> Result<Config> {
    let loaded = load_config(directory)?;

    if verbose {
        match &loaded.path {
            Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
            None => eprintln!("Note: No .msgscanrc.json found, using default configuration"),
        }
    }

    let mut config = loaded.config;
    if !languages.is_empty() {
        config.languages = languages;
    }
    config.validate()?;
    Ok(config)
}
