//! Report formatting and printing utilities.
//!
//! Diagnostics are displayed in cargo-style format. Kept apart from `core`
//! so the pipeline can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::core::CatalogOutcome;
use crate::issues::{Diagnostic, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print diagnostics to stdout, in scan order.
pub fn report(diagnostics: &[Diagnostic]) {
    report_to(diagnostics, &mut io::stdout().lock());
}

/// Print diagnostics to a custom writer.
pub fn report_to<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    if diagnostics.is_empty() {
        return;
    }

    let max_line_width = diagnostics
        .iter()
        .map(|d| d.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for diagnostic in diagnostics {
        print_diagnostic(diagnostic, writer, max_line_width);
    }

    print_summary(diagnostics, writer);
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    }
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W, max_line_width: usize) {
    let severity = diagnostic.severity();

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_label(severity),
        diagnostic.message(),
        diagnostic.kind.rule().dimmed().cyan()
    );

    if diagnostic.line == 0 {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), diagnostic.file);
        let _ = writeln!(writer);
        return;
    }

    // Clickable location: --> path:line:col (col is 1-based here)
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        diagnostic.file,
        diagnostic.line,
        diagnostic.column + 1
    );

    if !diagnostic.source_line.is_empty() {
        let source_line = &diagnostic.source_line;
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            diagnostic.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // column is a byte offset into the line
        let prefix = source_line.get(..diagnostic.column).unwrap_or(source_line);
        let caret_padding = UnicodeWidthStr::width(prefix);
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    let total = diagnostics.len();
    let skipped_files = diagnostics.iter().filter(|d| d.kind.is_file_level()).count();

    let _ = write!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        total,
        if total == 1 { "problem" } else { "problems" }.red()
    );
    if skipped_files > 0 {
        let _ = write!(
            writer,
            " ({} {} skipped)",
            skipped_files,
            if skipped_files == 1 { "file" } else { "files" }
        );
    }
    let _ = writeln!(writer);
}

/// `Found N strings.`
pub fn print_found(count: usize) {
    print_found_to(count, &mut io::stdout().lock());
}

pub fn print_found_to<W: Write>(count: usize, writer: &mut W) {
    let _ = writeln!(writer, "Found {} strings.", count);
}

/// Per-language result line.
pub fn print_catalog(outcome: &CatalogOutcome, check: bool) {
    print_catalog_to(outcome, check, &mut io::stdout().lock());
}

pub fn print_catalog_to<W: Write>(outcome: &CatalogOutcome, check: bool, writer: &mut W) {
    let path = outcome.path.display();
    if !check {
        let _ = writeln!(
            writer,
            "Saving {} translated strings to {}.",
            outcome.translated, path
        );
    } else if outcome.up_to_date {
        let _ = writeln!(writer, "{} {} is up to date.", SUCCESS_MARK.green(), path);
    } else {
        let _ = writeln!(writer, "{} {} is out of date.", FAILURE_MARK.red(), path);
    }
}

/// Warnings about the previous catalog contents: dropped lines and pruned
/// translations.
pub fn print_catalog_warnings(outcome: &CatalogOutcome, check: bool, verbose: bool) {
    print_catalog_warnings_to(outcome, check, verbose, &mut io::stderr().lock());
}

pub fn print_catalog_warnings_to<W: Write>(
    outcome: &CatalogOutcome,
    check: bool,
    verbose: bool,
    writer: &mut W,
) {
    let path = outcome.path.display();

    if verbose {
        for warning in &outcome.warnings {
            let _ = writeln!(
                writer,
                "{}: {}:{}: {}: {}",
                severity_label(Severity::Warning),
                path,
                warning.line,
                warning.reason,
                warning.content.trim()
            );
        }
    } else if !outcome.warnings.is_empty() {
        let _ = writeln!(
            writer,
            "{}: {} line(s) in {} could not be read (use {} for details)",
            severity_label(Severity::Warning),
            outcome.warnings.len(),
            path,
            "-v".cyan()
        );
    }

    let dropped = outcome.summary.pruned_translations;
    if dropped > 0 {
        let _ = writeln!(
            writer,
            "{}: {} translation(s) in {} are no longer used in sources and {} dropped",
            severity_label(Severity::Warning),
            dropped,
            path,
            if check { "would be" } else { "were" }
        );
    }
}

/// Warn about directory entries that could not be read.
pub fn print_skipped(skipped: &[walkdir::Error], verbose: bool) {
    print_skipped_to(skipped, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_to<W: Write>(skipped: &[walkdir::Error], verbose: bool, writer: &mut W) {
    if skipped.is_empty() {
        return;
    }
    if verbose {
        for err in skipped {
            let _ = writeln!(
                writer,
                "{}: Cannot access path: {}",
                severity_label(Severity::Warning),
                err
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{}: {} path(s) skipped due to access errors (use {} for details)",
            severity_label(Severity::Warning),
            skipped.len(),
            "-v".cyan()
        );
    }
}

/// `Path <dir> does not exist.`
pub fn print_missing_path(path: &Path) {
    eprintln!("Path {} does not exist.", path.display());
}
