//! Shared output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for `CheckReport`.
//! Color/terminal formatting belongs to the CLI layer.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use crate::category::Category;
use crate::pattern::HeaderPattern;
use crate::report::CheckReport;

/// Line printed once the run found nothing to complain about.
pub const SUCCESS_LINE: &str = "OK!";

/// Line printed ahead of the list of violating files.
pub const FAILURE_LINE: &str = "The following files are misformatted, please fix the headers.";

/// Write the progress line for a file about to be checked.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_progress(path: &Path, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "Processing {}", path.display())?;
    Ok(())
}

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.ok {
        writeln!(writer, "{SUCCESS_LINE}")?;
        return Ok(());
    }

    writeln!(writer, "{FAILURE_LINE}")?;
    for path in report.violation_paths() {
        writeln!(writer, "{}", path.display())?;
    }
    Ok(())
}

/// Write the header each violated category expects, once per category.
///
/// Nothing is written for a clean report. Scripts show the variant with the
/// interpreter and encoding lines, which are optional as a pair.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_hints(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let categories: BTreeSet<Category> = report.violations.iter().map(|v| v.category).collect();

    for category in categories {
        let Some(pattern) = HeaderPattern::for_category(category) else {
            continue;
        };
        writeln!(writer)?;
        if category == Category::Script {
            writeln!(
                writer,
                "Expected header for {category} files (first two lines optional as a pair):"
            )?;
        } else {
            writeln!(writer, "Expected header for {category} files:")?;
        }
        writeln!(writer, "{}", pattern.expected_text(true))?;
    }
    Ok(())
}
