//! Report generation for support tables.
//!
//! This module renders a resolved [`SupportTable`] in several formats:
//! - HTML: the `supported_versions` table embedded in the documentation site
//! - Markdown: pipe table for READMEs and release notes
//! - JSON: structured data for programmatic integration
//! - CSV: spreadsheet import
//! - Table: aligned terminal output
//! - Summary: compact shell-friendly output
//!
//! Every renderer keeps the table's row order; none of them sort, merge
//! or drop releases.
//!
//! # Security
//!
//! Catalog values are escaped with the helpers in [`escape`] before being
//! embedded in HTML, Markdown or CSV.

mod csv;
pub mod escape;
mod html;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::model::SupportTable;
use thiserror::Error;

/// Column headings shared by every tabular renderer.
pub const COLUMN_HEADERS: [&str; 4] = [
    "Version Number",
    "Release Date",
    "End of Life Date",
    "Supported",
];

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for crate::error::ReleaseSupportError {
    fn from(err: ReportError) -> Self {
        use crate::error::ReportErrorKind;
        match err {
            ReportError::SerializationError(msg) => {
                Self::report("serializing report", ReportErrorKind::JsonSerializationError(msg))
            }
            ReportError::FormatError(e) => Self::report(
                "formatting report",
                ReportErrorKind::UnsupportedFormat(e.to_string()),
            ),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a support table
    fn generate(&self, table: &SupportTable, config: &ReportConfig) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
///
/// `Auto` must be resolved by the caller; it falls back to HTML here.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Html).format(), ReportFormat::Html);
        assert_eq!(create_reporter(ReportFormat::Auto).format(), ReportFormat::Html);
        assert_eq!(create_reporter(ReportFormat::Csv).format(), ReportFormat::Csv);
        assert_eq!(
            create_reporter_with_options(ReportFormat::Table, false).format(),
            ReportFormat::Table
        );
    }

    #[test]
    fn test_report_error_converts() {
        let err: crate::error::ReleaseSupportError =
            ReportError::SerializationError("bad".to_string()).into();
        assert!(err.to_string().contains("Could not render report"));
    }
}
