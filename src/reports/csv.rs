//! CSV report generator.
//!
//! One header line followed by one line per release, suitable for
//! spreadsheet import.

use super::escape::escape_csv;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{EolSource, SupportTable};
use std::fmt::Write;

const HEADER: &str = "Version,Release Date,End of Life Date,EOL Source,Supported,Days Until EOL";

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(
        &self,
        table: &SupportTable,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        writeln!(content, "{HEADER}")?;

        for row in table {
            let source = match row.eol_source {
                EolSource::Explicit => "explicit",
                EolSource::Derived => "derived",
            };
            let days = row
                .days_until_eol
                .map_or_else(|| "-".to_string(), |d| d.to_string());
            writeln!(
                content,
                "{},{},{},{},{},{}",
                escape_csv(&row.version),
                escape_csv(&row.release_date.to_string()),
                escape_csv(&row.eol_date.to_string()),
                source,
                if row.is_supported() { "yes" } else { "no" },
                days,
            )?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}
