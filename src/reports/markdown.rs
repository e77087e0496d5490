//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, COLUMN_HEADERS};
use crate::model::SupportTable;
use std::fmt::Write;

/// Markdown report generator: a heading followed by a pipe table.
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, table: &SupportTable, config: &ReportConfig) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "## {}", escape_markdown_inline(&config.display_title()))?;
        writeln!(md)?;

        writeln!(md, "| {} |", COLUMN_HEADERS.join(" | "))?;
        writeln!(md, "|{}", "---|".repeat(COLUMN_HEADERS.len()))?;
        for row in table {
            writeln!(
                md,
                "| {} | {} | {} | {} |",
                escape_markdown_table(&row.version),
                escape_markdown_table(&row.release_date.to_string()),
                escape_markdown_table(&row.eol_date.to_string()),
                row.status.icon()
            )?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
