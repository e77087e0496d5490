//! Terminal reporters: an aligned support table and a short summary.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, COLUMN_HEADERS};
use crate::model::{SupportStatus, SupportTable};
use unicode_width::UnicodeWidthStr;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

const fn status_color(status: SupportStatus) -> &'static str {
    match status {
        SupportStatus::Supported => "green",
        SupportStatus::EndOfLife => "red",
    }
}

/// Aligned table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        table: &SupportTable,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let cells: Vec<[String; 4]> = table
            .iter()
            .map(|row| {
                [
                    row.version.clone(),
                    row.release_date.to_string(),
                    row.eol_date.to_string(),
                    row.status.icon().to_string(),
                ]
            })
            .collect();

        let mut widths = COLUMN_HEADERS.map(UnicodeWidthStr::width);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut lines = Vec::with_capacity(cells.len() + 2);
        let header: Vec<String> = COLUMN_HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| self.color(&pad(h, w), "bold"))
            .collect();
        lines.push(header.join("  ").trim_end().to_string());
        let rule_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        lines.push(self.color(&"─".repeat(rule_width), "dim"));

        for (row, cell) in table.iter().zip(&cells) {
            let version = self.color(&pad(&cell[0], widths[0]), status_color(row.status));
            lines.push(
                format!(
                    "{version}  {}  {}  {}",
                    pad(&cell[1], widths[1]),
                    pad(&cell[2], widths[2]),
                    cell[3]
                )
                .trim_end()
                .to_string(),
            );
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, table: &SupportTable, config: &ReportConfig) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(&config.display_title(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("As of:", "cyan"),
            table.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(format!(
            "{}  {} total, {} supported, {} end of life",
            self.color("Releases:", "cyan"),
            table.len(),
            self.color(&table.supported_count().to_string(), "green"),
            self.color(&table.end_of_life_count().to_string(), "red"),
        ));

        let supported: Vec<&str> = table
            .iter()
            .filter(|r| r.is_supported())
            .map(|r| r.version.as_str())
            .collect();
        if !supported.is_empty() {
            lines.push(format!(
                "{}  {}",
                self.color("Supported:", "cyan"),
                supported.join(", ")
            ));
        }

        if let Some(next) = table.next_end_of_life() {
            lines.push(format!(
                "{}  {} on {}{}",
                self.color("Next EOL:", "cyan"),
                next.version,
                next.eol_date,
                next.days_until_eol
                    .map(|d| format!(" (in {d} days)"))
                    .unwrap_or_default()
            ));
        }

        let approaching = table.approaching_eol(config.approaching_days);
        if !approaching.is_empty() {
            lines.push(String::new());
            lines.push(self.color(
                &format!("Ending within {} days:", config.approaching_days),
                "yellow",
            ));
            for release in approaching {
                lines.push(format!("  {} ({})", release.version, release.eol_date));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{FixedClock, VersionSupportCalculator};
    use crate::model::ReleaseRecord;
    use chrono::NaiveDate;

    fn table() -> SupportTable {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        VersionSupportCalculator::with_clock(clock).render(&[
            ReleaseRecord::new("v4.6", "2025-09-09"),
            ReleaseRecord::new("v4.3", "2023-12-22"),
            ReleaseRecord::new("v4.2", "2023-09-29").with_eol("2025-03-29"),
        ])
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("✅", 4), "✅  ");
        assert_eq!(pad("v4.6", 2), "v4.6");
    }

    #[test]
    fn test_table_alignment_without_color() {
        let out = TableReporter::new()
            .no_color()
            .generate(&table(), &ReportConfig::default())
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Version Number  Release Date  End of Life Date  Supported"
        );
        assert_eq!(lines[2], "v4.6            2025-09-09    2027-03-03        ✅");
        assert_eq!(lines[4], "v4.2            2023-09-29    2025-03-29        ⛔️");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_table_color_marks_status() {
        let out = TableReporter::new()
            .generate(&table(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("\x1b[32mv4.6"));
        assert!(out.contains("\x1b[31mv4.2"));
    }

    #[test]
    fn test_summary_counts() {
        let out = SummaryReporter::new()
            .no_color()
            .generate(&table(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("Releases:  3 total, 2 supported, 1 end of life"));
        assert!(out.contains("Supported:  v4.6, v4.3"));
        assert!(out.contains("Next EOL:  v4.3 on 2025-06-14 (in 74 days)"));
        assert!(out.contains("Ending within 180 days:\n  v4.3 (2025-06-14)"));
    }
}
