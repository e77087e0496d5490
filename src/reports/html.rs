//! HTML report generator.
//!
//! The fragment form is the `supported_versions` block the documentation
//! site embeds in its release policy page. `standalone` wraps it in a full
//! document with inline styles.

use super::escape::{escape_html, escape_html_attr};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, COLUMN_HEADERS};
use crate::model::{SupportStatus, SupportTable};
use std::fmt::Write;

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn get_styles(&self) -> &'static str {
        r#"
    <style>
        :root {
            --text-color: #1c1e21;
            --accent-color: #3c76f0;
            --border-color: #dadde1;
            --supported-bg: #e8f5e9;
            --eol-bg: #fdecea;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            color: var(--text-color);
            margin: 0;
            padding: 20px;
            line-height: 1.6;
        }

        h1 {
            color: var(--accent-color);
        }

        .supported_versions table {
            border-collapse: collapse;
            margin-bottom: 20px;
        }

        .supported_versions th,
        .supported_versions td {
            padding: 8px 14px;
            text-align: left;
            border: 1px solid var(--border-color);
        }

        .supported_versions tr.supported { background-color: var(--supported-bg); }
        .supported_versions tr.end_of_life { background-color: var(--eol-bg); }

        .generated {
            font-size: 0.85em;
            color: #606770;
        }
    </style>
"#
    }

    /// Render the `supported_versions` block.
    fn write_fragment(&self, html: &mut String, table: &SupportTable) -> std::fmt::Result {
        writeln!(html, "<div class=\"supported_versions\">")?;
        writeln!(html, "  <table>")?;
        writeln!(html, "    <thead>")?;
        writeln!(html, "      <tr>")?;
        for header in COLUMN_HEADERS {
            writeln!(html, "        <th>{header}</th>")?;
        }
        writeln!(html, "      </tr>")?;
        writeln!(html, "    </thead>")?;
        writeln!(html, "    <tbody>")?;
        for row in table {
            writeln!(
                html,
                "      <tr class=\"{}\" data-version=\"{}\">",
                row_class(row.status),
                escape_html_attr(&row.version)
            )?;
            writeln!(html, "        <td>{}</td>", escape_html(&row.version))?;
            writeln!(html, "        <td>{}</td>", escape_html(&row.release_date.to_string()))?;
            writeln!(html, "        <td>{}</td>", escape_html(&row.eol_date.to_string()))?;
            writeln!(html, "        <td>{}</td>", row.status.icon())?;
            writeln!(html, "      </tr>")?;
        }
        writeln!(html, "    </tbody>")?;
        writeln!(html, "  </table>")?;
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_document(
        &self,
        html: &mut String,
        table: &SupportTable,
        config: &ReportConfig,
    ) -> std::fmt::Result {
        let title = escape_html(&config.display_title());
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(html, "    <title>{title}</title>")?;
        html.push_str(self.get_styles());
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<h1>{title}</h1>")?;
        self.write_fragment(html, table)?;
        writeln!(
            html,
            "<p class=\"generated\">Support status as of {} (release-support {})</p>",
            table.generated_at.format("%Y-%m-%d %H:%M UTC"),
            escape_html(&config.metadata.tool_version)
        )?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;
        Ok(())
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

const fn row_class(status: SupportStatus) -> &'static str {
    match status {
        SupportStatus::Supported => "supported",
        SupportStatus::EndOfLife => "end_of_life",
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, table: &SupportTable, config: &ReportConfig) -> Result<String, ReportError> {
        let mut html = String::new();
        if config.standalone {
            self.write_document(&mut html, table, config)?;
        } else {
            self.write_fragment(&mut html, table)?;
        }
        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
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
            ReleaseRecord::new("v4.3", "2023-12-22"),
            ReleaseRecord::new("v4.2", "2023-09-29").with_eol("2025-03-29"),
        ])
    }

    #[test]
    fn test_fragment_rows_in_order() {
        let html = HtmlReporter::new()
            .generate(&table(), &ReportConfig::default())
            .unwrap();
        assert!(html.starts_with("<div class=\"supported_versions\">"));
        let v43 = html.find("<td>v4.3</td>").unwrap();
        let v42 = html.find("<td>v4.2</td>").unwrap();
        assert!(v43 < v42);
        assert!(html.contains("<td>2025-06-14</td>"));
        assert!(html.contains("<td>2025-03-29</td>"));
        assert!(html.contains("<td>✅</td>"));
        assert!(html.contains("<td>⛔️</td>"));
        assert!(!html.contains("<html"));
    }

    #[test]
    fn test_fragment_escapes_labels() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        let table = VersionSupportCalculator::with_clock(clock)
            .render(&[ReleaseRecord::new("<b>v1</b>", "2025-01-01")]);
        let html = HtmlReporter::new()
            .generate(&table, &ReportConfig::default())
            .unwrap();
        assert!(html.contains("<td>&lt;b&gt;v1&lt;/b&gt;</td>"));
        assert!(!html.contains("<b>v1</b>"));
    }

    #[test]
    fn test_standalone_document() {
        let config = ReportConfig {
            standalone: true,
            ..ReportConfig::default()
        };
        let html = HtmlReporter::new().generate(&table(), &config).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("Support status as of 2025-04-01 00:00 UTC"));
    }
}
