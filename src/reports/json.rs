//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ResolvedRelease, SupportTable};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: JsonSummary<'a>,
    releases: &'a [ResolvedRelease],
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo<'a>,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy: Option<&'a str>,
}

#[derive(Serialize)]
struct ToolInfo<'a> {
    name: &'static str,
    version: &'a str,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    total: usize,
    supported: usize,
    end_of_life: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_end_of_life: Option<&'a str>,
    approaching_end_of_life: Vec<&'a str>,
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, table: &SupportTable, config: &ReportConfig) -> Result<String, ReportError> {
        let metadata = &config.metadata;
        let report = JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "release-support",
                    version: &metadata.tool_version,
                },
                generated_at: table.generated_at.to_rfc3339(),
                product: metadata.product.as_deref(),
                catalog_path: metadata.catalog_path.as_deref(),
                policy: metadata.policy.as_deref(),
            },
            summary: JsonSummary {
                total: table.len(),
                supported: table.supported_count(),
                end_of_life: table.end_of_life_count(),
                next_end_of_life: table.next_end_of_life().map(|r| r.version.as_str()),
                approaching_end_of_life: table
                    .approaching_eol(config.approaching_days)
                    .into_iter()
                    .map(|r| r.version.as_str())
                    .collect(),
            },
            releases: &table.rows,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;

        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
