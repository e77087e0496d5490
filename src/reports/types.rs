//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: table on a terminal, HTML otherwise
    #[default]
    Auto,
    /// HTML support table for the documentation site
    Html,
    /// Markdown pipe table
    Markdown,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
    /// Aligned table for the terminal (colored)
    Table,
    /// Brief summary output
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Table => write!(f, "table"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Emit a complete document instead of a fragment (HTML only)
    pub standalone: bool,
    /// Supported releases ending within this many days are called out
    pub approaching_days: i64,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            standalone: false,
            approaching_days: crate::config::DEFAULT_APPROACHING_DAYS,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Title to show, falling back to the product name
    #[must_use]
    pub fn display_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| match &self.metadata.product {
            Some(product) => format!("{product} Supported Versions"),
            None => "Supported Versions".to_string(),
        })
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Product the catalog describes
    pub product: Option<String>,
    /// Catalog file path, `None` for the built-in catalog
    pub catalog_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// EOL policy used for derived dates
    pub policy: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}
