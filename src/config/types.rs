//! Configuration types for release-support operations.

use crate::lifecycle::{EolPolicy, SupportWindow, DEFAULT_SUPPORT_MONTHS};
use crate::reports::{ReportConfig, ReportFormat, ReportMetadata};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::DEFAULT_APPROACHING_DAYS;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration, loaded from a config file and
/// overridden by CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where releases come from
    pub catalog: CatalogConfig,
    /// How end-of-life dates are derived
    pub lifecycle: LifecycleConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// The support window described by the lifecycle settings
    #[must_use]
    pub const fn support_window(&self) -> SupportWindow {
        SupportWindow::new(self.lifecycle.policy, self.lifecycle.support_months)
    }

    /// Report settings for a catalog of the given product
    #[must_use]
    pub fn report_config(&self, product: Option<&str>) -> ReportConfig {
        ReportConfig {
            title: self.output.title.clone(),
            standalone: self.output.standalone,
            approaching_days: self.lifecycle.approaching_days,
            metadata: ReportMetadata {
                product: product.map(str::to_string),
                catalog_path: self
                    .catalog
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string()),
                policy: Some(format!(
                    "{} months ({})",
                    self.lifecycle.support_months, self.lifecycle.policy
                )),
                ..ReportMetadata::new()
            },
        }
    }
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Values given on the command line, layered over the loaded config by
/// [`AppConfig::merge`]. `None` leaves the loaded value in place, even when
/// the given value equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub strict_dates: Option<bool>,
    pub policy: Option<EolPolicy>,
    pub support_months: Option<u32>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: Option<bool>,
    pub standalone: Option<bool>,
    pub title: Option<String>,
}

// ============================================================================
// Sections
// ============================================================================

/// Release catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file (YAML or JSON); the built-in catalog when omitted
    pub path: Option<PathBuf>,
    /// Reject catalogs containing dates that do not parse
    pub strict_dates: bool,
}

/// End-of-life derivation and reporting thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LifecycleConfig {
    /// How months are added to a release date
    pub policy: EolPolicy,
    /// Support window for releases without an explicit EOL date
    #[schemars(range(min = 1, max = 120))]
    pub support_months: u32,
    /// Supported releases ending within this many days are called out
    #[schemars(range(min = 0, max = 3650))]
    pub approaching_days: i64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            policy: EolPolicy::default(),
            support_months: DEFAULT_SUPPORT_MONTHS,
            approaching_days: DEFAULT_APPROACHING_DAYS,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Emit a complete HTML document instead of a fragment
    pub standalone: bool,
    /// Report title; defaults to "<product> Supported Versions"
    pub title: Option<String>,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for the `render` command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub app: AppConfig,
    /// Evaluate support status at this day instead of now
    pub as_of: Option<NaiveDate>,
    pub quiet: bool,
}

/// Configuration for the `check` command
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub app: AppConfig,
    /// Version to look up (`v4.6`, `4.6`, `4.6.2`, ...)
    pub version: String,
    pub as_of: Option<NaiveDate>,
}
