//! Default values and named presets.

use super::types::{AppConfig, CatalogConfig, LifecycleConfig, OutputConfig};
use crate::reports::ReportFormat;

/// Supported releases ending within this many days are reported as
/// approaching end of life.
pub const DEFAULT_APPROACHING_DAYS: i64 = 180;

/// Upper bound for `lifecycle.support_months`.
pub const MAX_SUPPORT_MONTHS: u32 = 120;

/// Upper bound for `lifecycle.approaching_days`.
pub const MAX_APPROACHING_DAYS: i64 = 3650;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Terminal table on the built-in rules
    Default,
    /// HTML fragment for the documentation site build
    Site,
    /// Machine-readable output with strict date validation
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Site => "site",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "site" | "docs" | "html" => Some(Self::Site),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Auto-detected output with lenient date handling",
            Self::Site => "HTML support table fragment for the documentation site",
            Self::CiCd => "JSON output, no colors, strict date validation",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Site, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Site => Self::site_preset(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    /// Documentation site preset: HTML fragment, parity date arithmetic.
    #[must_use]
    pub fn site_preset() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            lifecycle: LifecycleConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Html,
                ..OutputConfig::default()
            },
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Catalogs with bad dates fail instead of rendering "Invalid Date"
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            catalog: CatalogConfig {
                path: None,
                strict_dates: true,
            },
            lifecycle: LifecycleConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("DOCS"), Some(ConfigPreset::Site));
        assert_eq!(ConfigPreset::from_name("nope"), None);
    }

    #[test]
    fn test_ci_cd_preset_is_strict() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert!(config.catalog.strict_dates);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
    }

    #[test]
    fn test_site_preset_renders_html() {
        let config = AppConfig::from_preset(ConfigPreset::Site);
        assert_eq!(config.output.format, ReportFormat::Html);
        assert!(!config.output.standalone);
    }
}
