//! Configuration validation.

use super::defaults::{MAX_APPROACHING_DAYS, MAX_SUPPORT_MONTHS};
use super::types::{AppConfig, CatalogConfig, LifecycleConfig, OutputConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.catalog.validate());
        errors.extend(self.lifecycle.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        // Existence is checked when the catalog is loaded.
        if self.path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            errors.push(ConfigError::new("catalog.path", "Path must not be empty"));
        }
        errors
    }
}

impl Validatable for LifecycleConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(1..=MAX_SUPPORT_MONTHS).contains(&self.support_months) {
            errors.push(ConfigError::new(
                "lifecycle.support_months",
                format!(
                    "Support window must be between 1 and {MAX_SUPPORT_MONTHS} months, got {}",
                    self.support_months
                ),
            ));
        }
        if !(0..=MAX_APPROACHING_DAYS).contains(&self.approaching_days) {
            errors.push(ConfigError::new(
                "lifecycle.approaching_days",
                format!(
                    "Approaching window must be between 0 and {MAX_APPROACHING_DAYS} days, got {}",
                    self.approaching_days
                ),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.standalone && !matches!(self.format, ReportFormat::Html | ReportFormat::Auto) {
            errors.push(ConfigError::new(
                "output.standalone",
                format!("Standalone documents are only produced for HTML, not {}", self.format),
            ));
        }
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                errors.push(ConfigError::new("output.title", "Title must not be blank"));
            }
        }
        errors
    }
}
