//! Configuration for release-support.
//!
//! - Type-safe configuration structures with serde defaults
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use release_support::config::{AppConfig, ConfigOverrides, ConfigPreset};
//!
//! let mut config = AppConfig::from_preset(ConfigPreset::Site);
//!
//! config.merge(&ConfigOverrides {
//!     support_months: Some(24),
//!     strict_dates: Some(true),
//!     ..ConfigOverrides::default()
//! });
//!
//! use release_support::config::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.release-support.yaml` file in your project root or
//! `~/.config/release-support/`:
//!
//! ```yaml
//! catalog:
//!   path: data/releases.yaml
//! lifecycle:
//!   support_months: 18
//! output:
//!   format: html
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_APPROACHING_DAYS, MAX_APPROACHING_DAYS, MAX_SUPPORT_MONTHS,
};
pub use types::{
    AppConfig, CatalogConfig, CheckConfig, ConfigOverrides, LifecycleConfig, OutputConfig,
    RenderConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.release-support.yaml`.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
