//! Configuration file loading and discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".release-support.yaml",
    ".release-support.yml",
    "release-support.yaml",
    "release-support.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/release-support/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist, searching defaults", path.display());
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = cwd
        .as_deref()
        .and_then(find_git_root)
        .and_then(|root| find_config_in_dir(&root))
    {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("release-support")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Find the git repository root by walking up from `start`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Why a config file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
///
/// Relative catalog paths are resolved against the config file's directory.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut config: AppConfig = if content.trim().is_empty() {
        AppConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    if let (Some(catalog), Some(base)) = (config.catalog.path.as_mut(), path.parent()) {
        if catalog.is_relative() {
            *catalog = base.join(&*catalog);
        }
    }
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer command-line values over this config.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(path) = &overrides.catalog_path {
            self.catalog.path = Some(path.clone());
        }
        if let Some(strict) = overrides.strict_dates {
            self.catalog.strict_dates = strict;
        }

        if let Some(policy) = overrides.policy {
            self.lifecycle.policy = policy;
        }
        if let Some(months) = overrides.support_months {
            self.lifecycle.support_months = months;
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(file) = &overrides.output_file {
            self.output.file = Some(file.clone());
        }
        if let Some(no_color) = overrides.no_color {
            self.output.no_color = no_color;
        }
        if let Some(standalone) = overrides.standalone {
            self.output.standalone = standalone;
        }
        if let Some(title) = &overrides.title {
            self.output.title = Some(title.clone());
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# release-support configuration file
# ====================================
#
# Place it at:
#   - .release-support.yaml in your project root
#   - ~/.config/release-support/release-support.yaml for global config
#
# CLI flags take precedence over values in this file.

# Where releases come from
catalog:
  # YAML or JSON catalog; relative paths resolve against this file.
  # Omit to use the built-in catalog.
  # path: releases.yaml

  # Fail instead of rendering 'Invalid Date' for unparseable dates
  strict_dates: false

# How end-of-life dates are derived for releases without an explicit one
lifecycle:
  # thirty-day-months: each month is exactly 30 days (18 months = 540 days)
  # calendar-months: true calendar months
  policy: thirty-day-months

  # Support window length (1-120)
  support_months: 18

  # Supported releases ending within this many days are called out
  approaching_days: 180

# Output
output:
  # auto, html, markdown, json, csv, table, summary
  format: auto

  # Write to a file instead of stdout
  # file: supported-versions.html

  # Disable ANSI colors
  no_color: false

  # Emit a full HTML document instead of the site fragment
  standalone: false

  # title: Solidus Supported Versions
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, LifecycleConfig, OutputConfig};
    use crate::lifecycle::EolPolicy;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".release-support.yaml");
        std::fs::write(&config_path, "lifecycle:\n  support_months: 12\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_prefers_hidden_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("release-support.yml"), "").unwrap();
        let hidden = tmp.path().join(".release-support.yml");
        std::fs::write(&hidden, "").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(hidden));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_find_git_root() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join(".git")).unwrap();
        let nested = tmp.path().join("docs").join("data");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_git_root(&nested), Some(tmp.path().to_path_buf()));
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
catalog:
  path: data/releases.yaml
  strict_dates: true
lifecycle:
  policy: calendar-months
  support_months: 24
output:
  format: markdown
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(
            config.catalog.path,
            Some(tmp.path().join("data/releases.yaml"))
        );
        assert!(config.catalog.strict_dates);
        assert_eq!(config.lifecycle.policy, EolPolicy::CalendarMonths);
        assert_eq!(config.lifecycle.support_months, 24);
        assert_eq!(config.lifecycle.approaching_days, 180);
        assert_eq!(config.output.format, ReportFormat::Markdown);
    }

    #[test]
    fn test_load_empty_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("release-support.yaml");
        std::fs::write(&config_path, "").unwrap();

        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "lifecycle:\n  policy: fortnightly\n").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_falls_back_on_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "lifecycle: [").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(loaded_from, None);
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig {
            catalog: CatalogConfig {
                path: Some(PathBuf::from("releases.yaml")),
                strict_dates: false,
            },
            lifecycle: LifecycleConfig {
                support_months: 24,
                ..LifecycleConfig::default()
            },
            ..AppConfig::default()
        };
        let overrides = ConfigOverrides {
            strict_dates: Some(true),
            policy: Some(EolPolicy::CalendarMonths),
            format: Some(ReportFormat::Json),
            ..ConfigOverrides::default()
        };

        base.merge(&overrides);

        assert_eq!(base.catalog.path, Some(PathBuf::from("releases.yaml")));
        assert!(base.catalog.strict_dates);
        assert_eq!(base.lifecycle.policy, EolPolicy::CalendarMonths);
        assert_eq!(base.lifecycle.support_months, 24);
        assert_eq!(base.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_merge_applies_values_equal_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".release-support.yaml");
        std::fs::write(
            &config_path,
            "lifecycle:\n  policy: calendar-months\n  support_months: 24\noutput:\n  format: html\n  standalone: true\n",
        )
        .unwrap();
        let mut config = load_config_file(&config_path).unwrap();

        config.merge(&ConfigOverrides {
            policy: Some(EolPolicy::ThirtyDayMonths),
            support_months: Some(18),
            format: Some(ReportFormat::Auto),
            standalone: Some(false),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.lifecycle.policy, EolPolicy::ThirtyDayMonths);
        assert_eq!(config.lifecycle.support_months, 18);
        assert_eq!(config.output.format, ReportFormat::Auto);
        assert!(!config.output.standalone);
    }

    #[test]
    fn test_merge_without_overrides_keeps_file_values() {
        let loaded = AppConfig {
            output: OutputConfig {
                format: ReportFormat::Markdown,
                no_color: true,
                title: Some("Releases".to_string()),
                ..OutputConfig::default()
            },
            ..AppConfig::default()
        };
        let mut merged = loaded.clone();
        merged.merge(&ConfigOverrides::default());
        assert_eq!(merged, loaded);
    }

    #[test]
    fn test_full_example_config_parses() {
        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "output:\n  format: html\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
