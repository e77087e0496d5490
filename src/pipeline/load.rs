//! Catalog loading and resolution.

use crate::catalog::ReleaseCatalog;
use crate::config::{CatalogConfig, LifecycleConfig};
use crate::lifecycle::{Clock, FixedClock, SupportWindow, SystemClock, VersionSupportCalculator};
use crate::model::SupportTable;
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Load the configured catalog and check it.
///
/// Duplicate labels and empty catalogs are logged as warnings; with
/// `strict_dates` every problem, unparseable dates included, is fatal.
pub fn load_catalog(config: &CatalogConfig) -> Result<ReleaseCatalog> {
    let catalog = ReleaseCatalog::load_or_builtin(config.path.as_deref()).with_context(|| {
        match &config.path {
            Some(path) => format!("Failed to load catalog {}", path.display()),
            None => "Failed to load built-in catalog".to_string(),
        }
    })?;

    if config.strict_dates {
        catalog.ensure_valid(true).with_context(|| {
            let problems = catalog.validate(true);
            let listed: Vec<String> = problems.iter().map(|p| format!("  - {p}")).collect();
            format!(
                "Catalog failed strict validation ({} problem(s)):\n{}",
                problems.len(),
                listed.join("\n")
            )
        })?;
    } else {
        for problem in catalog.validate(false) {
            tracing::warn!("{problem}");
        }
    }

    Ok(catalog)
}

/// The clock a command runs against: frozen at `as_of` midnight UTC, or
/// the wall clock.
#[must_use]
pub fn clock_for(as_of: Option<NaiveDate>) -> Box<dyn Clock> {
    match as_of {
        Some(date) => {
            tracing::debug!("Evaluating support status as of {date}");
            Box::new(FixedClock::at_date(date))
        }
        None => Box::new(SystemClock),
    }
}

/// Resolve every release of `catalog` with the configured support window.
#[must_use]
pub fn resolve_table(
    catalog: &ReleaseCatalog,
    lifecycle: &LifecycleConfig,
    as_of: Option<NaiveDate>,
) -> SupportTable {
    let calculator = VersionSupportCalculator::with_clock(clock_for(as_of)).window(
        SupportWindow::new(lifecycle.policy, lifecycle.support_months),
    );
    let table = calculator.render(&catalog.releases);
    tracing::debug!(
        rows = table.len(),
        supported = table.supported_count(),
        "Resolved support table"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const BAD_DATES: &str = "releases:\n  - version: v1.0\n    release_date: someday\n";

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = load_catalog(&CatalogConfig::default()).unwrap();
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn test_lenient_load_keeps_bad_dates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("releases.yaml");
        std::fs::write(&path, BAD_DATES).unwrap();

        let config = CatalogConfig {
            path: Some(path),
            strict_dates: false,
        };
        let catalog = load_catalog(&config).unwrap();
        assert!(!catalog.releases[0].release_date.is_valid());
    }

    #[test]
    fn test_strict_load_rejects_bad_dates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("releases.yaml");
        std::fs::write(&path, BAD_DATES).unwrap();

        let config = CatalogConfig {
            path: Some(path),
            strict_dates: true,
        };
        let err = load_catalog(&config).unwrap_err();
        assert!(err.to_string().contains("strict validation"), "{err}");
        assert!(err.to_string().contains("'someday'"), "{err}");
    }

    #[test]
    fn test_directory_catalog_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let config = CatalogConfig {
            path: Some(tmp.path().to_path_buf()),
            strict_dates: false,
        };
        let err = load_catalog(&config).unwrap_err();
        assert!(err.to_string().contains(&tmp.path().display().to_string()), "{err}");
    }

    #[test]
    fn test_missing_catalog_has_context() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("/nonexistent/releases.yaml")),
            strict_dates: false,
        };
        let err = load_catalog(&config).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/releases.yaml"));
    }

    #[test]
    fn test_resolve_table_as_of() {
        let catalog = ReleaseCatalog::builtin();
        let as_of = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let table = resolve_table(&catalog, &LifecycleConfig::default(), Some(as_of));

        assert_eq!(table.generated_at.date_naive(), as_of);
        let v43 = table.find("v4.3").unwrap();
        assert_eq!(v43.eol_date.to_string(), "2025-06-14");
        assert_eq!(v43.days_until_eol, Some(74));
        assert!(!table.find("v4.2").unwrap().is_supported());
    }
}
