//! Catalog and configuration file tests.

use release_support::config::{load_config_file, AppConfig, Validatable};
use release_support::{
    CatalogErrorKind, CatalogFormat, EolPolicy, ReleaseCatalog, ReleaseSupportError,
};
use std::path::Path;
use tempfile::TempDir;

const SITE_JSON: &str = r#"{
  "product": "Solidus",
  "releases": [
    { "number": "v4.4", "releaseDate": "2024-11-12" },
    { "number": "v4.3", "releaseDate": "2023-12-22" },
    { "number": "v4.2", "releaseDate": "2023-09-29", "eolDate": "2025-03-29" }
  ]
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_site_json_catalog() {
    let tmp = TempDir::new().unwrap();
    let path = write(&tmp, "releases.json", SITE_JSON);

    let catalog = ReleaseCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.product.as_deref(), Some("Solidus"));
    let versions: Vec<&str> = catalog.iter().map(|r| r.version.as_str()).collect();
    assert_eq!(versions, ["v4.4", "v4.3", "v4.2"]);
    assert!(catalog.releases[2].eol_date.is_some());
}

#[test]
fn extensionless_catalog_is_detected_by_content() {
    let tmp = TempDir::new().unwrap();
    let json = write(&tmp, "releases", SITE_JSON);
    assert_eq!(ReleaseCatalog::from_path(&json).unwrap().len(), 3);

    let yaml = write(
        &tmp,
        "releases.txt",
        "- version: v1.0\n  release_date: 2024-01-01\n",
    );
    assert_eq!(ReleaseCatalog::from_path(&yaml).unwrap().len(), 1);
}

#[test]
fn yaml_and_json_catalogs_agree() {
    let yaml = "product: Solidus\nreleases:\n  - version: v4.4\n    release_date: 2024-11-12\n  - version: v4.3\n    release_date: 2023-12-22\n  - version: v4.2\n    release_date: 2023-09-29\n    eol_date: 2025-03-29\n";
    let from_yaml = ReleaseCatalog::parse_str(yaml, CatalogFormat::Yaml).unwrap();
    let from_json = ReleaseCatalog::parse_str(SITE_JSON, CatalogFormat::Json).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn missing_catalog_reports_path() {
    let err = ReleaseCatalog::from_path(Path::new("/nonexistent/releases.yaml")).unwrap_err();
    assert!(matches!(err, ReleaseSupportError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/releases.yaml"));
}

#[test]
fn malformed_json_catalog_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = write(&tmp, "releases.json", "{\"releases\": [");

    let err = ReleaseCatalog::from_path(&path).unwrap_err();
    assert!(matches!(
        err.catalog_kind(),
        Some(CatalogErrorKind::InvalidJson(_))
    ));
    assert!(err.to_string().contains("releases.json"), "{err}");
}

#[test]
fn strict_validation_lists_every_bad_date() {
    let yaml = "releases:\n  - version: v2\n    release_date: 2024-02-30\n  - version: v1\n    release_date: 2023-01-01\n    eol_date: TBD\n";
    let catalog = ReleaseCatalog::parse_str(yaml, CatalogFormat::Yaml).unwrap();

    assert!(catalog.validate(false).is_empty());
    let problems = catalog.validate(true);
    assert_eq!(problems.len(), 2);
    assert_eq!(
        problems[1].to_string(),
        "Invalid date format for v1 eol_date: 'TBD' (expected YYYY-MM-DD)"
    );
}

#[test]
fn config_file_drives_catalog_and_lifecycle() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "releases.json", SITE_JSON);
    let config_path = write(
        &tmp,
        ".release-support.yaml",
        "catalog:\n  path: releases.json\nlifecycle:\n  policy: calendar-months\n  support_months: 12\n",
    );

    let config = load_config_file(&config_path).unwrap();
    assert!(config.is_valid());
    assert_eq!(config.lifecycle.policy, EolPolicy::CalendarMonths);

    let catalog_path = config.catalog.path.clone().unwrap();
    let catalog = ReleaseCatalog::from_path(&catalog_path).unwrap();
    assert_eq!(catalog.len(), 3);

    let window = config.support_window();
    let (eol, _) = window.resolve(&catalog.releases[0]);
    assert_eq!(eol.to_string(), "2025-11-12");
}

#[test]
fn invalid_config_values_are_reported() {
    let config: AppConfig =
        serde_yaml::from_str("lifecycle:\n  support_months: 0\n  approaching_days: 9999\n")
            .unwrap();
    let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        ["lifecycle.support_months", "lifecycle.approaching_days"]
    );
}
