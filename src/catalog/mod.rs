//! Release catalogs.
//!
//! A catalog is the ordered list of [`ReleaseRecord`]s a support table is
//! rendered from. The built-in catalog is the list published on the
//! documentation site; catalogs can also be loaded from YAML or JSON files:
//!
//! ```yaml
//! product: Solidus
//! releases:
//!   - version: v4.6
//!     release_date: 2025-09-09
//!   - version: v4.2
//!     release_date: 2023-09-29
//!     eol_date: 2025-03-29
//! ```
//!
//! A bare list of records is accepted as well, and the site's field names
//! (`number`, `releaseDate`, `eolDate`) are understood.

mod builtin;

pub use builtin::{builtin_releases, BUILTIN_PRODUCT};

use crate::error::{CatalogErrorKind, ErrorContext, ReleaseSupportError, Result};
use crate::model::ReleaseRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Catalog files larger than this are rejected before reading.
pub const MAX_CATALOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// On-disk encoding of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Guess the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Guess the format from content: JSON documents start with `{` or `[`.
    #[must_use]
    pub fn detect(content: &str) -> Self {
        match content.trim_start().chars().next() {
            Some('{' | '[') => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Either a full catalog document or a bare list of releases.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Document {
        #[serde(default)]
        product: Option<String>,
        releases: Vec<ReleaseRecord>,
    },
    List(Vec<ReleaseRecord>),
}

/// An ordered list of releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    pub releases: Vec<ReleaseRecord>,
}

impl ReleaseCatalog {
    #[must_use]
    pub const fn new(product: Option<String>, releases: Vec<ReleaseRecord>) -> Self {
        Self { product, releases }
    }

    /// The catalog published on the documentation site.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Some(BUILTIN_PRODUCT.to_string()), builtin_releases())
    }

    /// Load a catalog file, choosing the format by extension and falling
    /// back to content detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| ReleaseSupportError::io(path, e))?;
        if metadata.len() > MAX_CATALOG_FILE_SIZE {
            return Err(ReleaseSupportError::validation(format!(
                "catalog file is {} MB, exceeding the {} MB limit",
                metadata.len() / (1024 * 1024),
                MAX_CATALOG_FILE_SIZE / (1024 * 1024),
            )));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| ReleaseSupportError::io(path, e))?;
        let format =
            CatalogFormat::from_path(path).unwrap_or_else(|| CatalogFormat::detect(&content));

        let catalog = Self::parse_str(&content, format)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            releases = catalog.len(),
            "loaded release catalog"
        );
        Ok(catalog)
    }

    /// Parse catalog text in the given format.
    pub fn parse_str(content: &str, format: CatalogFormat) -> Result<Self> {
        let file: CatalogFile = match format {
            CatalogFormat::Json => serde_json::from_str(content)?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(match file {
            CatalogFile::Document { product, releases } => Self::new(product, releases),
            CatalogFile::List(releases) => Self::new(None, releases),
        })
    }

    /// Load from `path` when given, otherwise use the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                tracing::debug!("using built-in release catalog");
                Ok(Self::builtin())
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseRecord> {
        self.releases.iter()
    }

    /// Find the release a version string belongs to.
    ///
    /// Tries, in order: the exact label, the label with or without a
    /// leading `v`, then the `major.minor` prefix (so `4.6.2` finds `v4.6`).
    #[must_use]
    pub fn find_release(&self, version: &str) -> Option<&ReleaseRecord> {
        let wanted = version.trim();
        if let Some(record) = self.releases.iter().find(|r| r.version == wanted) {
            return Some(record);
        }

        let bare = strip_v(wanted);
        if let Some(record) = self.releases.iter().find(|r| strip_v(&r.version) == bare) {
            return Some(record);
        }

        let parts: Vec<&str> = bare.split('.').collect();
        if parts.len() > 2 {
            let major_minor = format!("{}.{}", parts[0], parts[1]);
            return self
                .releases
                .iter()
                .find(|r| strip_v(&r.version) == major_minor);
        }

        None
    }

    /// Collect every problem with this catalog.
    ///
    /// Empty catalogs and duplicate version labels are always reported.
    /// Unparseable dates are reported only when `strict` is set; the
    /// lenient renderer degrades them instead.
    #[must_use]
    pub fn validate(&self, strict: bool) -> Vec<CatalogErrorKind> {
        let mut problems = Vec::new();
        if self.is_empty() {
            problems.push(CatalogErrorKind::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for record in &self.releases {
            if !seen.insert(record.version.as_str()) {
                problems.push(CatalogErrorKind::DuplicateVersion(record.version.clone()));
            }
            if strict {
                for (field, date) in record.dates() {
                    if !date.is_valid() {
                        problems.push(CatalogErrorKind::InvalidDateFormat {
                            version: record.version.clone(),
                            field: field.to_string(),
                            value: date.to_string(),
                        });
                    }
                }
            }
        }
        problems
    }

    /// Fail with the first problem [`validate`](Self::validate) finds.
    pub fn ensure_valid(&self, strict: bool) -> Result<()> {
        match self.validate(strict).into_iter().next() {
            Some(problem) => Err(ReleaseSupportError::catalog("catalog validation", problem)),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a ReleaseCatalog {
    type Item = &'a ReleaseRecord;
    type IntoIter = std::slice::Iter<'a, ReleaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.releases.iter()
    }
}

fn strip_v(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}
