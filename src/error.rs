//! Unified error types for release-support.
//!
//! Catalog loading and validation, report rendering and input checks all
//! report through [`ReleaseSupportError`]. The lenient rendering path never
//! produces these errors for bad dates; only strict validation does.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for release-support operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReleaseSupportError {
    /// Errors while loading or validating a release catalog
    #[error("Release catalog error: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// A report could not be rendered
    #[error("Could not render report: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// Filesystem failure, with the path involved when known
    #[error("I/O error on {}: {message}", describe_path(.path.as_deref()))]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input rejected before any work was done
    #[error("Invalid input: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Invalid date format for {version} {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        version: String,
        field: String,
        value: String,
    },

    #[error("Duplicate version label: {0}")]
    DuplicateVersion(String),

    #[error("Catalog contains no releases")]
    EmptyCatalog,

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

/// Why a report failed
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("could not serialize JSON: {0}")]
    JsonSerializationError(String),

    #[error("could not format output: {0}")]
    UnsupportedFormat(String),
}

fn describe_path(path: Option<&std::path::Path>) -> String {
    path.map_or_else(|| "<unknown path>".to_string(), |p| p.display().to_string())
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for release-support operations
pub type Result<T> = std::result::Result<T, ReleaseSupportError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ReleaseSupportError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// The catalog error kind, if this is a catalog error
    #[must_use]
    pub const fn catalog_kind(&self) -> Option<&CatalogErrorKind> {
        match self {
            Self::Catalog { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ReleaseSupportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ReleaseSupportError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog(
            "JSON deserialization",
            CatalogErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for ReleaseSupportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::catalog(
            "YAML deserialization",
            CatalogErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The new context is prepended to whatever context the error already
/// carries, so nested calls read outermost-first.
///
/// ```ignore
/// use release_support::error::ErrorContext;
///
/// let catalog = ReleaseCatalog::from_path(&path)
///     .with_context(|| format!("loading catalog {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ReleaseSupportError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().prefixed(&context.into()))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| e.into().prefixed(&f().into()))
    }
}

impl ReleaseSupportError {
    /// Put `outer` in front of whatever context this error already has.
    fn prefixed(self, outer: &str) -> Self {
        let join = |inner: String| {
            if inner.is_empty() {
                outer.to_string()
            } else {
                format!("{outer}: {inner}")
            }
        };
        match self {
            Self::Catalog { context, source } => Self::Catalog {
                context: join(context),
                source,
            },
            Self::Report { context, source } => Self::Report {
                context: join(context),
                source,
            },
            Self::Io {
                path,
                message,
                source,
            } => Self::Io {
                path,
                message: join(message),
                source,
            },
            Self::Validation(msg) => Self::Validation(join(msg)),
        }
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| ReleaseSupportError::Validation(context.into()))
    }
}
