//! **End-of-life dates and support status for published releases.**
//!
//! `release-support` takes an ordered list of releases, works out when each
//! one reaches end of life and whether it is still supported, and renders the
//! result as a support table. The HTML fragment is the table the documentation
//! site embeds; Markdown, JSON, CSV, a terminal table and a short summary are
//! offered as well.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`ReleaseRecord`] is the static input; [`ResolvedRelease`]
//!   rows in a [`SupportTable`] are the output of one render pass. Dates are
//!   [`CalendarDate`]s, which keep unparseable text instead of failing.
//! - **[`lifecycle`]**: [`compute_end_of_life`], [`is_supported`] and the
//!   [`VersionSupportCalculator`] that applies them to a whole catalog using an
//!   injectable [`Clock`].
//! - **[`catalog`]**: the built-in release list and YAML/JSON catalog files.
//! - **[`reports`]**: generators for every output format.
//! - **[`config`]**: the `.release-support.yaml` file, presets and validation.
//! - **[`pipeline`]** and **[`cli`]**: the orchestration behind the binary.
//!
//! ## Getting Started
//!
//! ```
//! use chrono::NaiveDate;
//! use release_support::{FixedClock, ReleaseCatalog, VersionSupportCalculator};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
//! let calculator = VersionSupportCalculator::with_clock(FixedClock::at_date(today));
//! let table = calculator.render(&ReleaseCatalog::builtin().releases);
//!
//! let v43 = table.find("v4.3").unwrap();
//! assert_eq!(v43.eol_date.to_string(), "2025-06-14");
//! assert!(v43.is_supported());
//! assert!(!table.find("v4.2").unwrap().is_supported());
//! ```
//!
//! ## Rendering a Report
//!
//! ```
//! use release_support::reports::{create_reporter, ReportConfig, ReportFormat};
//! use release_support::{ReleaseCatalog, VersionSupportCalculator};
//!
//! let table = VersionSupportCalculator::new().render(&ReleaseCatalog::builtin().releases);
//! let html = create_reporter(ReportFormat::Html)
//!     .generate(&table, &ReportConfig::default())
//!     .unwrap();
//! assert!(html.contains("<th>End of Life Date</th>"));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `release-support` binary
//! wraps it with `render`, `check` and `validate` subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use catalog::{CatalogFormat, ReleaseCatalog};
pub use config::{AppConfig, ConfigError, ConfigOverrides, ConfigPreset, Validatable};
pub use error::{
    CatalogErrorKind, ErrorContext, OptionContext, ReleaseSupportError, ReportErrorKind, Result,
};
pub use lifecycle::{
    compute_end_of_life, is_supported, Clock, EolPolicy, FixedClock, SupportWindow, SystemClock,
    VersionSupportCalculator,
};
pub use model::{
    CalendarDate, EolSource, ReleaseRecord, ResolvedRelease, SupportStatus, SupportTable,
};
pub use reports::{ReportFormat, ReportGenerator};
