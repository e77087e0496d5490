//! Release records and their resolved support state.

use super::CalendarDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A published version as written in a release catalog.
///
/// Records are static input: they are never mutated, and the derived
/// end-of-life date and support flag live on [`ResolvedRelease`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Display label, e.g. "v4.6". Unique within a catalog.
    #[serde(alias = "number")]
    pub version: String,
    /// Day the version was published
    #[serde(alias = "releaseDate")]
    pub release_date: CalendarDate,
    /// Explicit end-of-life override; derived from `release_date` when
    /// absent or blank
    #[serde(
        default,
        alias = "eolDate",
        deserialize_with = "deserialize_eol",
        skip_serializing_if = "Option::is_none"
    )]
    pub eol_date: Option<CalendarDate>,
}

impl ReleaseRecord {
    /// Create a record whose end-of-life date will be derived.
    #[must_use]
    pub fn new(version: impl Into<String>, release_date: &str) -> Self {
        Self {
            version: version.into(),
            release_date: CalendarDate::parse(release_date),
            eol_date: None,
        }
    }

    /// Set an explicit end-of-life date. Blank text leaves it unset.
    #[must_use]
    pub fn with_eol(mut self, eol_date: &str) -> Self {
        self.eol_date = explicit_eol(eol_date);
        self
    }

    /// Iterate over every date written on this record, with its field name.
    pub fn dates(&self) -> impl Iterator<Item = (&'static str, &CalendarDate)> {
        std::iter::once(("release_date", &self.release_date))
            .chain(self.eol_date.iter().map(|d| ("eol_date", d)))
    }
}

fn explicit_eol(raw: &str) -> Option<CalendarDate> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(CalendarDate::parse(raw))
    }
}

fn deserialize_eol<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<CalendarDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(explicit_eol))
}

/// Binary support indicator shown in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportStatus {
    /// Current time is before the end-of-life date
    Supported,
    /// End-of-life date reached, or unknown
    EndOfLife,
}

impl SupportStatus {
    #[must_use]
    pub const fn from_supported(supported: bool) -> Self {
        if supported {
            Self::Supported
        } else {
            Self::EndOfLife
        }
    }

    #[must_use]
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Supported)
    }

    /// Get display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Supported => "Supported",
            Self::EndOfLife => "End of Life",
        }
    }

    /// Symbol used in the Supported column
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Supported => "\u{2705}",
            Self::EndOfLife => "\u{26d4}\u{fe0f}",
        }
    }
}

impl std::fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a resolved end-of-life date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EolSource {
    /// Written on the record
    Explicit,
    /// Computed from the release date
    Derived,
}

/// A release with its end-of-life date and support status resolved for one
/// render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRelease {
    pub version: String,
    pub release_date: CalendarDate,
    pub eol_date: CalendarDate,
    pub eol_source: EolSource,
    pub status: SupportStatus,
    /// Days from today to the end-of-life day (negative = past EOL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_eol: Option<i64>,
}

impl ResolvedRelease {
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.status.is_supported()
    }

    /// Supported, but reaching end of life within `within_days` days
    #[must_use]
    pub fn is_approaching_eol(&self, within_days: i64) -> bool {
        self.is_supported()
            && self
                .days_until_eol
                .is_some_and(|days| (0..=within_days).contains(&days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_site_field_names() {
        let record: ReleaseRecord = serde_json::from_str(
            r#"{"number": "v4.2", "releaseDate": "2023-09-29", "eolDate": "2025-03-29"}"#,
        )
        .unwrap();
        assert_eq!(record, ReleaseRecord::new("v4.2", "2023-09-29").with_eol("2025-03-29"));
    }

    #[test]
    fn test_blank_eol_falls_back_to_derived() {
        let record: ReleaseRecord = serde_json::from_str(
            r#"{"number": "v4.3", "releaseDate": "2023-12-22", "eolDate": ""}"#,
        )
        .unwrap();
        assert_eq!(record.eol_date, None);

        let record: ReleaseRecord =
            serde_yaml::from_str("version: v4.3\nrelease_date: 2023-12-22\neol_date: '  '\n")
                .unwrap();
        assert_eq!(record.eol_date, None);

        let record: ReleaseRecord =
            serde_yaml::from_str("version: v4.3\nrelease_date: 2023-12-22\neol_date: ~\n")
                .unwrap();
        assert_eq!(record.eol_date, None);

        assert_eq!(ReleaseRecord::new("v4.3", "2023-12-22").with_eol(" ").eol_date, None);
        assert!(ReleaseRecord::new("v4.3", "2023-12-22")
            .with_eol("soon")
            .eol_date
            .is_some());
    }

    #[test]
    fn test_record_without_eol_serializes_without_field() {
        let json = serde_json::to_string(&ReleaseRecord::new("v4.6", "2025-09-09")).unwrap();
        assert_eq!(json, r#"{"version":"v4.6","release_date":"2025-09-09"}"#);
    }

    #[test]
    fn test_dates_lists_present_fields() {
        let fields: Vec<_> = ReleaseRecord::new("v4.2", "2023-09-29")
            .with_eol("2025-03-29")
            .dates()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(fields, ["release_date", "eol_date"]);
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(SupportStatus::Supported.icon(), "✅");
        assert_eq!(SupportStatus::EndOfLife.icon(), "⛔️");
        assert_eq!(SupportStatus::from_supported(false), SupportStatus::EndOfLife);
    }

    #[test]
    fn test_approaching_eol_window() {
        let mut release = ResolvedRelease {
            version: "v4.5".to_string(),
            release_date: CalendarDate::parse("2025-02-20"),
            eol_date: CalendarDate::parse("2026-08-14"),
            eol_source: EolSource::Derived,
            status: SupportStatus::Supported,
            days_until_eol: Some(90),
        };
        assert!(release.is_approaching_eol(180));
        assert!(!release.is_approaching_eol(30));

        release.status = SupportStatus::EndOfLife;
        assert!(!release.is_approaching_eol(180));
    }
}
