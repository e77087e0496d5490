//! End-of-life arithmetic and the support check.
//!
//! The default window is "18 months" measured as 18 blocks of exactly 30
//! days (540 days). This drifts from calendar months and is kept because
//! published support tables were computed that way. The calendar-month
//! policy is available for catalogs that want true month arithmetic.

use crate::model::{CalendarDate, EolSource, ReleaseRecord};
use chrono::{DateTime, Duration, Months, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Length of one approximate month, in milliseconds.
pub const APPROX_MONTH_MILLIS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Default support window, in months.
pub const DEFAULT_SUPPORT_MONTHS: u32 = 18;

/// How a support window measured in months is added to a release date.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum EolPolicy {
    /// Each month is exactly 30 days
    #[default]
    ThirtyDayMonths,
    /// True calendar months, clamped to the last day of the month
    CalendarMonths,
}

impl std::fmt::Display for EolPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThirtyDayMonths => write!(f, "thirty-day-months"),
            Self::CalendarMonths => write!(f, "calendar-months"),
        }
    }
}

/// The support window granted to a release that has no explicit EOL date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportWindow {
    pub policy: EolPolicy,
    pub months: u32,
}

impl Default for SupportWindow {
    fn default() -> Self {
        Self {
            policy: EolPolicy::default(),
            months: DEFAULT_SUPPORT_MONTHS,
        }
    }
}

impl SupportWindow {
    #[must_use]
    pub const fn new(policy: EolPolicy, months: u32) -> Self {
        Self { policy, months }
    }

    /// End-of-life date for a release: the explicit date when given,
    /// otherwise the release date plus this window.
    #[must_use]
    pub fn end_of_life(
        &self,
        release_date: &CalendarDate,
        explicit_eol: Option<&CalendarDate>,
    ) -> CalendarDate {
        match explicit_eol {
            Some(eol) => eol.clone(),
            None => self.derive(release_date),
        }
    }

    /// Resolve a record's end-of-life date and where it came from.
    #[must_use]
    pub fn resolve(&self, record: &ReleaseRecord) -> (CalendarDate, EolSource) {
        let source = if record.eol_date.is_some() {
            EolSource::Explicit
        } else {
            EolSource::Derived
        };
        (
            self.end_of_life(&record.release_date, record.eol_date.as_ref()),
            source,
        )
    }

    fn derive(&self, release_date: &CalendarDate) -> CalendarDate {
        let derived = match self.policy {
            EolPolicy::ThirtyDayMonths => release_date.midnight_utc().and_then(|start| {
                let millis = i64::from(self.months).checked_mul(APPROX_MONTH_MILLIS)?;
                start.checked_add_signed(Duration::milliseconds(millis))
            }),
            EolPolicy::CalendarMonths => release_date
                .midnight_utc()
                .and_then(|start| start.checked_add_months(Months::new(self.months))),
        };
        derived.map_or_else(CalendarDate::invalid, |eol| {
            CalendarDate::Valid(eol.date_naive())
        })
    }
}

/// End-of-life date under the default 18 × 30-day window.
///
/// Returns `explicit_eol` unchanged when present. Deriving from an invalid
/// release date yields an invalid date rather than an error.
#[must_use]
pub fn compute_end_of_life(
    release_date: &CalendarDate,
    explicit_eol: Option<&CalendarDate>,
) -> CalendarDate {
    SupportWindow::default().end_of_life(release_date, explicit_eol)
}

/// Whether `now` is strictly before midnight UTC of `eol_date`.
///
/// An invalid date is never supported.
#[must_use]
pub fn is_supported(eol_date: &CalendarDate, now: DateTime<Utc>) -> bool {
    eol_date.midnight_utc().is_some_and(|cutoff| now < cutoff)
}

/// Whole days from `now`'s UTC day to `eol_date` (negative once past).
#[must_use]
pub fn days_until_eol(eol_date: &CalendarDate, now: DateTime<Utc>) -> Option<i64> {
    eol_date
        .as_naive()
        .map(|eol| (eol - now.date_naive()).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(raw: &str) -> CalendarDate {
        CalendarDate::parse(raw)
    }

    #[test]
    fn test_derived_eol_is_540_days() {
        assert_eq!(compute_end_of_life(&date("2023-12-22"), None), date("2025-06-14"));
        assert_eq!(compute_end_of_life(&date("2025-09-09"), None), date("2027-03-03"));
    }

    #[test]
    fn test_explicit_eol_wins() {
        let explicit = date("2025-03-29");
        assert_eq!(
            compute_end_of_life(&date("2023-09-29"), Some(&explicit)),
            explicit
        );
    }

    #[test]
    fn test_explicit_invalid_eol_is_returned_verbatim() {
        let explicit = date("end of 2025");
        let eol = compute_end_of_life(&date("2023-09-29"), Some(&explicit));
        assert_eq!(eol.to_string(), "end of 2025");
    }

    #[test]
    fn test_invalid_release_date_derives_invalid_eol() {
        let eol = compute_end_of_life(&date("not a date"), None);
        assert_eq!(eol, CalendarDate::invalid());
        assert_eq!(eol.to_string(), "Invalid Date");
    }

    #[test]
    fn test_calendar_month_policy() {
        let window = SupportWindow::new(EolPolicy::CalendarMonths, 18);
        assert_eq!(window.end_of_life(&date("2023-12-22"), None), date("2025-06-22"));
        // Clamped to the end of a shorter month
        assert_eq!(window.end_of_life(&date("2023-08-31"), None), date("2025-02-28"));
    }

    #[test]
    fn test_custom_window_length() {
        let window = SupportWindow::new(EolPolicy::ThirtyDayMonths, 12);
        assert_eq!(window.end_of_life(&date("2024-01-01"), None), date("2024-12-26"));
    }

    #[test]
    fn test_window_beyond_date_range_is_invalid() {
        let release = date("2020-01-01");
        for months in [u32::MAX, 3_600_000_000, 1_000_000_000] {
            let window = SupportWindow::new(EolPolicy::ThirtyDayMonths, months);
            assert_eq!(window.end_of_life(&release, None), CalendarDate::invalid(), "{months}");
        }
        let window = SupportWindow::new(EolPolicy::CalendarMonths, u32::MAX);
        assert_eq!(window.end_of_life(&release, None), CalendarDate::invalid());
    }

    #[test]
    fn test_resolve_reports_source() {
        let window = SupportWindow::default();
        let derived = ReleaseRecord::new("v4.3", "2023-12-22");
        let explicit = ReleaseRecord::new("v4.2", "2023-09-29").with_eol("2025-03-29");
        assert_eq!(window.resolve(&derived).1, EolSource::Derived);
        assert_eq!(window.resolve(&explicit), (date("2025-03-29"), EolSource::Explicit));
    }

    #[test]
    fn test_is_supported_flips_at_midnight() {
        let eol = date("2025-06-14");
        let just_before = Utc.with_ymd_and_hms(2025, 6, 13, 23, 59, 59).unwrap();
        let at_midnight = Utc.with_ymd_and_hms(2025, 6, 14, 0, 0, 0).unwrap();
        assert!(is_supported(&eol, just_before));
        assert!(!is_supported(&eol, at_midnight));
    }

    #[test]
    fn test_invalid_date_is_not_supported() {
        let now = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert!(!is_supported(&CalendarDate::invalid(), now));
        assert_eq!(days_until_eol(&CalendarDate::invalid(), now), None);
    }

    #[test]
    fn test_days_until_eol() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(days_until_eol(&date("2025-06-14"), now), Some(13));
        assert_eq!(days_until_eol(&date("2025-05-31"), now), Some(-1));
    }
}
