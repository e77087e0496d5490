//! The version support calculator.

use super::clock::{Clock, SystemClock};
use super::support::{days_until_eol, is_supported, SupportWindow};
use crate::model::{CalendarDate, ReleaseRecord, ResolvedRelease, SupportStatus, SupportTable};
use chrono::{DateTime, Utc};

/// Resolves end-of-life dates and support status for a list of releases.
///
/// Every call to [`render`](Self::render) reads the clock once and resolves
/// all rows against that single instant. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct VersionSupportCalculator<C: Clock = SystemClock> {
    clock: C,
    window: SupportWindow,
}

impl VersionSupportCalculator<SystemClock> {
    /// Calculator on the wall clock with the default 18 × 30-day window
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for VersionSupportCalculator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> VersionSupportCalculator<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            window: SupportWindow::default(),
        }
    }

    /// Use a different support window for derived dates
    #[must_use]
    pub fn window(mut self, window: SupportWindow) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub const fn support_window(&self) -> SupportWindow {
        self.window
    }

    /// The current instant according to this calculator's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// End-of-life date for one record
    #[must_use]
    pub fn compute_end_of_life(&self, record: &ReleaseRecord) -> CalendarDate {
        self.window.resolve(record).0
    }

    /// Whether `eol_date` is still in the future right now
    pub fn is_supported(&self, eol_date: &CalendarDate) -> bool {
        is_supported(eol_date, self.clock.now())
    }

    /// Resolve one record against a given instant.
    #[must_use]
    pub fn resolve(&self, record: &ReleaseRecord, now: DateTime<Utc>) -> ResolvedRelease {
        let (eol_date, eol_source) = self.window.resolve(record);
        for (field, date) in record.dates() {
            if !date.is_valid() {
                tracing::warn!(version = %record.version, field, value = %date, "unparseable date");
            }
        }

        let status = SupportStatus::from_supported(is_supported(&eol_date, now));
        let days = days_until_eol(&eol_date, now);
        tracing::debug!(
            version = %record.version,
            eol = %eol_date,
            ?eol_source,
            %status,
            "resolved release"
        );

        ResolvedRelease {
            version: record.version.clone(),
            release_date: record.release_date.clone(),
            eol_date,
            eol_source,
            status,
            days_until_eol: days,
        }
    }

    /// Resolve every record, preserving order.
    pub fn render(&self, records: &[ReleaseRecord]) -> SupportTable {
        let now = self.clock.now();
        let rows = records.iter().map(|r| self.resolve(r, now)).collect();
        SupportTable::new(now, rows)
    }
}
