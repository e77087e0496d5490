//! Time sources.
//!
//! Support status depends on the current instant. Reading it through a
//! [`Clock`] keeps the calculator a pure function of `(records, now)`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// A clock frozen at midnight UTC of `date`.
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
