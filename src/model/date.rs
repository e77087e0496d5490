//! Lenient calendar dates.
//!
//! Release catalogs are hand-written, so a date that fails to parse is kept
//! rather than rejected. An invalid date remembers its raw text, renders as
//! that text, and is never considered a point in time.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display text for a date that had to be derived from an invalid input.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// A calendar date (year-month-day, UTC) that may be invalid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarDate {
    /// A real calendar day
    Valid(NaiveDate),
    /// Text that could not be read as a date, kept verbatim
    Invalid(String),
}

impl CalendarDate {
    /// Parse a date leniently.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (reduced to their UTC
    /// calendar day). Anything else becomes [`CalendarDate::Invalid`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Self::Valid(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::Valid(timestamp.with_timezone(&Utc).date_naive());
        }
        Self::Invalid(raw.to_string())
    }

    /// The placeholder produced when arithmetic runs on an invalid date.
    #[must_use]
    pub fn invalid() -> Self {
        Self::Invalid(INVALID_DATE_LABEL.to_string())
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The underlying calendar day, if valid.
    #[must_use]
    pub const fn as_naive(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Invalid(_) => None,
        }
    }

    /// Midnight UTC at the start of this day.
    #[must_use]
    pub fn midnight_utc(&self) -> Option<DateTime<Utc>> {
        let naive = self.as_naive()?.and_hms_opt(0, 0, 0)?;
        Some(Utc.from_utc_datetime(&naive))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Invalid(raw) => f.write_str(raw),
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::Valid(date)
    }
}

impl From<&str> for CalendarDate {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
