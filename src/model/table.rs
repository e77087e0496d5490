//! The resolved support table.

use super::ResolvedRelease;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output of one render pass: resolved rows in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTable {
    /// The instant support status was evaluated against
    pub generated_at: DateTime<Utc>,
    /// One row per release record, in input order
    pub rows: Vec<ResolvedRelease>,
}

impl SupportTable {
    #[must_use]
    pub const fn new(generated_at: DateTime<Utc>, rows: Vec<ResolvedRelease>) -> Self {
        Self { generated_at, rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedRelease> {
        self.rows.iter()
    }

    /// Look up a row by its exact version label
    #[must_use]
    pub fn find(&self, version: &str) -> Option<&ResolvedRelease> {
        self.rows.iter().find(|row| row.version == version)
    }

    #[must_use]
    pub fn supported_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_supported()).count()
    }

    #[must_use]
    pub fn end_of_life_count(&self) -> usize {
        self.len() - self.supported_count()
    }

    /// The supported release whose end of life comes first.
    #[must_use]
    pub fn next_end_of_life(&self) -> Option<&ResolvedRelease> {
        self.rows
            .iter()
            .filter(|row| row.is_supported())
            .filter_map(|row| row.days_until_eol.map(|days| (days, row)))
            .min_by_key(|(days, _)| *days)
            .map(|(_, row)| row)
    }

    /// Supported releases reaching end of life within `within_days` days,
    /// in catalog order.
    #[must_use]
    pub fn approaching_eol(&self, within_days: i64) -> Vec<&ResolvedRelease> {
        self.rows
            .iter()
            .filter(|row| row.is_approaching_eol(within_days))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SupportTable {
    type Item = &'a ResolvedRelease;
    type IntoIter = std::slice::Iter<'a, ResolvedRelease>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
