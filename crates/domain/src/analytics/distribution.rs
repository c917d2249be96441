// crates/domain/src/analytics/distribution.rs
use std::collections::HashMap;

use chrono::NaiveDate;
use luminosity_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Number of photos sharing one metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub id: i64,
    pub label: String,
    pub count: i64,
}

impl DistributionEntry {
    pub fn new(id: i64, label: impl Into<String>, count: i64) -> Self {
        Self { id, label: label.into(), count }
    }
}

/// Distribution of one metadata value across a catalog, in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistributionList(Vec<DistributionEntry>);

impl DistributionList {
    pub fn new(entries: Vec<DistributionEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[DistributionEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> i64 {
        self.0.iter().map(|e| e.count).sum()
    }

    pub fn get(&self, label: &str) -> Option<&DistributionEntry> {
        self.0.iter().find(|e| e.label == label)
    }

    /// Combines distributions: counts of equal labels are summed and the
    /// result is ordered by label. The id of the first entry seen for a
    /// label is kept.
    #[must_use]
    pub fn merge<'a>(&self, others: impl IntoIterator<Item = &'a DistributionList>) -> Self {
        let mut merged: HashMap<String, DistributionEntry> = HashMap::new();
        let mut absorb = |list: &DistributionList| {
            for entry in &list.0 {
                merged
                    .entry(entry.label.clone())
                    .and_modify(|target| target.count += entry.count)
                    .or_insert_with(|| entry.clone());
            }
        };
        absorb(self);
        for other in others {
            absorb(other);
        }
        let mut entries: Vec<_> = merged.into_values().collect();
        entries.sort_by(|a, b| a.label.cmp(&b.label));
        Self(entries)
    }

    /// Entries ordered by count, largest first; ties by label.
    pub fn ranked(&self) -> Vec<&DistributionEntry> {
        let mut ranked: Vec<_> = self.0.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
        ranked
    }

    /// Checks that every label is a capture day (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDateLabel`] for the first label that is
    /// not a calendar date.
    pub fn validate_dates(&self) -> DomainResult<()> {
        for entry in &self.0 {
            NaiveDate::parse_from_str(&entry.label, "%Y-%m-%d")
                .map_err(|_| DomainError::InvalidDateLabel { label: entry.label.clone() })?;
        }
        Ok(())
    }
}

impl FromIterator<DistributionEntry> for DistributionList {
    fn from_iter<I: IntoIterator<Item = DistributionEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DistributionList {
    type Item = &'a DistributionEntry;
    type IntoIter = std::slice::Iter<'a, DistributionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
