//! Normalized dataset and its category index.

use super::models::ProviderRecord;
use crate::domain::error::Result;
use crate::domain::Record;
use std::collections::BTreeSet;

/// A complete, normalized dataset.
///
/// Records keep the feed order. The category index is derived from the records
/// on construction and is never edited separately, so the two cannot drift.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
    categories: Vec<String>,
}

impl Dataset {
    /// Builds a dataset and derives its category index.
    ///
    /// # Examples
    ///
    /// ```
    /// use docfinder::domain::Record;
    /// use docfinder::store::Dataset;
    ///
    /// let dataset = Dataset::new(vec![
    ///     Record::new("1", "A", ["Neurology", "Cardiology"], "video", 10.0, 1),
    ///     Record::new("2", "B", ["Cardiology"], "video", 10.0, 1),
    /// ]);
    /// assert_eq!(dataset.categories(), ["Cardiology", "Neurology"]);
    /// ```
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let categories = records
            .iter()
            .flat_map(|record| record.categories.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            records,
            categories,
        }
    }

    /// Converts a whole feed, failing on the first invalid provider.
    ///
    /// # Errors
    ///
    /// Returns the conversion error of the first provider that violates the
    /// record model. No partial dataset is produced.
    pub fn from_providers(providers: Vec<ProviderRecord>) -> Result<Self> {
        let records = providers
            .into_iter()
            .enumerate()
            .map(|(position, provider)| provider.into_record(position))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(records))
    }

    /// Records in feed order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct categories, sorted lexicographically.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
