//! The record store and its load lifecycle.

use super::dataset::Dataset;
use crate::domain::Record;

/// Where the store is in its load lifecycle.
///
/// Records only exist inside [`LoadState::Ready`], so a loading or failed
/// store cannot expose a partial dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Nothing has been requested yet.
    #[default]
    Empty,
    /// A fetch is in flight.
    Loading,
    /// The last load succeeded.
    Ready(Dataset),
    /// The last load failed. Holds the error message shown to the user.
    Failed(String),
}

/// Holds the fetched dataset and its category index.
///
/// All mutators replace the whole state; nothing edits the dataset in place.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    state: LoadState,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as in flight and drops any previous dataset.
    pub fn begin_load(&mut self) {
        tracing::debug!("record store loading");
        self.state = LoadState::Loading;
    }

    /// Swaps in a freshly loaded dataset.
    pub fn replace(&mut self, dataset: Dataset) {
        let _span = tracing::debug_span!("record_store_replace",
            records = dataset.len(),
            categories = dataset.categories().len()
        ).entered();

        self.state = LoadState::Ready(dataset);
        tracing::debug!("dataset replaced");
    }

    /// Records a failed load. Any previous dataset is discarded.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "record store load failed");
        self.state = LoadState::Failed(message);
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Records in feed order; empty unless the store is ready.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match &self.state {
            LoadState::Ready(dataset) => dataset.records(),
            _ => &[],
        }
    }

    /// Category index; empty unless the store is ready.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        match &self.state {
            LoadState::Ready(dataset) => dataset.categories(),
            _ => &[],
        }
    }

    /// Returns `true` once a load has succeeded.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![Record::new("1", "A", ["ENT"], "video", 5.0, 1)])
    }

    #[test]
    fn failure_discards_previous_dataset() {
        let mut store = RecordStore::new();
        store.replace(dataset());
        assert_eq!(store.records().len(), 1);

        store.fail("HTTP error! status: 500");
        assert!(store.records().is_empty());
        assert!(store.categories().is_empty());
        assert_eq!(store.state(), &LoadState::Failed("HTTP error! status: 500".into()));
    }

    #[test]
    fn loading_hides_records() {
        let mut store = RecordStore::new();
        store.replace(dataset());
        store.begin_load();
        assert!(store.records().is_empty());
        assert!(!store.is_ready());
    }
}
