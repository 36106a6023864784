//! User-selected filter and sort parameters.

use crate::domain::SortKey;
use std::collections::BTreeSet;

/// The complete set of filter/sort selections at a point in time.
///
/// Each transition replaces exactly one field. Re-deriving the visible set and
/// re-encoding the address is the caller's job (see
/// [`AppState::refresh`](crate::app::AppState::refresh)), so this type stays a
/// plain value that can be compared and round-tripped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    /// Free-text name filter, stored verbatim.
    pub term: String,
    /// Selected categories. Empty means no category filter.
    pub categories: BTreeSet<String>,
    /// Selected consultation mode. `None` means any.
    pub mode: Option<String>,
    /// Ordering applied after filtering.
    pub sort_key: SortKey,
}

impl QueryState {
    /// Creates the all-default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the term verbatim. No trimming or case folding.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Adds `category` if absent, removes it if present.
    ///
    /// The empty category is ignored: it has no query-string form distinct from
    /// "no categories", so selecting it could never survive a reload.
    ///
    /// # Examples
    ///
    /// ```
    /// use docfinder::query::QueryState;
    ///
    /// let mut query = QueryState::new();
    /// query.toggle_category("Dentist");
    /// assert!(query.categories.contains("Dentist"));
    /// query.toggle_category("Dentist");
    /// assert!(query.categories.is_empty());
    /// ```
    pub fn toggle_category(&mut self, category: &str) {
        if category.is_empty() {
            tracing::trace!("ignoring empty category toggle");
            return;
        }
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    /// Replaces the mode. An empty string clears it.
    pub fn set_mode(&mut self, mode: impl Into<String>) {
        let mode = mode.into();
        self.mode = if mode.is_empty() { None } else { Some(mode) };
    }

    /// Replaces the sort key.
    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// Returns `true` if every field holds its default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}
