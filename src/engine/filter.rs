//! Filter engine.
//!
//! Maps the record store and a query state to the visible set.
//!
//! # Filtering Algorithm
//!
//! 1. **Name**: keep if the term is empty or the name contains it, ignoring case
//! 2. **Mode**: keep if no mode is selected or the record mode equals it, ignoring case
//! 3. **Categories**: keep if none are selected or the record shares at least one
//! 4. **Sort**: stable sort by the sort key; filtering itself never reorders

use crate::domain::{Record, SortKey};
use crate::query::QueryState;

/// Computes the visible set for `records` under `query`.
///
/// Never fails. An empty store yields an empty result.
///
/// # Examples
///
/// ```
/// use docfinder::domain::{Record, SortKey};
/// use docfinder::engine::apply_filters;
/// use docfinder::query::QueryState;
///
/// let records = vec![
///     Record::new("1", "Alice", ["Cardiology"], "video", 100.0, 5),
///     Record::new("2", "Bob", ["Dermatology"], "inClinic", 50.0, 10),
/// ];
/// let mut query = QueryState::new();
/// query.set_sort_key(SortKey::FeeAscending);
///
/// let names: Vec<_> = apply_filters(&records, &query)
///     .into_iter()
///     .map(|r| r.name)
///     .collect();
/// assert_eq!(names, ["Bob", "Alice"]);
/// ```
#[must_use]
pub fn apply_filters(records: &[Record], query: &QueryState) -> Vec<Record> {
    let _span = tracing::debug_span!("apply_filters",
        total_records = records.len(),
        term_len = query.term.len(),
        categories = query.categories.len(),
        mode = ?query.mode,
        sort_key = ?query.sort_key
    ).entered();

    let term = query.term.to_lowercase();
    let mode = query
        .mode
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(str::to_lowercase);

    let mut visible: Vec<Record> = records
        .iter()
        .filter(|record| record.name_contains(&term))
        .filter(|record| {
            mode.as_ref()
                .map_or(true, |m| record.mode.to_lowercase() == *m)
        })
        .filter(|record| {
            query.categories.is_empty()
                || record
                    .categories
                    .iter()
                    .any(|category| query.categories.contains(category))
        })
        .cloned()
        .collect();

    // slice::sort_by is stable; ties keep store order.
    match query.sort_key {
        SortKey::Unsorted => {}
        SortKey::FeeAscending => visible.sort_by(|a, b| a.fee.total_cmp(&b.fee)),
        SortKey::ExperienceDescending => {
            visible.sort_by(|a, b| b.experience_years.cmp(&a.experience_years));
        }
    }

    tracing::debug!(visible_count = visible.len(), "filters applied");
    visible
}
