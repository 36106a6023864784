//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for everything
//! the rendering surface shows. It separates core data (the record store and
//! the query state) from derived data (the visible set and the suggestions) and
//! provides the refresh rule that keeps them consistent.
//!
//! # State Components
//!
//! - **Store**: Fetched dataset and category index, or a loading/failed marker
//! - **Query**: Term, selected categories, mode, and sort key
//! - **Visible**: Filter engine output for (store, query)
//! - **Suggestions**: Name suggestions for the current term
//! - **Pending Query**: The initial address, held until the first successful load
//!
//! # Example
//!
//! ```rust
//! use docfinder::app::AppState;
//!
//! let state = AppState::new("", 3);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.header.count, 0);
//! ```

use super::actions::Action;
use crate::domain::{ConsultationMode, Record, SortKey};
use crate::engine::{apply_filters, suggestions};
use crate::query::{encode, QueryState};
use crate::store::{LoadState, RecordStore};
use crate::ui::viewmodel::{
    DoctorCard, EmptyState, FilterPanel, HeaderInfo, LoadStatus, OptionItem, SearchBarInfo,
    UIViewModel,
};

/// Title shown above the listing.
const TITLE: &str = "Doctor Listing";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fetched dataset and load lifecycle.
    pub store: RecordStore,

    /// Current filter and sort selections.
    pub query: QueryState,

    /// Records matching `query`, in display order.
    ///
    /// Replaced wholesale by [`AppState::rederive`]; never edited in place.
    pub visible: Vec<Record>,

    /// Suggestions for the current term.
    pub suggestions: Vec<Record>,

    /// Maximum number of suggestions.
    pub suggestion_limit: usize,

    /// Path the query string is attached to when showing the address.
    pub base_path: String,

    /// Initial address query, decoded once the first load succeeds.
    pending_query: Option<String>,
}

impl AppState {
    /// Creates a state that will apply `initial_query` after the first
    /// successful load.
    #[must_use]
    pub fn new(initial_query: impl Into<String>, suggestion_limit: usize) -> Self {
        Self {
            store: RecordStore::new(),
            query: QueryState::new(),
            visible: vec![],
            suggestions: vec![],
            suggestion_limit,
            base_path: "/".to_string(),
            pending_query: Some(initial_query.into()),
        }
    }

    /// Sets the path shown in front of the query string.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Returns `true` while the initial address has not been applied yet.
    #[must_use]
    pub const fn has_pending_query(&self) -> bool {
        self.pending_query.is_some()
    }

    /// Applies the pending initial address, if any.
    pub(crate) fn apply_pending_query(&mut self) {
        if let Some(raw) = self.pending_query.take() {
            self.query = crate::query::decode(&raw);
            tracing::debug!(query = %raw, "initial address applied");
        }
    }

    /// Recomputes the visible set from the store and query.
    pub fn rederive(&mut self) {
        self.visible = apply_filters(self.store.records(), &self.query);
    }

    /// Recomputes the visible set, then encodes the query.
    ///
    /// Returns the [`Action::PushQuery`] that writes the address. Callers run
    /// this once per transition.
    pub fn refresh(&mut self) -> Action {
        self.rederive();
        Action::PushQuery(self.encoded_query())
    }

    /// Recomputes suggestions for the current term.
    pub fn refresh_suggestions(&mut self) {
        self.suggestions = suggestions(self.store.records(), &self.query.term, self.suggestion_limit);
    }

    /// Encoded query for the current state.
    #[must_use]
    pub fn encoded_query(&self) -> String {
        encode(&self.query)
    }

    /// Full address: base path plus query string.
    #[must_use]
    pub fn href(&self) -> String {
        href(&self.base_path, &self.encoded_query())
    }

    /// Computes a renderable view model from current state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docfinder::app::AppState;
    /// use docfinder::ui::viewmodel::LoadStatus;
    ///
    /// let state = AppState::new("", 3);
    /// assert_eq!(state.compute_viewmodel().status, LoadStatus::Idle);
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let status = match self.store.state() {
            LoadState::Empty => LoadStatus::Idle,
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Ready(_) => LoadStatus::Ready,
            LoadState::Failed(message) => LoadStatus::Failed(message.clone()),
        };

        let empty_state = (status == LoadStatus::Ready && self.visible.is_empty()).then(|| {
            EmptyState {
                message: "No doctors found matching your criteria.".to_string(),
            }
        });

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
                count: self.visible.len(),
            },
            status,
            search_bar: SearchBarInfo {
                query: self.query.term.clone(),
                suggestions: self.suggestions.iter().map(|r| r.name.clone()).collect(),
            },
            filter_panel: self.compute_filter_panel(),
            cards: self.visible.iter().map(compute_card).collect(),
            empty_state,
            address: self.href(),
        }
    }

    fn compute_filter_panel(&self) -> FilterPanel {
        let selected_mode = self.query.mode.as_deref().unwrap_or_default();

        let modes = ConsultationMode::ALL
            .into_iter()
            .map(|mode| OptionItem {
                value: mode.as_str().to_string(),
                label: mode.label().to_string(),
                checked: mode.as_str() == selected_mode,
            })
            .collect();

        let specialities = self
            .store
            .categories()
            .iter()
            .map(|category| OptionItem {
                value: category.clone(),
                label: category.clone(),
                checked: self.query.categories.contains(category),
            })
            .collect();

        let sorts = [SortKey::FeeAscending, SortKey::ExperienceDescending]
            .into_iter()
            .map(|key| OptionItem {
                value: key.as_param().unwrap_or_default().to_string(),
                label: key.label().to_string(),
                checked: self.query.sort_key == key,
            })
            .collect();

        FilterPanel {
            modes,
            specialities,
            sorts,
        }
    }
}

fn compute_card(record: &Record) -> DoctorCard {
    DoctorCard {
        name: record.name.clone(),
        specialities: record
            .categories
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        experience: format!("{} years experience", record.experience_years),
        fee: format!("₹{}", format_fee(record.fee)),
    }
}

/// Formats a fee without a trailing `.0` for whole amounts.
fn format_fee(fee: f64) -> String {
    if fee.fract() == 0.0 {
        format!("{fee:.0}")
    } else {
        format!("{fee:.2}")
    }
}

fn href(base_path: &str, query: &str) -> String {
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Dataset;

    fn loaded_state(initial_query: &str) -> AppState {
        let mut state = AppState::new(initial_query, 3).with_base_path("/doctors");
        state.store.replace(Dataset::new(vec![
            Record::new("1", "Alice", ["Cardiology"], "video", 100.0, 5),
            Record::new("2", "Bob", ["Dermatology", "Allergy"], "inClinic", 49.5, 10),
        ]));
        state.apply_pending_query();
        state.rederive();
        state
    }

    #[test]
    fn refresh_returns_push_for_current_query() {
        let mut state = loaded_state("");
        state.query.set_sort_key(SortKey::FeeAscending);
        assert_eq!(state.refresh(), Action::PushQuery("sortBy=fee-ascending".into()));
        assert_eq!(state.visible[0].name, "Bob");
    }

    #[test]
    fn href_omits_question_mark_for_default_query() {
        let mut state = loaded_state("");
        assert_eq!(state.href(), "/doctors");
        state.query.set_term("al");
        assert_eq!(state.href(), "/doctors?name=al");
    }

    #[test]
    fn viewmodel_reflects_selection() {
        let state = loaded_state("consultationType=inClinic&specialities=Allergy");
        let vm = state.compute_viewmodel();

        assert_eq!(vm.header.count, 1);
        assert_eq!(vm.cards[0].specialities, "Allergy, Dermatology");
        assert_eq!(vm.cards[0].experience, "10 years experience");
        assert_eq!(vm.cards[0].fee, "₹49.50");
        assert!(vm.filter_panel.modes.iter().any(|m| m.value == "inClinic" && m.checked));
        let checked: Vec<_> = vm
            .filter_panel
            .specialities
            .iter()
            .filter(|s| s.checked)
            .map(|s| s.value.as_str())
            .collect();
        assert_eq!(checked, ["Allergy"]);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn empty_state_only_when_ready() {
        let state = loaded_state("name=nobody");
        assert!(state.compute_viewmodel().empty_state.is_some());

        let fresh = AppState::new("", 3);
        assert!(fresh.compute_viewmodel().empty_state.is_none());
    }

    #[test]
    fn whole_fees_have_no_decimals() {
        assert_eq!(format_fee(500.0), "500");
        assert_eq!(format_fee(12.5), "12.50");
    }
}
