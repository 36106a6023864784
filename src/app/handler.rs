//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and feed
//! responses, translating them into state changes and action sequences.
//!
//! # Event Types
//!
//! - **Transitions**: `SetTerm`, `ToggleCategory`, `SetMode`, `SetSortKey`
//! - **Suggestions**: `SelectSuggestion`, `DismissSuggestions`
//! - **Loading**: `Reload`, `DirectoryLoaded`
//!
//! Every transition and every successful load re-derives the visible set and
//! then emits exactly one [`Action::PushQuery`].
//!
//! # Example
//!
//! ```rust
//! use docfinder::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new("", 3);
//! let (_, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert_eq!(actions, vec![Action::FetchDirectory]);
//! # Ok::<(), docfinder::DirectoryError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SortKey;
use crate::store::Dataset;

/// Events triggered by user input or feed responses.
///
/// The handler processes them one at a time, so transitions are deterministic
/// and never interleave.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces the search term verbatim and refreshes suggestions.
    SetTerm(String),
    /// Adds the category to the selection, or removes it if already selected.
    ToggleCategory(String),
    /// Replaces the consultation mode; an empty string clears it.
    SetMode(String),
    /// Replaces the sort key.
    SetSortKey(SortKey),
    /// Uses the suggestion at this index (0-based) as the search term.
    SelectSuggestion(usize),
    /// Clears the suggestion list without touching the query.
    DismissSuggestions,
    /// Requests a fresh fetch of the provider feed.
    Reload,
    /// Reports the outcome of a fetch.
    ///
    /// Errors arrive as their display message; the store only keeps a single
    /// failed state regardless of the cause.
    DirectoryLoaded(std::result::Result<Dataset, String>),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the view changed, and the side effects to run
/// in order.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for handlers
/// that may need to fail.
///
/// # Example
///
/// ```rust
/// use docfinder::app::{handle_event, Action, AppState, Event};
///
/// let mut state = AppState::new("", 3);
/// let (render, actions) = handle_event(&mut state, &Event::SetMode("video".into()))?;
/// assert!(render);
/// assert_eq!(actions, vec![Action::PushQuery("consultationType=video".into())]);
/// # Ok::<(), docfinder::DirectoryError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::SetTerm(term) => {
            state.query.set_term(term.clone());
            tracing::trace!(term = %state.query.term, "search term updated");
            let push = state.refresh();
            state.refresh_suggestions();
            Ok((true, vec![push]))
        }
        Event::ToggleCategory(category) => {
            state.query.toggle_category(category);
            tracing::debug!(
                category = %category,
                selected = state.query.categories.contains(category.as_str()),
                "category toggled"
            );
            Ok((true, vec![state.refresh()]))
        }
        Event::SetMode(mode) => {
            state.query.set_mode(mode.clone());
            tracing::debug!(mode = ?state.query.mode, "consultation mode updated");
            Ok((true, vec![state.refresh()]))
        }
        Event::SetSortKey(sort_key) => {
            state.query.set_sort_key(*sort_key);
            tracing::debug!(sort_key = ?sort_key, "sort key updated");
            Ok((true, vec![state.refresh()]))
        }
        Event::SelectSuggestion(index) => {
            let Some(name) = state.suggestions.get(*index).map(|r| r.name.clone()) else {
                tracing::debug!(index = index, available = state.suggestions.len(), "no such suggestion");
                return Ok((false, vec![]));
            };

            tracing::debug!(name = %name, "suggestion selected");
            state.query.set_term(name);
            let push = state.refresh();
            state.suggestions.clear();
            Ok((true, vec![push]))
        }
        Event::DismissSuggestions => {
            if state.suggestions.is_empty() {
                return Ok((false, vec![]));
            }
            state.suggestions.clear();
            Ok((true, vec![]))
        }
        Event::Reload => {
            tracing::debug!("reload requested");
            state.store.begin_load();
            state.suggestions.clear();
            state.rederive();
            Ok((true, vec![Action::FetchDirectory]))
        }
        Event::DirectoryLoaded(Ok(dataset)) => {
            tracing::debug!(
                records = dataset.len(),
                categories = dataset.categories().len(),
                "directory loaded"
            );
            state.store.replace(dataset.clone());
            state.apply_pending_query();
            state.suggestions.clear();
            Ok((true, vec![state.refresh()]))
        }
        Event::DirectoryLoaded(Err(message)) => {
            tracing::error!(error = %message, "directory load failed");
            state.store.fail(message.clone());
            state.suggestions.clear();
            state.rederive();
            Ok((true, vec![]))
        }
    }
}

/// Short event name for span fields, without payloads.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SetTerm(_) => "SetTerm",
        Event::ToggleCategory(_) => "ToggleCategory",
        Event::SetMode(_) => "SetMode",
        Event::SetSortKey(_) => "SetSortKey",
        Event::SelectSuggestion(_) => "SelectSuggestion",
        Event::DismissSuggestions => "DismissSuggestions",
        Event::Reload => "Reload",
        Event::DirectoryLoaded(_) => "DirectoryLoaded",
    }
}
