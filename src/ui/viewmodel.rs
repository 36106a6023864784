//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by the renderer. They contain no business logic, only display-ready
//! data.
//!
//! # Example
//!
//! ```rust
//! use docfinder::ui::viewmodel::{DoctorCard, HeaderInfo};
//!
//! let card = DoctorCard {
//!     name: "Dr. Alice".to_string(),
//!     specialities: "Cardiology".to_string(),
//!     experience: "5 years experience".to_string(),
//!     fee: "₹100".to_string(),
//! };
//! let header = HeaderInfo { title: "Doctor Listing".to_string(), count: 1 };
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title and result count.
    pub header: HeaderInfo,

    /// Where the record store is in its load lifecycle.
    pub status: LoadStatus,

    /// Search input and suggestions.
    pub search_bar: SearchBarInfo,

    /// Mode, speciality, and sort controls.
    pub filter_panel: FilterPanel,

    /// One card per visible record, in display order.
    pub cards: Vec<DoctorCard>,

    /// Shown when the store is ready but nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Current address, base path plus query string.
    pub address: String,
}

/// Load lifecycle as the view sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load requested yet.
    Idle,
    /// Fetch in flight.
    Loading,
    /// Dataset available.
    Ready,
    /// Last load failed with this message.
    Failed(String),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,
    /// Number of visible records.
    pub count: usize,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,
    /// Suggested provider names, in store order.
    pub suggestions: Vec<String>,
}

/// Filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    /// Consultation mode radio group.
    pub modes: Vec<OptionItem>,
    /// One checkbox per category in the index.
    pub specialities: Vec<OptionItem>,
    /// Sort radio group.
    pub sorts: Vec<OptionItem>,
}

/// One radio button or checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    /// Value sent back when the control is used.
    pub value: String,
    /// Label shown to the user.
    pub label: String,
    /// Whether the control is currently selected.
    pub checked: bool,
}

/// Display information for a single provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCard {
    /// Provider name.
    pub name: String,
    /// Categories joined with `", "`.
    pub specialities: String,
    /// Experience line, e.g. `"5 years experience"`.
    pub experience: String,
    /// Fee line, e.g. `"₹500"`.
    pub fee: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Message shown instead of the card list.
    pub message: String,
}
