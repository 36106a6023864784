//! Plain-text renderer.
//!
//! Turns a [`UIViewModel`] into lines of text. The renderer returns a `String`
//! instead of printing so the driver decides where output goes.
//!
//! # Layout
//!
//! ```text
//! Doctor Listing (2)
//! Search: ali
//!   1) Dr. Alice
//! Consultation Mode: (x) Video Consult  ( ) In Clinic
//! Speciality: [x] Cardiology  [ ] Dermatology
//! Sort By: ( ) Fees (Low to High)  ( ) Experience (High to Low)
//!
//! - Dr. Alice
//!   Cardiology | 5 years experience | ₹100
//!
//! Address: /?name=ali
//! ```

use crate::app::AppState;
use crate::ui::viewmodel::{LoadStatus, OptionItem, UIViewModel};
use std::fmt::Write;

/// Renders the current state.
///
/// # Example
///
/// ```rust
/// use docfinder::app::AppState;
/// use docfinder::ui::render;
///
/// let state = AppState::new("", 3);
/// assert!(render(&state).starts_with("Doctor Listing (0)"));
/// ```
#[must_use]
pub fn render(state: &AppState) -> String {
    render_viewmodel(&state.compute_viewmodel())
}

/// Renders a pre-computed view model.
///
/// Loading and failed states replace the whole listing, matching what a user
/// sees before any data exists.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", vm.header.title, vm.header.count);

    match &vm.status {
        LoadStatus::Loading => {
            out.push_str("Loading doctors...\n");
            return out;
        }
        LoadStatus::Failed(message) => {
            let _ = writeln!(out, "Error loading doctors: {message}");
            return out;
        }
        LoadStatus::Idle | LoadStatus::Ready => {}
    }

    let _ = writeln!(out, "Search: {}", vm.search_bar.query);
    for (i, suggestion) in vm.search_bar.suggestions.iter().enumerate() {
        let _ = writeln!(out, "  {}) {suggestion}", i + 1);
    }

    let _ = writeln!(out, "Consultation Mode: {}", radio_group(&vm.filter_panel.modes));
    let _ = writeln!(out, "Speciality: {}", checkbox_group(&vm.filter_panel.specialities));
    let _ = writeln!(out, "Sort By: {}", radio_group(&vm.filter_panel.sorts));
    out.push('\n');

    if let Some(empty) = &vm.empty_state {
        let _ = writeln!(out, "{}", empty.message);
    }

    for card in &vm.cards {
        let _ = writeln!(out, "- {}", card.name);
        let _ = writeln!(
            out,
            "  {} | {} | {}",
            card.specialities, card.experience, card.fee
        );
    }

    let _ = writeln!(out, "\nAddress: {}", vm.address);
    out
}

fn radio_group(items: &[OptionItem]) -> String {
    items
        .iter()
        .map(|item| format!("({}) {}", if item.checked { 'x' } else { ' ' }, item.label))
        .collect::<Vec<_>>()
        .join("  ")
}

fn checkbox_group(items: &[OptionItem]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|item| format!("[{}] {}", if item.checked { 'x' } else { ' ' }, item.label))
        .collect::<Vec<_>>()
        .join("  ")
}
