//! Plain-text user interface layer.
//!
//! This module turns application state into text for a terminal and parses the
//! line commands a user types back into application events.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → String
//! stdin line → parse_command → Command → Event → handle_event
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Text rendering of a view model
//! - [`input`]: Line command parsing
//!
//! # Example
//!
//! ```rust
//! use docfinder::app::AppState;
//! use docfinder::ui::render;
//!
//! let state = AppState::new("", 3);
//! print!("{}", render(&state));
//! ```

pub mod input;
pub mod renderer;
pub mod viewmodel;

pub use input::{parse_command, Command, HELP};
pub use renderer::{render, render_viewmodel};
pub use viewmodel::{
    DoctorCard, EmptyState, FilterPanel, HeaderInfo, LoadStatus, OptionItem, SearchBarInfo,
    UIViewModel,
};
