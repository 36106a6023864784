//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the driver (main.rs) and the store, query, and
//! engine layers. It owns the one rule that keeps the three surfaces
//! consistent: after any change to the query state or the record store,
//! recompute the visible set, then re-encode the query.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Feed Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Central application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use docfinder::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new("sortBy=fees", 3);
//! let (render, actions) = handle_event(&mut state, &Event::SetTerm("ali".into()))?;
//! assert!(render);
//! # Ok::<(), docfinder::DirectoryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
