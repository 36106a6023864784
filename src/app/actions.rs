//! Actions representing side effects to be executed by the driver.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler. Actions are the boundary between pure state transitions
//! and effectful operations: fetching the feed and writing the address.
//!
//! # Ordering
//!
//! The handler re-derives the visible set before it builds a
//! [`Action::PushQuery`], so by the time the driver writes an address the
//! matching list already exists in [`AppState`](super::AppState).
//!
//! # Example
//!
//! ```rust
//! use docfinder::app::Action;
//!
//! let actions = vec![Action::PushQuery("name=ali".to_string())];
//! ```

/// Commands representing side effects to be executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the provider feed and feed the outcome back as
    /// [`Event::DirectoryLoaded`](super::Event::DirectoryLoaded).
    FetchDirectory,

    /// Write the encoded query state to the address.
    ///
    /// The string is the query without a leading `?`; empty when every field
    /// holds its default.
    PushQuery(String),
}
