//! Query state and its query-string representation.
//!
//! - [`state`]: The four user-selected filter/sort fields and their transitions
//! - [`codec`]: Bidirectional mapping between [`QueryState`] and a query string

pub mod codec;
pub mod state;

pub use codec::{decode, encode};
pub use state::QueryState;
