//! Pure derivations over the record store.
//!
//! - [`filter`]: Query state → ordered visible set
//! - [`suggest`]: Search term → name suggestions
//!
//! Nothing here allocates state between calls or performs I/O; identical inputs
//! always produce identical outputs.

pub mod filter;
pub mod suggest;

pub use filter::apply_filters;
pub use suggest::{suggestions, DEFAULT_SUGGESTION_LIMIT};
