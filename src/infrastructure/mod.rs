//! Infrastructure layer for environment interactions.
//!
//! The only environment the application writes to is its address: the query
//! string a user can copy to reproduce the current view. [`Location`] is the
//! seam for that side effect; [`MemoryLocation`] is the implementation used by
//! the command-line driver and the tests.

pub mod location;

pub use location::{Location, MemoryLocation};
