//! Domain layer for the provider directory.
//!
//! This module contains the core domain types shared by every other layer,
//! independent of the HTTP feed, the address bar, or the terminal surface.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Provider record model and sort keys
//!
//! # Examples
//!
//! ```
//! use docfinder::domain::{Record, Result};
//!
//! fn make_record() -> Result<Record> {
//!     Ok(Record::new("1", "Dr. Alice", ["Cardiology"], "video", 100.0, 5))
//! }
//! ```

pub mod error;
pub mod record;

pub use error::{DirectoryError, Result};
pub use record::{ConsultationMode, Record, SortKey};
