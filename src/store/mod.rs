//! Record store and the feeds it loads from.
//!
//! The store owns the fetched dataset and its derived category index. Loading
//! is split in two: an async fetch through a [`DirectorySource`] that produces a
//! complete [`Dataset`] or an error, and a synchronous swap into the
//! [`RecordStore`] so the dataset and index always change together.
//!
//! # Modules
//!
//! - `models`: Wire format of the provider feed
//! - `dataset`: Normalized dataset with its category index
//! - `state`: The store itself and its load lifecycle
//! - `source`: Feed abstraction and the `load` entry point
//! - `http`: HTTP(S) feed via `reqwest`
//! - `file`: Local JSON file feed

pub mod dataset;
pub mod file;
pub mod http;
pub mod models;
pub mod source;
pub mod state;

pub use dataset::Dataset;
pub use file::FileSource;
pub use http::HttpSource;
pub use models::{ProviderRecord, RecordId, Speciality};
pub use source::{load, DirectorySource};
pub use state::{LoadState, RecordStore};
