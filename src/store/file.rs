//! Local JSON file provider feed.
//!
//! Reads the same JSON array the HTTP endpoint serves. Useful offline and as a
//! fixture in tests.

use super::models::{parse_feed, ProviderRecord};
use super::source::DirectorySource;
use crate::domain::error::Result;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::path::PathBuf;

/// Reads the provider feed from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<Vec<ProviderRecord>> {
        tracing::debug!(path = ?self.path, "reading provider feed file");
        let contents = tokio::fs::read_to_string(&self.path).await?;
        parse_feed(&contents)
    }
}

impl DirectorySource for FileSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<ProviderRecord>>> {
        self.read().boxed()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
