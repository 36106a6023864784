//! Feed abstraction.
//!
//! This module defines the [`DirectorySource`] trait that abstracts over where
//! provider objects come from, and [`load`], which turns a source into a
//! complete [`Dataset`].
//!
//! Sources only fetch the raw feed. Normalization happens in [`load`].

use super::dataset::Dataset;
use super::models::ProviderRecord;
use crate::domain::error::Result;
use futures_util::future::BoxFuture;
use tracing::Instrument;

/// Abstraction over provider feeds.
///
/// # Implementations
///
/// - [`HttpSource`](super::HttpSource): HTTP(S) GET against a JSON endpoint
/// - [`FileSource`](super::FileSource): JSON file on disk
pub trait DirectorySource {
    /// Fetches the raw provider objects.
    ///
    /// A single best-effort attempt. No retries, no timeout beyond the
    /// transport's own defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed cannot be reached, answers with a
    /// non-success status, or is not a JSON array of provider objects.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<ProviderRecord>>>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Loads a complete dataset from `source`.
///
/// Either every provider converts and the dataset with its category index is
/// returned, or an error is returned and nothing is produced.
///
/// # Errors
///
/// Propagates fetch, status, parse, and record validation errors.
///
/// # Examples
///
/// ```no_run
/// use docfinder::store::{load, FileSource};
///
/// # async fn run() -> docfinder::Result<()> {
/// let dataset = load(&FileSource::new("providers.json")).await?;
/// println!("{} providers", dataset.len());
/// # Ok(())
/// # }
/// ```
pub async fn load(source: &dyn DirectorySource) -> Result<Dataset> {
    let span = tracing::debug_span!("load_directory", source = %source.describe());

    async {
        let providers = source.fetch().await?;
        let dataset = Dataset::from_providers(providers)?;

        tracing::debug!(
            records = dataset.len(),
            categories = dataset.categories().len(),
            "directory loaded"
        );
        Ok(dataset)
    }
    .instrument(span)
    .await
}
