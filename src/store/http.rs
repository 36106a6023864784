//! HTTP(S) provider feed.

use super::models::{parse_feed, ProviderRecord};
use super::source::DirectorySource;
use crate::domain::error::{DirectoryError, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Fetches the provider feed with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Creates a source for `url` with a default client.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a source that reuses an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    async fn get(&self) -> Result<Vec<ProviderRecord>> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "fetched provider feed"
        );

        if !status.is_success() {
            let preview: String = body.chars().take(300).collect();
            tracing::warn!(
                status = status.as_u16(),
                preview = %preview,
                "provider feed returned non-success status"
            );
            return Err(DirectoryError::Status {
                status: status.as_u16(),
            });
        }

        parse_feed(&body)
    }
}

impl DirectorySource for HttpSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<ProviderRecord>>> {
        self.get().boxed()
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
