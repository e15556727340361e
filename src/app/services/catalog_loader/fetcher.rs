//! Source text retrieval
//!
//! A source location is either an `http(s)://` URL or a filesystem path;
//! the fetcher dispatches on the prefix. Both forms return the raw catalog
//! text; interpreting it is the caller's concern.

use tracing::debug;

use crate::{Error, Result};

/// Retrieves raw catalog text for a source location
#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    client: reqwest::Client,
}

impl SourceFetcher {
    /// Create a fetcher with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher reusing an existing HTTP client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch the text behind a source location
    pub async fn fetch(&self, location: &str) -> Result<String> {
        if location.starts_with("http://") || location.starts_with("https://") {
            self.fetch_url(location).await
        } else {
            self.fetch_file(location).await
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<String> {
        debug!("Fetching catalog from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::retrieval(
                url,
                format!("unexpected status {}", status),
            ));
        }

        Ok(response.text().await?)
    }

    async fn fetch_file(&self, path: &str) -> Result<String> {
        debug!("Reading catalog from {}", path);

        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read catalog file {}", path), e))
    }
}
