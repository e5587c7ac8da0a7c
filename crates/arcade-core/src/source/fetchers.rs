//! Concrete catalog fetchers.

use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use super::CatalogFetcher;
use crate::error::{ArcadeError, Result};

/// Catalog shipped inside the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../catalog/games.json");

/// Serves [`BUNDLED_CATALOG`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledFetcher;

#[async_trait]
impl CatalogFetcher for BundledFetcher {
    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(BUNDLED_CATALOG.as_bytes().to_vec())
    }
}

/// Reads the catalog from a local file.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogFetcher for FileFetcher {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            ArcadeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", self.path.display(), e),
            ))
        })
    }
}

/// Downloads the catalog over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: Url,
}

impl HttpFetcher {
    /// Creates a fetcher with a fresh HTTP client.
    pub fn new(url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a fetcher that reuses an existing HTTP client.
    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl CatalogFetcher for HttpFetcher {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArcadeError::HttpStatus {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
