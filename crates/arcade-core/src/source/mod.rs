//! Catalog sources and fetching.
//!
//! A catalog comes from one of three places: the copy bundled into the
//! binary, a local JSON file, or an HTTP(S) URL. Fetching is the only async
//! part of catalog handling; the result is parsed and handed to the store.

mod fetchers;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use url::Url;

use crate::catalog::{ParsedCatalog, parse_catalog};
use crate::error::{ArcadeError, Result};

pub use fetchers::{BUNDLED_CATALOG, BundledFetcher, FileFetcher, HttpFetcher};

/// Fetches the raw catalog payload.
///
/// Implementations do not retry. Callers decide what a failure means.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Human-readable description of where the catalog comes from.
    fn describe(&self) -> String;

    /// Returns the raw catalog bytes.
    async fn fetch(&self) -> Result<Vec<u8>>;
}

/// Where to load the catalog from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary.
    #[default]
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    Url(Url),
}

impl CatalogSource {
    /// Builds the fetcher for this source.
    pub fn fetcher(&self) -> Box<dyn CatalogFetcher> {
        match self {
            CatalogSource::Bundled => Box::new(BundledFetcher),
            CatalogSource::File(path) => Box::new(FileFetcher::new(path.clone())),
            CatalogSource::Url(url) => Box::new(HttpFetcher::new(url.clone())),
        }
    }
}

impl FromStr for CatalogSource {
    type Err = ArcadeError;

    /// Parses `bundled`, an `http://` / `https://` URL, or a file path.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ArcadeError::InvalidSource(
                "Catalog source must not be empty".to_string(),
            ));
        }

        if s.eq_ignore_ascii_case("bundled") {
            return Ok(CatalogSource::Bundled);
        }

        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s)
                .map_err(|e| ArcadeError::InvalidSource(format!("{}: {}", s, e)))?;
            return Ok(CatalogSource::Url(url));
        }

        if let Some(rest) = s.strip_prefix("file://") {
            return Ok(CatalogSource::File(PathBuf::from(rest)));
        }

        if s.contains("://") {
            return Err(ArcadeError::InvalidSource(format!(
                "Unsupported scheme in {}",
                s
            )));
        }

        Ok(CatalogSource::File(PathBuf::from(s)))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Fetches and parses a catalog.
pub async fn load_catalog(fetcher: &dyn CatalogFetcher) -> Result<ParsedCatalog> {
    tracing::debug!(source = %fetcher.describe(), "Fetching catalog");
    let payload = fetcher.fetch().await?;
    parse_catalog(&payload)
}
