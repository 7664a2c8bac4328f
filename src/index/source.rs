// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where index bytes come from.
//!
//! In a browser the page fetches `/search.json` itself and hands the body to
//! the WASM engine, so the only source it needs is [`StaticSource`]. Natively
//! we can read the built site from disk or fetch it from a live deployment.

use std::future::Future;

use crate::error::IndexLoadError;

/// Fetch capability for the raw index body.
pub trait IndexSource {
    /// Fetch the raw JSON body. Called once per load attempt.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, IndexLoadError>> + Send;

    /// Human-readable location for logs and error messages.
    fn describe(&self) -> String;
}

/// Bytes already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    bytes: Vec<u8>,
    label: String,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            label: "memory".to_string(),
        }
    }

    pub fn labeled(bytes: impl Into<Vec<u8>>, label: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            label: label.into(),
        }
    }
}

impl IndexSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>, IndexLoadError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// A `search.json` on disk, typically in the site build output.
#[cfg(feature = "runtime")]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: std::path::PathBuf,
}

#[cfg(feature = "runtime")]
impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "runtime")]
impl IndexSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, IndexLoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| IndexLoadError::Io {
                location: self.describe(),
                reason: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// `GET <site>/search.json` over HTTP.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// Fetch an absolute index URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Fetch `index_path` relative to a site root.
    pub fn for_site(site: &str, index_path: &str) -> Self {
        Self::new(join_url(site, index_path))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "http")]
impl IndexSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, IndexLoadError> {
        let fetch_err = |e: reqwest::Error| IndexLoadError::Fetch {
            location: self.url.clone(),
            reason: e.to_string(),
        };

        let response = self.client.get(&self.url).send().await.map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(IndexLoadError::Status {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(fetch_err)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Join a site root and a site-relative path with exactly one slash.
pub fn join_url(site: &str, path: &str) -> String {
    format!(
        "{}/{}",
        site.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// A source picked from a user-supplied location string.
///
/// - `http://` / `https://` → the site's index over HTTP
/// - a directory → the index path inside it (a built site)
/// - anything else → a JSON file
#[cfg(feature = "runtime")]
#[derive(Debug, Clone)]
pub enum SiteSource {
    File(FileSource),
    #[cfg(feature = "http")]
    Http(HttpSource),
}

#[cfg(feature = "runtime")]
impl SiteSource {
    pub fn resolve(location: &str, index_path: &str) -> Self {
        #[cfg(feature = "http")]
        if location.starts_with("http://") || location.starts_with("https://") {
            return SiteSource::Http(HttpSource::for_site(location, index_path));
        }

        let path = std::path::Path::new(location);
        if path.is_dir() {
            SiteSource::File(FileSource::new(path.join(index_path.trim_start_matches('/'))))
        } else {
            SiteSource::File(FileSource::new(path))
        }
    }
}

#[cfg(feature = "runtime")]
impl IndexSource for SiteSource {
    async fn fetch(&self) -> Result<Vec<u8>, IndexLoadError> {
        match self {
            SiteSource::File(source) => source.fetch().await,
            #[cfg(feature = "http")]
            SiteSource::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            SiteSource::File(source) => source.describe(),
            #[cfg(feature = "http")]
            SiteSource::Http(source) => source.describe(),
        }
    }
}
