//! [`DatasetSource`] implementations.
//!
//! Fetching is the only part of the pipeline that suspends. Everything after
//! the text is in memory is synchronous.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::{DatasetSource, SourceError};

/// Reads the dataset from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    /// Creates a source for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Downloads the dataset over HTTP(S).
#[derive(Debug, Clone)]
pub struct UrlSource {
    url: String,
    client: reqwest::Client,
}

impl UrlSource {
    /// Creates a source for `url` with a default client.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for UrlSource {
    fn label(&self) -> &str {
        &self.url
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

/// A dataset already held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    label: String,
    text: String,
}

impl InlineSource {
    /// Wraps `text` under the given label.
    #[must_use]
    pub fn new(label: &str, text: impl Into<String>) -> Self {
        Self {
            label: label.to_owned(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for InlineSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

/// Picks a source for a location string: `http://` and `https://` locations
/// are downloaded, anything else is read from disk.
#[must_use]
pub fn source_for_location(location: &str) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(UrlSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
