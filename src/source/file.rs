//! Local file content source.
//!
//! Reads the same JSON document the HTTP endpoint serves. Useful for offline
//! builds and for pinning a content snapshot.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::RawContentItem;
use crate::source::{ContentSource, parse_items, published_newest_first};

#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn fetch_published(&self) -> Result<Vec<RawContentItem>> {
        log::debug!("Reading content from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        let items = parse_items(&bytes)?;
        Ok(published_newest_first(items))
    }
}
