//! Raw content item as delivered by the remote endpoint.

use serde::{Deserialize, Serialize};

/// Publication state of a content item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Published,
    #[default]
    #[serde(other)]
    Other,
}

/// A single article record from the content endpoint.
///
/// Only `slug` is required; every other field may be absent or `null` and is
/// resolved to a default when the item is shaped into a
/// [`Post`](crate::models::Post).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentItem {
    pub slug: String,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub noindex: Option<bool>,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub word_count: Option<u64>,
    #[serde(default)]
    pub reading_time: Option<u64>,
}

impl RawContentItem {
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }
}
