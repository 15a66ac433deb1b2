//! Content sources.
//!
//! A [`ContentSource`] owns the only I/O boundary of the library: it yields
//! the published content items, newest first. Two backends are provided:
//!
//! - [`HttpContentSource`]: GET against the configured JSON endpoint
//! - [`FileContentSource`]: the same JSON document read from disk

pub mod file;
pub mod http;

use std::cmp::Reverse;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::RawContentItem;
use crate::utils::timestamp_or_epoch;

// Re-export for convenience
pub use file::FileContentSource;
pub use http::HttpContentSource;

/// Trait for content backends.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch all published items, sorted by publish date descending.
    async fn fetch_published(&self) -> Result<Vec<RawContentItem>>;
}

/// Parse a response body into content items.
///
/// The body must be a JSON array. Elements that do not match the item schema
/// are dropped with a warning; the rest of the array is kept.
pub fn parse_items(body: &[u8]) -> Result<Vec<RawContentItem>> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Array(elements) = value else {
        return Err(AppError::validation("content body is not a JSON array"));
    };

    let total = elements.len();
    let items: Vec<RawContentItem> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Dropping malformed content item #{}: {}", index, e);
                None
            }
        })
        .collect();

    if items.len() < total {
        log::warn!("Kept {} of {} content items", items.len(), total);
    }
    Ok(items)
}

/// Keep published items and order them newest first.
///
/// Missing or invalid publish dates sort as the Unix epoch. Items sharing a
/// date keep their source order.
pub fn published_newest_first(items: Vec<RawContentItem>) -> Vec<RawContentItem> {
    let mut published: Vec<RawContentItem> =
        items.into_iter().filter(RawContentItem::is_published).collect();
    published.sort_by_cached_key(|item| Reverse(timestamp_or_epoch(item.publish_date.as_deref())));
    published
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentStatus;

    fn item(slug: &str, status: ContentStatus, date: Option<&str>) -> RawContentItem {
        RawContentItem {
            slug: slug.to_string(),
            status,
            publish_date: date.map(String::from),
            ..RawContentItem::default()
        }
    }

    #[test]
    fn test_parse_items_drops_malformed() {
        let body = br#"[
            {"slug": "ok", "status": "published"},
            {"title": "no slug"},
            {"slug": 42},
            {"slug": "also-ok", "tags": ["a"]}
        ]"#;
        let items = parse_items(body).unwrap();
        let slugs: Vec<_> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["ok", "also-ok"]);
    }

    #[test]
    fn test_parse_items_rejects_non_array() {
        assert!(matches!(
            parse_items(br#"{"items": []}"#),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(parse_items(b"not json"), Err(AppError::Json(_))));
    }

    #[test]
    fn test_published_filter_and_order() {
        let items = vec![
            item("old", ContentStatus::Published, Some("2023-01-01")),
            item("draft", ContentStatus::Draft, Some("2025-01-01")),
            item("undated", ContentStatus::Published, None),
            item("new", ContentStatus::Published, Some("2024-06-01T12:00:00Z")),
            item("other", ContentStatus::Other, Some("2024-01-01")),
            item("garbled", ContentStatus::Published, Some("soon")),
        ];

        let slugs: Vec<_> = published_newest_first(items)
            .into_iter()
            .map(|i| i.slug)
            .collect();
        assert_eq!(slugs, vec!["new", "old", "undated", "garbled"]);
    }
}
