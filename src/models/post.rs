//! Normalized post shape and the field-default rules that produce it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::models::{RawContentItem, SiteConfig};
use crate::utils::{div_ceil_or_zero, parse_timestamp, timestamp_or_epoch};

/// Schema.org type attached to every post.
pub const SCHEMA_TYPE: &str = "BlogPosting";

/// Characters of body text per minute of reading time.
const CHARS_PER_MINUTE: usize = 1000;

/// A published, render-ready post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique key
    pub slug: String,
    pub frontmatter: Frontmatter,
    /// Body text
    pub content: String,
    pub excerpt: String,
}

/// Normalized attribute bag of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    /// Publish date; the Unix epoch when the source date is missing or invalid
    pub date: DateTime<Utc>,
    pub image: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub author: String,
    pub description: String,
    pub featured: bool,
    pub meta_title: Option<String>,
    pub canonical: Option<String>,
    pub noindex: bool,
    pub schema: PostSchema,
    /// JSON-LD graph, only attached on single-post lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<Value>,
}

/// Derived schema.org fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub date_published: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub word_count: u64,
    pub reading_time: u64,
}

impl Post {
    /// Shape a raw content item, applying the default for every missing field.
    pub fn from_raw(item: &RawContentItem, default_author: &str) -> Self {
        let date = timestamp_or_epoch(item.publish_date.as_deref());
        let content = item.content.clone().unwrap_or_default();

        Self {
            slug: item.slug.clone(),
            frontmatter: Frontmatter {
                title: item.title.clone().unwrap_or_default(),
                date,
                image: item.featured_image_url.clone(),
                categories: item.categories.clone().unwrap_or_default(),
                tags: item.tags.clone().unwrap_or_default(),
                author: resolve_author(item, default_author),
                description: resolve_description(item),
                featured: item.featured.unwrap_or(false),
                meta_title: item.meta_title.clone(),
                canonical: item.canonical_url.clone(),
                noindex: item.noindex.unwrap_or(false),
                schema: PostSchema {
                    kind: SCHEMA_TYPE.to_string(),
                    date_published: date,
                    date_modified: resolve_date_modified(item, date),
                    word_count: item.word_count.unwrap_or(0),
                    reading_time: resolve_reading_time(item),
                },
                structured_data: None,
            },
            excerpt: item.excerpt.clone().unwrap_or_default(),
            content,
        }
    }

    /// Copy of this post flagged as featured.
    pub fn as_featured(&self) -> Self {
        let mut post = self.clone();
        post.frontmatter.featured = true;
        post
    }

    /// Copy of this post with its JSON-LD graph attached.
    pub fn with_structured_data(&self, site: &SiteConfig) -> Self {
        let mut post = self.clone();
        post.frontmatter.structured_data = Some(self.structured_data(site));
        post
    }

    /// Build the JSON-LD `BlogPosting` graph from this post's own fields.
    pub fn structured_data(&self, site: &SiteConfig) -> Value {
        let fm = &self.frontmatter;
        let url = fm
            .canonical
            .clone()
            .unwrap_or_else(|| site.post_url(&self.slug));

        let mut graph = json!({
            "@context": "https://schema.org",
            "@type": fm.schema.kind,
            "headline": fm.title,
            "description": fm.description,
            "datePublished": fm.schema.date_published.to_rfc3339(),
            "dateModified": fm.schema.date_modified.to_rfc3339(),
            "author": {
                "@type": "Person",
                "name": fm.author,
            },
            "wordCount": fm.schema.word_count,
            "timeRequired": format!("PT{}M", fm.schema.reading_time),
            "mainEntityOfPage": {
                "@type": "WebPage",
                "@id": url,
            },
        });

        // Optional keys are omitted rather than emitted as null.
        if let Some(map) = graph.as_object_mut() {
            if let Some(image) = &fm.image {
                map.insert("image".into(), Value::String(image.clone()));
            }
            if !fm.tags.is_empty() {
                map.insert("keywords".into(), Value::String(fm.tags.join(", ")));
            }
            if let Some(section) = fm.categories.first() {
                map.insert("articleSection".into(), Value::String(section.clone()));
            }
        }
        graph
    }
}

/// `author`, else the site placeholder.
pub fn resolve_author(item: &RawContentItem, default_author: &str) -> String {
    non_empty(item.author.as_deref())
        .unwrap_or(default_author)
        .to_string()
}

/// `metaDescription`, else `excerpt`, else empty.
pub fn resolve_description(item: &RawContentItem) -> String {
    non_empty(item.meta_description.as_deref())
        .or_else(|| non_empty(item.excerpt.as_deref()))
        .unwrap_or_default()
        .to_string()
}

/// `updatedAt` when it parses, else the publish date.
pub fn resolve_date_modified(item: &RawContentItem, published: DateTime<Utc>) -> DateTime<Utc> {
    item.updated_at
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(published)
}

/// `readingTime`, else one minute per thousand characters of body, rounded up.
pub fn resolve_reading_time(item: &RawContentItem) -> u64 {
    item.reading_time.unwrap_or_else(|| {
        let chars = item.content.as_deref().map_or(0, |c| c.chars().count());
        div_ceil_or_zero(chars, CHARS_PER_MINUTE) as u64
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
