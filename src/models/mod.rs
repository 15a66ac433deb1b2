// src/models/mod.rs

//! Domain models for the aggregation library.
//!
//! This module contains all data structures used throughout the library,
//! organized by their primary purpose.

mod category;
mod config;
mod content;
mod post;
mod stats;

// Re-export all public types
pub use category::{CategoryEntry, CategoryPage, Pagination};
pub use config::{
    Config, ENDPOINT_ENV, ListingConfig, SITE_URL_ENV, SiteConfig, SourceConfig,
};
pub use content::{ContentStatus, RawContentItem};
pub use post::{
    Frontmatter, Post, PostSchema, SCHEMA_TYPE, resolve_author, resolve_date_modified,
    resolve_description, resolve_reading_time,
};
pub use stats::SiteStats;
