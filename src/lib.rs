// src/lib.rs

//! Blog content aggregation library.
//!
//! Fetches published content items from a JSON endpoint, caches them for a
//! fixed window and derives everything a static blog front-end renders:
//! posts, categories, related posts, search results, site statistics and
//! the sitemap.

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod models;
pub mod services;
pub mod sitemap;
pub mod source;
pub mod utils;

pub use cache::{CACHE_TTL, ContentCache};
pub use error::{AppError, Result};
pub use services::{Blog, PostRepository};
