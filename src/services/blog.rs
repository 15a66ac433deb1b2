// src/services/blog.rs

//! Read API for page renderers.
//!
//! Every operation takes a fresh read of the post set and derives its answer
//! from it. Nothing here fails: a missing post is `None`, an unusable search
//! query is an empty [`SearchResults`], and content fetch failures are
//! absorbed by the cache.

use std::sync::Arc;

use chrono::Utc;

use crate::aggregate::{self, SearchResults};
use crate::cache::ContentCache;
use crate::error::Result;
use crate::models::{CategoryEntry, CategoryPage, Config, ListingConfig, Post, SiteStats};
use crate::services::PostRepository;
use crate::sitemap::{SitemapEntry, render_sitemap, sitemap_entries};
use crate::source::{ContentSource, HttpContentSource};

pub struct Blog {
    posts: PostRepository,
    listing: ListingConfig,
}

impl Blog {
    /// Build the API over an existing cache.
    pub fn new(cache: Arc<ContentCache>, config: &Config) -> Self {
        Self {
            posts: PostRepository::new(cache, config.site.clone()),
            listing: config.listing.clone(),
        }
    }

    /// Build the API over any content source, wrapped in a fresh cache.
    pub fn with_source(source: impl ContentSource + 'static, config: &Config) -> Self {
        Self::new(Arc::new(ContentCache::new(source)), config)
    }

    /// Build the API over the HTTP endpoint named in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpContentSource::new(&config.source)?;
        log::info!("Using content endpoint {}", source.endpoint());
        Ok(Self::with_source(source, config))
    }

    pub fn listing(&self) -> &ListingConfig {
        &self.listing
    }

    pub async fn get_all_posts(&self) -> Vec<Post> {
        self.posts.get_all_posts().await
    }

    pub async fn get_all_post_slugs(&self) -> Vec<String> {
        self.posts.get_all_post_slugs().await
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.get_post_by_slug(slug).await
    }

    pub async fn get_featured_posts(&self, limit: usize) -> Vec<Post> {
        self.posts.get_featured_posts(limit).await
    }

    pub async fn get_related_posts(&self, post: &Post, limit: usize) -> Vec<Post> {
        let posts = self.get_all_posts().await;
        aggregate::related_posts(&posts, post, limit)
    }

    pub async fn search_posts(&self, query: &str, limit: usize) -> SearchResults {
        let posts = self.get_all_posts().await;
        SearchResults::run(&posts, query, limit)
    }

    pub async fn get_all_categories(&self) -> Vec<CategoryEntry> {
        aggregate::all_categories(&self.get_all_posts().await)
    }

    pub async fn get_posts_by_category(
        &self,
        category: &str,
        page: usize,
        page_size: usize,
    ) -> CategoryPage {
        let posts = self.get_all_posts().await;
        aggregate::posts_by_category(&posts, category, page, page_size)
    }

    pub async fn get_site_stats(&self) -> SiteStats {
        aggregate::site_stats(&self.get_all_posts().await, Utc::now())
    }

    pub async fn get_sitemap_entries(&self) -> Vec<SitemapEntry> {
        let posts = self.get_all_posts().await;
        let categories = aggregate::all_categories(&posts);
        sitemap_entries(&posts, &categories, self.posts.site(), Utc::now())
    }

    pub async fn get_sitemap_xml(&self) -> String {
        render_sitemap(&self.get_sitemap_entries().await)
    }
}
