// src/services/posts.rs

//! Post repository.
//!
//! Remaps the cached snapshot into [`Post`]s on every call; the repository
//! keeps no state of its own.

use std::sync::Arc;

use crate::cache::ContentCache;
use crate::models::{Post, RawContentItem, SiteConfig};

/// Read access to the live post set.
pub struct PostRepository {
    cache: Arc<ContentCache>,
    site: SiteConfig,
}

impl PostRepository {
    pub fn new(cache: Arc<ContentCache>, site: SiteConfig) -> Self {
        Self { cache, site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// All published posts, newest first.
    pub async fn get_all_posts(&self) -> Vec<Post> {
        let snapshot = self.cache.get_all().await;
        shape_posts(&snapshot, &self.site.default_author)
    }

    /// Slugs of all posts, newest first.
    pub async fn get_all_post_slugs(&self) -> Vec<String> {
        self.get_all_posts()
            .await
            .into_iter()
            .map(|post| post.slug)
            .collect()
    }

    /// The post with `slug`, with its JSON-LD graph attached.
    pub async fn get_post_by_slug(&self, slug: &str) -> Option<Post> {
        let posts = self.get_all_posts().await;
        find_by_slug(&posts, slug).map(|post| post.with_structured_data(&self.site))
    }

    /// Featured posts padded with the newest others, up to `limit`.
    pub async fn get_featured_posts(&self, limit: usize) -> Vec<Post> {
        featured_posts(&self.get_all_posts().await, limit)
    }
}

/// Shape raw items into posts, preserving order.
pub fn shape_posts(items: &[RawContentItem], default_author: &str) -> Vec<Post> {
    items
        .iter()
        .map(|item| Post::from_raw(item, default_author))
        .collect()
}

/// First post carrying `slug`.
///
/// Posts are newest first, so a slug emitted twice by the source resolves to
/// its newest item.
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|post| post.slug == slug)
}

/// Explicitly featured posts first, then the newest non-featured ones, up to
/// `limit`. Every returned copy is flagged featured; `posts` is not modified.
pub fn featured_posts(posts: &[Post], limit: usize) -> Vec<Post> {
    let (featured, others): (Vec<&Post>, Vec<&Post>) =
        posts.iter().partition(|post| post.frontmatter.featured);

    featured
        .into_iter()
        .chain(others)
        .take(limit)
        .map(Post::as_featured)
        .collect()
}
