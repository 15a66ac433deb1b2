//! Site-wide statistics.

use chrono::{DateTime, Utc};

use crate::models::{Post, SiteStats};
use crate::utils::div_ceil_or_zero;

use super::category::all_categories;

/// Aggregate counts over `posts`, which are expected newest first.
///
/// `now` stands in for `last_updated` when there are no posts.
pub fn site_stats(posts: &[Post], now: DateTime<Utc>) -> SiteStats {
    let total_words = posts.iter().map(|p| p.frontmatter.schema.word_count).sum();
    let total_reading: u64 = posts.iter().map(|p| p.frontmatter.schema.reading_time).sum();

    SiteStats {
        total_posts: posts.len(),
        total_categories: all_categories(posts).len(),
        total_words,
        avg_reading_time: div_ceil_or_zero(total_reading as usize, posts.len()) as u64,
        last_updated: posts.first().map_or(now, |p| p.frontmatter.date),
    }
}
