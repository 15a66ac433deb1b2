//! Weighted substring search.

use serde::Serialize;

use crate::models::Post;

/// Shortest trimmed query, in characters, that is searched at all.
pub const MIN_QUERY_CHARS: usize = 2;

const TITLE_WEIGHT: u32 = 10;
const DESCRIPTION_WEIGHT: u32 = 5;
const CATEGORIES_WEIGHT: u32 = 3;
const TAGS_WEIGHT: u32 = 2;
const CONTENT_WEIGHT: u32 = 1;

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

/// Sum of field weights whose text contains `term` (already lower-cased).
fn score(post: &Post, term: &str) -> u32 {
    let fm = &post.frontmatter;
    let fields = [
        (TITLE_WEIGHT, contains(&fm.title, term)),
        (DESCRIPTION_WEIGHT, contains(&fm.description, term)),
        (CATEGORIES_WEIGHT, contains(&fm.categories.join(" "), term)),
        (TAGS_WEIGHT, contains(&fm.tags.join(" "), term)),
        (CONTENT_WEIGHT, contains(&post.content, term)),
    ];
    fields
        .iter()
        .filter(|(_, hit)| *hit)
        .map(|(weight, _)| weight)
        .sum()
}

/// Up to `limit` posts matching `query`, best first.
///
/// Queries shorter than [`MIN_QUERY_CHARS`] after trimming match nothing.
/// Matching is case-insensitive substring containment; each field counts
/// once regardless of how often the term occurs. Equal scores keep the
/// input order.
pub fn search_posts(posts: &[Post], query: &str, limit: usize) -> Vec<Post> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let term = query.to_lowercase();

    let mut scored: Vec<(u32, &Post)> = posts
        .iter()
        .map(|post| (score(post, &term), post))
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable: ties keep input order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, post)| post.clone())
        .collect()
}

/// How a search outcome should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    /// Nothing was asked yet
    NoQuery,
    /// A query was given but is too short to run
    TooShort,
    /// The query ran and matched nothing
    NoMatches,
    Matches,
}

/// Search results together with the query that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Trimmed query
    pub query: String,
    pub state: SearchState,
    pub posts: Vec<Post>,
}

impl SearchResults {
    /// Run `query` against `posts`.
    pub fn run(posts: &[Post], query: &str, limit: usize) -> Self {
        let trimmed = query.trim();
        let results = search_posts(posts, trimmed, limit);
        let state = if trimmed.is_empty() {
            SearchState::NoQuery
        } else if trimmed.chars().count() < MIN_QUERY_CHARS {
            SearchState::TooShort
        } else if results.is_empty() {
            SearchState::NoMatches
        } else {
            SearchState::Matches
        };

        Self {
            query: trimmed.to_string(),
            state,
            posts: results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
