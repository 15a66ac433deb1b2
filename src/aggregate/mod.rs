//! Pure derivations over the in-memory post set.
//!
//! - `category`: category index and paginated category listings
//! - `related`: posts sharing categories/tags with a subject post
//! - `search`: weighted substring search
//! - `stats`: site-wide counts

pub mod category;
pub mod related;
pub mod search;
pub mod stats;

pub use category::{all_categories, normalize_category, posts_by_category};
pub use related::related_posts;
pub use search::{MIN_QUERY_CHARS, SearchResults, SearchState, search_posts};
pub use stats::site_stats;
