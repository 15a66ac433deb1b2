//! Site-wide aggregate figures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total_posts: usize,
    pub total_categories: usize,
    pub total_words: u64,
    /// Minutes, rounded up; zero for an empty site
    pub avg_reading_time: u64,
    pub last_updated: DateTime<Utc>,
}
