//! Category index and pagination shapes.

use serde::{Deserialize, Serialize};

use crate::models::Post;
use crate::utils::div_ceil_or_zero;

/// One category derived from the live post set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    /// Normalized key (lower-case, whitespace runs as `-`)
    pub name: String,
    /// First-seen original spelling
    pub display_name: String,
    /// Number of posts carrying this category
    pub posts: usize,
    pub description: String,
    /// Most recent post carrying this category
    pub latest_post: Post,
}

/// Page position within a filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
}

impl Pagination {
    /// Compute pagination for a 1-based `page`.
    ///
    /// Pages past the end still report consistent totals; page 0 is read as 1.
    pub fn new(page: usize, page_size: usize, total_posts: usize) -> Self {
        let current_page = page.max(1);
        let total_pages = div_ceil_or_zero(total_posts, page_size);
        let has_next_page = current_page < total_pages;
        let has_prev_page = current_page > 1;

        Self {
            current_page,
            total_pages,
            total_posts,
            has_next_page,
            has_prev_page,
            next_page: has_next_page.then_some(current_page + 1),
            prev_page: has_prev_page.then_some(current_page - 1),
        }
    }

    /// Index range of the current page within the full listing.
    pub fn bounds(&self, page_size: usize) -> std::ops::Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(page_size)
            .min(self.total_posts);
        let end = start.saturating_add(page_size).min(self.total_posts);
        start..end
    }
}

/// Posts of one category, sliced to a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPage {
    pub posts: Vec<Post>,
    /// Normalized category name that was requested
    pub category: String,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_partial_page() {
        let p = Pagination::new(3, 10, 25);
        assert_eq!(p.total_pages, 3);
        assert!(!p.has_next_page);
        assert!(p.has_prev_page);
        assert_eq!(p.next_page, None);
        assert_eq!(p.prev_page, Some(2));
        assert_eq!(p.bounds(10), 20..25);
    }

    #[test]
    fn test_first_page() {
        let p = Pagination::new(1, 10, 25);
        assert_eq!(p.next_page, Some(2));
        assert_eq!(p.prev_page, None);
        assert_eq!(p.bounds(10), 0..10);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let p = Pagination::new(9, 10, 25);
        assert_eq!(p.current_page, 9);
        assert_eq!(p.total_pages, 3);
        assert!(!p.has_next_page);
        assert_eq!(p.prev_page, Some(8));
        assert!(p.bounds(10).is_empty());
    }

    #[test]
    fn test_empty_listing() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next_page);
        assert!(!p.has_prev_page);
        assert!(p.bounds(10).is_empty());
    }

    #[test]
    fn test_page_zero_reads_as_first() {
        assert_eq!(Pagination::new(0, 10, 5).current_page, 1);
    }
}
