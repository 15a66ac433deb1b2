//! Category index.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CategoryEntry, CategoryPage, Pagination, Post};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize a category for use as a key and URL segment.
///
/// Lower-cases and replaces each whitespace run with a single `-`.
pub fn normalize_category(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

fn describe(display_name: &str) -> String {
    format!("Explore articles and insights about {display_name}.")
}

/// Derive every category from `posts`, most used first.
///
/// Counts are per post: a post listing the same category twice (in any
/// spelling that normalizes equally) counts once. Ties keep first-seen order.
pub fn all_categories(posts: &[Post]) -> Vec<CategoryEntry> {
    let mut entries: Vec<CategoryEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for post in posts {
        let mut seen_on_post = HashSet::new();
        for category in &post.frontmatter.categories {
            let key = normalize_category(category);
            if !seen_on_post.insert(key.clone()) {
                continue;
            }

            match positions.get(&key).copied() {
                Some(index) => {
                    let entry = &mut entries[index];
                    entry.posts += 1;
                    if post.frontmatter.date > entry.latest_post.frontmatter.date {
                        entry.latest_post = post.clone();
                    }
                }
                None => {
                    positions.insert(key.clone(), entries.len());
                    entries.push(CategoryEntry {
                        name: key,
                        display_name: category.clone(),
                        posts: 1,
                        description: describe(category),
                        latest_post: post.clone(),
                    });
                }
            }
        }
    }

    entries.sort_by(|a, b| b.posts.cmp(&a.posts));
    entries
}

/// Whether any of the post's categories normalizes to `key`.
pub fn has_category(post: &Post, key: &str) -> bool {
    post.frontmatter
        .categories
        .iter()
        .any(|c| normalize_category(c) == key)
}

/// One page of the posts carrying a category.
///
/// `page` is 1-based. Pages past the end return no posts with the pagination
/// totals still filled in.
pub fn posts_by_category(
    posts: &[Post],
    category: &str,
    page: usize,
    page_size: usize,
) -> CategoryPage {
    let key = normalize_category(category);
    let matching: Vec<&Post> = posts.iter().filter(|p| has_category(p, &key)).collect();

    let pagination = Pagination::new(page, page_size, matching.len());
    let posts = matching[pagination.bounds(page_size)]
        .iter()
        .map(|p| (*p).clone())
        .collect();

    CategoryPage {
        posts,
        category: key,
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures::{post, slugs};

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Web Dev"), "web-dev");
        assert_eq!(normalize_category("Machine \t Learning"), "machine-learning");
        assert_eq!(normalize_category("rust"), "rust");
        assert_eq!(normalize_category(" Padded"), "-padded");
    }

    #[test]
    fn test_counts_order_and_display_name() {
        let posts = vec![
            post("p3", 3, &["News"], &[]),
            post("p2", 2, &["Web Dev", "news"], &[]),
            post("p1", 1, &["web  dev", "Rust"], &[]),
            post("p0", 0, &["web dev"], &[]),
        ];

        let categories = all_categories(&posts);
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["web-dev", "news", "rust"]);

        let web = &categories[0];
        assert_eq!(web.posts, 3);
        assert_eq!(web.display_name, "Web Dev");
        assert_eq!(web.latest_post.slug, "p2");
        assert_eq!(web.description, "Explore articles and insights about Web Dev.");

        assert_eq!(categories[1].posts, 2);
        assert_eq!(categories[1].display_name, "News");
    }

    #[test]
    fn test_latest_post_ignores_input_order() {
        let posts = vec![
            post("older", 1, &["tech"], &[]),
            post("newest", 9, &["tech"], &[]),
            post("tie", 9, &["tech"], &[]),
        ];
        let categories = all_categories(&posts);
        assert_eq!(categories[0].latest_post.slug, "newest");
    }

    #[test]
    fn test_duplicate_category_on_one_post_counts_once() {
        let posts = vec![post("a", 0, &["Tech", "tech"], &[])];
        assert_eq!(all_categories(&posts)[0].posts, 1);
    }

    #[test]
    fn test_idempotent() {
        let posts = vec![
            post("a", 2, &["x", "y"], &[]),
            post("b", 1, &["y"], &[]),
        ];
        assert_eq!(all_categories(&posts), all_categories(&posts));
    }

    #[test]
    fn test_third_page_of_twenty_five() {
        let posts: Vec<_> = (0..25)
            .map(|i| post(&format!("p{i}"), 100 - i, &["x"], &[]))
            .chain([post("other", 200, &["y"], &[])])
            .collect();

        let page = posts_by_category(&posts, "x", 3, 10);
        assert_eq!(page.category, "x");
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_posts, 25);
        assert!(!page.pagination.has_next_page);
        assert!(page.pagination.has_prev_page);
        assert_eq!(
            slugs(&page.posts),
            vec!["p20", "p21", "p22", "p23", "p24"]
        );
    }

    #[test]
    fn test_page_past_end_and_unknown_category() {
        let posts = vec![post("a", 0, &["Web Dev"], &[])];

        let page = posts_by_category(&posts, "web-dev", 4, 10);
        assert!(page.posts.is_empty());
        assert_eq!(page.pagination.total_posts, 1);
        assert_eq!(page.pagination.total_pages, 1);

        let missing = posts_by_category(&posts, "cooking", 1, 10);
        assert!(missing.posts.is_empty());
        assert_eq!(missing.pagination.total_pages, 0);
    }
}
