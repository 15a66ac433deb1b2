//! Relatedness ranking by shared categories and tags.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::models::Post;

const CATEGORY_WEIGHT: usize = 3;
const TAG_WEIGHT: usize = 1;

/// A candidate with its score, alive only while ranking.
struct ScoredPost<'a> {
    post: &'a Post,
    score: usize,
}

fn distinct(values: &[String]) -> HashSet<&str> {
    values.iter().map(String::as_str).collect()
}

/// Score `candidate` against the subject's distinct categories and tags.
fn score(candidate: &Post, categories: &HashSet<&str>, tags: &HashSet<&str>) -> usize {
    let shared_categories = distinct(&candidate.frontmatter.categories)
        .intersection(categories)
        .count();
    let shared_tags = distinct(&candidate.frontmatter.tags)
        .intersection(tags)
        .count();
    CATEGORY_WEIGHT * shared_categories + TAG_WEIGHT * shared_tags
}

/// Up to `limit` posts related to `subject`, best match first.
///
/// Each distinct shared category is worth 3, each distinct shared tag 1.
/// The subject itself and unrelated posts are excluded. Equal scores order
/// newest first.
pub fn related_posts(posts: &[Post], subject: &Post, limit: usize) -> Vec<Post> {
    let categories = distinct(&subject.frontmatter.categories);
    let tags = distinct(&subject.frontmatter.tags);

    let mut scored: Vec<ScoredPost<'_>> = posts
        .iter()
        .filter(|p| p.slug != subject.slug)
        .map(|post| ScoredPost {
            post,
            score: score(post, &categories, &tags),
        })
        .filter(|s| s.score > 0)
        .collect();

    scored.sort_by_key(|s| (Reverse(s.score), Reverse(s.post.frontmatter.date)));
    scored
        .into_iter()
        .take(limit)
        .map(|s| s.post.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures::{post, slugs};

    #[test]
    fn test_weighted_ordering() {
        let a = post("a", 5, &["tech", "news"], &["js"]);
        let posts = vec![
            a.clone(),
            post("c", 4, &["news"], &[]),
            post("b", 3, &["tech"], &["js"]),
            post("d", 2, &["cooking"], &["food"]),
        ];

        let related = related_posts(&posts, &a, 3);
        assert_eq!(slugs(&related), vec!["b", "c"]);
    }

    #[test]
    fn test_duplicates_count_once() {
        let subject = post("s", 0, &["tech"], &["js", "js"]);
        let posts = vec![
            subject.clone(),
            post("dup", 1, &["tech", "tech"], &["js", "js"]),
            post("tag-only", 2, &[], &["js"]),
        ];
        let scored: Vec<_> = related_posts(&posts, &subject, 5);
        assert_eq!(slugs(&scored), vec!["dup", "tag-only"]);

        let cats = distinct(&subject.frontmatter.categories);
        let tags = distinct(&subject.frontmatter.tags);
        assert_eq!(score(&posts[1], &cats, &tags), 4);
        assert_eq!(score(&posts[2], &cats, &tags), 1);
    }

    #[test]
    fn test_ties_break_by_newest() {
        let subject = post("s", 0, &["tech"], &[]);
        let posts = vec![
            post("older", 1, &["tech"], &[]),
            subject.clone(),
            post("newer", 7, &["tech"], &[]),
        ];
        assert_eq!(
            slugs(&related_posts(&posts, &subject, 3)),
            vec!["newer", "older"]
        );
    }

    #[test]
    fn test_limit_and_no_matches() {
        let subject = post("s", 0, &["tech"], &[]);
        let posts: Vec<_> = (1..=5)
            .map(|i| post(&format!("p{i}"), i, &["tech"], &[]))
            .collect();
        assert_eq!(related_posts(&posts, &subject, 2).len(), 2);

        let loner = post("l", 0, &["poetry"], &["haiku"]);
        assert!(related_posts(&posts, &loner, 3).is_empty());
    }
}
