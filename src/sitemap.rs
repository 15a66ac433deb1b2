//! Sitemap derivation.
//!
//! Entries cover the home page, the post and category listings, every post
//! and every category page.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::{CategoryEntry, Post, SiteConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: DateTime<Utc>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// Build sitemap entries. Listing pages are stamped with `now`, posts with
/// their modification date.
pub fn sitemap_entries(
    posts: &[Post],
    categories: &[CategoryEntry],
    site: &SiteConfig,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let page = |path: &str, changefreq, priority| SitemapEntry {
        loc: site.url(path),
        lastmod: now,
        changefreq,
        priority,
    };

    let mut entries = vec![
        page("", ChangeFreq::Daily, 1.0),
        page(&site.blog_folder, ChangeFreq::Daily, 0.8),
        page("categories", ChangeFreq::Weekly, 0.7),
    ];

    entries.extend(posts.iter().map(|post| SitemapEntry {
        loc: site.post_url(&post.slug),
        lastmod: post.frontmatter.schema.date_modified,
        changefreq: ChangeFreq::Monthly,
        priority: 0.6,
    }));

    entries.extend(
        categories
            .iter()
            .map(|c| page(&format!("categories/{}", c.name), ChangeFreq::Weekly, 0.5)),
    );

    entries
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.loc),
            entry.lastmod.to_rfc3339_opts(SecondsFormat::Millis, true),
            entry.changefreq.as_str(),
            entry.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{all_categories, fixtures::post};

    #[test]
    fn test_entries_cover_pages_posts_and_categories() {
        let posts = vec![post("hello", 1, &["Web Dev"], &[])];
        let categories = all_categories(&posts);
        let now = Utc::now();

        let entries = sitemap_entries(&posts, &categories, &SiteConfig::default(), now);
        let locs: Vec<_> = entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://your-domain.com",
                "https://your-domain.com/posts",
                "https://your-domain.com/categories",
                "https://your-domain.com/posts/hello",
                "https://your-domain.com/categories/web-dev",
            ]
        );
        assert_eq!(entries[3].lastmod, posts[0].frontmatter.schema.date_modified);
        assert_eq!(entries[3].changefreq, ChangeFreq::Monthly);
        assert_eq!(entries[0].lastmod, now);
    }

    #[test]
    fn test_render_escapes_locations() {
        let entry = SitemapEntry {
            loc: "https://example.com/?a=1&b=<2>".into(),
            lastmod: DateTime::<Utc>::UNIX_EPOCH,
            changefreq: ChangeFreq::Weekly,
            priority: 0.5,
        };
        let xml = render_sitemap(&[entry]);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=&lt;2&gt;</loc>"));
        assert!(xml.contains("<lastmod>1970-01-01T00:00:00.000Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
