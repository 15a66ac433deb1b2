//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Environment variable overriding [`SourceConfig::endpoint`].
pub const ENDPOINT_ENV: &str = "API_BASE_URL";

/// Environment variable overriding [`SiteConfig::base_url`].
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote content endpoint settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Site identity used for URLs and defaults
    #[serde(default)]
    pub site: SiteConfig,

    /// Default limits for listings
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply environment overrides on top of the file values.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ENDPOINT_ENV).ok(),
            std::env::var(SITE_URL_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, endpoint: Option<String>, site_url: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|v| !v.trim().is_empty()) {
            self.source.endpoint = endpoint.trim().to_string();
        }
        if let Some(site_url) = site_url.filter(|v| !v.trim().is_empty()) {
            self.site.base_url = site_url.trim().to_string();
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let endpoint = Url::parse(&self.source.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "source.endpoint must be http(s), got {}",
                endpoint.scheme()
            )));
        }
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        Url::parse(&self.site.base_url)?;
        if self.listing.page_size == 0 {
            return Err(AppError::validation("listing.page_size must be > 0"));
        }
        Ok(())
    }
}

/// Remote content endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL returning the JSON array of content items
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Site identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public base URL, without trailing slash
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Author used when a content item has none
    #[serde(default = "defaults::default_author")]
    pub default_author: String,

    /// Path segment under which posts are served
    #[serde(default = "defaults::blog_folder")]
    pub blog_folder: String,
}

impl SiteConfig {
    /// Absolute URL of a path on this site.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    /// Absolute URL of a single post.
    pub fn post_url(&self, slug: &str) -> String {
        self.url(&format!("{}/{}", self.blog_folder.trim_matches('/'), slug))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            default_author: defaults::default_author(),
            blog_folder: defaults::blog_folder(),
        }
    }
}

/// Default limits for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    #[serde(default = "defaults::featured_limit")]
    pub featured_limit: usize,

    #[serde(default = "defaults::related_limit")]
    pub related_limit: usize,

    #[serde(default = "defaults::search_limit")]
    pub search_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            featured_limit: defaults::featured_limit(),
            related_limit: defaults::related_limit(),
            search_limit: defaults::search_limit(),
        }
    }
}

mod defaults {
    // Source defaults
    pub fn endpoint() -> String {
        "https://blogform.netlify.app/api/content.json".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; blogfeed/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Site defaults
    pub fn base_url() -> String {
        "https://your-domain.com".into()
    }
    pub fn default_author() -> String {
        "Admin".into()
    }
    pub fn blog_folder() -> String {
        "posts".into()
    }

    // Listing defaults
    pub fn page_size() -> usize {
        10
    }
    pub fn featured_limit() -> usize {
        6
    }
    pub fn related_limit() -> usize {
        3
    }
    pub fn search_limit() -> usize {
        20
    }
}
