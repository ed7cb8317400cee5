//! Site configuration (_config.yml)
//!
//! One explicit struct passed into components at construction. Nothing in
//! the crate reads the process environment; credentials for the external
//! collaborators (Discogs, Algolia) live here and are handed through to
//! whatever consumes them.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,

    // Directories, relative to the site base directory
    pub content_dir: String,
    pub shows_dir: String,
    pub assets_dir: String,

    // Pagination
    pub per_page: usize,

    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub revalidate: RevalidateConfig,

    // External collaborators
    #[serde(default)]
    pub discogs: DiscogsCredentials,
    #[serde(default)]
    pub algolia: AlgoliaCredentials,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Needledrop".to_string(),
            description: String::new(),
            author: String::new(),
            url: "http://localhost:4000".to_string(),

            content_dir: "documents".to_string(),
            shows_dir: "show".to_string(),
            assets_dir: "public".to_string(),

            per_page: 20,

            highlight: HighlightConfig::default(),
            revalidate: RevalidateConfig::default(),
            discogs: DiscogsCredentials::default(),
            algolia: AlgoliaCredentials::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Syntax highlighting of fenced code blocks in blog posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

/// Response-cache refresh intervals, in seconds. The store never
/// interprets these; the server surfaces them as Cache-Control headers
/// and the hosting layer owns the staleness policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevalidateConfig {
    pub posts: u64,
    pub shows: u64,
}

impl Default for RevalidateConfig {
    fn default() -> Self {
        Self {
            posts: 600,
            shows: 600,
        }
    }
}

/// OAuth 1.0a credentials for the Discogs collection API. Consumed by the
/// external collection client, not by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscogsCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub oauth_token: String,
    pub oauth_token_secret: String,
    pub username: String,
}

impl DiscogsCredentials {
    pub fn is_configured(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }
}

/// Algolia search credentials. Consumed by the offline index-sync tooling
/// and the search UI, not by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgoliaCredentials {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
}

impl AlgoliaCredentials {
    pub fn is_configured(&self) -> bool {
        !self.app_id.is_empty() && !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "documents");
        assert_eq!(config.shows_dir, "show");
        assert_eq!(config.per_page, 20);
        assert!(config.highlight.enable);
        assert!(!config.discogs.is_configured());
        assert!(!config.algolia.is_configured());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Needle & Groove
author: Justin
per_page: 12
content_dir: posts
revalidate:
  posts: 300
discogs:
  consumer_key: key
  consumer_secret: secret
  username: justinslack
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Needle & Groove");
        assert_eq!(config.per_page, 12);
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.revalidate.posts, 300);
        assert_eq!(config.revalidate.shows, 600);
        assert!(config.discogs.is_configured());
        assert_eq!(config.discogs.username, "justinslack");
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let yaml = "title: T\ncustom_flag: true\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.extra.get("custom_flag").and_then(|v| v.as_bool()),
            Some(true)
        );
    }
}
