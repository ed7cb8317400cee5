//! needledrop: markdown-backed blog and show archive engine
//!
//! Two read-only content stores (blog posts and radio shows) plus a
//! generic paginator, composed by a CLI and a small JSON API server.
//! Stores re-scan their directory on every call; the only caching is the
//! hosting layer's response cache, driven by declared revalidation
//! intervals in the site config.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod pagination;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{BodyFormat, ContentStore, MarkdownRenderer};

/// A site rooted at a base directory, with resolved content paths.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog posts directory
    pub posts_dir: PathBuf,
    /// Show archive directory
    pub shows_dir: PathBuf,
    /// Static assets directory
    pub assets_dir: PathBuf,
}

impl Site {
    /// Create a site from a base directory, loading `_config.yml` when
    /// present and falling back to defaults otherwise.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.content_dir);
        let shows_dir = base_dir.join(&config.shows_dir);
        let assets_dir = base_dir.join(&config.assets_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            shows_dir,
            assets_dir,
        })
    }

    /// Fresh store over the blog posts directory; bodies render to HTML.
    pub fn posts(&self) -> ContentStore {
        let renderer = MarkdownRenderer::with_options(
            &self.config.highlight.theme,
            self.config.highlight.enable,
        );
        ContentStore::with_renderer(&self.posts_dir, BodyFormat::Html, renderer)
    }

    /// Fresh store over the show archive; bodies stay raw markdown.
    pub fn shows(&self) -> ContentStore {
        ContentStore::new(&self.shows_dir, BodyFormat::Raw)
    }
}
