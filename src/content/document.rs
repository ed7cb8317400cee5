//! Document models
//!
//! A document has no identity beyond the markdown file it is parsed from;
//! it is rebuilt fresh on every read. The constructors here are the
//! defensive mapping boundary between loose front-matter and the typed
//! records the rest of the crate consumes.

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::FrontMatter;
use crate::helpers::{generate_slug, reading_time};

/// Listing-level view of a document, without the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// URL-safe identifier, unique within a directory scan.
    pub slug: String,

    pub title: String,

    /// Short description; `excerpt` in blog front-matter, `summary` in
    /// show front-matter. Empty when neither is authored.
    pub excerpt: String,

    /// Tags in authored order; empty when the document has none.
    pub tags: Vec<String>,

    pub date_added: DateTime<Local>,

    /// Defaults to `date_added` when not authored; listings sort on this.
    pub date_modified: DateTime<Local>,

    /// Small image path or URL; empty string means no image.
    pub thumbnail: String,

    /// Large image; falls back through `featuredImage` and `thumbnail`.
    pub cover_image: String,

    /// Human-readable estimate, e.g. "4 min read".
    pub reading_time: String,

    /// Source file name within the content directory.
    pub source: String,

    /// Custom front-matter fields (show number, author, social image, ...)
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// A full document: metadata plus body content.
///
/// `content` is rendered HTML for the blog store and raw markdown for the
/// show store, depending on the store's body format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub meta: DocumentMetadata,
    pub content: String,
}

impl DocumentMetadata {
    /// Map parsed front-matter into a typed record.
    ///
    /// `file_stem` is the file name without the `.md` extension and is the
    /// slug fallback; `body` is only used for the reading-time estimate.
    pub fn from_front_matter(fm: &FrontMatter, file_stem: &str, body: &str) -> Self {
        let slug = fm
            .slug
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| generate_slug(file_stem));

        let title = fm.title.clone().unwrap_or_else(|| "Untitled".to_string());
        let excerpt = fm
            .excerpt
            .clone()
            .or_else(|| fm.summary.clone())
            .unwrap_or_default();

        let thumbnail = fm.thumbnail.clone().unwrap_or_default();
        let cover_image = fm
            .cover_image
            .clone()
            .or_else(|| fm.featured_image.clone())
            .unwrap_or_else(|| thumbnail.clone());

        let date_added = fm.resolved_date_added();
        let date_modified = fm.resolved_date_modified();

        Self {
            slug,
            title,
            excerpt,
            tags: fm.tags.clone(),
            date_added,
            date_modified,
            thumbnail,
            cover_image,
            reading_time: reading_time(body),
            source: format!("{}.md", file_stem),
            extra: fm.extra.clone(),
        }
    }

    /// Case-insensitive exact tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}
