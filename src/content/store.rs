//! Content store - read-only access to a directory of markdown documents
//!
//! Every operation is a fresh, self-contained disk scan. At personal-site
//! scale this trades recomputation for zero staleness, so there is no
//! cache to invalidate and no shared state between calls.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::{Document, DocumentMetadata, FrontMatter, MarkdownRenderer};

/// How a store produces the `content` field of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// Render markdown to HTML with syntax highlighting (blog path).
    Html,
    /// Keep the raw markdown body; the presentation layer converts it
    /// (show-archive path).
    Raw,
}

/// Failure taxonomy for store reads. Both variants collapse to an empty
/// result or a not-found lookup at the public surface; the distinction
/// only reaches the logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("content directory {dir:?} is unavailable: {source}")]
    SourceUnavailable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only store over one directory of `*.md` files.
pub struct ContentStore {
    dir: PathBuf,
    format: BodyFormat,
    renderer: MarkdownRenderer,
}

impl ContentStore {
    pub fn new<P: Into<PathBuf>>(dir: P, format: BodyFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Create a store with a custom markdown renderer (highlight theme
    /// from site config). Only relevant for [`BodyFormat::Html`] stores.
    pub fn with_renderer<P: Into<PathBuf>>(
        dir: P,
        format: BodyFormat,
        renderer: MarkdownRenderer,
    ) -> Self {
        Self {
            dir: dir.into(),
            format,
            renderer,
        }
    }

    /// List metadata for every document, sorted descending by
    /// `date_modified`.
    ///
    /// Fails closed: a missing or unreadable directory yields an empty
    /// list, and a single unreadable file is skipped. Both are logged.
    pub fn list_all(&self) -> Vec<DocumentMetadata> {
        let files = match self.scan_files() {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Content listing failed: {}", e);
                return Vec::new();
            }
        };

        let mut seen_slugs: HashSet<String> = HashSet::new();
        let mut docs = Vec::new();

        for path in files {
            match self.load_metadata(&path) {
                Ok(meta) => {
                    if !seen_slugs.insert(meta.slug.clone()) {
                        // First match wins on lookup; surface the clash
                        // instead of hiding it.
                        tracing::warn!(
                            "Duplicate slug {:?} from {:?}; lookups resolve to the first file in name order",
                            meta.slug,
                            path
                        );
                    }
                    docs.push(meta);
                }
                Err(e) => tracing::warn!("Skipping document: {}", e),
            }
        }

        docs.sort_by(|a, b| b.date_modified.cmp(&a.date_modified));
        docs
    }

    /// Look up a single document by slug.
    ///
    /// Scans in file-name order and returns the first document whose
    /// resolved slug matches, with the body converted per the store's
    /// body format. `None` when nothing matches or the directory is
    /// absent.
    pub fn get_by_slug(&self, slug: &str) -> Option<Document> {
        let files = match self.scan_files() {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Lookup of {:?} failed: {}", slug, e);
                return None;
            }
        };

        for path in files {
            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("Skipping {:?} during lookup: {}", path, e);
                    continue;
                }
            };

            let (fm, body) = FrontMatter::parse(&raw);
            let meta = DocumentMetadata::from_front_matter(&fm, file_stem(&path), body);

            if meta.slug == slug {
                let content = match self.format {
                    BodyFormat::Html => self.renderer.render(body),
                    BodyFormat::Raw => body.to_string(),
                };
                return Some(Document { meta, content });
            }
        }

        None
    }

    /// List documents carrying `tag` (case-insensitive exact match),
    /// preserving `list_all` ordering. Filtering runs against the full
    /// candidate set, never a paginated slice.
    pub fn list_by_tag(&self, tag: &str) -> Vec<DocumentMetadata> {
        self.list_all()
            .into_iter()
            .filter(|doc| doc.has_tag(tag))
            .collect()
    }

    /// All distinct tags across the store, lexicographically sorted.
    pub fn list_all_tags(&self) -> Vec<String> {
        let mut tags: BTreeSet<String> = BTreeSet::new();
        for doc in self.list_all() {
            tags.extend(doc.tags.iter().cloned());
        }
        tags.into_iter().collect()
    }

    /// Collect `*.md` files at the top level of the content directory in
    /// deterministic file-name order. A failure here aborts the whole
    /// listing rather than returning partial results.
    fn scan_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.dir).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| StoreError::SourceUnavailable {
                dir: self.dir.clone(),
                source: e.into(),
            })?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Parse one file down to its metadata.
    fn load_metadata(&self, path: &Path) -> Result<DocumentMetadata, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) = FrontMatter::parse(&raw);
        Ok(DocumentMetadata::from_front_matter(&fm, file_stem(path), body))
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

fn file_stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("untitled")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_doc(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn store(dir: &TempDir) -> ContentStore {
        ContentStore::new(dir.path(), BodyFormat::Html)
    }

    #[test]
    fn test_list_all_sorted_by_date_modified_desc() {
        let dir = TempDir::new().unwrap();
        write_doc(
            dir.path(),
            "older.md",
            "---\ntitle: Older\ndateModified: 2023-01-01\n---\nBody.\n",
        );
        write_doc(
            dir.path(),
            "newest.md",
            "---\ntitle: Newest\ndateModified: 2024-06-01\n---\nBody.\n",
        );
        write_doc(
            dir.path(),
            "middle.md",
            "---\ntitle: Middle\ndateModified: 2023-09-15\n---\nBody.\n",
        );

        let docs = store(&dir).list_all();
        let titles: Vec<_> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Older"]);
        for pair in docs.windows(2) {
            assert!(pair[0].date_modified >= pair[1].date_modified);
        }
    }

    #[test]
    fn test_missing_directory_fails_closed() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("does-not-exist");
        let store = ContentStore::new(&gone, BodyFormat::Html);

        assert!(store.list_all().is_empty());
        assert!(store.list_all_tags().is_empty());
        assert!(store.get_by_slug("missing-slug").is_none());
    }

    #[test]
    fn test_get_by_slug_renders_html() {
        let dir = TempDir::new().unwrap();
        write_doc(
            dir.path(),
            "blue-train.md",
            "---\ntitle: Blue Train\n---\n# Heading\n\nBody text.\n",
        );

        let doc = store(&dir).get_by_slug("blue-train").unwrap();
        assert_eq!(doc.meta.title, "Blue Train");
        assert!(doc.content.contains("<h1>Heading</h1>"));
    }

    #[test]
    fn test_raw_format_preserves_markdown() {
        let dir = TempDir::new().unwrap();
        write_doc(
            dir.path(),
            "show-12.md",
            "---\ntitle: Show 12\n---\n# Tracklist\n\n<iframe></iframe>\n",
        );

        let store = ContentStore::new(dir.path(), BodyFormat::Raw);
        let doc = store.get_by_slug("show-12").unwrap();
        assert!(doc.content.starts_with("# Tracklist"));
        assert!(doc.content.contains("<iframe></iframe>"));
    }

    #[test]
    fn test_get_by_slug_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "a.md", "---\ntitle: A\n---\nBody.\n");
        assert!(store(&dir).get_by_slug("missing-slug").is_none());
    }

    #[test]
    fn test_front_matter_slug_override() {
        let dir = TempDir::new().unwrap();
        write_doc(
            dir.path(),
            "2024-03-01-long-file-name.md",
            "---\ntitle: T\nslug: short\n---\nBody.\n",
        );

        let store = store(&dir);
        assert!(store.get_by_slug("short").is_some());
        assert!(store.get_by_slug("2024-03-01-long-file-name").is_none());
    }

    #[test]
    fn test_duplicate_slug_first_file_wins() {
        let dir = TempDir::new().unwrap();
        write_doc(
            dir.path(),
            "a-first.md",
            "---\ntitle: First\nslug: clash\n---\nBody.\n",
        );
        write_doc(
            dir.path(),
            "b-second.md",
            "---\ntitle: Second\nslug: clash\n---\nBody.\n",
        );

        let doc = store(&dir).get_by_slug("clash").unwrap();
        assert_eq!(doc.meta.title, "First");
    }

    #[test]
    fn test_list_by_tag_case_insensitive_and_complete() {
        let dir = TempDir::new().unwrap();
        write_doc(
            dir.path(),
            "one.md",
            "---\ntitle: One\ntags:\n  - Jazz\n---\nBody.\n",
        );
        write_doc(
            dir.path(),
            "two.md",
            "---\ntitle: Two\ntags:\n  - jazz\n  - dub\n---\nBody.\n",
        );
        write_doc(dir.path(), "three.md", "---\ntitle: Three\n---\nBody.\n");

        let store = store(&dir);
        let jazz = store.list_by_tag("JAZZ");
        assert_eq!(jazz.len(), 2);
        assert!(jazz.iter().all(|d| d.has_tag("jazz")));

        // Every list_all item carrying the tag appears in the filtered list.
        let all_with_tag = store
            .list_all()
            .into_iter()
            .filter(|d| d.has_tag("jazz"))
            .count();
        assert_eq!(all_with_tag, jazz.len());

        // Untagged documents never appear in any tag listing.
        assert!(store.list_by_tag("dub").iter().all(|d| d.title != "Three"));
    }

    #[test]
    fn test_list_all_tags_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        write_doc(
            dir.path(),
            "one.md",
            "---\ntitle: One\ntags:\n  - soul\n  - funk\n---\nBody.\n",
        );
        write_doc(
            dir.path(),
            "two.md",
            "---\ntitle: Two\ntags:\n  - funk\n  - afrobeat\n---\nBody.\n",
        );

        assert_eq!(
            store(&dir).list_all_tags(),
            vec!["afrobeat", "funk", "soul"]
        );
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "post.md", "---\ntitle: Post\n---\nBody.\n");
        write_doc(dir.path(), "notes.txt", "not markdown");
        write_doc(dir.path(), "image.jpg", "binary-ish");

        assert_eq!(store(&dir).list_all().len(), 1);
    }

    #[test]
    fn test_document_without_front_matter() {
        let dir = TempDir::new().unwrap();
        write_doc(dir.path(), "plain.md", "Just a body, no header.\n");

        let docs = store(&dir).list_all();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "Untitled");
        assert_eq!(docs[0].slug, "plain");
    }
}
