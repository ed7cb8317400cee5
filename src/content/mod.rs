//! Markdown content store: documents, front-matter, rendering

mod document;
mod frontmatter;
mod markdown;
pub mod store;

pub use document::{Document, DocumentMetadata};
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use store::{BodyFormat, ContentStore, StoreError};
