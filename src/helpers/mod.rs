//! Small derivation helpers shared by the content stores
//!
//! Slug generation and reading-time estimation operate on plain strings
//! and carry no state, so they live here rather than on the document types.

mod reading;
mod slug;

pub use reading::reading_time;
pub use slug::generate_slug;
