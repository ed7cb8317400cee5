//! Configuration module

mod site;

pub use site::AlgoliaCredentials;
pub use site::DiscogsCredentials;
pub use site::HighlightConfig;
pub use site::RevalidateConfig;
pub use site::SiteConfig;
