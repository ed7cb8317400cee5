//! List site content

use anyhow::Result;
use std::collections::BTreeMap;

use crate::Site;

/// List site content by type. With `json`, emits the raw metadata
/// records instead of the human summary.
pub fn run(site: &Site, content_type: &str, json: bool) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = site.posts().list_all();
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}] ({})",
                    post.date_modified.format("%Y-%m-%d"),
                    post.title,
                    post.slug,
                    post.reading_time
                );
            }
        }
        "show" | "shows" => {
            let shows = site.shows().list_all();
            if json {
                println!("{}", serde_json::to_string_pretty(&shows)?);
                return Ok(());
            }
            println!("Shows ({}):", shows.len());
            for show in shows {
                println!(
                    "  {} - {} [{}]",
                    show.date_modified.format("%Y-%m-%d"),
                    show.title,
                    show.slug
                );
            }
        }
        "tag" | "tags" => {
            let posts = site.posts().list_all();
            let mut counts: BTreeMap<String, usize> = BTreeMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *counts.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
                return Ok(());
            }
            println!("Tags ({}):", counts.len());
            for (tag, count) in counts {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, shows, tags",
                content_type
            );
        }
    }

    Ok(())
}
