//! Show posts similar to one post

use anyhow::{Context, Result};

use crate::helpers::similar_items;
use crate::Site;

/// Print the posts a post page would suggest next
pub fn run(site: &Site, slug: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let index = site.load_index()?;
    let post = index
        .item_by_slug(slug)
        .with_context(|| format!("No post with slug {:?}", slug))?;

    let limit = limit.unwrap_or(site.config.similar_posts_limit);
    let similar = similar_items(post, index.items(), limit);
    tracing::debug!("{} similar posts for {}", similar.len(), post.id());

    if json {
        println!("{}", serde_json::to_string_pretty(&similar)?);
        return Ok(());
    }

    println!("Similar to \"{}\":", post.title());
    for item in similar {
        let shared = item.shares_category_with(post);
        println!(
            "  {} [{}]{}",
            item.title(),
            item.slug(),
            if shared { " (same category)" } else { "" }
        );
    }

    Ok(())
}
