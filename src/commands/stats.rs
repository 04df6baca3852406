//! Length and reading time of a post

use anyhow::{Context, Result};

use crate::Site;

pub fn run(site: &Site, slug: &str) -> Result<()> {
    let index = site.load_index()?;
    let post = index
        .item_by_slug(slug)
        .with_context(|| format!("No post with slug {:?}", slug))?;

    let helpers = site.helpers(&index);
    println!(
        "{}: {}",
        post.title(),
        helpers.content_length_and_average_reading_time(post.body())?
    );

    Ok(())
}
