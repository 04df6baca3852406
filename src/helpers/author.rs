//! Author helper functions

use super::url::url_for;
use crate::config::SiteConfig;
use crate::content::{Author, ContentIndex, ContentItem};

/// URL of an author's page
///
/// # Examples
/// ```ignore
/// author_url(&config, &author) // -> "/authors/eddie-van-halen"
/// ```
pub fn author_url(config: &SiteConfig, author: &Author) -> String {
    url_for(config, &format!("authors/{}", author.slug()))
}

/// Posts written by `author`, newest first
pub fn posts_by_author<'a>(index: &'a ContentIndex, author: &Author) -> Vec<&'a ContentItem> {
    index.items_by_author(author)
}

/// Comma-separated author names of a post, in CMS order
pub fn author_names(index: &ContentIndex, item: &ContentItem) -> String {
    index
        .authors_of(item)
        .iter()
        .map(|author| author.name())
        .collect::<Vec<_>>()
        .join(", ")
}
