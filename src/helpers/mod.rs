//! Helper functions for templates
//!
//! These functions derive what a page template needs from the content
//! snapshot: URLs, related posts, reading time, page metadata, etc.

mod author;
mod markdown;
mod navbar;
mod page;
mod post;
mod social;
mod text;
mod url;

pub use author::*;
pub use markdown::*;
pub use navbar::*;
pub use page::*;
pub use post::*;
pub use social::*;
pub use text::*;
pub use url::*;

use crate::config::{NavItem, SiteConfig};
use crate::content::{Author, ContentIndex, ContentItem, Page};
use crate::error::Result;

/// Collection of all helper functions, bound to one content snapshot
pub struct Helpers<'a> {
    config: &'a SiteConfig,
    index: &'a ContentIndex,
}

impl<'a> Helpers<'a> {
    /// Create a new helpers instance
    pub fn new(config: &'a SiteConfig, index: &'a ContentIndex) -> Self {
        Self { config, index }
    }

    /// All posts, newest first
    pub fn posts(&self) -> &'a [ContentItem] {
        self.index.items()
    }

    /// All authors by name
    pub fn authors(&self) -> &'a [Author] {
        self.index.all_authors()
    }

    pub fn related_posts(&self, post: &ContentItem) -> Vec<&'a ContentItem> {
        related_items(post, self.index.items())
    }

    /// Similar posts using the configured limit
    pub fn similar_posts(&self, post: &ContentItem) -> Vec<&'a ContentItem> {
        similar_items(post, self.index.items(), self.config.similar_posts_limit)
    }

    pub fn posts_by_author(&self, author: &Author) -> Vec<&'a ContentItem> {
        posts_by_author(self.index, author)
    }

    pub fn author_url(&self, author: &Author) -> String {
        author_url(self.config, author)
    }

    pub fn post_url(&self, post: &ContentItem) -> String {
        url_for(self.config, &crate::routes::post_directory(post))
    }

    pub fn author_names(&self, post: &ContentItem) -> String {
        author_names(self.index, post)
    }

    pub fn find_page(&self, name: &str) -> Option<&'a Page> {
        find_page(self.index, self.config, name)
    }

    pub fn find_page_for_file(&self, filename: &str) -> Option<&'a Page> {
        find_page_for_file(self.index, self.config, filename)
    }

    /// "500 words in about 2 minutes", at the configured reading speed
    pub fn content_length_and_average_reading_time(&self, text: &str) -> Result<String> {
        describe_length_at(text, self.config.words_per_minute)
    }

    /// "2 minutes", at the configured reading speed
    pub fn average_reading_time(&self, text: &str) -> Result<String> {
        let minutes = average_reading_time(text, self.config.words_per_minute)?;
        Ok(reading_time_label(minutes))
    }

    pub fn navbar_items(&self) -> &'a [NavItem] {
        navbar_items(self.config)
    }

    pub fn navbar_item_class_name(
        &self,
        request_path: &str,
        item: &NavItem,
    ) -> Option<&'static str> {
        navbar_item_class_name(request_path, item)
    }

    pub fn favicon_image_path(&self, asset: &str) -> String {
        favicon_image_path(self.config, asset)
    }

    pub fn social_meta_tags(&self, meta: &PageMeta, path: &str) -> String {
        social_meta_tags(meta, self.config, path)
    }

    pub fn render_markdown(&self, markdown: &str) -> String {
        render_markdown(markdown)
    }
}
