//! Content module - CMS entries, the content snapshot and its loader

mod entry;
mod index;
mod item;
pub mod loader;

pub use entry::parse_date_string;
pub use index::ContentIndex;
pub use item::{Author, Category, ContentItem, Page};
