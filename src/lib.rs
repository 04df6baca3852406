//! guild-press: content helpers for a CMS-backed static blog
//!
//! This crate reads the entries a headless CMS exported for a static site
//! into an immutable snapshot, and provides the helpers page templates need:
//! slugs, related posts, posts by author, reading time and page metadata.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod routes;
pub mod slug;

pub use content::{Author, Category, ContentIndex, ContentItem, Page};
pub use error::{Error, Result};
pub use slug::slugify;

use std::path::{Path, PathBuf};

/// A site checkout holding an exported `data/` directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Exported data directory
    pub data_dir: PathBuf,
}

impl Site {
    /// Open a site directory, reading `data/config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let data_dir = base_dir.join("data");
        let config_path = data_dir.join("config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            config::SiteConfig::default()
        };

        Ok(Self {
            config,
            base_dir,
            data_dir,
        })
    }

    /// Load the content snapshot
    pub fn load_index(&self) -> Result<ContentIndex> {
        content::loader::ContentLoader::new(self).load()
    }

    /// Template helpers bound to `index`
    pub fn helpers<'a>(&'a self, index: &'a ContentIndex) -> helpers::Helpers<'a> {
        helpers::Helpers::new(&self.config, index)
    }
}
