//! Site configuration (data/config.yml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub site_url: String,
    pub site_title: String,
    pub site_subtitle: String,
    pub root: String,
    pub feed_path: String,

    // Assets
    pub images_dir: String,
    pub logo: String,

    // Content export
    pub space: String,
    /// Page name -> CMS entry id
    pub pages: IndexMap<String, String>,

    // Navigation
    pub navbar: Vec<NavItem>,

    // Helpers
    pub words_per_minute: usize,
    pub similar_posts_limit: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "http://example.com".to_string(),
            site_title: "Blog".to_string(),
            site_subtitle: String::new(),
            root: "/".to_string(),
            feed_path: "feed.xml".to_string(),

            images_dir: "images".to_string(),
            logo: "logo.png".to_string(),

            space: "site".to_string(),
            pages: IndexMap::new(),

            navbar: Vec::new(),

            words_per_minute: crate::helpers::DEFAULT_WORDS_PER_MINUTE,
            similar_posts_limit: crate::helpers::DEFAULT_SIMILAR_LIMIT,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// Reject settings the helpers cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.words_per_minute == 0 {
            return Err(Error::invalid("words_per_minute must be greater than zero"));
        }
        Ok(())
    }
}

/// A navigation bar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.root, "/");
        assert_eq!(config.space, "site");
        assert_eq!(config.words_per_minute, 250);
        assert_eq!(config.similar_posts_limit, 2);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
site_url: https://blog.example.com
site_title: The Workshop
navbar:
  - name: Blog
    url: /
  - name: Authors
    url: /authors
pages:
  about: 2Wiv3BVsF2kmIAmE0Ysgsy
  contact: 48KzBMHUZyoQIO0uasOIoQ
twitter_handle: "@workshop"
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site_url, "https://blog.example.com");
        assert_eq!(config.site_title, "The Workshop");
        assert_eq!(config.navbar.len(), 2);
        assert_eq!(config.navbar[1].url, "/authors");
        assert_eq!(config.pages["contact"], "48KzBMHUZyoQIO0uasOIoQ");
        assert_eq!(config.pages.get_index(0).unwrap().0, "about");
        assert!(config.extra.contains_key("twitter_handle"));
        // untouched fields keep their defaults
        assert_eq!(config.feed_path, "feed.xml");
    }

    #[test]
    fn test_load_rejects_zero_reading_speed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "words_per_minute: 0\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_load_accepts_custom_reading_speed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "words_per_minute: 200\n").unwrap();

        assert_eq!(SiteConfig::load(&path).unwrap().words_per_minute, 200);
    }

    #[test]
    fn test_load_reports_path_on_bad_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "navbar: [unclosed").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
        assert!(err.to_string().contains("config.yml"));
    }
}
