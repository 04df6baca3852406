//! Content loader - reads a CMS export directory into a [`ContentIndex`]

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::entry::{AuthorEntry, CategoryEntry, PageEntry, PostEntry};
use super::{Author, Category, ContentIndex, ContentItem, Page};
use crate::error::{Error, Result};
use crate::Site;

/// Loads exported entries from `data/<space>/<content type>/`
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Directory holding the entries of the configured space
    pub fn space_dir(&self) -> PathBuf {
        self.site.data_dir.join(&self.site.config.space)
    }

    /// Load every content type and build the snapshot
    pub fn load(&self) -> Result<ContentIndex> {
        let items = self.load_posts()?;
        let authors = self.load_authors()?;
        let categories = self.load_categories()?;
        let pages = self.load_pages()?;

        tracing::info!(
            "Loaded {} posts, {} authors, {} categories and {} pages",
            items.len(),
            authors.len(),
            categories.len(),
            pages.len()
        );

        ContentIndex::new(items, authors, categories, pages)
    }

    /// Load all `post` entries
    pub fn load_posts(&self) -> Result<Vec<ContentItem>> {
        let entries: Vec<PostEntry> = self.load_entries("post")?;
        let mut posts = Vec::with_capacity(entries.len());

        for entry in entries {
            let id = entry.id.clone();
            match entry.into_item() {
                Ok(post) => posts.push(post),
                Err(e) => tracing::warn!("Skipping post {}: {}", id, e),
            }
        }

        Ok(posts)
    }

    /// Load all `author` entries
    pub fn load_authors(&self) -> Result<Vec<Author>> {
        let entries: Vec<AuthorEntry> = self.load_entries("author")?;
        Ok(entries.into_iter().map(Author::from).collect())
    }

    /// Load all `category` entries
    pub fn load_categories(&self) -> Result<Vec<Category>> {
        let entries: Vec<CategoryEntry> = self.load_entries("category")?;
        Ok(entries.into_iter().map(Category::from).collect())
    }

    /// Load all `page` entries
    pub fn load_pages(&self) -> Result<Vec<Page>> {
        let entries: Vec<PageEntry> = self.load_entries("page")?;
        Ok(entries.into_iter().map(Page::from).collect())
    }

    /// Parse every YAML file of one content type, in file name order
    fn load_entries<T: DeserializeOwned>(&self, content_type: &str) -> Result<Vec<T>> {
        let dir = self.space_dir().join(content_type);
        if !dir.exists() {
            tracing::debug!("No {} entries at {:?}", content_type, dir);
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_yaml_file(path) {
                match load_entry(path) {
                    Ok(parsed) => entries.push(parsed),
                    Err(e) => {
                        tracing::warn!("Failed to load {} {:?}: {}", content_type, path, e);
                    }
                }
            }
        }

        Ok(entries)
    }
}

fn load_entry<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Check if a file is a YAML file
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(base: &Path, rel: &str, content: &str) {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();

        write(base, "data/config.yml", "site_title: Test Blog\n");
        write(
            base,
            "data/site/post/p1.yaml",
            "id: p1\ntitle: First Post\ncreated_on: 2024-01-01\ncategories:\n  - id: c1\nauthors:\n  - id: a1\n",
        );
        write(
            base,
            "data/site/post/p2.yaml",
            "id: p2\ntitle: Second Post\ncreated_on: 2024-02-01\nauthors: [a1, a2]\n",
        );
        write(base, "data/site/post/broken.yaml", "id: [unclosed\n");
        write(
            base,
            "data/site/post/undated.yaml",
            "id: p3\ntitle: Undated\ncreated_on: someday\n",
        );
        write(base, "data/site/post/notes.txt", "ignored");
        write(base, "data/site/author/a1.yaml", "id: a1\nname: Zed\n");
        write(base, "data/site/author/a2.yaml", "id: a2\nname: Ann\n");
        write(base, "data/site/category/c1.yaml", "id: c1\nname: Rust\n");

        dir
    }

    #[test]
    fn test_load_export() {
        let dir = fixture();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.site_title, "Test Blog");

        let index = ContentLoader::new(&site).load().unwrap();

        let ids: Vec<_> = index.items().iter().map(|p| p.id()).collect();
        assert_eq!(ids, ["p2", "p1"]);

        let names: Vec<_> = index.all_authors().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Ann", "Zed"]);

        assert_eq!(index.category("c1").unwrap().name(), "Rust");
        assert_eq!(index.pages().count(), 0);
    }

    #[test]
    fn test_missing_space_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let index = ContentLoader::new(&site).load().unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_custom_space() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        write(base, "data/config.yml", "space: blog\n");
        write(base, "data/blog/page/about.yaml", "id: about-id\ntitle: About\n");

        let site = Site::new(base).unwrap();
        let index = ContentLoader::new(&site).load().unwrap();
        assert_eq!(index.page("about-id").unwrap().title(), "About");
    }
}
