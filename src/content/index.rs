//! Immutable content snapshot with lookups and derived orders

use indexmap::IndexMap;

use super::{Author, Category, ContentItem, Page};
use crate::error::{Error, Result};

/// Read-only view of everything exported from the CMS
///
/// Built once after loading; posts are kept newest first and authors
/// alphabetically by display name.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    items: Vec<ContentItem>,
    item_positions: IndexMap<String, usize>,
    item_slugs: IndexMap<String, usize>,
    authors: Vec<Author>,
    author_positions: IndexMap<String, usize>,
    author_slugs: IndexMap<String, usize>,
    categories: IndexMap<String, Category>,
    pages: IndexMap<String, Page>,
}

impl ContentIndex {
    /// Build the snapshot, rejecting empty or duplicate ids
    ///
    /// Post and author slugs are URL keys, so two posts (or two authors)
    /// whose names slugify alike are rejected as well.
    pub fn new(
        mut items: Vec<ContentItem>,
        mut authors: Vec<Author>,
        categories: Vec<Category>,
        pages: Vec<Page>,
    ) -> Result<Self> {
        // Stable sort: posts created at the same instant keep load order
        items.sort_by(|a, b| b.created_on().cmp(&a.created_on()));
        authors.sort_by(|a, b| a.name().cmp(b.name()));

        let item_positions = positions("post", items.iter().map(ContentItem::id))?;
        let author_positions = positions("author", authors.iter().map(Author::id))?;
        let item_slugs = slug_positions("post slug", items.iter().map(ContentItem::slug))?;
        let author_slugs = slug_positions("author slug", authors.iter().map(Author::slug))?;

        let mut category_map = IndexMap::with_capacity(categories.len());
        for category in categories {
            check_id("category", category.id())?;
            if category_map.contains_key(category.id()) {
                return Err(duplicate("category", category.id()));
            }
            category_map.insert(category.id().to_string(), category);
        }

        let mut page_map = IndexMap::with_capacity(pages.len());
        for page in pages {
            check_id("page", page.id())?;
            if page_map.contains_key(page.id()) {
                return Err(duplicate("page", page.id()));
            }
            page_map.insert(page.id().to_string(), page);
        }

        tracing::debug!(
            "Indexed {} posts, {} authors, {} categories, {} pages",
            items.len(),
            authors.len(),
            category_map.len(),
            page_map.len()
        );

        Ok(Self {
            items,
            item_positions,
            item_slugs,
            authors,
            author_positions,
            author_slugs,
            categories: category_map,
            pages: page_map,
        })
    }

    /// All posts, newest first
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&ContentItem> {
        self.item_positions.get(id).map(|&pos| &self.items[pos])
    }

    pub fn item_by_slug(&self, slug: &str) -> Option<&ContentItem> {
        self.item_slugs.get(slug).map(|&pos| &self.items[pos])
    }

    /// Posts written by `author`, newest first
    pub fn items_by_author(&self, author: &Author) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.authors().iter().any(|id| id == author.id()))
            .collect()
    }

    /// All authors sorted by display name
    pub fn all_authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.author_positions.get(id).map(|&pos| &self.authors[pos])
    }

    pub fn author_by_slug(&self, slug: &str) -> Option<&Author> {
        self.author_slugs.get(slug).map(|&pos| &self.authors[pos])
    }

    /// Resolve an item's author ids, skipping ids with no author entry
    pub fn authors_of(&self, item: &ContentItem) -> Vec<&Author> {
        item.authors().iter().filter_map(|id| self.author(id)).collect()
    }

    /// Categories in load order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Resolve an item's category ids, skipping ids with no category entry
    pub fn categories_of(&self, item: &ContentItem) -> Vec<&Category> {
        item.categories()
            .iter()
            .filter_map(|id| self.category(id))
            .collect()
    }

    /// Pages in load order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.authors.is_empty()
            && self.categories.is_empty()
            && self.pages.is_empty()
    }
}

fn positions<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<IndexMap<String, usize>> {
    let mut map = IndexMap::new();
    for (pos, id) in ids.enumerate() {
        check_id(kind, id)?;
        if map.insert(id.to_string(), pos).is_some() {
            return Err(duplicate(kind, id));
        }
    }
    Ok(map)
}

/// Like [`positions`], but empty slugs are left out: they get no URL
fn slug_positions<'a>(
    kind: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<IndexMap<String, usize>> {
    let mut map = IndexMap::new();
    for (pos, slug) in slugs.enumerate() {
        if slug.is_empty() {
            continue;
        }
        if map.insert(slug.to_string(), pos).is_some() {
            return Err(duplicate(kind, slug));
        }
    }
    Ok(map)
}

fn check_id(kind: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::invalid(format!("{} entry with an empty id", kind)));
    }
    Ok(())
}

fn duplicate(kind: &'static str, id: &str) -> Error {
    Error::DuplicateId {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn day(d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, d, 12, 0, 0).unwrap()
    }

    fn sample() -> ContentIndex {
        let items = vec![
            ContentItem::new("p1", "Oldest", "", day(1)).with_authors(["a1"]),
            ContentItem::new("p3", "Newest", "", day(3)).with_authors(["a2", "a1"]),
            ContentItem::new("p2", "Middle", "", day(2))
                .with_authors(["a2"])
                .with_categories(["c1", "missing"]),
        ];
        let authors = vec![
            Author::new("a1", "Zoe Writer"),
            Author::new("a2", "Adam Editor"),
            Author::new("a3", "Mia Silent"),
        ];
        let categories = vec![Category::new("c1", "Development")];
        let pages = vec![Page::new("pg1", "About", "About us")];
        ContentIndex::new(items, authors, categories, pages).unwrap()
    }

    fn ids<'a>(items: impl IntoIterator<Item = &'a ContentItem>) -> Vec<&'a str> {
        items.into_iter().map(|item| item.id()).collect()
    }

    #[test]
    fn test_items_sorted_newest_first() {
        let index = sample();
        assert_eq!(ids(index.items()), ["p3", "p2", "p1"]);
    }

    #[test]
    fn test_authors_sorted_by_name() {
        let index = sample();
        let names: Vec<_> = index.all_authors().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Adam Editor", "Mia Silent", "Zoe Writer"]);
    }

    #[test]
    fn test_items_by_author_keeps_master_order() {
        let index = sample();
        let zoe = index.author("a1").unwrap();
        assert_eq!(ids(index.items_by_author(zoe)), ["p3", "p1"]);

        let mia = index.author("a3").unwrap();
        assert!(index.items_by_author(mia).is_empty());
    }

    #[test]
    fn test_lookups() {
        let index = sample();
        assert_eq!(index.item("p2").unwrap().title(), "Middle");
        assert_eq!(index.item_by_slug("newest").unwrap().id(), "p3");
        assert_eq!(index.author_by_slug("adam-editor").unwrap().id(), "a2");
        assert_eq!(index.page("pg1").unwrap().title(), "About");
        assert!(index.item("nope").is_none());
    }

    #[test]
    fn test_dangling_references_are_skipped() {
        let index = sample();
        let post = index.item("p2").unwrap();
        let cats: Vec<_> = index.categories_of(post).iter().map(|c| c.name()).collect();
        assert_eq!(cats, ["Development"]);

        let post = index.item("p3").unwrap();
        let authors: Vec<_> = index.authors_of(post).iter().map(|a| a.id()).collect();
        assert_eq!(authors, ["a2", "a1"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![
            ContentItem::new("p1", "One", "", day(1)),
            ContentItem::new("p1", "Two", "", day(2)),
        ];
        let err = ContentIndex::new(items, vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { kind: "post", .. }));
    }

    #[test]
    fn test_colliding_post_slugs_rejected() {
        let items = vec![
            ContentItem::new("p1", "Hello World", "", day(1)),
            ContentItem::new("p2", "Hello, World!", "", day(2)),
        ];
        let err = ContentIndex::new(items, vec![], vec![], vec![]).unwrap_err();
        match err {
            Error::DuplicateId { kind, id } => {
                assert_eq!(kind, "post slug");
                assert_eq!(id, "hello-world");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_colliding_author_slugs_rejected() {
        let authors = vec![Author::new("a1", "José Díaz"), Author::new("a2", "Jose Diaz")];
        let err = ContentIndex::new(vec![], authors, vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { kind: "author slug", .. }));
    }

    #[test]
    fn test_empty_slugs_do_not_collide() {
        let items = vec![
            ContentItem::new("p1", "日本", "", day(1)),
            ContentItem::new("p2", "中文", "", day(2)),
        ];
        let index = ContentIndex::new(items, vec![], vec![], vec![]).unwrap();
        assert_eq!(index.items().len(), 2);
        assert!(index.item_by_slug("").is_none());
    }

    #[test]
    fn test_empty_id_rejected() {
        let authors = vec![Author::new("  ", "Nobody")];
        let err = ContentIndex::new(vec![], authors, vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_index() {
        let index = ContentIndex::default();
        assert!(index.is_empty());
        assert!(index.items().is_empty());
        assert!(index.all_authors().is_empty());
    }

    #[test]
    fn test_categories_only_index_is_not_empty() {
        let categories = vec![Category::new("c1", "Development")];
        let index = ContentIndex::new(vec![], vec![], categories, vec![]).unwrap();
        assert!(!index.is_empty());
    }
}
