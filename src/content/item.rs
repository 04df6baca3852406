//! Content entities: posts, authors, categories and pages

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::HashMap;

use crate::slug::slugify;

/// A blog post exported from the CMS
///
/// Categories and authors are referenced by id; the [`ContentIndex`]
/// owns the entities themselves.
///
/// [`ContentIndex`]: super::ContentIndex
#[derive(Debug, Clone, Serialize)]
pub struct ContentItem {
    id: String,
    title: String,
    body: String,
    created_on: DateTime<Local>,
    categories: Vec<String>,
    authors: Vec<String>,
    slug: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extra: HashMap<String, serde_yaml::Value>,
}

impl ContentItem {
    /// Create a post; the slug is derived from the title
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        created_on: DateTime<Local>,
    ) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id: id.into(),
            title,
            body: body.into(),
            created_on,
            categories: Vec::new(),
            authors: Vec::new(),
            slug,
            extra: HashMap::new(),
        }
    }

    /// Derive the slug from `source` instead of the title
    ///
    /// Used when the CMS entry carries its own slug field.
    pub fn slugged_from(mut self, source: &str) -> Self {
        self.slug = slugify(source);
        self
    }

    pub fn with_categories<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = dedup_ids(ids);
        self
    }

    pub fn with_authors<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = dedup_ids(ids);
        self
    }

    pub fn with_extra(mut self, extra: HashMap<String, serde_yaml::Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_on(&self) -> DateTime<Local> {
        self.created_on
    }

    /// Category ids, in CMS order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Author ids, in CMS order
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Custom CMS fields
    pub fn extra(&self) -> &HashMap<String, serde_yaml::Value> {
        &self.extra
    }

    /// Whether this post shares at least one category with `other`
    pub fn shares_category_with(&self, other: &ContentItem) -> bool {
        self.categories
            .iter()
            .any(|id| other.categories.contains(id))
    }
}

/// A post author
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    id: String,
    name: String,
    slug: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extra: HashMap<String, serde_yaml::Value>,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: id.into(),
            name,
            slug,
            extra: HashMap::new(),
        }
    }

    pub fn with_extra(mut self, extra: HashMap<String, serde_yaml::Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slugged display name, used for author page URLs
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn extra(&self) -> &HashMap<String, serde_yaml::Value> {
        &self.extra
    }
}

/// A post category
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    id: String,
    name: String,
    slug: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: id.into(),
            name,
            slug,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// A standalone CMS page (about, contact, ...)
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    id: String,
    title: String,
    body: String,
    description: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extra: HashMap<String, serde_yaml::Value>,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            description: None,
            extra: HashMap::new(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_extra(mut self, extra: HashMap<String, serde_yaml::Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extra(&self) -> &HashMap<String, serde_yaml::Value> {
        &self.extra
    }
}

/// Keep the first occurrence of each id
fn dedup_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        let id = id.into();
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
