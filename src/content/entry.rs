//! Raw CMS entries as written by the exporter

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use super::{Author, Category, ContentItem, Page};
use crate::error::{Error, Result};

/// Linked entries may be exported as bare ids, as `{id: ...}` maps, as a
/// single value, or as null
fn link_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Link {
        Id(String),
        Entry { id: String },
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Links {
        Many(Vec<Link>),
        One(Link),
    }

    let links = Option::<Links>::deserialize(deserializer)?;
    let links = match links {
        None => Vec::new(),
        Some(Links::Many(links)) => links,
        Some(Links::One(link)) => vec![link],
    };

    Ok(links
        .into_iter()
        .map(|link| match link {
            Link::Id(id) | Link::Entry { id } => id,
        })
        .collect())
}

/// A `post` entry
#[derive(Debug, Clone, Deserialize)]
pub struct PostEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Accepts the exporter's `created_on` or a plain `date`
    #[serde(alias = "date")]
    pub created_on: String,
    #[serde(deserialize_with = "link_ids", default)]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "link_ids", default)]
    pub authors: Vec<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl PostEntry {
    pub fn into_item(self) -> Result<ContentItem> {
        let created_on = parse_date_string(&self.created_on).ok_or_else(|| {
            Error::invalid(format!(
                "post {} has an unreadable created_on: {:?}",
                self.id, self.created_on
            ))
        })?;

        let mut item = ContentItem::new(self.id, self.title, self.body, created_on)
            .with_categories(self.categories)
            .with_authors(self.authors)
            .with_extra(self.extra);

        if let Some(slug) = self.slug.as_deref().filter(|s| !s.trim().is_empty()) {
            item = item.slugged_from(slug);
        }

        Ok(item)
    }
}

/// An `author` entry
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorEntry {
    pub id: String,
    pub name: String,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl From<AuthorEntry> for Author {
    fn from(entry: AuthorEntry) -> Self {
        Author::new(entry.id, entry.name).with_extra(entry.extra)
    }
}

/// A `category` entry
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
}

impl From<CategoryEntry> for Category {
    fn from(entry: CategoryEntry) -> Self {
        Category::new(entry.id, entry.name)
    }
}

/// A `page` entry
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl From<PageEntry> for Page {
    fn from(entry: PageEntry) -> Self {
        Page::new(entry.id, entry.title, entry.body)
            .with_description(entry.description)
            .with_extra(entry.extra)
    }
}

/// Parse a timestamp in RFC 3339 or one of the common date formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Local.from_local_datetime(&naive).earliest();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_post_entry_with_linked_maps() {
        let yaml = r#"
id: 5KsDBWseXY6QegucYAoacS
title: Working with Rust
body: Some text
created_on: 2024-02-10T08:30:00+00:00
categories:
  - id: c1
    name: Development
  - id: c2
    name: Tooling
authors:
  - id: a1
    name: Eddie van Halen
hero_image: //images.example.com/hero.png
"#;
        let entry: PostEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.categories, ["c1", "c2"]);
        assert_eq!(entry.authors, ["a1"]);
        assert!(entry.extra.contains_key("hero_image"));

        let item = entry.into_item().unwrap();
        assert_eq!(item.slug(), "working-with-rust");
        assert_eq!(item.created_on().year(), 2024);
    }

    #[test]
    fn test_post_entry_with_ids_and_nulls() {
        let yaml = r#"
id: p1
title: Short
date: 2024-02-10
categories: ~
authors: a1
"#;
        let entry: PostEntry = serde_yaml::from_str(yaml).unwrap();
        assert!(entry.categories.is_empty());
        assert_eq!(entry.authors, ["a1"]);
    }

    #[test]
    fn test_post_entry_missing_title_fails() {
        let yaml = "id: p1\ncreated_on: 2024-01-01\n";
        assert!(serde_yaml::from_str::<PostEntry>(yaml).is_err());
    }

    #[test]
    fn test_explicit_slug_wins() {
        let yaml = "id: p1\ntitle: Title\nslug: My Custom Slug\ncreated_on: 2024-01-01\n";
        let entry: PostEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.into_item().unwrap().slug(), "my-custom-slug");
    }

    #[test]
    fn test_bad_date_is_invalid_argument() {
        let yaml = "id: p1\ntitle: Title\ncreated_on: last tuesday\n";
        let entry: PostEntry = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            entry.into_item(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_date_formats() {
        let dt = parse_date_string("2024-01-15 10:30:00").unwrap();
        assert_eq!((dt.day(), dt.hour(), dt.minute()), (15, 10, 30));
        assert!(parse_date_string("2024-01-15").is_some());
        assert!(parse_date_string("2024-01-15T10:30:00Z").is_some());
        assert!(parse_date_string("not a date").is_none());
    }
}
