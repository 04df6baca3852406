//! Navigation bar helpers

use crate::config::{NavItem, SiteConfig};

/// Configured navigation entries
pub fn navbar_items(config: &SiteConfig) -> &[NavItem] {
    &config.navbar
}

/// `Some("active")` when `request_path` is the built index page of `item`
///
/// Only matches built output paths (`<url>/index.html`).
pub fn navbar_item_class_name(request_path: &str, item: &NavItem) -> Option<&'static str> {
    let index_path = format!("{}/index.html", item.url).replace("//", "/");
    (request_path == index_path).then_some("active")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str) -> NavItem {
        NavItem {
            name: "Item".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_active_class() {
        assert_eq!(
            navbar_item_class_name("/authors/index.html", &item("/authors")),
            Some("active")
        );
        assert_eq!(navbar_item_class_name("/index.html", &item("/")), Some("active"));
        assert_eq!(
            navbar_item_class_name("/authors/ann/index.html", &item("/authors")),
            None
        );
        assert_eq!(navbar_item_class_name("/authors", &item("/authors")), None);
    }

    #[test]
    fn test_navbar_items() {
        let mut config = SiteConfig::default();
        config.navbar.push(item("/"));
        assert_eq!(navbar_items(&config).len(), 1);
    }
}
