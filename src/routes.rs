//! Generated pages that have no source file of their own

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ContentIndex, ContentItem};

/// Template every post page is rendered with
pub const POST_TEMPLATE: &str = "templates/post.html";

/// A page rendered from a shared template for one content entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyRoute {
    /// Requested path, e.g. `my-post.html`
    pub path: String,
    /// Built file once directory indexes are applied, e.g. `my-post/index.html`
    pub output: String,
    pub template: String,
    /// Post rendered into the template, if any
    pub item_id: Option<String>,
    /// Render without the site layout
    pub layout: bool,
}

/// One route per post, newest first
pub fn proxy_routes(index: &ContentIndex) -> Vec<ProxyRoute> {
    index
        .items()
        .iter()
        .filter(|item| {
            let keep = !item.slug().is_empty();
            if !keep {
                tracing::warn!("Post {} has an empty slug, no page generated", item.id());
            }
            keep
        })
        .map(|item| ProxyRoute {
            path: format!("{}.html", item.slug()),
            output: format!("{}index.html", post_directory(item)),
            template: POST_TEMPLATE.to_string(),
            item_id: Some(item.id().to_string()),
            layout: true,
        })
        .collect()
}

/// The feed page, rendered without a layout
pub fn feed_route(config: &SiteConfig) -> ProxyRoute {
    let path = config.feed_path.trim_start_matches('/').to_string();
    ProxyRoute {
        output: path.clone(),
        template: path.clone(),
        path,
        item_id: None,
        layout: false,
    }
}

/// Every generated route: posts first, then the feed
pub fn all_routes(index: &ContentIndex, config: &SiteConfig) -> Vec<ProxyRoute> {
    let mut routes = proxy_routes(index);
    routes.push(feed_route(config));
    routes
}

/// Directory a post is built into, relative to the site root
pub(crate) fn post_directory(item: &ContentItem) -> String {
    format!("{}/", item.slug())
}
