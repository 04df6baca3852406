//! Page metadata for search engines and social cards

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::url::{full_url_for, image_path};
use crate::config::SiteConfig;

/// Characters left unescaped in query parameters
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// Twitter large summary cards render at this width
pub const TWITTER_IMAGE_WIDTH: u32 = 560;
/// Facebook recommends at least 1200px wide share images
pub const FACEBOOK_IMAGE_WIDTH: u32 = 1200;

/// Per-page metadata supplied by the page or its template
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub twitter_card_type: Option<String>,
    /// CMS asset URL, usually protocol-relative (`//images.cms.net/...`)
    pub social_image: Option<String>,
}

/// HTML-escaped page title, falling back to the site title
pub fn page_title(meta: &PageMeta, config: &SiteConfig) -> String {
    html_escape(meta.title.as_deref().unwrap_or(&config.site_title))
}

/// Page description, falling back to the site subtitle
pub fn page_description<'a>(meta: &'a PageMeta, config: &'a SiteConfig) -> &'a str {
    meta.description.as_deref().unwrap_or(&config.site_subtitle)
}

pub fn current_page_url(config: &SiteConfig, path: &str) -> String {
    full_url_for(config, path)
}

pub fn twitter_card_type(meta: &PageMeta) -> &str {
    meta.twitter_card_type
        .as_deref()
        .unwrap_or(DEFAULT_TWITTER_CARD)
}

/// Social image resized by the CMS image API to `width` pixels
pub fn social_image(meta: &PageMeta, width: u32) -> Option<String> {
    let url = meta.social_image.as_deref()?;
    Some(cms_image_url(&prepend_protocol(url), &[("w", width.to_string())]))
}

pub fn twitter_card_social_image(meta: &PageMeta) -> Option<String> {
    social_image(meta, TWITTER_IMAGE_WIDTH)
}

pub fn facebook_social_image(meta: &PageMeta) -> Option<String> {
    social_image(meta, FACEBOOK_IMAGE_WIDTH)
}

/// Image for structured article data; always present
pub fn news_article_schema_image(meta: &PageMeta, config: &SiteConfig) -> String {
    social_image(meta, FACEBOOK_IMAGE_WIDTH).unwrap_or_else(|| {
        format!(
            "{}{}",
            config.site_url.trim_end_matches('/'),
            image_path(config, &config.logo)
        )
    })
}

/// Open Graph and Twitter card meta tags for a page
pub fn social_meta_tags(meta: &PageMeta, config: &SiteConfig, path: &str) -> String {
    let title = page_title(meta, config);
    let description = page_description(meta, config);
    let url = current_page_url(config, path);

    let mut tags = vec![
        r#"<meta property="og:type" content="website">"#.to_string(),
        format!(r#"<meta property="og:title" content="{}">"#, title),
        format!(r#"<meta property="og:url" content="{}">"#, url),
        format!(
            r#"<meta property="og:site_name" content="{}">"#,
            html_escape(&config.site_title)
        ),
        format!(
            r#"<meta name="twitter:card" content="{}">"#,
            html_escape(twitter_card_type(meta))
        ),
        format!(r#"<meta name="twitter:title" content="{}">"#, title),
    ];

    if !description.is_empty() {
        let description = html_escape(description);
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            description
        ));
        tags.push(format!(
            r#"<meta name="twitter:description" content="{}">"#,
            description
        ));
    }

    if let Some(img) = facebook_social_image(meta) {
        tags.push(format!(
            r#"<meta property="og:image" content="{}">"#,
            html_escape(&img)
        ));
    }

    if let Some(img) = twitter_card_social_image(meta) {
        tags.push(format!(
            r#"<meta name="twitter:image" content="{}">"#,
            html_escape(&img)
        ));
    }

    tags.join("\n")
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn prepend_protocol(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}

fn cms_image_url(url: &str, params: &[(&str, String)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY),
                utf8_percent_encode(value, QUERY)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}
