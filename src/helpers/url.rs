//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/authors/ann") // -> "/blog/authors/ann"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the site domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://example.com/blog/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.site_url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Path of an image under the configured images directory
pub fn image_path(config: &SiteConfig, asset: &str) -> String {
    if is_absolute_url(asset) {
        return asset.to_string();
    }
    url_for(
        config,
        &format!(
            "{}/{}",
            config.images_dir.trim_matches('/'),
            asset.trim_start_matches('/')
        ),
    )
}

/// Absolute favicon URL, as required by some platforms' touch icons
pub fn favicon_image_path(config: &SiteConfig, asset: &str) -> String {
    if is_absolute_url(asset) {
        return asset.to_string();
    }
    format!(
        "{}{}",
        config.site_url.trim_end_matches('/'),
        image_path(config, asset)
    )
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
