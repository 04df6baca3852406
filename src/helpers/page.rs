//! CMS page lookup by configured name

use std::path::Path;

use crate::config::SiteConfig;
use crate::content::{ContentIndex, Page};

/// Find the page registered under `name` in the config `pages` map
///
/// # Examples
/// ```ignore
/// find_page(&index, &config, "about")
/// ```
pub fn find_page<'a>(
    index: &'a ContentIndex,
    config: &SiteConfig,
    name: &str,
) -> Option<&'a Page> {
    let wanted_id = config.pages.get(name)?;
    index.page(wanted_id)
}

/// Find the page named after a template file, e.g. `about.html.slim` -> `about`
pub fn find_page_for_file<'a>(
    index: &'a ContentIndex,
    config: &SiteConfig,
    filename: &str,
) -> Option<&'a Page> {
    let basename = Path::new(filename).file_name()?.to_str()?;
    let name = basename.split('.').next()?;
    find_page(index, config, name)
}
