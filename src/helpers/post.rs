//! Related and similar post selection

use std::collections::HashSet;

use crate::content::ContentItem;

/// Number of posts `similar_items` returns unless told otherwise
pub const DEFAULT_SIMILAR_LIMIT: usize = 2;

/// Posts from `all` sharing at least one category with `target`
///
/// `target` itself is never returned and posts without categories never
/// match. The order of `all` is preserved.
pub fn related_items<'a>(target: &ContentItem, all: &'a [ContentItem]) -> Vec<&'a ContentItem> {
    if target.categories().is_empty() {
        return Vec::new();
    }

    all.iter()
        .filter(|item| item.id() != target.id())
        .filter(|item| item.shares_category_with(target))
        .collect()
}

/// Up to `limit` posts related to `target`, topped up with the first other
/// posts of `all` when there are not enough related ones
///
/// # Examples
/// ```ignore
/// let posts = index.items();
/// similar_items(&posts[0], posts, DEFAULT_SIMILAR_LIMIT)
/// ```
pub fn similar_items<'a>(
    target: &ContentItem,
    all: &'a [ContentItem],
    limit: usize,
) -> Vec<&'a ContentItem> {
    let related = related_items(target, all);
    let completion = all
        .iter()
        .filter(|item| item.id() != target.id())
        .take(limit);

    let mut seen = HashSet::new();
    related
        .into_iter()
        .chain(completion)
        .filter(|&item| seen.insert(item.id()))
        .take(limit)
        .collect()
}
