//! List site content

use anyhow::Result;
use serde::Serialize;

use crate::content::ContentIndex;
use crate::helpers::{author_url, word_count};
use crate::routes;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str, json: bool) -> Result<()> {
    let index = site.load_index()?;

    match content_type {
        "post" | "posts" => list_posts(site, &index, json),
        "author" | "authors" => list_authors(site, &index, json),
        "category" | "categories" => list_categories(&index, json),
        "page" | "pages" => {
            if json {
                let pages: Vec<_> = index.pages().collect();
                return print_json(&pages);
            }
            println!("Pages ({}):", index.pages().count());
            for page in index.pages() {
                println!("  {} [{}]", page.title(), page.id());
            }
            Ok(())
        }
        "route" | "routes" => {
            let routes = routes::all_routes(&index, &site.config);
            if json {
                return print_json(&routes);
            }
            println!("Routes ({}):", routes.len());
            for route in routes {
                println!("  {} -> {}", route.path, route.template);
            }
            Ok(())
        }
        _ => anyhow::bail!(
            "Unknown type: {}. Available: post, author, category, page, route",
            content_type
        ),
    }
}

fn list_posts(site: &Site, index: &ContentIndex, json: bool) -> Result<()> {
    let helpers = site.helpers(index);

    if json {
        #[derive(Serialize)]
        struct PostRow<'a> {
            id: &'a str,
            title: &'a str,
            slug: &'a str,
            url: String,
            created_on: String,
            words: usize,
            reading_time: String,
        }

        let rows = index
            .items()
            .iter()
            .map(|post| {
                Ok::<_, anyhow::Error>(PostRow {
                    id: post.id(),
                    title: post.title(),
                    slug: post.slug(),
                    url: helpers.post_url(post),
                    created_on: post.created_on().to_rfc3339(),
                    words: word_count(post.body()),
                    reading_time: helpers.average_reading_time(post.body())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        return print_json(&rows);
    }

    println!("Posts ({}):", index.items().len());
    for post in index.items() {
        println!(
            "  {} - {} [{}] by {}",
            post.created_on().format("%Y-%m-%d"),
            post.title(),
            post.slug(),
            helpers.author_names(post)
        );
    }
    Ok(())
}

fn list_authors(site: &Site, index: &ContentIndex, json: bool) -> Result<()> {
    if json {
        return print_json(&index.all_authors());
    }

    println!("Authors ({}):", index.all_authors().len());
    for author in index.all_authors() {
        println!(
            "  {} ({}) {}",
            author.name(),
            index.items_by_author(author).len(),
            author_url(&site.config, author)
        );
    }
    Ok(())
}

fn list_categories(index: &ContentIndex, json: bool) -> Result<()> {
    let mut counts: Vec<_> = index
        .categories()
        .map(|category| {
            let count = index
                .items()
                .iter()
                .filter(|post| post.categories().iter().any(|id| id == category.id()))
                .count();
            (category, count)
        })
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    if json {
        let categories: Vec<_> = counts.iter().map(|(category, _)| category).collect();
        return print_json(&categories);
    }

    println!("Categories ({}):", counts.len());
    for (category, count) in counts {
        println!("  {} ({})", category.name(), count);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
