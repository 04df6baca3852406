//! Markdown rendering for CMS rich-text fields

use pulldown_cmark::{html, Options, Parser};

/// Render GitHub-flavoured markdown to HTML
///
/// Soft line breaks stay soft; CMS authors wrap paragraphs freely.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown() {
        let html = render_markdown("# Title\n\nSome *text*\nwrapped here.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
        assert!(!html.contains("<br"));
    }

    #[test]
    fn test_render_gfm_extensions() {
        let html = render_markdown("~~old~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains("<table>"));
    }
}
