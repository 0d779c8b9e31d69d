//! Markdown rendering for comment bodies.
//!
//! Comment text is user input, so raw HTML in the markdown is dropped before
//! rendering rather than passed through.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Converts raw comment markdown into HTML safe to inject into the page.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, text: &str) -> String;
}

/// `pulldown-cmark` renderer with GFM tables, strikethrough and task lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct PulldownMarkdown;

impl MarkdownRenderer for PulldownMarkdown {
    fn render(&self, text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(text, options).filter_map(|event| match event {
            Event::Html(_) | Event::InlineHtml(_) => None,
            other => Some(other),
        });

        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}
