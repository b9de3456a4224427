//! Markdown rendering for assistant replies.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Extensions enabled for assistant replies.
const REPLY_OPTIONS: Options = Options::ENABLE_TABLES
    .union(Options::ENABLE_STRIKETHROUGH)
    .union(Options::ENABLE_TASKLISTS);

/// Render an assistant reply to HTML for `inner_html`.
///
/// Raw HTML in the reply is dropped, never passed through.
#[must_use]
pub fn render_markdown_html(reply: &str) -> String {
    let events = Parser::new_ext(reply, REPLY_OPTIONS).filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut rendered = String::with_capacity(reply.len() * 3 / 2);
    html::push_html(&mut rendered, events);
    rendered
}
