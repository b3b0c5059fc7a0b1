//! Lightweight markdown rendering for wiki content.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use leptos::prelude::*;

/// Render markdown to an HTML string. Plain CommonMark, no extensions; wiki
/// content is headings, emphasis, links, and lists.
pub fn render_markdown(source: &str) -> String {
    let parser = pulldown_cmark::Parser::new_ext(source, pulldown_cmark::Options::empty());
    let mut html = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Wiki page body rendered from markdown.
#[component]
pub fn MarkdownView(#[prop(into)] source: Signal<String>) -> impl IntoView {
    view! { <div class="wiki-content" inner_html=move || render_markdown(&source.get())></div> }
}
