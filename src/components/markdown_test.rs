use super::*;

#[test]
fn headings_render_at_each_level() {
    assert!(render_markdown("# Title").contains("<h1>Title</h1>"));
    assert!(render_markdown("## Section").contains("<h2>Section</h2>"));
    assert!(render_markdown("### Detail").contains("<h3>Detail</h3>"));
}

#[test]
fn emphasis_renders_strong_tags() {
    assert!(render_markdown("this is **bold** text").contains("<strong>bold</strong>"));
}

#[test]
fn list_items_render_from_both_markers() {
    let dashes = render_markdown("- one\n- two");
    assert!(dashes.contains("<li>one</li>"));
    let stars = render_markdown("* one\n* two");
    assert!(stars.contains("<li>one</li>"));
}

#[test]
fn links_render_anchors() {
    assert!(
        render_markdown("[docs](https://example.com)")
            .contains("<a href=\"https://example.com\">docs</a>")
    );
}

#[test]
fn empty_source_renders_empty() {
    assert_eq!(render_markdown(""), "");
}

#[test]
fn raw_html_is_passed_through_unchanged() {
    // pulldown-cmark emits inline HTML verbatim; wiki content is
    // internal-author trusted, matching the existing renderer.
    assert!(render_markdown("a <em>b</em>").contains("<em>b</em>"));
}
