use super::*;

fn summary(title: &str, category: &str) -> WikiPageSummary {
    WikiPageSummary {
        id: format!("w-{title}"),
        title: title.to_owned(),
        slug: slugify(title),
        category: category.to_owned(),
        author_name: None,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-02T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Search filter
// =============================================================

#[test]
fn empty_search_keeps_every_page() {
    let pages = vec![summary("Release process", "product")];
    assert_eq!(filter_pages(&pages, "").len(), 1);
    assert_eq!(filter_pages(&pages, "   ").len(), 1);
}

#[test]
fn search_matches_title_case_insensitively() {
    let pages = vec![
        summary("Release process", "product"),
        summary("Pricing levers", "sales"),
    ];
    let hits = filter_pages(&pages, "RELEASE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Release process");
}

#[test]
fn search_matches_category_as_well() {
    let pages = vec![
        summary("Release process", "product"),
        summary("Pricing levers", "sales"),
    ];
    let hits = filter_pages(&pages, "sales");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Pricing levers");
}

// =============================================================
// Category grouping
// =============================================================

#[test]
fn groups_follow_the_fixed_category_order() {
    let pages = vec![
        summary("Quarterly targets", "sales"),
        summary("Filing checklist", "regulatory"),
    ];
    let grouped = group_pages(&pages);
    let order: Vec<&str> = grouped.iter().map(|(value, _, _)| *value).collect();
    assert_eq!(order, ["regulatory", "sales"]);
}

#[test]
fn empty_groups_are_skipped() {
    let pages = vec![summary("Release process", "product")];
    let grouped = group_pages(&pages);
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].0, "product");
    assert_eq!(grouped[0].2.len(), 1);
}

#[test]
fn unknown_categories_fall_outside_every_group() {
    let pages = vec![summary("Mystery", "archived")];
    assert!(group_pages(&pages).is_empty());
}

// =============================================================
// Create payload
// =============================================================

#[test]
fn empty_title_blocks_page_creation() {
    assert!(build_wiki_create("", "general").is_none());
    assert!(build_wiki_create("   ", "product").is_none());
}

#[test]
fn create_payload_slugifies_the_title() {
    let payload = build_wiki_create("  Release Process  ", "product").expect("payload");
    assert_eq!(payload.title, "Release Process");
    assert_eq!(payload.slug, "release-process");
    assert_eq!(payload.category, "product");
    assert_eq!(payload.content, "");
}
