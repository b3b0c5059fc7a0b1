use super::*;

#[test]
fn empty_or_whitespace_name_blocks_the_request() {
    assert!(build_board_create("").is_none());
    assert!(build_board_create("   ").is_none());
}

#[test]
fn name_is_trimmed_and_slugified() {
    let payload = build_board_create("  Product Ops  ").expect("payload");
    assert_eq!(payload.name, "Product Ops");
    assert_eq!(payload.slug, "product-ops");
}

#[test]
fn symbol_only_name_falls_back_to_the_default_slug() {
    let payload = build_board_create("!!!").expect("payload");
    assert_eq!(payload.name, "!!!");
    assert_eq!(payload.slug, "board");
}
