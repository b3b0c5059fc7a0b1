use super::*;

#[test]
fn exact_section_path_is_active() {
    assert!(is_active("/boards", "/boards"));
    assert!(is_active("/wiki", "/wiki"));
}

#[test]
fn nested_routes_keep_their_section_active() {
    assert!(is_active("/boards/new", "/boards"));
    assert!(is_active("/boards/b-1", "/boards"));
    assert!(is_active("/wiki/w-1", "/wiki"));
}

#[test]
fn sibling_prefixes_do_not_match() {
    assert!(!is_active("/boardsroom", "/boards"));
    assert!(!is_active("/wiki", "/boards"));
    assert!(!is_active("/", "/boards"));
}
