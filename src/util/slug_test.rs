use super::*;

#[test]
fn slugify_lowercases_and_hyphenates() {
    assert_eq!(slugify("Product Ops"), "product-ops");
    assert_eq!(slugify("Launch Notes 2026"), "launch-notes-2026");
}

#[test]
fn slugify_collapses_symbol_runs() {
    assert_eq!(slugify("a  --  b"), "a-b");
    assert_eq!(slugify("Q3 / OKRs & Plans"), "q3-okrs-plans");
}

#[test]
fn slugify_trims_edge_hyphens() {
    assert_eq!(slugify("  padded  "), "padded");
    assert_eq!(slugify("---x---"), "x");
}

#[test]
fn slugify_of_only_symbols_is_empty() {
    assert_eq!(slugify("!!!"), "");
    assert_eq!(slugify(""), "");
}
