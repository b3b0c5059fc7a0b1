use super::*;

#[test]
fn queue_like_statuses_use_the_outline_variant() {
    assert_eq!(status_variant("inbox"), "outline");
    assert_eq!(status_variant("testing"), "outline");
    assert_eq!(status_variant("offline"), "outline");
}

#[test]
fn active_statuses_use_the_ember_variant() {
    assert_eq!(status_variant("in_progress"), "ember");
    assert_eq!(status_variant("busy"), "ember");
}

#[test]
fn settled_and_unknown_statuses_use_the_default_variant() {
    assert_eq!(status_variant("assigned"), "default");
    assert_eq!(status_variant("review"), "default");
    assert_eq!(status_variant("done"), "default");
    assert_eq!(status_variant("something_new"), "default");
}

#[test]
fn labels_replace_underscores_with_spaces() {
    assert_eq!(status_label("in_progress"), "in progress");
    assert_eq!(status_label("done"), "done");
}
