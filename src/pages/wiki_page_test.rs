use super::*;

#[test]
fn save_payload_sends_title_and_content_only() {
    let payload = build_wiki_update("Release process", "# Steps");
    assert_eq!(payload.title, Some("Release process".to_owned()));
    assert_eq!(payload.content, Some("# Steps".to_owned()));
    assert_eq!(payload.category, None);
}

#[test]
fn edited_line_includes_the_author_when_known() {
    assert_eq!(
        edited_line(Some("Rowan"), "2026-02-04T10:00:00Z"),
        "Last edited by Rowan · 2026-02-04"
    );
}

#[test]
fn edited_line_is_just_the_date_without_an_author() {
    assert_eq!(edited_line(None, "2026-02-04T10:00:00Z"), "2026-02-04");
}
