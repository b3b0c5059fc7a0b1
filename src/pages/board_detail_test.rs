use super::*;

// =============================================================
// Title validation
// =============================================================

#[test]
fn empty_title_blocks_with_the_page_message() {
    assert_eq!(validate_task_title(""), Err("Add a task title to continue."));
    assert_eq!(validate_task_title("   "), Err("Add a task title to continue."));
}

#[test]
fn title_is_trimmed_before_submission() {
    assert_eq!(
        validate_task_title("  Prepare launch notes  "),
        Ok("Prepare launch notes".to_owned())
    );
}

// =============================================================
// Create payload
// =============================================================

#[test]
fn new_tasks_enter_the_inbox() {
    let payload = build_task_create("Ship it".to_owned(), "", "medium");
    assert_eq!(payload.status, "inbox");
    assert_eq!(payload.priority, "medium");
}

#[test]
fn blank_description_is_omitted() {
    let payload = build_task_create("Ship it".to_owned(), "   ", "low");
    assert_eq!(payload.description, None);
}

#[test]
fn description_is_trimmed_when_present() {
    let payload = build_task_create("Ship it".to_owned(), "  details  ", "high");
    assert_eq!(payload.description, Some("details".to_owned()));
}

#[test]
fn priority_options_cover_low_medium_high() {
    let values: Vec<&str> = PRIORITIES.iter().map(|(value, _)| *value).collect();
    assert_eq!(values, ["low", "medium", "high"]);
}
