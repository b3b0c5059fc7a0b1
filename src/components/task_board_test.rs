use super::*;

fn task(id: &str, status: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: format!("task {id}"),
        description: None,
        status: status.to_owned(),
        priority: "medium".to_owned(),
        due_at: None,
    }
}

#[test]
fn columns_cover_the_workflow_in_order() {
    let statuses: Vec<&str> = TASK_COLUMNS.iter().map(|(status, _)| *status).collect();
    assert_eq!(
        statuses,
        ["inbox", "assigned", "in_progress", "testing", "review", "done"]
    );
}

#[test]
fn column_tasks_filters_by_status_preserving_order() {
    let tasks = vec![
        task("t-1", "inbox"),
        task("t-2", "done"),
        task("t-3", "inbox"),
    ];
    let inbox = column_tasks(&tasks, "inbox");
    assert_eq!(
        inbox.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        ["t-1", "t-3"]
    );
}

#[test]
fn column_tasks_is_empty_for_unused_statuses() {
    let tasks = vec![task("t-1", "inbox")];
    assert!(column_tasks(&tasks, "review").is_empty());
}

#[test]
fn tasks_with_unknown_status_fall_outside_every_column() {
    let tasks = vec![task("t-1", "archived")];
    for (status, _) in TASK_COLUMNS {
        assert!(column_tasks(&tasks, status).is_empty());
    }
}
