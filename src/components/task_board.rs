//! Task board: workflow columns for a single board's tasks.

#[cfg(test)]
#[path = "task_board_test.rs"]
mod task_board_test;

use leptos::prelude::*;

use crate::components::status_pill::StatusPill;
use crate::net::types::Task;

/// Column order mirrors the workflow: tasks enter at `inbox` and leave at
/// `done`.
pub(crate) const TASK_COLUMNS: [(&str, &str); 6] = [
    ("inbox", "Inbox"),
    ("assigned", "Assigned"),
    ("in_progress", "In progress"),
    ("testing", "Testing"),
    ("review", "Review"),
    ("done", "Done"),
];

/// Tasks belonging to one workflow column, in list order.
pub(crate) fn column_tasks(tasks: &[Task], status: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect()
}

/// Workflow columns with a create affordance.
#[component]
pub fn TaskBoard(
    tasks: RwSignal<Vec<Task>>,
    on_create: Callback<()>,
    #[prop(into)] create_disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="task-board">
            <div class="task-board__actions">
                <button
                    class="btn btn--primary"
                    on:click=move |_| on_create.run(())
                    disabled=move || create_disabled.get()
                >
                    "New task"
                </button>
            </div>
            <div class="task-board__columns">
                {TASK_COLUMNS
                    .iter()
                    .map(|(status, label)| {
                        let status = *status;
                        let label = *label;
                        view! {
                            <section class="task-board__column">
                                <h3 class="task-board__column-title">{label}</h3>
                                <div class="task-board__cards">
                                    {move || {
                                        column_tasks(&tasks.get(), status)
                                            .into_iter()
                                            .map(|task| view! { <TaskCard task=task/> })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>
                            </section>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// One task card inside a column.
#[component]
fn TaskCard(task: Task) -> impl IntoView {
    let due = task.due_at.clone();
    view! {
        <article class="task-card">
            <p class="task-card__title">{task.title.clone()}</p>
            {task
                .description
                .clone()
                .map(|text| view! { <p class="task-card__description">{text}</p> })}
            <footer class="task-card__meta">
                <StatusPill status=task.status.clone()/>
                <span class=format!("task-card__priority task-card__priority--{}", task.priority)>
                    {task.priority.clone()}
                </span>
                {due.map(|due_at| {
                    view! {
                        <span class="task-card__due">
                            {crate::net::types::short_date(&due_at).to_owned()}
                        </span>
                    }
                })}
            </footer>
        </article>
    }
}
