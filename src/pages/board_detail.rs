//! Board detail page: the board record plus its tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board and its task list are fetched together and joined; if either
//! request fails the whole page is in error, never a partial render. A
//! successful task create prepends the server's record to the in-memory
//! list without a refetch.

#[cfg(test)]
#[path = "board_detail_test.rs"]
mod board_detail_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::hooks::use_params_map;

use crate::auth::facade::use_auth;
use crate::components::shell::DashboardShell;
use crate::components::sidebar::DashboardSidebar;
use crate::components::sign_in_prompt::SignInPrompt;
use crate::components::task_board::TaskBoard;
use crate::net::types::{Board, Task, TaskCreate};
use crate::state::load::LoadState;
use crate::state::view::{ViewPhase, view_phase};

pub(crate) const PRIORITIES: [(&str, &str); 3] =
    [("low", "Low"), ("medium", "Medium"), ("high", "High")];

/// Validate the new-task title. The page shows the error locally and never
/// issues the network call for an empty title.
pub(crate) fn validate_task_title(title: &str) -> Result<String, &'static str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err("Add a task title to continue.")
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Build the create payload. New tasks always enter the workflow at
/// `inbox`; the description is optional and trimmed.
pub(crate) fn build_task_create(title: String, description: &str, priority: &str) -> TaskCreate {
    let description = description.trim();
    TaskCreate {
        title,
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_owned())
        },
        status: "inbox".to_owned(),
        priority: priority.to_owned(),
    }
}

/// Board route — task columns with a create dialog.
#[component]
pub fn BoardDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let board_id = move || params.read().get("id");

    let board = RwSignal::new(None::<Board>);
    let tasks = RwSignal::new(Vec::<Task>::new());
    let load = RwSignal::new(LoadState::default());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        // Guard against a late completion mutating state after the page is
        // gone.
        let alive = Arc::new(AtomicBool::new(true));
        on_cleanup({
            let alive = alive.clone();
            move || alive.store(false, Ordering::Relaxed)
        });

        let alive_effect = alive.clone();
        Effect::new(move || {
            if !auth.is_signed_in() {
                return;
            }
            let Some(id) = board_id() else {
                return;
            };
            let alive = alive_effect.clone();
            load.update(LoadState::begin);
            leptos::task::spawn_local(async move {
                let token = auth.token().await;
                let (board_result, tasks_result) = futures::join!(
                    crate::net::api::get_board(token.as_deref(), &id),
                    crate::net::api::list_tasks(token.as_deref(), &id),
                );
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let board_result = board_result.map_err(|err| {
                    log::warn!("board fetch failed: {err}");
                    "Unable to load board."
                });
                let tasks_result = tasks_result.map_err(|err| {
                    log::warn!("task fetch failed: {err}");
                    "Unable to load tasks."
                });
                match crate::net::api::join_outcomes(board_result, tasks_result) {
                    Ok((fetched_board, fetched_tasks)) => {
                        board.set(Some(fetched_board));
                        tasks.set(fetched_tasks);
                        load.update(LoadState::succeed);
                    }
                    Err(message) => load.update(|state| state.fail(message)),
                }
            });
        });
    }

    // Create-task dialog state.
    let show_dialog = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new("medium".to_owned());
    let create_error = RwSignal::new(None::<String>);
    let creating = RwSignal::new(false);

    let reset_form = move || {
        title.set(String::new());
        description.set(String::new());
        priority.set("medium".to_owned());
        create_error.set(None);
    };

    let on_open_dialog = Callback::new(move |()| {
        reset_form();
        show_dialog.set(true);
    });
    let on_cancel_dialog = Callback::new(move |()| show_dialog.set(false));

    let on_submit_task = Callback::new(move |()| {
        if creating.get() {
            return;
        }
        let validated = match validate_task_title(&title.get()) {
            Ok(validated) => validated,
            Err(message) => {
                create_error.set(Some(message.to_owned()));
                return;
            }
        };
        let Some(id) = board_id() else {
            return;
        };
        let payload = build_task_create(validated, &description.get(), &priority.get());
        creating.set(true);
        create_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.token().await;
            match crate::net::api::create_task(token.as_deref(), &id, &payload).await {
                Ok(created) => {
                    tasks.update(|list| list.insert(0, created));
                    show_dialog.set(false);
                }
                Err(err) => {
                    log::warn!("task create failed: {err}");
                    create_error.set(Some("Unable to create task.".to_owned()));
                }
            }
            creating.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, payload);
        }
    });

    let phase = Memo::new(move |_| view_phase(auth.is_signed_in(), &load.get(), tasks.get().len()));

    let chrome = move |body: AnyView| {
        view! {
            <DashboardSidebar/>
            <div class="panel board-detail">
                <header class="panel__header">
                    <div>
                        <p class="panel__kicker">
                            {move || {
                                board.get().map_or_else(|| "board".to_owned(), |b| b.slug)
                            }}
                        </p>
                        <h1 class="panel__title">
                            {move || {
                                board.get().map_or_else(|| "Board".to_owned(), |b| b.name)
                            }}
                        </h1>
                        <p class="panel__sub">"Keep tasks moving through your workflow."</p>
                    </div>
                    <a class="btn btn--outline" href="/boards">
                        "Back to boards"
                    </a>
                </header>
                {body}
            </div>
        }
    };

    view! {
        <DashboardShell>
            {move || match phase.get() {
                ViewPhase::SignedOut => {
                    view! {
                        <SignInPrompt
                            message="Sign in to view boards."
                            redirect_url="/boards".to_owned()
                        />
                    }
                        .into_any()
                }
                ViewPhase::Loading => {
                    chrome(view! { <p class="page-status">"Loading board..."</p> }.into_any())
                        .into_any()
                }
                ViewPhase::Error(message) => {
                    chrome(view! { <div class="page-error">{message}</div> }.into_any()).into_any()
                }
                ViewPhase::Empty => {
                    chrome(
                        view! {
                            <div class="empty-state">
                                "No tasks yet. Add your first task to get moving."
                            </div>
                            <div class="board-detail__empty-actions">
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| on_open_dialog.run(())
                                >
                                    "New task"
                                </button>
                            </div>
                        }
                            .into_any(),
                    )
                        .into_any()
                }
                ViewPhase::Populated => {
                    chrome(
                        view! {
                            <TaskBoard tasks=tasks on_create=on_open_dialog create_disabled=creating/>
                        }
                            .into_any(),
                    )
                        .into_any()
                }
            }}
            <Show when=move || show_dialog.get()>
                <NewTaskDialog
                    title=title
                    description=description
                    priority=priority
                    error=create_error
                    creating=creating
                    on_cancel=on_cancel_dialog
                    on_submit=on_submit_task
                />
            </Show>
        </DashboardShell>
    }
}

/// Modal dialog for creating a task in the board's inbox.
#[component]
fn NewTaskDialog(
    title: RwSignal<String>,
    description: RwSignal<String>,
    priority: RwSignal<String>,
    error: RwSignal<Option<String>>,
    creating: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New task"</h2>
                <p class="dialog__sub">"Add a task to the inbox and triage it when you are ready."</p>
                <label class="field">
                    "Title"
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g. Prepare launch notes"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        }
                    />
                </label>
                <label class="field">
                    "Description"
                    <textarea
                        class="field__input field__input--area"
                        placeholder="Optional details"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    "Priority"
                    <select
                        class="field__input"
                        prop:value=move || priority.get()
                        on:change=move |ev| priority.set(event_target_value(&ev))
                    >
                        {PRIORITIES
                            .iter()
                            .map(|&(value, label)| {
                                view! { <option value=value>{label}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show when=move || error.get().is_some()>
                    <div class="page-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || creating.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if creating.get() { "Creating..." } else { "Create task" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
