//! Board creation page.

#[cfg(test)]
#[path = "board_new_test.rs"]
mod board_new_test;

use leptos::prelude::*;

use crate::auth::facade::{SignedIn, SignedOut, use_auth};
use crate::components::shell::DashboardShell;
use crate::components::sidebar::DashboardSidebar;
use crate::components::sign_in_prompt::SignInPrompt;
use crate::net::types::BoardCreate;
use crate::util::slug::slugify;

/// Build the create payload from the name field. `None` when the trimmed
/// name is empty; the submit handler then does nothing, matching the
/// disabled-feeling form. Symbol-only names still get a usable slug.
pub(crate) fn build_board_create(name: &str) -> Option<BoardCreate> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let slug = slugify(trimmed);
    Some(BoardCreate {
        name: trimmed.to_owned(),
        slug: if slug.is_empty() { "board".to_owned() } else { slug },
    })
}

/// New-board route — single-field form that navigates into the created
/// board.
#[component]
pub fn BoardNewPage() -> impl IntoView {
    let auth = use_auth();
    let name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(payload) = build_board_create(&name.get()) else {
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.token().await;
            match crate::net::api::create_board(token.as_deref(), &payload).await {
                Ok(created) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .location()
                            .set_href(&format!("/boards/{}", created.id));
                    }
                }
                Err(err) => {
                    log::warn!("board create failed: {err}");
                    error.set(Some("Unable to create board.".to_owned()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <DashboardShell>
            <SignedOut>
                <SignInPrompt
                    message="Sign in to create a board."
                    redirect_url="/boards/new".to_owned()
                />
            </SignedOut>
            <SignedIn>
                <DashboardSidebar/>
                <div class="panel panel--form board-new">
                    <div class="board-new__intro">
                        <p class="panel__kicker">"New board"</p>
                        <h1 class="panel__title">"Spin up a board."</h1>
                        <p class="panel__sub">
                            "Boards are where tasks live and move through your workflow."
                        </p>
                    </div>
                    <form class="board-new__form" on:submit=on_submit>
                        <label class="field">
                            "Board name"
                            <input
                                class="field__input"
                                type="text"
                                placeholder="e.g. Product ops"
                                prop:value=move || name.get()
                                prop:disabled=move || busy.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || error.get().is_some()>
                            <div class="page-error">{move || error.get().unwrap_or_default()}</div>
                        </Show>
                        <button
                            class="btn btn--primary board-new__submit"
                            type="submit"
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Creating..." } else { "Create board" }}
                        </button>
                    </form>
                    <a class="btn btn--outline board-new__back" href="/boards">
                        "Back to boards"
                    </a>
                </div>
            </SignedIn>
        </DashboardShell>
    }
}
