//! Wiki page view with edit and delete.

#[cfg(test)]
#[path = "wiki_page_test.rs"]
mod wiki_page_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::hooks::use_params_map;

use crate::auth::facade::use_auth;
use crate::components::markdown::MarkdownView;
use crate::components::shell::DashboardShell;
use crate::components::sidebar::DashboardSidebar;
use crate::components::sign_in_prompt::SignInPrompt;
use crate::net::types::{WikiPage, WikiPageUpdate, short_date};
use crate::state::load::LoadState;
use crate::state::view::{ViewPhase, view_phase};

/// Build the save payload from the edit fields. Title and content are
/// always sent together; the category is left untouched by the editor.
pub(crate) fn build_wiki_update(title: &str, content: &str) -> WikiPageUpdate {
    WikiPageUpdate {
        title: Some(title.to_owned()),
        content: Some(content.to_owned()),
        category: None,
    }
}

/// Byline under the page title.
pub(crate) fn edited_line(author_name: Option<&str>, updated_at: &str) -> String {
    match author_name {
        Some(author) => format!("Last edited by {author} · {}", short_date(updated_at)),
        None => short_date(updated_at).to_owned(),
    }
}

/// Wiki page route — rendered markdown with edit mode and delete confirm.
#[component]
pub fn WikiDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let page_id = move || params.read().get("id");

    let page = RwSignal::new(None::<WikiPage>);
    let load = RwSignal::new(LoadState::default());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

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
            let Some(id) = page_id() else {
                return;
            };
            let alive = alive_effect.clone();
            load.update(LoadState::begin);
            leptos::task::spawn_local(async move {
                let token = auth.token().await;
                let result = crate::net::api::get_wiki_page(token.as_deref(), &id).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(fetched) => {
                        page.set(Some(fetched));
                        load.update(LoadState::succeed);
                    }
                    Err(err) => {
                        log::warn!("wiki page fetch failed: {err}");
                        load.update(|state| state.fail("Unable to load page."));
                    }
                }
            });
        });
    }

    // Edit/delete state.
    let editing = RwSignal::new(false);
    let edit_title = RwSignal::new(String::new());
    let edit_content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let show_delete_confirm = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let on_edit = move |_| {
        if let Some(current) = page.get() {
            edit_title.set(current.title);
            edit_content.set(current.content);
            action_error.set(None);
            editing.set(true);
        }
    };

    let on_cancel_edit = move |_| {
        editing.set(false);
        action_error.set(None);
    };

    let on_save = move |_| {
        if saving.get() {
            return;
        }
        let Some(id) = page_id() else {
            return;
        };
        let payload = build_wiki_update(&edit_title.get(), &edit_content.get());
        saving.set(true);
        action_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.token().await;
            match crate::net::api::update_wiki_page(token.as_deref(), &id, &payload).await {
                Ok(updated) => {
                    page.set(Some(updated));
                    editing.set(false);
                }
                Err(err) => {
                    log::warn!("wiki page save failed: {err}");
                    action_error.set(Some("Unable to save page.".to_owned()));
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, payload);
        }
    };

    let on_delete = move |_| {
        if deleting.get() {
            return;
        }
        let Some(id) = page_id() else {
            return;
        };
        deleting.set(true);
        action_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.token().await;
            match crate::net::api::delete_wiki_page(token.as_deref(), &id).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/wiki");
                    }
                }
                Err(err) => {
                    log::warn!("wiki page delete failed: {err}");
                    action_error.set(Some("Unable to delete page.".to_owned()));
                    deleting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let phase = Memo::new(move |_| {
        view_phase(
            auth.is_signed_in(),
            &load.get(),
            usize::from(page.get().is_some()),
        )
    });

    let chrome = move |body: AnyView| {
        view! {
            <DashboardSidebar/>
            <div class="panel wiki-detail">
                <div class="wiki-detail__bar">
                    <a class="btn btn--outline" href="/wiki">
                        "Back to wiki"
                    </a>
                    <Show when=move || page.get().is_some()>
                        <div class="wiki-detail__actions">
                            <Show
                                when=move || editing.get()
                                fallback=move || {
                                    view! {
                                        <button class="btn" on:click=on_edit>
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| show_delete_confirm.set(true)
                                        >
                                            "Delete"
                                        </button>
                                    }
                                }
                            >
                                <button class="btn" on:click=on_cancel_edit>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || saving.get()
                                    on:click=on_save
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                            </Show>
                        </div>
                    </Show>
                </div>
                <Show when=move || show_delete_confirm.get()>
                    <div class="wiki-detail__confirm page-error">
                        <p>
                            "Delete \""
                            {move || page.get().map(|p| p.title).unwrap_or_default()}
                            "\"? This can't be undone."
                        </p>
                        <div class="dialog__actions">
                            <button
                                class="btn btn--danger"
                                disabled=move || deleting.get()
                                on:click=on_delete
                            >
                                {move || if deleting.get() { "Deleting..." } else { "Yes, delete" }}
                            </button>
                            <button class="btn" on:click=move |_| show_delete_confirm.set(false)>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Show>
                <Show when=move || action_error.get().is_some()>
                    <div class="page-error">{move || action_error.get().unwrap_or_default()}</div>
                </Show>
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
                            message="Sign in to browse the wiki."
                            redirect_url="/wiki".to_owned()
                        />
                    }
                        .into_any()
                }
                ViewPhase::Loading => {
                    chrome(view! { <p class="page-status">"Loading..."</p> }.into_any()).into_any()
                }
                ViewPhase::Error(message) => {
                    chrome(view! { <div class="page-error">{message}</div> }.into_any()).into_any()
                }
                ViewPhase::Empty => {
                    chrome(view! { <p class="page-status">"Page not found"</p> }.into_any())
                        .into_any()
                }
                ViewPhase::Populated => {
                    chrome(
                        view! {
                            <PageBody
                                page=page
                                editing=editing
                                edit_title=edit_title
                                edit_content=edit_content
                            />
                        }
                            .into_any(),
                    )
                        .into_any()
                }
            }}
        </DashboardShell>
    }
}

/// Article card: title/byline header plus rendered or editable content.
#[component]
fn PageBody(
    page: RwSignal<Option<WikiPage>>,
    editing: RwSignal<bool>,
    edit_title: RwSignal<String>,
    edit_content: RwSignal<String>,
) -> impl IntoView {
    let content = Signal::derive(move || page.get().map(|p| p.content).unwrap_or_default());
    view! {
        <article class="wiki-article">
            <header class="wiki-article__header">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <h1 class="wiki-article__title">
                                {move || page.get().map(|p| p.title).unwrap_or_default()}
                            </h1>
                        }
                    }
                >
                    <input
                        class="field__input wiki-article__title-input"
                        type="text"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| edit_title.set(event_target_value(&ev))
                    />
                </Show>
                <p class="wiki-article__byline">
                    {move || {
                        page.get()
                            .map(|p| edited_line(p.author_name.as_deref(), &p.updated_at))
                            .unwrap_or_default()
                    }}
                </p>
            </header>
            <div class="wiki-article__body">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <Show
                                when=move || !content.get().is_empty()
                                fallback=move || {
                                    view! {
                                        <p class="wiki-article__placeholder">
                                            "No content yet. Click Edit to start writing."
                                        </p>
                                    }
                                }
                            >
                                <MarkdownView source=content/>
                            </Show>
                        }
                    }
                >
                    <textarea
                        class="field__input field__input--area wiki-article__editor"
                        placeholder="Write your content in markdown..."
                        prop:value=move || edit_content.get()
                        on:input=move |ev| edit_content.set(event_target_value(&ev))
                    ></textarea>
                </Show>
            </div>
        </article>
    }
}
