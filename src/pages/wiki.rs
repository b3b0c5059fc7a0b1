//! Wiki index page: searchable, category-grouped page list with create.

#[cfg(test)]
#[path = "wiki_test.rs"]
mod wiki_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::auth::facade::use_auth;
use crate::components::shell::DashboardShell;
use crate::components::sidebar::DashboardSidebar;
use crate::components::sign_in_prompt::SignInPrompt;
use crate::net::types::{WikiPageCreate, WikiPageSummary, short_date};
use crate::state::load::LoadState;
use crate::state::view::{ViewPhase, view_phase};
use crate::util::slug::slugify;

/// Fixed category set; pages with an unrecognized category are not shown in
/// any group, matching the server's write-side validation.
pub(crate) const WIKI_CATEGORIES: [(&str, &str); 5] = [
    ("regulatory", "Regulatory & Compliance"),
    ("research", "Research"),
    ("product", "Product"),
    ("sales", "Sales"),
    ("general", "General"),
];

/// Case-insensitive search over title and category. An empty or whitespace
/// query keeps every page.
pub(crate) fn filter_pages(pages: &[WikiPageSummary], search: &str) -> Vec<WikiPageSummary> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return pages.to_vec();
    }
    pages
        .iter()
        .filter(|page| {
            page.title.to_lowercase().contains(&needle)
                || page.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Group pages by category in the fixed category order, skipping empty
/// groups.
pub(crate) fn group_pages(
    pages: &[WikiPageSummary],
) -> Vec<(&'static str, &'static str, Vec<WikiPageSummary>)> {
    WIKI_CATEGORIES
        .iter()
        .filter_map(|(value, label)| {
            let members: Vec<WikiPageSummary> = pages
                .iter()
                .filter(|page| page.category == *value)
                .cloned()
                .collect();
            if members.is_empty() {
                None
            } else {
                Some((*value, *label, members))
            }
        })
        .collect()
}

/// Build the create payload from the form fields. `None` when the trimmed
/// title is empty.
pub(crate) fn build_wiki_create(title: &str, category: &str) -> Option<WikiPageCreate> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(WikiPageCreate {
        title: trimmed.to_owned(),
        slug: slugify(trimmed),
        content: String::new(),
        category: category.to_owned(),
    })
}

/// Wiki route — grouped page list with search and inline create.
#[component]
pub fn WikiListPage() -> impl IntoView {
    let auth = use_auth();
    let pages = RwSignal::new(Vec::<WikiPageSummary>::new());
    let load = RwSignal::new(LoadState::default());
    let search = RwSignal::new(String::new());

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
            let alive = alive_effect.clone();
            load.update(LoadState::begin);
            leptos::task::spawn_local(async move {
                let token = auth.token().await;
                let result = crate::net::api::list_wiki_pages(token.as_deref()).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(items) => {
                        pages.set(items);
                        load.update(LoadState::succeed);
                    }
                    Err(err) => {
                        log::warn!("wiki list fetch failed: {err}");
                        load.update(|state| state.fail("Unable to load wiki pages."));
                    }
                }
            });
        });
    }

    // Inline create form state.
    let show_create = RwSignal::new(false);
    let new_title = RwSignal::new(String::new());
    let new_category = RwSignal::new("general".to_owned());
    let creating = RwSignal::new(false);
    let create_error = RwSignal::new(None::<String>);

    let on_create = Callback::new(move |()| {
        if creating.get() {
            return;
        }
        let Some(payload) = build_wiki_create(&new_title.get(), &new_category.get()) else {
            return;
        };
        creating.set(true);
        create_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.token().await;
            match crate::net::api::create_wiki_page(token.as_deref(), &payload).await {
                Ok(created) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&format!("/wiki/{}", created.id));
                    }
                }
                Err(err) => {
                    log::warn!("wiki create failed: {err}");
                    create_error.set(Some("Unable to create page.".to_owned()));
                    creating.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    let phase = Memo::new(move |_| view_phase(auth.is_signed_in(), &load.get(), pages.get().len()));

    let chrome = move |body: AnyView| {
        view! {
            <DashboardSidebar/>
            <div class="panel wiki-page-list">
                <header class="panel__header">
                    <div>
                        <h2 class="panel__title">"Wiki"</h2>
                        <p class="panel__sub">"Internal documentation and knowledge base"</p>
                    </div>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| show_create.update(|open| *open = !*open)
                    >
                        "New page"
                    </button>
                </header>
                <Show when=move || show_create.get()>
                    <div class="wiki-create">
                        <input
                            class="field__input"
                            type="text"
                            placeholder="Page title..."
                            prop:value=move || new_title.get()
                            on:input=move |ev| new_title.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    on_create.run(());
                                }
                            }
                        />
                        <select
                            class="field__input"
                            prop:value=move || new_category.get()
                            on:change=move |ev| new_category.set(event_target_value(&ev))
                        >
                            {WIKI_CATEGORIES
                                .iter()
                                .map(|&(value, label)| {
                                    view! { <option value=value>{label}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        <button
                            class="btn btn--primary"
                            disabled=move || creating.get()
                            on:click=move |_| on_create.run(())
                        >
                            {move || if creating.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                    <Show when=move || create_error.get().is_some()>
                        <div class="page-error">
                            {move || create_error.get().unwrap_or_default()}
                        </div>
                    </Show>
                </Show>
                <input
                    class="field__input wiki-search"
                    type="text"
                    placeholder="Search pages..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
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
                    chrome(
                        view! {
                            <div class="empty-state">
                                "No pages yet. Create your first page to get started."
                            </div>
                        }
                            .into_any(),
                    )
                        .into_any()
                }
                ViewPhase::Populated => {
                    chrome(
                        view! { <WikiGroups pages=pages search=search/> }.into_any(),
                    )
                        .into_any()
                }
            }}
        </DashboardShell>
    }
}

/// Category sections for the filtered page list.
#[component]
fn WikiGroups(pages: RwSignal<Vec<WikiPageSummary>>, search: RwSignal<String>) -> impl IntoView {
    view! {
        {move || {
            let filtered = filter_pages(&pages.get(), &search.get());
            let grouped = group_pages(&filtered);
            if grouped.is_empty() {
                return view! {
                    <p class="page-status">"No pages match your search."</p>
                }
                    .into_any();
            }
            grouped
                .into_iter()
                .map(|(value, label, members)| {
                    view! {
                        <section class="wiki-group">
                            <h3 class="wiki-group__title">
                                {label} " "
                                <span class="wiki-group__count">
                                    {format!("({})", members.len())}
                                </span>
                            </h3>
                            <div class="wiki-group__pages">
                                {members
                                    .into_iter()
                                    .map(|page| {
                                        let href = format!("/wiki/{}", page.id);
                                        let byline = page
                                            .author_name
                                            .clone()
                                            .map(|author| format!("by {author} · "))
                                            .unwrap_or_default();
                                        view! {
                                            <a class="wiki-row" href=href>
                                                <span class="wiki-row__text">
                                                    <span class="wiki-row__title">
                                                        {page.title.clone()}
                                                    </span>
                                                    <span class="wiki-row__meta">
                                                        {byline}
                                                        {short_date(&page.updated_at).to_owned()}
                                                    </span>
                                                </span>
                                                <span class="wiki-row__category">{value}</span>
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }}
    }
}
