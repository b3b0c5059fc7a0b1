//! Boards list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! First data-bearing screen after sign-in. Fetches the full board list on
//! mount and whenever the sign-in state changes; the list is replaced
//! wholesale on every fetch.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::auth::facade::use_auth;
use crate::components::shell::DashboardShell;
use crate::components::sidebar::DashboardSidebar;
use crate::components::sign_in_prompt::SignInPrompt;
use crate::net::types::Board;
use crate::state::load::LoadState;
use crate::state::view::{ViewPhase, view_phase};

/// Boards sorted by name for stable list rendering, case-insensitive with a
/// case-sensitive tiebreak.
pub(crate) fn sorted_boards(mut boards: Vec<Board>) -> Vec<Board> {
    boards.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    boards
}

/// Count summary under the page title.
pub(crate) fn board_count_label(count: usize) -> String {
    if count == 1 {
        "1 board total.".to_owned()
    } else {
        format!("{count} boards total.")
    }
}

/// Boards route — list with open and create actions.
#[component]
pub fn BoardsPage() -> impl IntoView {
    let auth = use_auth();
    let boards = RwSignal::new(Vec::<Board>::new());
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
            let alive = alive_effect.clone();
            load.update(LoadState::begin);
            leptos::task::spawn_local(async move {
                let token = auth.token().await;
                let result = crate::net::api::list_boards(token.as_deref()).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(items) => {
                        boards.set(items);
                        load.update(LoadState::succeed);
                    }
                    Err(err) => {
                        log::warn!("board list fetch failed: {err}");
                        load.update(|state| state.fail("Unable to load boards."));
                    }
                }
            });
        });
    }

    let phase = Memo::new(move |_| view_phase(auth.is_signed_in(), &load.get(), boards.get().len()));

    let chrome = move |body: AnyView| {
        view! {
            <DashboardSidebar/>
            <div class="panel boards-page">
                <header class="panel__header">
                    <div>
                        <h2 class="panel__title">"Boards"</h2>
                        <p class="panel__sub">{move || board_count_label(boards.get().len())}</p>
                    </div>
                    <a class="btn btn--primary" href="/boards/new">
                        "New board"
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
                    chrome(view! { <p class="page-status">"Loading boards..."</p> }.into_any())
                        .into_any()
                }
                ViewPhase::Error(message) => {
                    chrome(view! { <div class="page-error">{message}</div> }.into_any()).into_any()
                }
                ViewPhase::Empty => {
                    chrome(
                        view! {
                            <div class="empty-state">
                                "No boards yet. Create your first board to get started."
                            </div>
                        }
                            .into_any(),
                    )
                        .into_any()
                }
                ViewPhase::Populated => chrome(board_table(&boards.get()).into_any()).into_any(),
            }}
        </DashboardShell>
    }
}

fn board_table(boards: &[Board]) -> impl IntoView + use<> {
    let rows = sorted_boards(boards.to_vec())
        .into_iter()
        .map(|board| {
            let href = format!("/boards/{}", board.id);
            view! {
                <tr class="board-table__row">
                    <td>
                        <p class="board-table__name">{board.name.clone()}</p>
                        <p class="board-table__slug">{board.slug.clone()}</p>
                    </td>
                    <td class="board-table__actions">
                        <a class="btn btn--outline" href=href>
                            "Open"
                        </a>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="board-table">
            <table>
                <thead>
                    <tr>
                        <th>"Board"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
