//! Dashboard navigation sidebar.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Whether `href` is the active section for the current `pathname`.
/// `/boards/new` and `/boards/b-1` both highlight the Boards entry.
pub(crate) fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

/// Sidebar with section navigation and active-route highlight.
#[component]
pub fn DashboardSidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <p class="sidebar__kicker">"Work"</p>
            <nav class="sidebar__nav">
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || is_active(&pathname.get(), "/boards")
                    href="/boards"
                >
                    "Boards"
                </a>
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || is_active(&pathname.get(), "/wiki")
                    href="/wiki"
                >
                    "Wiki"
                </a>
            </nav>
        </aside>
    }
}
