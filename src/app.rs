//! Root application component with routing and the provider mount guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::provider::AuthProvider;
use crate::pages::{
    board_detail::BoardDetailPage, board_new::BoardNewPage, boards::BoardsPage,
    dashboard::DashboardPage, landing::LandingPage, wiki::WikiListPage, wiki_page::WikiDetailPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The provider mount guard wraps the router so every route sees the same
/// once-constructed auth session; prerendering works with or without a
/// publishable key because an invalid key simply skips the provider.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mission-control.css"/>
        <Title text="OpenClaw Mission Control"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("boards"), StaticSegment("new")) view=BoardNewPage/>
                    <Route path=StaticSegment("boards") view=BoardsPage/>
                    <Route path=(StaticSegment("boards"), ParamSegment("id")) view=BoardDetailPage/>
                    <Route path=StaticSegment("wiki") view=WikiListPage/>
                    <Route path=(StaticSegment("wiki"), ParamSegment("id")) view=WikiDetailPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
