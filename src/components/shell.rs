//! Page shells: shared chrome around landing and dashboard routes.

use leptos::prelude::*;

use crate::auth::facade::{SignedIn, UserChip};
use crate::components::brand::BrandMark;

/// Dashboard chrome: brand header with the signed-in user chip and a
/// sidebar/content grid for the page body.
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-shell">
            <header class="dashboard-shell__header">
                <BrandMark/>
                <SignedIn>
                    <UserChip/>
                </SignedIn>
            </header>
            <div class="dashboard-shell__grid">{children()}</div>
        </div>
    }
}

/// Landing chrome: hero section wrapper with the brand header.
#[component]
pub fn LandingShell(children: Children) -> impl IntoView {
    view! {
        <div class="landing-shell">
            <section class="landing-shell__section">
                <header class="landing-shell__header">
                    <BrandMark/>
                    <SignedIn>
                        <UserChip/>
                    </SignedIn>
                </header>
                <main class="landing-shell__main">{children()}</main>
            </section>
        </div>
    }
}
