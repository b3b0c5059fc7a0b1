//! Public landing page with the hosted sign-in call to action.

use leptos::prelude::*;

use crate::components::hero::LandingHero;
use crate::components::shell::LandingShell;

/// Landing route — the only screen reachable without signing in.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <LandingShell>
            <LandingHero/>
        </LandingShell>
    }
}
