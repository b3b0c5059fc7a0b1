//! Signed-in hub pointing at the work surfaces.

use leptos::prelude::*;

use crate::auth::facade::{SignedIn, SignedOut};
use crate::components::shell::DashboardShell;
use crate::components::sidebar::DashboardSidebar;
use crate::components::sign_in_prompt::SignInPrompt;

/// Dashboard route — static hub; boards and wiki hold the actual data.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <SignedOut>
                <SignInPrompt
                    message="Sign in to access your dashboard."
                    redirect_url="/boards".to_owned()
                />
            </SignedOut>
            <SignedIn>
                <DashboardSidebar/>
                <div class="panel panel--center dashboard-hub">
                    <p class="dashboard-hub__copy">
                        "Your work lives in boards. Jump in to manage tasks."
                    </p>
                    <a class="btn btn--primary" href="/boards">
                        "Go to boards"
                    </a>
                </div>
            </SignedIn>
        </DashboardShell>
    }
}
