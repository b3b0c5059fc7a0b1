//! Signed-out prompt card shared by gated pages.

use leptos::prelude::*;

use crate::auth::facade::SignInButton;

/// Centered prompt with the page's message and the hosted sign-in
/// affordance. When the provider is disabled the button is absent and only
/// the message renders.
#[component]
pub fn SignInPrompt(
    #[prop(into)] message: String,
    /// Route the provider redirects back to after sign-in.
    redirect_url: String,
) -> impl IntoView {
    view! {
        <div class="panel panel--center sign-in-prompt">
            <p class="sign-in-prompt__message">{message}</p>
            <SignInButton redirect_url=redirect_url/>
        </div>
    }
}
