//! Uniform auth capability surface for pages and components.
//!
//! DESIGN
//! ======
//! Two strategies behind one value: the real provider handle when the
//! publishable key validated at mount time, an inert variant otherwise.
//! Call sites never branch on provider availability themselves; they read
//! the one [`AuthSession`] the mount guard provided.
//!
//! ERROR HANDLING
//! ==============
//! `token()` resolves to `None` instead of failing in both modes; callers
//! treat an absent token as "unauthenticated", not as an error.

#[cfg(test)]
#[path = "facade_test.rs"]
mod facade_test;

use leptos::prelude::*;

use crate::auth::key;
use crate::auth::provider::ProviderHandle;

/// Auth capability selected once at startup by the provider mount guard.
#[derive(Clone, Copy)]
pub enum AuthSession {
    /// No valid publishable key: every accessor reports signed-out and the
    /// sign-in/out affordances render nothing at all.
    Disabled,
    /// Provider mounted; calls delegate to it unchanged.
    Enabled(ProviderHandle),
}

impl AuthSession {
    /// Construct the session for a candidate publishable key. Uses the same
    /// enabledness check as the mount decision, so a session constructed
    /// from a key reports enabled exactly when the provider mounts for it.
    pub fn from_key(candidate: Option<&str>) -> Self {
        match candidate {
            Some(candidate_key) if key::auth_enabled_for(Some(candidate_key)) => {
                Self::Enabled(ProviderHandle::new(candidate_key.to_owned()))
            }
            _ => Self::Disabled,
        }
    }

    /// Whether the identity provider is mounted.
    pub fn enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Whether a user is signed in. Always false when disabled. Reactive.
    pub fn is_signed_in(&self) -> bool {
        match self {
            Self::Disabled => false,
            Self::Enabled(handle) => handle.is_signed_in(),
        }
    }

    /// The signed-in user's opaque identifier, if any. Reactive.
    pub fn user_id(&self) -> Option<String> {
        match self {
            Self::Disabled => None,
            Self::Enabled(handle) => handle.user_id(),
        }
    }

    /// The current bearer token. Resolves to `None` without error when
    /// disabled or signed out.
    pub async fn token(&self) -> Option<String> {
        match self {
            Self::Disabled => None,
            Self::Enabled(handle) => handle.current_token(),
        }
    }

    /// Hosted sign-in URL, or `None` when the provider is disabled.
    pub fn sign_in_url(&self, redirect_url: &str) -> Option<String> {
        match self {
            Self::Disabled => None,
            Self::Enabled(handle) => Some(handle.sign_in_url(redirect_url)),
        }
    }

    /// Tear down the session. No-op when disabled.
    pub fn sign_out(&self) {
        if let Self::Enabled(handle) = self {
            handle.sign_out();
        }
    }
}

/// The session provided by the root mount guard.
pub fn use_auth() -> AuthSession {
    expect_context::<AuthSession>()
}

/// Renders children only while a user is signed in. Never renders when the
/// provider is disabled.
#[component]
pub fn SignedIn(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    view! {
        <Show when=move || auth.is_signed_in()>
            {children()}
        </Show>
    }
}

/// Renders children only while no user is signed in. Always renders when the
/// provider is disabled.
#[component]
pub fn SignedOut(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    view! {
        <Show when=move || !auth.is_signed_in()>
            {children()}
        </Show>
    }
}

/// Hosted sign-in affordance. Absent (not disabled) when the provider is
/// not mounted; a dead sign-in button would have nothing behind it.
#[component]
pub fn SignInButton(
    /// Route the provider redirects back to after sign-in.
    redirect_url: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let auth = use_auth();
    let label = label.unwrap_or_else(|| "Sign in".to_owned());
    auth.sign_in_url(&redirect_url).map(|href| {
        view! {
            <a class="btn btn--primary auth-sign-in" href=href>
                {label}
            </a>
        }
    })
}

/// Sign-out affordance. Absent when the provider is not mounted.
#[component]
pub fn SignOutButton() -> impl IntoView {
    let auth = use_auth();
    auth.enabled().then(|| {
        view! {
            <button class="btn auth-sign-out" on:click=move |_| auth.sign_out()>
                "Sign out"
            </button>
        }
    })
}

/// Compact signed-in identity chip for page headers.
#[component]
pub fn UserChip() -> impl IntoView {
    let auth = use_auth();
    view! {
        <Show when=move || auth.is_signed_in()>
            <span class="user-chip">
                <span class="user-chip__id">
                    {move || auth.user_id().unwrap_or_default()}
                </span>
                <SignOutButton/>
            </span>
        </Show>
    }
}
