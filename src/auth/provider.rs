//! Identity-provider mount guard and session plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` runs once at the application root. A valid publishable key
//! mounts the provider (a session handle provided via context); an invalid
//! key provides the inert facade instead and children render directly. The
//! session itself lives in a session-scoped browser store under a single key
//! so every page reads the same credential.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth::facade::AuthSession;
use crate::auth::key;
use crate::util::session_store;

/// The one session-storage slot for the provider session. Boards and wiki
/// pages historically read two different keys; everything now goes through
/// this constant.
pub const SESSION_STORAGE_KEY: &str = "mission_control_session";

/// A signed-in identity-provider session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSession {
    /// Opaque user identifier assigned by the provider.
    pub user_id: String,
    /// Opaque bearer token proving the session.
    pub token: String,
}

/// Handle to the mounted identity provider.
///
/// Copyable so pages and components can capture it in event handlers; the
/// publishable key and the reactive session both live in the arena.
#[derive(Clone, Copy)]
pub struct ProviderHandle {
    publishable_key: StoredValue<String>,
    session: RwSignal<Option<ProviderSession>>,
}

impl ProviderHandle {
    pub(crate) fn new(publishable_key: String) -> Self {
        Self {
            publishable_key: StoredValue::new(publishable_key),
            session: RwSignal::new(None),
        }
    }

    /// Whether a provider session is currently present. Reactive.
    pub fn is_signed_in(&self) -> bool {
        self.session.get().is_some()
    }

    /// The signed-in user's opaque identifier, if any. Reactive.
    pub fn user_id(&self) -> Option<String> {
        self.session.get().map(|s| s.user_id)
    }

    /// The current bearer token, if any. Absent means "unauthenticated",
    /// never an error.
    pub(crate) fn current_token(&self) -> Option<String> {
        self.session.get_untracked().map(|s| s.token)
    }

    /// Hosted sign-in URL for this provider instance.
    pub fn sign_in_url(&self, redirect_url: &str) -> String {
        hosted_sign_in_url(&self.publishable_key.get_value(), redirect_url)
    }

    /// Clear the session locally and in the browser store.
    pub fn sign_out(&self) {
        session_store::remove(SESSION_STORAGE_KEY);
        self.session.set(None);
    }

    /// Populate the session once at mount time: a post-sign-in redirect
    /// fragment wins over the stored session, and is persisted + stripped
    /// from the location so reloads stay clean. No-op on the server.
    pub(crate) fn bootstrap(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(hash) = window.location().hash() {
                    if let Some(session) = session_from_fragment(&hash) {
                        session_store::save_json(SESSION_STORAGE_KEY, &session);
                        let _ = window.location().set_hash("");
                        self.session.set(Some(session));
                        return;
                    }
                }
            }
            self.session
                .set(session_store::load_json(SESSION_STORAGE_KEY));
        }
    }
}

/// Hosted identity origin for a publishable key. Live keys talk to the
/// production accounts host; everything else stays on the test host.
pub fn hosted_identity_origin(publishable_key: &str) -> &'static str {
    if publishable_key.starts_with("pk_live_") {
        "https://id.openclaw.app"
    } else {
        "https://id-test.openclaw.app"
    }
}

/// Build the provider's hosted sign-in URL with a post-sign-in redirect
/// target back into this app.
pub fn hosted_sign_in_url(publishable_key: &str, redirect_url: &str) -> String {
    format!(
        "{}/sign-in?publishable_key={publishable_key}&redirect_url={redirect_url}",
        hosted_identity_origin(publishable_key)
    )
}

/// Parse the `#session=<user_id>:<token>` fragment the hosted provider
/// redirects back with. Returns `None` for anything else.
pub fn session_from_fragment(fragment: &str) -> Option<ProviderSession> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let value = raw.strip_prefix("session=")?;
    let (user_id, token) = value.split_once(':')?;
    if user_id.is_empty() || token.is_empty() {
        return None;
    }
    Some(ProviderSession {
        user_id: user_id.to_owned(),
        token: token.to_owned(),
    })
}

/// Mount guard: decides once, at the root, whether the identity provider is
/// mounted, and provides the resulting [`AuthSession`] to every descendant.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthSession::from_key(key::configured_publishable_key());
    if let AuthSession::Enabled(handle) = auth {
        handle.bootstrap();
    }
    provide_context(auth);
    children()
}
