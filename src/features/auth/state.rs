//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount from browser storage and exposes derived auth
//! signals for guards and routes. It also carries one-shot flash messages
//! across navigations (e.g. "registration successful" on the login page).

use crate::features::auth::{
    session::{SessionStore, StoredSession},
    types::AuthGrant,
};
use leptos::prelude::*;

/// One-shot message shown by the next page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub message: String,
    /// Email to prefill on the login form.
    pub email: Option<String>,
}

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<StoredSession>>,
    pub is_authenticated: Signal<bool>,
    flash: RwSignal<Option<Flash>>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<StoredSession>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
            flash: RwSignal::new(None),
        }
    }

    /// Persists a grant from sign-in or the OTP exchange and updates memory.
    pub fn set_session(&self, grant: &AuthGrant) -> StoredSession {
        let stored = SessionStore::browser().persist(grant);
        self.session.set(Some(stored.clone()));
        stored
    }

    /// Clears storage and the in-memory session.
    pub fn sign_out(&self) {
        SessionStore::browser().clear();
        self.session.set(None);
    }

    pub fn set_flash(&self, flash: Flash) {
        self.flash.set(Some(flash));
    }

    /// Returns the pending flash message and clears it.
    pub fn take_flash(&self) -> Option<Flash> {
        let flash = self.flash.get_untracked();
        if flash.is_some() {
            self.flash.set(None);
        }
        flash
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(SessionStore::browser().load());
    let auth = AuthContext::new(session);
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        AuthContext::new(session)
    })
}
