use crate::{features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Sends visitors who already hold a token to the student dashboard. Checked
/// once on mount: signing in on the wrapped page must not trigger it.
#[component]
pub fn RedirectIfSignedIn(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let signed_in = auth.is_authenticated.get_untracked();

    Effect::new(move |_| {
        if signed_in {
            navigate(
                paths::DEFAULT_DASHBOARD,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { {children()} }
}

#[component]
pub fn RequireSession(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            // UX-only guard; real access control must live on the API.
            navigate(
                paths::LOGIN,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { {children()} }
}
