//! Role dashboard placeholder. Greets the signed-in user and offers sign out;
//! visitors without a session are sent to the login page.

use crate::{
    app_lib::theme::Theme,
    features::auth::{RequireSession, state::use_auth},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <DashboardContent />
        </RequireSession>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();

    let role = move || {
        params
            .get()
            .get("role")
            .unwrap_or_else(|| {
                auth.session
                    .get()
                    .map(|session| session.role())
                    .unwrap_or_default()
            })
    };
    let greeting = move || {
        let name = auth
            .session
            .get()
            .and_then(|session| session.user_data)
            .and_then(|user| user.display_name().map(str::to_string));
        match name {
            Some(name) => format!("Welcome back, {name}"),
            None => "Welcome back".to_string(),
        }
    };

    let on_sign_out = move |_| {
        auth.sign_out();
        tracing::info!("signed out");
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 px-4 text-center">
            <h1 class=Theme::TITLE>{greeting}</h1>
            <p class=Theme::SUBTITLE>
                "You are signed in to the " <strong>{role}</strong> " dashboard."
            </p>
            <button
                type="button"
                class="px-6 py-2 rounded-full border border-primary text-primary hover:bg-primary hover:text-white transition-colors duration-300"
                on:click=on_sign_out
            >
                "Sign Out"
            </button>
        </main>
    }
}
