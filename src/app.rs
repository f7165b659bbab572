//! Root component. The auth context sits outside the router so the session
//! and any pending flash message survive route changes.

use crate::{features::auth::state::AuthProvider, routes::AppRoutes};
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <div class="min-h-screen bg-white text-gray-900 font-sans antialiased">
                    <AppRoutes />
                </div>
            </Router>
        </AuthProvider>
    }
}
