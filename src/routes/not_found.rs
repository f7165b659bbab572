//! 404 page for unknown routes.

use crate::{components::BackLink, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-gray-100 select-none">"404"</h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 whitespace-nowrap">
                    "Page not found"
                </p>
            </div>

            <div class="mt-4 space-y-6">
                <p class="text-gray-500 max-w-sm mx-auto">
                    "The page you are looking for does not exist or has moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=paths::LOGIN
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-primary rounded-full hover:bg-blue-700 transition-all"
                    >
                        "Go to Login"
                    </A>
                    <BackLink />
                </div>
            </div>
        </main>
    }
}
