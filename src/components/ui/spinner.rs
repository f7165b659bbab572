use leptos::prelude::*;

/// Small white ring sized to sit inline with button text.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <svg
            class="h-5 w-5 animate-spin text-white"
            viewBox="0 0 24 24"
            fill="none"
            role="status"
            aria-label="Loading"
        >
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z"></path>
        </svg>
    }
}
