use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// "Back" control that returns to the previous history entry.
#[component]
pub fn BackLink() -> impl IntoView {
    let go_back = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    };

    view! {
        <button type="button" class=Theme::BACK_LINK on:click=go_back>
            <span aria-hidden="true">"←"</span>
            <span>"Back"</span>
        </button>
    }
}
