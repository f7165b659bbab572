use crate::{app_lib::theme::Theme, components::ui::Spinner};
use leptos::prelude::*;

/// Full-width rounded form button. While `pending`, it is disabled and shows
/// a spinner next to `pending_label`.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] pending: Signal<bool>,
    #[prop(optional)] pending_label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let inactive = move || disabled.get() || pending.get();

    view! {
        <button
            type=button_type
            class=move || {
                if inactive() { Theme::PRIMARY_BUTTON_DISABLED } else { Theme::PRIMARY_BUTTON }
            }
            disabled=inactive
        >
            {move || {
                if pending.get() {
                    view! {
                        <span class="flex items-center justify-center gap-2">
                            <Spinner />
                            <span>{pending_label}</span>
                        </span>
                    }
                        .into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
