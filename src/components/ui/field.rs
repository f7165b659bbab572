//! Labelled form inputs with an inline error line underneath.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Error text rendered under a field; nothing when `None`.
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
    }
}

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] max_length: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <fieldset class=Theme::FIELDSET>
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=Theme::INPUT
                placeholder=placeholder
                autocomplete=autocomplete
                maxlength=max_length
                prop:value=move || value.get()
                on:input=move |event| on_input.run(event_target_value(&event))
            />
            <FieldError error=error />
        </fieldset>
    }
}

/// Password input with a show/hide toggle. Extra content (such as a rule
/// checklist) goes between the input and the error line.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <fieldset class=Theme::FIELDSET>
            <label for=id>{label}</label>
            <div class="relative w-full">
                <input
                    id=id
                    name=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class=Theme::INPUT
                    placeholder=placeholder
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |event| on_input.run(event_target_value(&event))
                />
                <button
                    type="button"
                    class=Theme::VISIBILITY_TOGGLE
                    aria-controls=id
                    on:click=move |_| set_visible.update(|visible| *visible = !*visible)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            {children.map(|children| children())}
            <FieldError error=error />
        </fieldset>
    }
}
