use leptos::{ev::MouseEvent, prelude::*};

/// Confirmation dialog shown after a reset email was requested. Clicking the
/// backdrop or "Close" dismisses it.
#[component]
pub fn EmailSentModal(#[prop(into)] email: Signal<String>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
            on:click=move |_| on_close.run(())
        >
            <div
                class="bg-white p-8 rounded-lg text-center max-w-md"
                role="dialog"
                aria-modal="true"
                aria-labelledby="email-sent-title"
                on:click=|event: MouseEvent| event.stop_propagation()
            >
                <div class="flex justify-center text-6xl text-deepBlue" aria-hidden="true">
                    "✉"
                </div>
                <h3 id="email-sent-title" class="text-2xl font-bold mt-4">
                    "Email Sent"
                </h3>
                <p class="text-gray-600 mt-2">
                    "We've sent an email to "
                    <strong>{move || email.get()}</strong>
                    ". Please follow the instructions in the email to reset your password."
                </p>
                <button
                    type="button"
                    class="mt-6 px-6 py-2 bg-primary text-white rounded-full hover:bg-blue-700 transition-colors duration-300"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}
