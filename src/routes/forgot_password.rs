//! Forgot-password route. Requests a reset email and confirms with a modal
//! naming the address.

use crate::{
    app_lib::theme::Theme,
    components::{AuthLayout, BackLink, Button, EmailSentModal, TextField},
    features::auth::{
        client, messages,
        types::ForgotPasswordRequest,
        validation::{forgot_email_on_change, forgot_email_on_submit},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <AuthLayout centered=true>
            <ForgotPasswordForm />
        </AuthLayout>
    }
}

#[component]
fn ForgotPasswordForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (sent_to, set_sent_to) = signal::<Option<String>>(None);

    let request_action = Action::new_local(move |address: &String| {
        let request = ForgotPasswordRequest {
            email: address.clone(),
        };
        async move { client::forgot_password(&request).await.map(|()| request.email) }
    });

    Effect::new(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(address) => {
                    tracing::info!("password reset email requested");
                    set_sent_to.set(Some(address));
                }
                Err(err) => {
                    tracing::warn!("password reset request failed: {err}");
                    set_error.set(Some(messages::forgot_password_error(&err)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let email_value = email.get_untracked().trim().to_string();
        if let Some(message) = forgot_email_on_submit(&email_value) {
            set_error.set(Some(message));
            return;
        }

        set_error.set(None);
        request_action.dispatch(email_value);
    };

    let on_close = Callback::new(move |()| set_sent_to.set(None));
    let is_valid =
        Signal::derive(move || !email.get().trim().is_empty() && error.get().is_none());

    view! {
        <div class=Theme::FORM_PANEL>
            <BackLink />
            <h2 class=Theme::TITLE>"Reset Password"</h2>
            <p class=Theme::SUBTITLE>
                "Enter the email address linked to your account and we'll send you a link to reset your password."
            </p>

            <form class=Theme::FORM on:submit=on_submit>
                <TextField
                    id="email"
                    label="Email Address"
                    input_type="email"
                    placeholder="Enter your Email Address"
                    autocomplete="email"
                    value=email
                    on_input=Callback::new(move |value: String| {
                        set_error.set(forgot_email_on_change(&value));
                        set_email.set(value);
                    })
                    error=error
                />

                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || !is_valid.get())
                    pending=request_action.pending()
                    pending_label="Sending Email..."
                >
                    "Send Email"
                </Button>
            </form>

            {move || {
                sent_to
                    .get()
                    .map(|address| {
                        view! { <EmailSentModal email=address on_close=on_close /> }
                    })
            }}
        </div>
    }
}
