//! Reset-password route. The token arrives either as a path segment or as a
//! `?token=` query parameter from the reset email. Without a token the form
//! stays disabled and an invalid-link notice is shown.

use crate::{
    app_lib::theme::Theme,
    components::{
        Alert, AlertKind, AuthLayout, BackLink, Button, PasswordChecklist, PasswordField,
    },
    features::auth::{
        client, messages,
        session::link_token,
        state::{Flash, use_auth},
        types::ResetPasswordRequest,
        validation::{
            PasswordPolicy, ResetForm, confirmation_on_change, confirmation_on_password_change,
        },
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

#[derive(Clone)]
struct ResetInput {
    token: String,
    password: String,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <AuthLayout centered=true>
            <ResetPasswordForm />
        </AuthLayout>
    }
}

#[component]
fn ResetPasswordForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();
    let query = use_query_map();

    let token = link_token(
        params
            .get_untracked()
            .get("token")
            .map(|raw| paths::decode_path_token(&raw)),
        query.get_untracked().get("token"),
    );
    let has_token = token.is_some();
    if !has_token {
        tracing::warn!("reset page opened without a token");
    }

    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let is_valid = Memo::new(move |_| {
        ResetForm {
            password: &password.get(),
            confirm_password: &confirm_password.get(),
        }
        .is_valid()
    });

    let reset_action = Action::new_local(move |input: &ResetInput| {
        let input = input.clone();
        async move {
            let request = ResetPasswordRequest {
                new_password: input.password,
            };
            client::reset_password(&input.token, &request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    tracing::info!("password reset");
                    auth.set_flash(Flash {
                        message: messages::RESET_SUCCESS.to_string(),
                        email: None,
                    });
                    navigate(paths::LOGIN, Default::default());
                }
                Err(err) => {
                    tracing::warn!("password reset failed: {err}");
                    set_form_error.set(Some(messages::reset_password_error(&err)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let Some(token_value) = token.clone() else {
            set_form_error.set(Some(messages::INVALID_RESET_LINK.to_string()));
            return;
        };
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        let form = ResetForm {
            password: &password_value,
            confirm_password: &confirm_value,
        };
        let errors = form.submit_errors();
        let valid = form.is_valid();
        set_password_error.set(errors.password);
        set_confirm_error.set(errors.confirm_password);
        if !valid {
            return;
        }

        set_form_error.set(None);
        reset_action.dispatch(ResetInput {
            token: token_value,
            password: password_value,
        });
    };

    view! {
        <div class=Theme::FORM_PANEL>
            <BackLink />
            <h2 class=Theme::TITLE>"Create New Password"</h2>
            <p class=Theme::SUBTITLE>
                "Your new password must be different from previously used passwords."
            </p>

            {(!has_token)
                .then(|| {
                    view! { <Alert kind=AlertKind::Error message=messages::INVALID_RESET_LINK /> }
                })}
            {move || {
                form_error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}

            <form class=Theme::FORM on:submit=on_submit>
                <PasswordField
                    id="password"
                    label="New Password"
                    placeholder="Enter your new Password"
                    autocomplete="new-password"
                    value=password
                    on_input=Callback::new(move |value: String| {
                        set_password_error.set(None);
                        set_confirm_error.set(confirmation_on_password_change(
                            &value,
                            &confirm_password.get_untracked(),
                        ));
                        set_password.set(value);
                    })
                    error=password_error
                >
                    <PasswordChecklist policy=PasswordPolicy::Reset password=password />
                </PasswordField>
                <PasswordField
                    id="confirmPassword"
                    label="Confirm Password"
                    placeholder="Confirm your new Password"
                    autocomplete="new-password"
                    value=confirm_password
                    on_input=Callback::new(move |value: String| {
                        set_confirm_error
                            .set(confirmation_on_change(&password.get_untracked(), &value));
                        set_confirm_password.set(value);
                    })
                    error=confirm_error
                />

                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || !has_token || !is_valid.get())
                    pending=reset_action.pending()
                    pending_label="Resetting Password..."
                >
                    "Reset Password"
                </Button>
            </form>
        </div>
    }
}
