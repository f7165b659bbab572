//! OTP verification route. Exchanges the sign-in token and the emailed code
//! for a full session, then routes to the dashboard for the user's role. A
//! new code may be requested once the resend countdown has run out.

use crate::{
    app_lib::{AppError, config::AppConfig, theme::Theme},
    components::{AuthLayout, BackLink, Button, TextField},
    features::auth::{
        client,
        countdown::{Countdown, ResendState},
        messages,
        session::{SessionStore, link_token},
        state::use_auth,
        types::{LoginSessionRequest, VerifyLoginRequest},
        validation::{OTP_LENGTH, validate_otp},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    NavigateOptions,
    hooks::{use_navigate, use_params_map},
};
use secrecy::ExposeSecret;
use std::time::Duration;

#[derive(Clone)]
struct VerifyInput {
    token: String,
    otp: String,
}

#[component]
pub fn VerificationPage() -> impl IntoView {
    view! {
        <AuthLayout centered=true>
            <OtpForm />
        </AuthLayout>
    }
}

#[component]
fn OtpForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();
    let store = SessionStore::browser();
    let resend_seconds = AppConfig::load().otp_resend_seconds;

    let token = link_token(
        params
            .get_untracked()
            .get("token")
            .map(|raw| paths::decode_path_token(&raw)),
        None,
    )
    .or_else(|| store.auth_token());
    let email = store.login_email();

    let (otp, set_otp) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let countdown = RwSignal::new(Countdown::new(resend_seconds));

    if token.is_none() || email.is_none() {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            navigate(
                paths::LOGIN,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    }

    match set_interval_with_handle(
        move || countdown.update(|countdown| *countdown = countdown.tick()),
        Duration::from_secs(1),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => {
            // Without a ticking clock the resend button would never unlock.
            tracing::warn!("failed to start OTP countdown timer");
            countdown.set(Countdown::default());
        }
    }

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        async move {
            let request = LoginSessionRequest { otp: input.otp };
            client::create_login_session(&input.token, &request).await
        }
    });

    let resend_action = Action::new_local(move |_: &()| async move {
        let Some(pending) = SessionStore::browser().pending_login() else {
            return Err(AppError::Validation(
                messages::SESSION_EXPIRED.to_string(),
            ));
        };
        let request = VerifyLoginRequest {
            email: pending.email,
            password: pending.password.expose_secret().to_string(),
        };
        client::resend_otp(&request).await
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(grant) => {
                    let stored = auth.set_session(&grant);
                    SessionStore::browser().clear_pending_login();
                    tracing::info!(role = %stored.role(), "OTP verified");
                    navigate(&stored.dashboard_path(), Default::default());
                }
                Err(err) => {
                    tracing::warn!("OTP verification failed: {err}");
                    set_error.set(Some(messages::otp_error(&err)));
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => {
                    tracing::info!("OTP resent");
                    countdown.set(Countdown::new(resend_seconds));
                }
                Err(err) => {
                    tracing::warn!("OTP resend failed: {err}");
                    set_error.set(Some(messages::resend_error(&err)));
                }
            }
        }
    });

    let resend_state =
        Signal::derive(move || ResendState::new(countdown.get(), resend_action.pending().get()));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let otp_value = otp.get_untracked();
        if let Err(message) = validate_otp(&otp_value) {
            set_error.set(Some(message.to_string()));
            return;
        }
        let Some(token_value) = token.clone() else {
            set_error.set(Some(messages::SESSION_EXPIRED.to_string()));
            return;
        };

        set_error.set(None);
        verify_action.dispatch(VerifyInput {
            token: token_value,
            otp: otp_value,
        });
    };

    let on_resend = move |_| {
        if resend_state.get_untracked().can_resend() {
            resend_action.dispatch(());
        }
    };

    let email_label = email.unwrap_or_default();

    view! {
        <div class=Theme::FORM_PANEL>
            <BackLink />
            <h2 class=Theme::TITLE>"Enter OTP"</h2>
            <p class=Theme::SUBTITLE>
                {format!(
                    "A {OTP_LENGTH}-digit OTP has been sent to {email_label}. Please enter it below.",
                )}
            </p>

            <form class=Theme::FORM on:submit=on_submit>
                <TextField
                    id="otp"
                    label="OTP"
                    placeholder="Enter OTP"
                    autocomplete="one-time-code"
                    max_length="6"
                    value=otp
                    on_input=Callback::new(move |value: String| {
                        set_otp.set(value);
                        set_error.set(None);
                    })
                    error=error
                />

                <Button
                    button_type="submit"
                    pending=verify_action.pending()
                    pending_label="Verifying..."
                >
                    "Verify"
                </Button>

                <div class="flex items-center justify-start text-sm text-gray-600 mt-4">
                    <span>"Didn't receive code?"</span>
                    <button
                        type="button"
                        class=move || {
                            if resend_state.get().can_resend() {
                                "ml-1 text-primary underline cursor-pointer hover:text-primary/80"
                            } else {
                                "ml-1 text-gray-500 cursor-not-allowed"
                            }
                        }
                        disabled=move || !resend_state.get().can_resend()
                        on:click=on_resend
                    >
                        {move || resend_state.get().label()}
                    </button>
                </div>
            </form>
        </div>
    }
}
