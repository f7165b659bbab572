//! Login route. Validates locally, signs in, remembers the credentials for a
//! possible OTP resend, and hands over to the verification page. Visitors who
//! already hold a token skip straight to the dashboard.

use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, AuthLayout, Button, PasswordField, TextField},
    features::auth::{
        RedirectIfSignedIn, client, messages,
        session::SessionStore,
        state::use_auth,
        types::{AuthGrant, SignInRequest},
        validation::validate_login,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};
use secrecy::SecretString;

#[derive(Clone)]
/// Captures login form input for the async action without borrowing signals.
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RedirectIfSignedIn>
            <AuthLayout centered=true>
                <LoginForm />
            </AuthLayout>
        </RedirectIfSignedIn>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let flash = auth.take_flash();
    let prefill = flash
        .as_ref()
        .and_then(|flash| flash.email.clone())
        .unwrap_or_default();
    let notice = flash.map(|flash| flash.message);

    let (email, set_email) = signal(prefill);
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let request = SignInRequest {
                log_in_id: input.email.clone(),
                password: input.password.clone(),
            };
            let grant = client::sign_in(&request).await?;
            SessionStore::browser()
                .remember_login(&input.email, &SecretString::from(input.password));
            Ok::<AuthGrant, AppError>(grant)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(grant) => {
                    auth.set_session(&grant);
                    tracing::info!("sign-in accepted, awaiting OTP");
                    navigate(&paths::verification(&grant.token), Default::default());
                }
                Err(err) => {
                    tracing::warn!("sign-in failed: {err}");
                    set_email_error.set(Some(messages::login_error(&err)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let errors = validate_login(&email_value, &password_value);
        set_email_error.set(errors.email.clone());
        set_password_error.set(errors.password.clone());
        if !errors.is_empty() {
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class=Theme::FORM_PANEL>
            <h2 class=Theme::TITLE>"Welcome Back!"</h2>
            <p class=Theme::SUBTITLE>"Enter your credentials to access your account"</p>

            {notice
                .map(|message| {
                    view! {
                        <div class="mt-6">
                            <Alert kind=AlertKind::Success message=message />
                        </div>
                    }
                })}

            <form class=Theme::FORM on:submit=on_submit>
                <TextField
                    id="email"
                    label="Email Address"
                    input_type="email"
                    placeholder="Enter your Email Address"
                    autocomplete="email"
                    value=email
                    on_input=Callback::new(move |value: String| {
                        set_email.set(value);
                        set_email_error.set(None);
                    })
                    error=email_error
                />
                <PasswordField
                    id="password"
                    label="Password"
                    placeholder="Enter your Password"
                    autocomplete="current-password"
                    value=password
                    on_input=Callback::new(move |value: String| {
                        set_password.set(value);
                        set_password_error.set(None);
                    })
                    error=password_error
                />

                <div class="flex flex-row items-center justify-between mt-2 text-sm">
                    <label class="space-x-1 flex flex-row items-center justify-start" for="remember">
                        <input
                            type="checkbox"
                            id="remember"
                            name="remember"
                            prop:checked=move || remember.get()
                            on:change=move |event| set_remember.set(event_target_checked(&event))
                        />
                        <span>"Remember me"</span>
                    </label>
                    <A href=paths::FORGOT_PASSWORD {..} class=Theme::LINK>
                        "Forgot Password?"
                    </A>
                </div>

                <Button
                    button_type="submit"
                    pending=login_action.pending()
                    pending_label="Logging in..."
                >
                    "Login"
                </Button>
            </form>

            <p class="text-center text-sm mt-6">
                "Are you new here? "
                <A href=paths::SIGNUP {..} class=Theme::LINK>
                    "Create Account"
                </A>
            </p>
        </div>
    }
}
