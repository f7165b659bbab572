//! Signup route. Password rules are checked live and the submit button stays
//! disabled until the whole form is valid. A successful registration returns
//! to the login page with a confirmation and the email prefilled.

use crate::{
    app_lib::theme::Theme,
    components::{AuthLayout, BackLink, Button, PasswordChecklist, PasswordField, TextField},
    features::auth::{
        client, messages,
        state::{Flash, use_auth},
        types::SignUpRequest,
        validation::{
            PasswordPolicy, SignupForm, confirmation_on_change, confirmation_on_password_change,
            required_on_change,
        },
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[derive(Clone)]
/// Captures signup form input for the async action without borrowing signals.
struct SignupInput {
    username: String,
    email: String,
    password: String,
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <AuthLayout>
            <SignUpForm />
        </AuthLayout>
    }
}

#[component]
fn SignUpForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    let (username_error, set_username_error) = signal::<Option<String>>(None);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<String>>(None);

    let is_valid = Memo::new(move |_| {
        SignupForm {
            username: &username.get(),
            email: &email.get(),
            password: &password.get(),
            confirm_password: &confirm_password.get(),
        }
        .is_valid()
    });

    let signup_action = Action::new_local(move |input: &SignupInput| {
        let input = input.clone();
        async move {
            let request = SignUpRequest {
                username: input.username,
                email: input.email.clone(),
                password: input.password,
            };
            client::sign_up(&request).await.map(|()| input.email)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(registered_email) => {
                    tracing::info!("account created");
                    auth.set_flash(Flash {
                        message: messages::SIGNUP_SUCCESS.to_string(),
                        email: Some(registered_email),
                    });
                    navigate(paths::LOGIN, Default::default());
                }
                Err(err) => {
                    tracing::warn!("sign-up failed: {err}");
                    set_email_error.set(Some(messages::signup_error(&err)));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let username_value = username.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        let form = SignupForm {
            username: &username_value,
            email: &email_value,
            password: &password_value,
            confirm_password: &confirm_value,
        };
        let errors = form.submit_errors();
        let valid = form.is_valid();
        set_username_error.set(errors.username);
        set_email_error.set(errors.email);
        set_password_error.set(errors.password);
        set_confirm_error.set(errors.confirm_password);
        if !valid {
            return;
        }

        signup_action.dispatch(SignupInput {
            username: username_value,
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="px-4 py-10 md:px-16 lg:px-20 w-full flex flex-col justify-start md:justify-center">
            <div class="block md:hidden">
                <BackLink />
            </div>
            <h2 class=Theme::TITLE>"Create an Account"</h2>
            <p class=Theme::SUBTITLE>"Enter your information to create your account"</p>

            <form class=Theme::FORM on:submit=on_submit>
                <TextField
                    id="username"
                    label="Username"
                    placeholder="Enter your Username"
                    autocomplete="username"
                    value=username
                    on_input=Callback::new(move |value: String| {
                        set_username_error.set(required_on_change(&value));
                        set_username.set(value);
                    })
                    error=username_error
                />
                <TextField
                    id="email"
                    label="Email Address"
                    input_type="email"
                    placeholder="Enter your Email Address"
                    autocomplete="email"
                    value=email
                    on_input=Callback::new(move |value: String| {
                        set_email_error.set(required_on_change(&value));
                        set_email.set(value);
                    })
                    error=email_error
                />
                <PasswordField
                    id="password"
                    label="Password"
                    placeholder="Enter your Password"
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
                    <PasswordChecklist policy=PasswordPolicy::Signup password=password />
                </PasswordField>
                <PasswordField
                    id="confirmPassword"
                    label="Confirm Password"
                    placeholder="Confirm your Password"
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
                    disabled=Signal::derive(move || !is_valid.get())
                    pending=signup_action.pending()
                    pending_label="Creating your account..."
                >
                    "Create your Account"
                </Button>
            </form>

            <p class="text-center text-sm mt-6">
                "Do you have an account already? "
                <A href=paths::LOGIN {..} class="text-primary-dark">
                    "Login Now"
                </A>
            </p>
        </div>
    }
}
