mod dashboard;
mod forgot_password;
mod login;
mod not_found;
pub(crate) mod paths;
mod reset_password;
mod signup;
mod verification;

pub(crate) use dashboard::DashboardPage;
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use signup::SignUpPage;
pub(crate) use verification::VerificationPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/auth/login") view=LoginPage />
            <Route path=path!("/auth/signup") view=SignUpPage />
            <Route path=path!("/auth/verification") view=VerificationPage />
            <Route path=path!("/auth/verification/:token") view=VerificationPage />
            <Route path=path!("/auth/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/auth/reset-password") view=ResetPasswordPage />
            <Route path=path!("/auth/reset-password/:token") view=ResetPasswordPage />
            <Route path=path!("/:role/dashboard") view=DashboardPage />
        </Routes>
    }
}
