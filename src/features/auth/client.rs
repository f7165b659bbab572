//! Client wrappers for the auth API endpoints. Each function issues exactly
//! one request and folds the `success` flag of the response into the
//! `Result`, so route code only has to branch on `Ok`/`Err`.

use crate::{
    app_lib::{AppError, post_json, post_json_status},
    features::auth::types::{
        AuthGrant, ForgotPasswordRequest, LoginSessionRequest, MessageResponse,
        ResetPasswordRequest, SessionResponse, SignInRequest, SignUpRequest, VerifyLoginRequest,
    },
};

/// Checks credentials and starts the OTP step-up.
/// Must never log the request; it carries the password.
pub async fn sign_in(request: &SignInRequest) -> Result<AuthGrant, AppError> {
    post_json::<_, SessionResponse>("/create/signIn", &[], request)
        .await?
        .into_grant()
}

/// Registers a new account.
pub async fn sign_up(request: &SignUpRequest) -> Result<(), AppError> {
    post_json::<_, MessageResponse>("/create/sign-up", &[], request)
        .await?
        .into_result()
}

/// Exchanges the sign-in token and the emailed code for a full session.
pub async fn create_login_session(
    token: &str,
    request: &LoginSessionRequest,
) -> Result<AuthGrant, AppError> {
    post_json::<_, SessionResponse>("/create/login-session", &[token], request)
        .await?
        .into_grant()
}

/// Asks the API to send a fresh OTP for the remembered credentials.
pub async fn resend_otp(request: &VerifyLoginRequest) -> Result<(), AppError> {
    post_json::<_, MessageResponse>("/create/verifyLogin", &[], request)
        .await?
        .into_result()
}

/// Requests a password reset email. Any 2xx counts as sent.
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), AppError> {
    post_json_status("/create/forgetPassword", &[], request).await
}

/// Sets a new password using the token from the reset link.
/// Any 2xx counts as success.
pub async fn reset_password(token: &str, request: &ResetPasswordRequest) -> Result<(), AppError> {
    post_json_status("/create/reset-password", &[token], request).await
}
