//! Shared frontend utilities for API access, configuration, storage, errors,
//! and build metadata.
//!
//! ## Core Authentication Flows
//!
//! ### Login & OTP step-up
//!
//! 1. **Sign in:** The login form POSTs `{logInID, password}` to `/create/signIn`.
//!    On success the returned token and `userData` are persisted and the
//!    credentials are kept in `sessionStorage` for a possible OTP resend.
//! 2. **Verify:** The verification page POSTs the 6-digit code to
//!    `/create/login-session/{token}` and, on success, stores the session token
//!    and routes to the role dashboard.
//! 3. **Resend:** Once the countdown reaches zero the page may POST the kept
//!    credentials to `/create/verifyLogin` to trigger a fresh code.
//!
//! ### Password recovery
//!
//! `/create/forgetPassword` emails a reset link; the link lands on
//! `/auth/reset-password/{token}`, which POSTs the new password to
//! `/create/reset-password/{token}`.
//!
//! Callers must avoid logging passwords, codes, or tokens.

pub(crate) mod api;
pub(crate) mod build_info;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod storage;
pub(crate) mod theme;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) use api::{post_json, post_json_status};
pub(crate) use errors::AppError;
