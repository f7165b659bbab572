//! Client-side route paths. Links and redirects go through these so the route
//! table in `mod.rs` stays the single place that defines them.

pub const LOGIN: &str = "/auth/login";
pub const SIGNUP: &str = "/auth/signup";
pub const VERIFICATION: &str = "/auth/verification";
pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
/// Where already signed-in visitors of the login page are sent.
pub const DEFAULT_DASHBOARD: &str = "/student/dashboard";

/// OTP page for a sign-in token.
pub fn verification(token: &str) -> String {
    let encoded = String::from(js_sys::encode_uri_component(token));
    format!("{VERIFICATION}/{encoded}")
}

/// Reverses [`verification`]'s encoding of a token path parameter. Query
/// values arrive already decoded and must not pass through here.
pub fn decode_path_token(raw: &str) -> String {
    js_sys::decode_uri_component(raw)
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string())
}
