//! HTTP helpers for the JSON API with a shared timeout and error mapping.
//! Request bodies may carry passwords or one-time codes, so nothing here logs
//! payloads.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;
use url::Url;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error message characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Error envelope shared by every endpoint.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    segments: &[&str],
    body: &B,
) -> Result<T, AppError> {
    let response = post(path, segments, body).await?;
    handle_json_response(response).await
}

/// Posts JSON and only checks the status; the response body is ignored on
/// success.
pub async fn post_json_status<B: Serialize>(
    path: &str,
    segments: &[&str],
    body: &B,
) -> Result<(), AppError> {
    let response = post(path, segments, body).await?;
    handle_empty_response(response).await
}

async fn post<B: Serialize>(
    path: &str,
    segments: &[&str],
    body: &B,
) -> Result<Response, AppError> {
    let config = AppConfig::load();
    let url = build_url_with_base(&config.api_base_url, path, segments)?;
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Builds a URL from the API base, a fixed path, and trailing path segments.
/// Segments are percent-encoded, so tokens containing `/` or `?` stay a
/// single segment.
fn build_url_with_base(base_url: &str, path: &str, segments: &[&str]) -> Result<String, AppError> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|err| AppError::Config(format!("API base URL is invalid: {err}")))?;

    url.path_segments_mut()
        .map_err(|()| AppError::Config("API base URL cannot carry a path.".to_string()))?
        .pop_if_empty()
        .extend(path.split('/').filter(|part| !part.is_empty()))
        .extend(segments.iter().copied());

    Ok(url.into())
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with the server message.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Handles responses whose body is irrelevant on success.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: error_message(&body),
    }
}

/// Extracts the `message` field of a JSON error body. Non-JSON bodies yield
/// `None` so callers fall back to their own wording.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body.trim()).ok()?;
    parsed.message.and_then(|message| sanitize_message(&message))
}

/// Trims and truncates a server message for display.
fn sanitize_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_ERROR_CHARS, build_url_with_base, error_message};
    use crate::app_lib::AppError;

    #[test]
    fn build_url_joins_base_and_path() {
        let url = build_url_with_base("https://e-sdg.onrender.com", "/create/signIn", &[])
            .expect("valid url");
        assert_eq!(url, "https://e-sdg.onrender.com/create/signIn");

        let url = build_url_with_base("https://api.example.com/v2/", "create/sign-up", &[])
            .expect("valid url");
        assert_eq!(url, "https://api.example.com/v2/create/sign-up");
    }

    #[test]
    fn build_url_encodes_token_segments() {
        let url = build_url_with_base(
            "https://e-sdg.onrender.com",
            "/create/reset-password",
            &["abc/def?x=1"],
        )
        .expect("valid url");
        assert_eq!(
            url,
            "https://e-sdg.onrender.com/create/reset-password/abc%2Fdef%3Fx=1"
        );
    }

    #[test]
    fn build_url_rejects_invalid_base() {
        let err = build_url_with_base("not a url", "/create/signIn", &[]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn error_message_reads_json_message() {
        assert_eq!(
            error_message(r#"{"success":false,"message":"Invalid OTP"}"#),
            Some("Invalid OTP".to_string())
        );
        assert_eq!(error_message(r#"{"success":false}"#), None);
        assert_eq!(error_message(r#"{"message":"   "}"#), None);
        assert_eq!(error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(error_message(""), None);
    }

    #[test]
    fn error_message_is_truncated() {
        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        let body = format!(r#"{{"message":"{long}"}}"#);
        let message = error_message(&body).expect("message");
        assert_eq!(message.chars().count(), MAX_ERROR_CHARS);
    }
}
