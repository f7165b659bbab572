//! Request and response types for the auth API. Requests carry passwords and
//! one-time codes, so they do not derive `Debug` and must never be
//! logged.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role assumed when `userData` carries none.
pub const DEFAULT_ROLE: &str = "student";

#[derive(Clone, Serialize)]
pub struct SignInRequest {
    #[serde(rename = "logInID")]
    pub log_in_id: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct LoginSessionRequest {
    pub otp: String,
}

#[derive(Clone, Serialize)]
pub struct VerifyLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

/// Response to `signIn` and `login-session`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    pub user_data: Option<UserData>,
    pub message: Option<String>,
}

impl SessionResponse {
    /// Converts a decoded response into a grant. `success: false` becomes
    /// [`AppError::Rejected`]; a success without a token is a malformed
    /// response.
    pub fn into_grant(self) -> Result<AuthGrant, AppError> {
        if !self.success {
            return Err(AppError::Rejected(self.message));
        }
        let token = self
            .token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Parse("Response did not include a token.".to_string()))?;

        Ok(AuthGrant {
            token,
            user_data: self.user_data,
        })
    }
}

/// Token and profile handed out by a successful sign-in or OTP exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthGrant {
    pub token: String,
    pub user_data: Option<UserData>,
}

/// Response shape shared by endpoints that only report an outcome.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

impl MessageResponse {
    pub fn into_result(self) -> Result<(), AppError> {
        if self.success {
            Ok(())
        } else {
            Err(AppError::Rejected(self.message))
        }
    }
}

/// Opaque user profile returned by the API. Only `role`, `username` and
/// `email` are read; every other field is preserved so the stored copy
/// matches what the server sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData(pub Map<String, Value>);

impl UserData {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Lowercased role, `student` when absent.
    pub fn role(&self) -> String {
        self.str_field("role")
            .map_or_else(|| DEFAULT_ROLE.to_string(), str::to_lowercase)
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> Option<&str> {
        self.str_field("username").or_else(|| self.str_field("email"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_in_request_uses_log_in_id() {
        let request = SignInRequest {
            log_in_id: "ada@example.com".to_string(),
            password: "Secret#123".to_string(),
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            json!({"logInID": "ada@example.com", "password": "Secret#123"})
        );
    }

    #[test]
    fn reset_password_request_uses_camel_case() {
        let request = ResetPasswordRequest {
            new_password: "Secret#123".to_string(),
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value, json!({"newPassword": "Secret#123"}));
    }

    #[test]
    fn session_response_decodes_full_payload() {
        let response: SessionResponse = serde_json::from_str(
            r#"{
                "success": true,
                "token": "tkn",
                "userData": {"username": "ada", "role": "Teacher", "id": 7},
                "message": "ok"
            }"#,
        )
        .expect("decode");

        assert!(response.success);
        assert_eq!(response.token.as_deref(), Some("tkn"));
        let user = response.user_data.expect("user data");
        assert_eq!(user.role(), "teacher");
        assert_eq!(user.display_name(), Some("ada"));
        assert_eq!(user.0.get("id"), Some(&json!(7)));
    }

    #[test]
    fn session_response_tolerates_missing_fields() {
        let response: SessionResponse =
            serde_json::from_str(r#"{"message": "Invalid credentials"}"#).expect("decode");
        assert!(!response.success);
        assert!(response.token.is_none());
        assert!(response.user_data.is_none());
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn into_grant_requires_success_and_token() {
        let response = SessionResponse {
            success: true,
            token: Some(" tkn ".to_string()),
            user_data: None,
            message: None,
        };
        let grant = response.into_grant().expect("grant");
        assert_eq!(grant.token, "tkn");
        assert!(grant.user_data.is_none());

        let response = SessionResponse {
            success: false,
            message: Some("Wrong password".to_string()),
            ..SessionResponse::default()
        };
        assert_eq!(
            response.into_grant().unwrap_err(),
            AppError::Rejected(Some("Wrong password".to_string()))
        );

        let response = SessionResponse {
            success: true,
            token: Some(String::new()),
            ..SessionResponse::default()
        };
        assert!(matches!(
            response.into_grant().unwrap_err(),
            AppError::Parse(_)
        ));
    }

    #[test]
    fn message_response_maps_success_flag() {
        let ok: MessageResponse =
            serde_json::from_str(r#"{"success": true, "message": "sent"}"#).expect("decode");
        assert_eq!(ok.into_result(), Ok(()));

        let rejected: MessageResponse =
            serde_json::from_str(r#"{"message": "Email taken"}"#).expect("decode");
        assert_eq!(
            rejected.into_result(),
            Err(AppError::Rejected(Some("Email taken".to_string())))
        );
    }

    #[test]
    fn role_defaults_to_student() {
        assert_eq!(UserData::default().role(), DEFAULT_ROLE);

        let user: UserData = serde_json::from_value(json!({"role": "  "})).expect("decode");
        assert_eq!(user.role(), DEFAULT_ROLE);

        let user: UserData = serde_json::from_value(json!({"role": 3})).expect("decode");
        assert_eq!(user.role(), DEFAULT_ROLE);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user: UserData =
            serde_json::from_value(json!({"email": "ada@example.com"})).expect("decode");
        assert_eq!(user.display_name(), Some("ada@example.com"));
    }
}
