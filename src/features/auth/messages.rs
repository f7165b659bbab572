//! Maps request failures to the inline text each screen shows. Server
//! messages are preferred when the API sent one that applies.

use crate::app_lib::AppError;

pub const CONNECTION_FAILED: &str =
    "Unable to connect to the server. Please check your internet connection.";
pub const TRY_AGAIN_LATER: &str = "An error occurred. Please try again later.";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please login again.";
pub const INVALID_RESET_LINK: &str = "This reset link is invalid or has expired.";

pub const SIGNUP_SUCCESS: &str = "Registration successful! Please login to continue";
pub const RESET_SUCCESS: &str = "Password reset successful. Please login with your new password";

/// Sign-in: only an explicit `success: false` shows the server's words; any
/// other failure reads as a connection problem.
pub fn login_error(err: &AppError) -> String {
    match err {
        AppError::Rejected(_) => err.message_or("Login failed. Please try again."),
        AppError::Config(message) | AppError::Validation(message) => message.clone(),
        _ => CONNECTION_FAILED.to_string(),
    }
}

pub fn signup_error(err: &AppError) -> String {
    match err {
        AppError::Http { .. } => err.message_or("Sign-up failed"),
        AppError::Rejected(_) => err.message_or("Registration failed"),
        AppError::Config(message) | AppError::Validation(message) => message.clone(),
        _ => "Registration failed. Please try again.".to_string(),
    }
}

pub fn otp_error(err: &AppError) -> String {
    match err {
        AppError::Http { .. } | AppError::Rejected(_) => err.message_or("OTP verification failed"),
        AppError::Config(message) | AppError::Validation(message) => message.clone(),
        _ => TRY_AGAIN_LATER.to_string(),
    }
}

pub fn resend_error(err: &AppError) -> String {
    match err {
        AppError::Http { .. } | AppError::Rejected(_) => err.message_or("Failed to resend OTP"),
        AppError::Config(message) | AppError::Validation(message) => message.clone(),
        _ => "Failed to resend OTP. Please try again.".to_string(),
    }
}

pub fn forgot_password_error(err: &AppError) -> String {
    match err {
        AppError::Http { .. } => err.message_or("No account registered with this email."),
        AppError::Config(message) | AppError::Validation(message) => message.clone(),
        _ => TRY_AGAIN_LATER.to_string(),
    }
}

pub fn reset_password_error(err: &AppError) -> String {
    match err {
        AppError::Http { .. } => err.message_or("Failed to reset password. Please try again."),
        AppError::Config(message) | AppError::Validation(message) => message.clone(),
        _ => TRY_AGAIN_LATER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(message: Option<&str>) -> AppError {
        AppError::Http {
            status: 400,
            message: message.map(str::to_string),
        }
    }

    fn network() -> AppError {
        AppError::Network("Failed to fetch".to_string())
    }

    #[test]
    fn login_treats_http_errors_as_connection_failures() {
        assert_eq!(login_error(&http(Some("Bad request"))), CONNECTION_FAILED);
        assert_eq!(login_error(&network()), CONNECTION_FAILED);
        assert_eq!(
            login_error(&AppError::Rejected(Some("Invalid credentials".to_string()))),
            "Invalid credentials"
        );
        assert_eq!(
            login_error(&AppError::Rejected(None)),
            "Login failed. Please try again."
        );
    }

    #[test]
    fn signup_distinguishes_http_and_rejection_fallbacks() {
        assert_eq!(signup_error(&http(None)), "Sign-up failed");
        assert_eq!(signup_error(&http(Some("Email taken"))), "Email taken");
        assert_eq!(signup_error(&AppError::Rejected(None)), "Registration failed");
        assert_eq!(
            signup_error(&network()),
            "Registration failed. Please try again."
        );
    }

    #[test]
    fn otp_prefers_server_message() {
        assert_eq!(otp_error(&http(Some("OTP expired"))), "OTP expired");
        assert_eq!(otp_error(&AppError::Rejected(None)), "OTP verification failed");
        assert_eq!(otp_error(&network()), TRY_AGAIN_LATER);
        assert_eq!(
            otp_error(&AppError::Timeout("slow".to_string())),
            TRY_AGAIN_LATER
        );
    }

    #[test]
    fn resend_falls_back_for_every_failure() {
        assert_eq!(resend_error(&http(Some("Too many requests"))), "Too many requests");
        assert_eq!(resend_error(&http(None)), "Failed to resend OTP");
        assert_eq!(resend_error(&AppError::Rejected(None)), "Failed to resend OTP");
        assert_eq!(
            resend_error(&AppError::Rejected(Some("Invalid credentials".to_string()))),
            "Invalid credentials"
        );
        assert_eq!(
            resend_error(&network()),
            "Failed to resend OTP. Please try again."
        );
        assert_eq!(
            resend_error(&AppError::Validation(SESSION_EXPIRED.to_string())),
            SESSION_EXPIRED
        );
    }

    #[test]
    fn forgot_and_reset_use_their_own_fallbacks() {
        assert_eq!(
            forgot_password_error(&http(None)),
            "No account registered with this email."
        );
        assert_eq!(forgot_password_error(&network()), TRY_AGAIN_LATER);
        assert_eq!(
            reset_password_error(&http(None)),
            "Failed to reset password. Please try again."
        );
        assert_eq!(
            reset_password_error(&http(Some("Token expired"))),
            "Token expired"
        );
        assert_eq!(reset_password_error(&network()), TRY_AGAIN_LATER);
    }

    #[test]
    fn config_errors_pass_through() {
        let err = AppError::Config("API base URL is invalid".to_string());
        assert_eq!(login_error(&err), "API base URL is invalid");
        assert_eq!(reset_password_error(&err), "API base URL is invalid");
    }
}
