use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Validation(String),
    Network(String),
    Timeout(String),
    /// Non-2xx response; `message` is the server's `message` field when the
    /// body carried one.
    Http {
        status: u16,
        message: Option<String>,
    },
    /// 2xx response with `success: false`.
    Rejected(Option<String>),
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http {
                message: Some(message),
                ..
            }
            | AppError::Rejected(Some(message)) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Inline text for a form: the server message when present, otherwise
    /// `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => match message {
                Some(message) => write!(formatter, "Request failed ({status}): {message}"),
                None => write!(formatter, "Request failed ({status})"),
            },
            AppError::Rejected(message) => match message {
                Some(message) => write!(formatter, "Request rejected: {message}"),
                None => write!(formatter, "Request rejected"),
            },
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn message_or_prefers_server_message() {
        let err = AppError::Http {
            status: 400,
            message: Some("Invalid OTP".to_string()),
        };
        assert_eq!(err.message_or("OTP verification failed"), "Invalid OTP");

        let err = AppError::Rejected(Some("User not found".to_string()));
        assert_eq!(err.message_or("Login failed"), "User not found");
    }

    #[test]
    fn message_or_falls_back_without_server_message() {
        let err = AppError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.message_or("Sign-up failed"), "Sign-up failed");

        let err = AppError::Rejected(Some("   ".to_string()));
        assert_eq!(err.message_or("Registration failed"), "Registration failed");

        let err = AppError::Network("offline".to_string());
        assert_eq!(err.message_or("Try again later"), "Try again later");
    }

    #[test]
    fn display_includes_status() {
        let err = AppError::Http {
            status: 401,
            message: Some("Unauthorized".to_string()),
        };
        assert_eq!(err.to_string(), "Request failed (401): Unauthorized");
    }
}
