//! Client-side validation for the auth forms. These checks exist for early
//! feedback only; the API remains the authority on what it accepts.

use regex::Regex;
use std::sync::LazyLock;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_ADDRESS_REQUIRED: &str = "Email address is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const FIELD_REQUIRED: &str = "This field is required";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const INVALID_OTP: &str = "Please enter a valid 6-digit OTP";

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 20;
pub const OTP_LENGTH: usize = 6;

/// Characters accepted as the "special" character in a password.
pub const SPECIAL_CHARACTERS: &str = "!@#$%*?&._";

static UPPERCASE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("[A-Z]").ok());
static LOWERCASE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("[a-z]").ok());
static DIGIT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("[0-9]").ok());
static SPECIAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!("[{}]", regex::escape(SPECIAL_CHARACTERS))).ok()
});

fn matches(pattern: &Option<Regex>, password: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(password))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    MaxLength,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl PasswordRule {
    pub fn is_satisfied(self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            PasswordRule::MaxLength => password.chars().count() <= MAX_PASSWORD_LENGTH,
            PasswordRule::Uppercase => matches(&UPPERCASE, password),
            PasswordRule::Lowercase => matches(&LOWERCASE, password),
            PasswordRule::Number => matches(&DIGIT, password),
            PasswordRule::Special => matches(&SPECIAL, password),
        }
    }
}

/// Which screen the password is being chosen on. Signup caps the length,
/// reset does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordPolicy {
    Signup,
    Reset,
}

impl PasswordPolicy {
    pub fn rules(self) -> &'static [PasswordRule] {
        match self {
            PasswordPolicy::Signup => &[
                PasswordRule::MinLength,
                PasswordRule::MaxLength,
                PasswordRule::Uppercase,
                PasswordRule::Lowercase,
                PasswordRule::Number,
                PasswordRule::Special,
            ],
            PasswordPolicy::Reset => &[
                PasswordRule::MinLength,
                PasswordRule::Uppercase,
                PasswordRule::Lowercase,
                PasswordRule::Number,
                PasswordRule::Special,
            ],
        }
    }

    pub fn label(self, rule: PasswordRule) -> &'static str {
        match (self, rule) {
            (_, PasswordRule::MinLength) => "Minimum 8 characters",
            (_, PasswordRule::MaxLength) => "Maximum 20 characters",
            (PasswordPolicy::Signup, PasswordRule::Uppercase) => "1 Uppercase letter",
            (PasswordPolicy::Reset, PasswordRule::Uppercase) => "1 Upper letter",
            (_, PasswordRule::Lowercase) => "1 Lowercase letter",
            (_, PasswordRule::Number) => "1 Number",
            (_, PasswordRule::Special) => "1 Special character",
        }
    }

    /// Evaluates every rule of the policy against `password`.
    pub fn check(self, password: &str) -> Vec<RuleCheck> {
        self.rules()
            .iter()
            .map(|&rule| RuleCheck {
                rule,
                label: self.label(rule),
                satisfied: rule.is_satisfied(password),
            })
            .collect()
    }

    pub fn accepts(self, password: &str) -> bool {
        self.rules().iter().all(|rule| rule.is_satisfied(password))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleCheck {
    pub rule: PasswordRule,
    pub label: &'static str,
    pub satisfied: bool,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required(value: &str, message: &str) -> Option<String> {
    is_blank(value).then(|| message.to_string())
}

fn confirmation_error(password: &str, confirm: &str) -> Option<String> {
    (password != confirm).then(|| PASSWORDS_DO_NOT_MATCH.to_string())
}

/// Error shown while typing into a required field.
pub fn required_on_change(value: &str) -> Option<String> {
    required(value, FIELD_REQUIRED)
}

/// Error shown while typing into the confirmation field. Clearing it while a
/// password is set counts as a mismatch.
pub fn confirmation_on_change(password: &str, confirm: &str) -> Option<String> {
    confirmation_error(password, confirm)
}

/// Confirmation error re-evaluated when the password changes. An untouched
/// confirmation field stays quiet.
pub fn confirmation_on_password_change(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        None
    } else {
        confirmation_error(password, confirm)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: required(email, EMAIL_REQUIRED),
        password: required(password, PASSWORD_REQUIRED),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

pub struct SignupForm<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl SignupForm<'_> {
    /// Whether the form may be submitted; drives the submit button.
    pub fn is_valid(&self) -> bool {
        !is_blank(self.username)
            && !is_blank(self.email)
            && !self.password.is_empty()
            && PasswordPolicy::Signup.accepts(self.password)
            && self.password == self.confirm_password
    }

    /// Errors recomputed on submit.
    pub fn submit_errors(&self) -> SignupErrors {
        SignupErrors {
            username: required(self.username, USERNAME_REQUIRED),
            email: required(self.email, EMAIL_REQUIRED),
            password: required(self.password, PASSWORD_REQUIRED),
            confirm_password: confirmation_error(self.password, self.confirm_password),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetErrors {
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

pub struct ResetForm<'a> {
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl ResetForm<'_> {
    pub fn is_valid(&self) -> bool {
        !self.password.is_empty()
            && PasswordPolicy::Reset.accepts(self.password)
            && self.password == self.confirm_password
    }

    pub fn submit_errors(&self) -> ResetErrors {
        ResetErrors {
            password: required(self.password, PASSWORD_REQUIRED),
            confirm_password: confirmation_error(self.password, self.confirm_password),
        }
    }
}

/// Forgot-password field feedback while typing.
pub fn forgot_email_on_change(email: &str) -> Option<String> {
    required(email, EMAIL_REQUIRED)
}

/// Forgot-password check on submit.
pub fn forgot_email_on_submit(email: &str) -> Option<String> {
    required(email, EMAIL_ADDRESS_REQUIRED)
}

/// Accepts exactly six ASCII digits.
pub fn validate_otp(otp: &str) -> Result<(), &'static str> {
    if otp.len() == OTP_LENGTH && otp.bytes().all(|byte| byte.is_ascii_digit()) {
        Ok(())
    } else {
        Err(INVALID_OTP)
    }
}
