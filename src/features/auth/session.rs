//! Persisted auth data. The session token and profile live in
//! `localStorage` under keys shared with the rest of the platform; the
//! credentials needed to resend an OTP live in `sessionStorage` until the OTP
//! exchange succeeds. Passwords are only exposed when building the resend
//! request.

use crate::{
    app_lib::storage::{BrowserStorage, KeyValueStore},
    features::auth::types::{AuthGrant, DEFAULT_ROLE, UserData},
};
use secrecy::SecretString;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_DATA_KEY: &str = "userData";
pub const LOGIN_EMAIL_KEY: &str = "loginEmail";
pub const LOGIN_PASSWORD_KEY: &str = "loginPassword";

/// Credentials kept between sign-in and OTP verification.
pub struct PendingLogin {
    pub email: String,
    pub password: SecretString,
}

/// Auth data read back from storage.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user_data: Option<UserData>,
}

impl StoredSession {
    pub fn role(&self) -> String {
        self.user_data
            .as_ref()
            .map_or_else(|| DEFAULT_ROLE.to_string(), UserData::role)
    }

    pub fn dashboard_path(&self) -> String {
        dashboard_path(&self.role())
    }
}

/// Dashboard route for a role. Roles that would not form a single clean
/// path segment fall back to the default role.
pub fn dashboard_path(role: &str) -> String {
    let role = role.trim().to_lowercase();
    let role = if !role.is_empty()
        && role
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
    {
        role
    } else {
        DEFAULT_ROLE.to_string()
    };
    format!("/{role}/dashboard")
}

/// Token carried by a link: the decoded path segment wins over the query
/// value. Blank values count as missing.
pub fn link_token(path_param: Option<String>, query_param: Option<String>) -> Option<String> {
    [path_param, query_param]
        .into_iter()
        .flatten()
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

pub struct SessionStore<L, S> {
    local: L,
    session: S,
}

impl SessionStore<BrowserStorage, BrowserStorage> {
    pub const fn browser() -> Self {
        Self {
            local: BrowserStorage::local(),
            session: BrowserStorage::session(),
        }
    }
}

impl<L: KeyValueStore, S: KeyValueStore> SessionStore<L, S> {
    #[cfg(test)]
    pub const fn new(local: L, session: S) -> Self {
        Self { local, session }
    }

    pub fn auth_token(&self) -> Option<String> {
        self.local
            .get(AUTH_TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn user_data(&self) -> Option<UserData> {
        let raw = self.local.get(USER_DATA_KEY)?;
        match serde_json::from_str::<Option<UserData>>(&raw) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!("stored user data is not valid JSON: {err}");
                None
            }
        }
    }

    pub fn load(&self) -> Option<StoredSession> {
        Some(StoredSession {
            token: self.auth_token()?,
            user_data: self.user_data(),
        })
    }

    /// Writes the token and profile from a successful sign-in or OTP exchange.
    pub fn persist(&self, grant: &AuthGrant) -> StoredSession {
        self.local.set(AUTH_TOKEN_KEY, &grant.token);
        match grant
            .user_data
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
        {
            Ok(Some(json)) => self.local.set(USER_DATA_KEY, &json),
            Ok(None) => self.local.remove(USER_DATA_KEY),
            Err(err) => {
                tracing::warn!("failed to encode user data: {err}");
                self.local.remove(USER_DATA_KEY);
            }
        }

        StoredSession {
            token: grant.token.clone(),
            user_data: grant.user_data.clone(),
        }
    }

    /// Keeps the sign-in credentials so the OTP screen can request a resend.
    pub fn remember_login(&self, email: &str, password: &SecretString) {
        use secrecy::ExposeSecret;

        self.session.set(LOGIN_EMAIL_KEY, email);
        self.session
            .set(LOGIN_PASSWORD_KEY, password.expose_secret());
    }

    pub fn login_email(&self) -> Option<String> {
        self.session
            .get(LOGIN_EMAIL_KEY)
            .filter(|email| !email.trim().is_empty())
    }

    pub fn pending_login(&self) -> Option<PendingLogin> {
        let email = self.login_email()?;
        let password = self
            .session
            .get(LOGIN_PASSWORD_KEY)
            .filter(|password| !password.is_empty())?;
        Some(PendingLogin {
            email,
            password: SecretString::from(password),
        })
    }

    pub fn clear_pending_login(&self) {
        self.session.remove(LOGIN_EMAIL_KEY);
        self.session.remove(LOGIN_PASSWORD_KEY);
    }

    /// Removes everything this app stored; used on sign out.
    pub fn clear(&self) {
        self.local.remove(AUTH_TOKEN_KEY);
        self.local.remove(USER_DATA_KEY);
        self.clear_pending_login();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::storage::MemoryStorage;
    use secrecy::ExposeSecret;
    use serde_json::json;

    fn store() -> (SessionStore<MemoryStorage, MemoryStorage>, MemoryStorage, MemoryStorage) {
        let local = MemoryStorage::new();
        let session = MemoryStorage::new();
        (
            SessionStore::new(local.clone(), session.clone()),
            local,
            session,
        )
    }

    fn user(value: serde_json::Value) -> UserData {
        serde_json::from_value(value).expect("user data")
    }

    #[test]
    fn persist_writes_token_and_user_data() {
        let (store, local, _) = store();
        let grant = AuthGrant {
            token: "tkn".to_string(),
            user_data: Some(user(json!({"username": "ada", "role": "Admin"}))),
        };

        let stored = store.persist(&grant);

        assert_eq!(local.get(AUTH_TOKEN_KEY).as_deref(), Some("tkn"));
        let raw = local.get(USER_DATA_KEY).expect("user data stored");
        let decoded: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(decoded, json!({"username": "ada", "role": "Admin"}));
        assert_eq!(stored.dashboard_path(), "/admin/dashboard");
        assert_eq!(store.load(), Some(stored));
    }

    #[test]
    fn persist_without_user_data_removes_stale_copy() {
        let (store, local, _) = store();
        local.set(USER_DATA_KEY, r#"{"username":"old"}"#);

        store.persist(&AuthGrant {
            token: "tkn".to_string(),
            user_data: None,
        });

        assert_eq!(local.get(USER_DATA_KEY), None);
        let loaded = store.load().expect("session");
        assert_eq!(loaded.role(), DEFAULT_ROLE);
    }

    #[test]
    fn load_ignores_blank_token_and_bad_json() {
        let (store, local, _) = store();
        assert_eq!(store.load(), None);

        local.set(AUTH_TOKEN_KEY, "  ");
        assert_eq!(store.load(), None);

        local.set(AUTH_TOKEN_KEY, "tkn");
        local.set(USER_DATA_KEY, "undefined");
        let loaded = store.load().expect("session");
        assert_eq!(loaded.user_data, None);

        local.set(USER_DATA_KEY, "null");
        assert_eq!(store.user_data(), None);
    }

    #[test]
    fn pending_login_round_trips_until_cleared() {
        let (store, _, session) = store();
        assert!(store.pending_login().is_none());

        store.remember_login("ada@example.com", &SecretString::from("Secret#123".to_string()));
        assert_eq!(session.get(LOGIN_EMAIL_KEY).as_deref(), Some("ada@example.com"));

        let pending = store.pending_login().expect("pending login");
        assert_eq!(pending.email, "ada@example.com");
        assert_eq!(pending.password.expose_secret(), "Secret#123");

        store.clear_pending_login();
        assert!(store.pending_login().is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn pending_login_requires_password() {
        let (store, _, session) = store();
        session.set(LOGIN_EMAIL_KEY, "ada@example.com");
        assert_eq!(store.login_email().as_deref(), Some("ada@example.com"));
        assert!(store.pending_login().is_none());
    }

    #[test]
    fn clear_removes_every_key() {
        let (store, local, session) = store();
        store.persist(&AuthGrant {
            token: "tkn".to_string(),
            user_data: Some(user(json!({"role": "student"}))),
        });
        store.remember_login("ada@example.com", &SecretString::from("Secret#123".to_string()));

        store.clear();

        assert!(local.is_empty());
        assert!(session.is_empty());
    }

    #[test]
    fn link_token_prefers_path_and_keeps_query_verbatim() {
        assert_eq!(
            link_token(Some("abc".to_string()), Some("def".to_string())).as_deref(),
            Some("abc")
        );
        assert_eq!(link_token(None, Some("ab%41".to_string())).as_deref(), Some("ab%41"));
        assert_eq!(
            link_token(Some("  ".to_string()), Some(" def ".to_string())).as_deref(),
            Some("def")
        );
        assert_eq!(link_token(None, None), None);
    }

    #[test]
    fn dashboard_path_normalizes_role() {
        assert_eq!(dashboard_path("Teacher"), "/teacher/dashboard");
        assert_eq!(dashboard_path(" student "), "/student/dashboard");
        assert_eq!(dashboard_path(""), "/student/dashboard");
        assert_eq!(dashboard_path("../admin"), "/student/dashboard");
        assert_eq!(dashboard_path("super_admin"), "/super_admin/dashboard");
    }
}
