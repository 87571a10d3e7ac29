//! Credential-check boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Username/password pair as entered in the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Opaque bearer token returned on a successful login.
///
/// No refresh, no expiry handling, no secure storage — the token only lives
/// for the session that obtained it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Login failure, surfaced to the user as a notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The source did not accept the credentials.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Transport-level failure; retriable.
    #[error("login request failed: {0}")]
    Network(String),

    /// An operation that needs a session was called without one.
    #[error("not authenticated")]
    NotAuthenticated,
}

/// Verifier of credentials (remote API, or a fixture for tests/demo).
#[async_trait]
pub trait AuthSource: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;
}

/// In-memory source with a fixed user table.
#[derive(Debug, Clone, Default)]
pub struct MockAuthSource {
    users: Vec<(String, String)>,
}

impl MockAuthSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((username.into(), password.into()));
        self
    }
}

#[async_trait]
impl AuthSource for MockAuthSource {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        let known = self
            .users
            .iter()
            .any(|(u, p)| *u == credentials.username && *p == credentials.password);

        if known {
            Ok(AuthToken::new(format!("mock-token-{}", credentials.username)))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_source_accepts_known_user() {
        let source = MockAuthSource::new().with_user("johnd", "m38rmF$");

        let token = source
            .login(&Credentials::new("johnd", "m38rmF$"))
            .await
            .unwrap();
        assert!(!token.as_str().is_empty());
    }

    #[tokio::test]
    async fn mock_source_rejects_wrong_password() {
        let source = MockAuthSource::new().with_user("johnd", "m38rmF$");

        let err = source
            .login(&Credentials::new("johnd", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }
}
