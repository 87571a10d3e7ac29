//! Explicit, dependency-injected auth session.
//!
//! Replaces ambient context lookup: whatever needs the session gets handed
//! one, and login/logout return explicit results instead of throwing.

use tracing::info;

use crate::source::{AuthError, AuthSource, AuthToken, Credentials};
use crate::validation::validate_login;

/// One user's authentication state for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    token: Option<AuthToken>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Validate the form, then ask the source to verify the credentials.
    ///
    /// Validation failures never reach the network. A successful login
    /// replaces any previous token.
    pub async fn login(
        &mut self,
        source: &dyn AuthSource,
        credentials: &Credentials,
    ) -> Result<(), AuthError> {
        if validate_login(&crate::validation::LoginForm {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        })
        .is_err()
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token = source.login(credentials).await?;
        info!(username = %credentials.username, "login succeeded");
        self.token = Some(token);
        Ok(())
    }

    /// Drop the session token. Always succeeds, even when not logged in.
    pub fn logout(&mut self) {
        if self.token.take().is_some() {
            info!("logged out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockAuthSource;

    fn source() -> MockAuthSource {
        MockAuthSource::new().with_user("johnd", "m38rmF$")
    }

    #[tokio::test]
    async fn login_stores_token() {
        let mut session = AuthSession::new();
        assert!(!session.is_authenticated());

        session
            .login(&source(), &Credentials::new("johnd", "m38rmF$"))
            .await
            .unwrap();

        assert!(session.is_authenticated());
        assert!(session.token().is_some());
    }

    #[tokio::test]
    async fn failed_login_leaves_session_unauthenticated() {
        let mut session = AuthSession::new();

        let err = session
            .login(&source(), &Credentials::new("johnd", "nope"))
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn empty_credentials_fail_before_the_source_is_asked() {
        // A source with no users would reject anything it is actually asked;
        // empty credentials must be refused by validation first.
        let mut session = AuthSession::new();
        let err = session
            .login(&MockAuthSource::new(), &Credentials::new("", ""))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let mut session = AuthSession::new();
        session
            .login(&source(), &Credentials::new("johnd", "m38rmF$"))
            .await
            .unwrap();

        session.logout();
        assert!(!session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }
}
