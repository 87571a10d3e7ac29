//! HTTP auth source (fakestore-style login endpoint).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::source::{AuthError, AuthSource, AuthToken, Credentials};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// Auth source backed by `POST {base}/auth/login`.
///
/// The endpoint answers 200 with `{"token": "..."}` for valid credentials and
/// a non-success status otherwise; there is no finer-grained error contract.
#[derive(Debug, Clone)]
pub struct HttpAuthSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AuthSource for HttpAuthSource {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(%url, username = %credentials.username, "attempting login");

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidCredentials);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(AuthToken::new(body.token))
    }
}
