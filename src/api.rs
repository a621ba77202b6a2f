use crate::models::{ClientDetails, VerifyTokenResponse};
use reqwest::{Client, StatusCode, header};
use sha2::{Digest, Sha256};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to COACH API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("COACH API rejected the session")]
    Unauthorized,

    #[error("COACH API answered {0}")]
    Status(StatusCode),
}

/// Bearer credentials for one signed-in dashboard user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// SHA-256 of the token, for keying per-session state without holding
    /// the credential itself.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[derive(Debug, Clone)]
pub struct CoachApi {
    http: Client,
    base_url: String,
}

impl CoachApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn verify_token(&self, token: &str) -> Result<bool, ApiError> {
        let response = self
            .http
            .get(format!("{}/get/verify/token", self.base_url))
            .query(&[("token", token)])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "token verification refused");
            return Ok(false);
        }

        let body: VerifyTokenResponse = response.json().await?;
        Ok(body.success)
    }

    pub async fn client_details(
        &self,
        session: &Session,
        client_id: &str,
    ) -> Result<ClientDetails, ApiError> {
        let response = self
            .http
            .get(format!("{}/client/details", self.base_url))
            .query(&[("clientId", client_id)])
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(session.token())
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            status => Err(ApiError::Status(status)),
        }
    }
}
