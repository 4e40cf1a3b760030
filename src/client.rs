use crate::models::CheckIn;
use crate::support::Support;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum SupportError {
    #[error("support service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("support service responded with {0}")]
    Status(StatusCode),

    #[error("support service returned an undecodable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issues one POST per check-in. No retry, timeout or cancellation.
#[derive(Debug, Clone)]
pub struct SupportClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SupportClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SupportError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn request_support(&self, check_in: &CheckIn) -> Result<Support, SupportError> {
        debug!(endpoint = %self.endpoint, mood = %check_in.mood, "requesting support");
        let response = self
            .http
            .post(&self.endpoint)
            .json(check_in)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SupportError::Status(status));
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        Ok(Support::from_body(&body))
    }
}
