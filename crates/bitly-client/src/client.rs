//! Bitly HTTP client.

use crate::error::BitlyError;
use crate::types::{ApiErrorBody, ShortenRequest, ShortenResponse};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default Bitly v4 API URL.
pub const DEFAULT_API_URL: &str = "https://api-ssl.bitly.com/v4";

/// Bitly link-shortening client.
///
/// The access token is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct BitlyClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl std::fmt::Debug for BitlyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitlyClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl BitlyClient {
    /// Create a new Bitly client.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BitlyError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: SecretString::new(token.into()),
        })
    }

    /// Shorten one long URL, returning the shortened link.
    #[instrument(skip(self))]
    pub async fn shorten(&self, long_url: &str) -> Result<String, BitlyError> {
        let response = self
            .client
            .post(format!("{}/shorten", self.base_url))
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(&ShortenRequest { long_url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.description.or_else(|| Some(e.message)))
                .filter(|m| !m.is_empty())
                .unwrap_or(body);
            warn!(status = %status, message = %message, "shorten request failed");
            return Err(BitlyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: ShortenResponse = {
            let body = response.text().await?;
            serde_json::from_str(&body)?
        };

        debug!(link = %decoded.link, "url shortened");
        Ok(decoded.link)
    }
}
