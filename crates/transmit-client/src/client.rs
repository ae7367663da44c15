//! Transmit SMS HTTP client.

use crate::error::TransmitError;
use crate::types::{FormatResponse, FormattedNumber, SendResponse};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default Transmit SMS API URL.
pub const DEFAULT_API_URL: &str = "https://api.transmitsms.com";

/// Default country code sent with format-number requests.
pub const DEFAULT_COUNTRY_CODE: &str = "AU";

/// Transmit SMS client covering number formatting and message sending.
///
/// The API secret is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct TransmitClient {
    client: Client,
    base_url: String,
    api_key: String,
    secret: SecretString,
    country_code: String,
}

impl std::fmt::Debug for TransmitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransmitClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .field("country_code", &self.country_code)
            .finish()
    }
}

impl TransmitClient {
    /// Create a new Transmit client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransmitError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            secret: SecretString::new(secret.into()),
            country_code: DEFAULT_COUNTRY_CODE.into(),
        })
    }

    /// Override the country code sent with format-number requests.
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Validate and normalize a raw phone number into international form.
    ///
    /// A decoded response with `isValid: false` is not an error; the carrier's
    /// diagnostic code is logged and the returned number carries the flag.
    #[instrument(skip(self))]
    pub async fn format_number(&self, msisdn: &str) -> Result<FormattedNumber, TransmitError> {
        let response = self
            .client
            .post(format!("{}/format-number.json", self.base_url))
            .basic_auth(&self.api_key, Some(self.secret.expose_secret()))
            .form(&[("msisdn", msisdn), ("countrycode", &self.country_code)])
            .send()
            .await?;

        let decoded: FormatResponse = self.handle_response(response).await?;

        if !decoded.number.is_valid {
            warn!(
                code = %decoded.error.code,
                description = %decoded.error.description,
                "number rejected by carrier"
            );
            return Ok(FormattedNumber {
                international: 0,
                is_valid: false,
            });
        }

        debug!(international = decoded.number.international, "number formatted");
        Ok(FormattedNumber {
            international: decoded.number.international,
            is_valid: true,
        })
    }

    /// Send one text message to a formatted number.
    ///
    /// A 2xx response means the carrier accepted the message for delivery.
    #[instrument(skip(self, message))]
    pub async fn send_message(&self, to: i64, message: &str) -> Result<(), TransmitError> {
        let recipient = to.to_string();
        let response = self
            .client
            .post(format!("{}/send-sms.json", self.base_url))
            .basic_auth(&self.api_key, Some(self.secret.expose_secret()))
            .form(&[("message", message), ("to", recipient.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(to, "message accepted by carrier");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<SendResponse>(&body) {
            Ok(decoded) => {
                warn!(
                    status = %status,
                    code = %decoded.error.code,
                    description = %decoded.error.description,
                    "carrier rejected message"
                );
                Err(TransmitError::Rejected {
                    code: decoded.error.code,
                    description: decoded.error.description,
                })
            }
            Err(_) => {
                warn!(status = %status, body = %body, "send request failed");
                Err(TransmitError::Api {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Handle HTTP response, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TransmitError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(TransmitError::from)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "carrier request failed");
            Err(TransmitError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}
