//! Carrier-backed number formatter.

use super::{NumberFormatter, ServiceError};
use async_trait::async_trait;
use transmit_client::{FormattedNumber, TransmitClient};

/// [`NumberFormatter`] backed by the carrier's format-number endpoint.
pub struct TransmitFormatter {
    client: TransmitClient,
}

impl TransmitFormatter {
    pub fn new(client: TransmitClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NumberFormatter for TransmitFormatter {
    async fn format(&self, phone_number: &str) -> Result<FormattedNumber, ServiceError> {
        Ok(self.client.format_number(phone_number).await?)
    }
}
