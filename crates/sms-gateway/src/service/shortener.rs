//! Bitly-backed link shortener.

use super::{LinkShortener, ServiceError};
use async_trait::async_trait;
use bitly_client::BitlyClient;

/// [`LinkShortener`] backed by the Bitly shorten endpoint.
pub struct BitlyShortener {
    client: BitlyClient,
}

impl BitlyShortener {
    pub fn new(client: BitlyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LinkShortener for BitlyShortener {
    async fn shorten(&self, long_url: &str) -> Result<String, ServiceError> {
        Ok(self.client.shorten(long_url).await?)
    }
}
