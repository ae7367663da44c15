//! Carrier-backed message sender.

use super::{links, LinkShortener, MessageSender, ServiceError};
use async_trait::async_trait;
use std::sync::Arc;
use transmit_client::TransmitClient;

/// [`MessageSender`] backed by the carrier's send-sms endpoint.
///
/// URLs in the text are replaced with shortened links before transmission;
/// a shortening failure aborts the send without contacting the carrier.
pub struct TransmitSender {
    client: TransmitClient,
    shortener: Arc<dyn LinkShortener>,
}

impl TransmitSender {
    pub fn new(client: TransmitClient, shortener: Arc<dyn LinkShortener>) -> Self {
        Self { client, shortener }
    }
}

#[async_trait]
impl MessageSender for TransmitSender {
    async fn send(&self, phone_number: i64, text: &str) -> Result<(), ServiceError> {
        let text = links::replace_links(self.shortener.as_ref(), text).await?;
        self.client.send_message(phone_number, &text).await?;
        Ok(())
    }
}
