//! Capability traits and implementations for the send pipeline.

mod formatter;
mod links;
mod sender;
mod shortener;

pub use formatter::TransmitFormatter;
pub use sender::TransmitSender;
pub use shortener::BitlyShortener;

use async_trait::async_trait;
use bitly_client::BitlyError;
use thiserror::Error;
use transmit_client::{FormattedNumber, TransmitError};

/// Errors produced by the send pipeline services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("link shortening failed: {0}")]
    Shorten(#[from] BitlyError),

    #[error("carrier request failed: {0}")]
    Carrier(#[from] TransmitError),
}

/// Validates and normalizes a raw phone number through the carrier.
#[async_trait]
pub trait NumberFormatter: Send + Sync {
    /// Return the international form of the number plus a validity flag.
    async fn format(&self, phone_number: &str) -> Result<FormattedNumber, ServiceError>;
}

/// Delivers one text message to one normalized number.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `text` to `phone_number`, shortening any contained URLs first.
    async fn send(&self, phone_number: i64, text: &str) -> Result<(), ServiceError>;
}

/// Rewrites one long URL to a shorter equivalent.
#[async_trait]
pub trait LinkShortener: Send + Sync {
    async fn shorten(&self, long_url: &str) -> Result<String, ServiceError>;
}
