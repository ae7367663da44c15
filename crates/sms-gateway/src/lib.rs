//! SMS Gateway - validated, link-shortened SMS dispatch over HTTP.
//!
//! The gateway sits in front of the carrier HTTP API to:
//! - Validate the incoming payload and normalize the recipient number
//! - Replace URLs in message text with shortened links
//! - Dispatch each text independently and report per-text outcomes

pub mod api;
pub mod config;
pub mod error;
pub mod service;

pub use config::Config;
pub use error::GatewayError;
pub use service::{
    BitlyShortener, LinkShortener, MessageSender, NumberFormatter, ServiceError,
    TransmitFormatter, TransmitSender,
};
