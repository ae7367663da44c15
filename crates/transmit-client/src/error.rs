//! Transmit client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("carrier rejected message: {code} - {description}")]
    Rejected { code: String, description: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
