//! API request and response types.

use serde::{Deserialize, Serialize};

/// Request to send one or more texts to a phone number.
///
/// Missing fields decode to their empty values so that validation, not
/// deserialization, reports them.
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    /// Raw phone number as entered by the caller
    #[serde(default)]
    pub phone_number: String,

    /// Message texts, at most three, each at most 160 characters
    #[serde(default)]
    pub texts: Vec<String>,
}

/// Outcome of one send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SendOutcome {
    Success,
    Failed,
}

/// Aggregated per-text outcomes, positional, in send order.
#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub status: Vec<SendOutcome>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
