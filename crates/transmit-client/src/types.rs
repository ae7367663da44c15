//! Response types for the Transmit SMS API.

use serde::Deserialize;

/// A phone number as normalized by the carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedNumber {
    /// International numeric form, e.g. 61405990558.
    pub international: i64,
    /// Whether the carrier considers the number valid.
    pub is_valid: bool,
}

/// Response body from the format-number endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FormatResponse {
    pub number: NumberDetails,
    #[serde(default)]
    pub error: ApiError,
}

/// Number details within a format response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NumberDetails {
    pub international: i64,
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

/// Response body from the send-sms endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SendResponse {
    #[serde(default)]
    pub error: ApiError,
}

/// Diagnostic error code/description attached to carrier responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}
