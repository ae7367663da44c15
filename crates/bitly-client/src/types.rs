//! Request and response types for the Bitly v4 API.

use serde::{Deserialize, Serialize};

/// Request body for the shorten endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ShortenRequest<'a> {
    pub long_url: &'a str,
}

/// Response body from the shorten endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ShortenResponse {
    pub link: String,
}

/// Error body returned by the API on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub description: Option<String>,
}
