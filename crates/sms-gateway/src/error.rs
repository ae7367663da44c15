//! Error types for the SMS gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Gateway errors surfaced to HTTP callers.
///
/// The `Display` strings are the wire contract: each one is returned verbatim
/// in the response body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("unable to parse request body")]
    MalformedBody,

    #[error("phone number missing")]
    PhoneNumberMissing,

    #[error("texts missing")]
    TextsMissing,

    #[error("max allowed text count is 3")]
    TooManyTexts,

    #[error("max allowed text length is 160")]
    TextTooLong,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("unable to validate number")]
    NumberLookup,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::MalformedBody
            | GatewayError::PhoneNumberMissing
            | GatewayError::TextsMissing
            | GatewayError::TooManyTexts
            | GatewayError::TextTooLong
            | GatewayError::InvalidPhoneNumber => StatusCode::BAD_REQUEST,
            GatewayError::NumberLookup => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
