//! HTTP request handlers.

use super::types::{HealthResponse, SendOutcome, SendRequest, SendResponse};
use super::AppState;
use crate::error::GatewayError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{error, warn};

/// Maximum number of texts per request.
const MAX_TEXT_COUNT: usize = 3;

/// Maximum length of one text, in characters.
const MAX_TEXT_LENGTH: usize = 160;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Send one or more texts to a phone number.
///
/// POST /api/v1/sms/send
pub async fn send_sms(
    State(state): State<AppState>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> Result<Json<SendResponse>, GatewayError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "unable to parse request body");
        GatewayError::MalformedBody
    })?;

    validate(&request)?;

    let number = state
        .formatter
        .format(&request.phone_number)
        .await
        .map_err(|e| {
            error!(error = %e, "unable to validate number");
            GatewayError::NumberLookup
        })?;
    if !number.is_valid {
        return Err(GatewayError::InvalidPhoneNumber);
    }

    // One outcome per attempted send; a failed text never aborts the rest.
    let mut status = Vec::with_capacity(request.texts.len());
    for text in request.texts.iter().filter(|t| !t.is_empty()) {
        match state.sender.send(number.international, text).await {
            Ok(()) => status.push(SendOutcome::Success),
            Err(e) => {
                error!(error = %e, text = %text, "unable to send sms");
                status.push(SendOutcome::Failed);
            }
        }
    }

    Ok(Json(SendResponse { status }))
}

/// Check the payload shape; the first violated rule wins.
fn validate(request: &SendRequest) -> Result<(), GatewayError> {
    if request.phone_number.is_empty() {
        return Err(GatewayError::PhoneNumberMissing);
    }
    if request.texts.is_empty() {
        return Err(GatewayError::TextsMissing);
    }
    if request.texts.len() > MAX_TEXT_COUNT {
        return Err(GatewayError::TooManyTexts);
    }
    if request
        .texts
        .iter()
        .any(|t| t.chars().count() > MAX_TEXT_LENGTH)
    {
        return Err(GatewayError::TextTooLong);
    }
    Ok(())
}
