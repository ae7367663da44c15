//! HTTP API for the SMS gateway.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::service::{MessageSender, NumberFormatter};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Phone number formatter
    pub formatter: Arc<dyn NumberFormatter>,
    /// Per-text message sender
    pub sender: Arc<dyn MessageSender>,
}

impl AppState {
    /// Create new application state.
    pub fn new(formatter: Arc<dyn NumberFormatter>, sender: Arc<dyn MessageSender>) -> Self {
        Self { formatter, sender }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/sms/send", post(handlers::send_sms))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS for browser clients; preflight requests are answered
/// directly with a one-day max age.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(86400))
}
