//! SMS Gateway - Entry point.

use bitly_client::BitlyClient;
use sms_gateway::{
    api::{create_router, AppState},
    config::Config,
    service::{BitlyShortener, TransmitFormatter, TransmitSender},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use transmit_client::TransmitClient;

/// Timeout applied to every outbound carrier and shortener call.
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SMS Gateway");

    // Outbound clients
    let transmit = match TransmitClient::new(
        &config.transmit.api_url,
        &config.transmit.api_key,
        &config.transmit.secret,
        OUTBOUND_TIMEOUT,
    ) {
        Ok(c) => c.with_country_code(&config.transmit.country_code),
        Err(e) => {
            error!("Failed to create carrier client: {}", e);
            std::process::exit(1);
        }
    };

    let bitly = match BitlyClient::new(&config.bitly.api_url, &config.bitly.token, OUTBOUND_TIMEOUT)
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create shortener client: {}", e);
            std::process::exit(1);
        }
    };

    // Wire the send pipeline
    let shortener = Arc::new(BitlyShortener::new(bitly));
    let formatter = Arc::new(TransmitFormatter::new(transmit.clone()));
    let sender = Arc::new(TransmitSender::new(transmit, shortener));

    let state = AppState::new(formatter, sender);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
