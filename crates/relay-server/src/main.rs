//! SMS relay server - entry point.

use message_store::{JsonFileStore, Store};
use relay_server::{
    api::{create_router, AppState},
    config::Config,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use twilio_client::TwilioClient;

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

    info!("Starting SMS relay server");

    // Message log store. A missing file is not created here: both list and
    // append fail until an operator seeds it with an empty JSON array.
    let file_store = JsonFileStore::new(&config.store.path);
    if !file_store.exists() {
        warn!(
            path = ?config.store.path,
            "Message log file not found; message endpoints will fail until it is seeded with []"
        );
    }
    let store = Store::File(file_store);

    // One Twilio client for the lifetime of the process
    let twilio = match TwilioClient::new(
        config.twilio.account_sid.clone(),
        config.twilio.auth_token.clone(),
        config.twilio.from_number.clone(),
        config.twilio.verify_service_sid.clone(),
        config.twilio.timeout,
    ) {
        Ok(c) => c
            .with_api_base_url(config.twilio.api_base_url.clone())
            .with_verify_base_url(config.twilio.verify_base_url.clone()),
        Err(e) => {
            error!("Failed to create Twilio client: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state and router
    let state = AppState::new(store, twilio);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([0, 0, 0, 0].into()),
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
