//! HTTP API for the relay service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use message_store::Store;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use twilio_client::TwilioClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Message log backend
    pub store: Arc<Store>,
    /// Twilio client, constructed once at startup
    pub twilio: Arc<TwilioClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Store, twilio: TwilioClient) -> Self {
        Self {
            store: Arc::new(store),
            twilio: Arc::new(twilio),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/messages", get(handlers::list_messages))
        .route("/api/send-message", post(handlers::send_message))
        .route("/api/start-verification", post(handlers::start_verification))
        .route("/api/check-verification", post(handlers::check_verification))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
