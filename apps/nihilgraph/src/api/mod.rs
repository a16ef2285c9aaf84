//! # Nihilgraph HTTP API Module
//!
//! This module implements the HTTP API server using axum.
//!
//! ## Endpoints
//!
//! - `ANY /graph/full` - Full graph snapshot (GET and POST are identical;
//!   OPTIONS answers pre-flight with an empty 200)
//! - `GET /health` - Health check
//!
//! ## Cross-Origin Contract
//!
//! The endpoint serves browser-based visualization clients from any
//! origin, so the cross-origin surface is fixed and permissive. Every
//! response — success, error, and pre-flight alike — carries all four
//! contract headers:
//!
//! - `Access-Control-Allow-Origin: *`
//! - `Access-Control-Allow-Headers: authorization, x-client-info, apikey, content-type`
//! - `Access-Control-Allow-Methods: POST, GET, OPTIONS`
//! - `Access-Control-Max-Age: 86400`

mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `nihilgraph::api::*`)
#[allow(unused_imports)]
pub use handlers::{fetch_snapshot, graph_handler, health_handler};
#[allow(unused_imports)]
pub use types::{CountSummary, ErrorBody, ErrorEnvelope, FUNCTION_ERROR, GraphResponse, HealthResponse};

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{any, get},
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::store::StoreClient;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the store client. Requests share nothing else;
/// every request recomputes the snapshot from the external store.
#[derive(Clone)]
pub struct AppState {
    /// Client for the external data store.
    pub store: StoreClient,
}

impl AppState {
    /// Create new app state around a store client.
    #[must_use]
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Pre-flight cache lifetime: one day.
const CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Contract value for `Access-Control-Allow-Headers`.
const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Contract value for `Access-Control-Allow-Methods`.
const CORS_ALLOW_METHODS: &str = "POST, GET, OPTIONS";

/// Contract value for `Access-Control-Max-Age`.
const CORS_MAX_AGE_SECS: &str = "86400";

/// Build the fixed permissive CORS layer.
///
/// Unlike an origin allow-list this is part of the endpoint's public
/// contract: the snapshot is served to any browser origin.
///
/// `CorsLayer` only emits the allow-headers/allow-methods/max-age trio
/// on pre-flight responses; the contract wants them on every response,
/// so [`create_router`] stacks static [`SetResponseHeaderLayer`]s on top.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
        .max_age(CORS_MAX_AGE)
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// `/graph/full` is routed for any method: the handler answers pre-flight
/// itself and treats everything else as an aggregation request, so no
/// method-based branching exists beyond that single check.
///
/// The three static header layers sit outside the CORS layer so that
/// success, error, and pre-flight responses all carry the full
/// cross-origin contract.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/graph/full", any(handlers::graph_handler))
        .layer(build_cors_layer())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(CORS_MAX_AGE_SECS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, store: StoreClient) -> Result<(), crate::ServiceError> {
    let state = AppState::new(store);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| crate::ServiceError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Nihilgraph HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| crate::ServiceError::Io(format!("Server error: {}", e)))
}
