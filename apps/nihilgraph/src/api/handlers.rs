//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use nihilgraph_core::GraphSnapshot;

use super::{
    AppState,
    types::{ErrorEnvelope, GraphResponse, HealthResponse},
};
use crate::error::ServiceError;
use crate::store::StoreClient;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// GRAPH HANDLER
// =============================================================================

/// The aggregation endpoint.
///
/// Pre-flight (`OPTIONS`) is answered immediately with an empty 200 and
/// never touches the upstream store. Every other method aggregates; no
/// body is read, so GET and POST behave identically.
///
/// Failure at any step (configuration, network, upstream status, decode)
/// aborts the whole request with the fixed `FUNCTION_ERROR` envelope and
/// HTTP 500. No retry, no partial result.
pub async fn graph_handler(State(state): State<AppState>, method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    match fetch_snapshot(&state.store).await {
        Ok(snapshot) => {
            let response = GraphResponse::new(snapshot);
            tracing::debug!(
                nodes = response.count.nodes,
                links = response.count.links,
                "graph snapshot assembled"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "graph snapshot failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::function_error(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Run the three table reads and assemble the snapshot.
///
/// The reads are independent, so they are issued concurrently; the first
/// failure wins and fails the whole request.
pub async fn fetch_snapshot(store: &StoreClient) -> Result<GraphSnapshot, ServiceError> {
    let (rpes, axioms, relationships) = tokio::try_join!(
        store.fetch_rpes(),
        store.fetch_axioms(),
        store.fetch_relationships(),
    )?;

    Ok(GraphSnapshot::assemble(rpes, axioms, relationships))
}
