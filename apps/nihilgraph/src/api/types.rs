//! # API Request/Response Types
//!
//! This module defines the JSON envelopes for the HTTP API.

use nihilgraph_core::GraphSnapshot;
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// GRAPH RESPONSE
// =============================================================================

/// Array-length summary shipped alongside the snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountSummary {
    pub nodes: usize,
    pub links: usize,
}

/// Success envelope: `{data: {nodes, links}, count: {nodes, links}}`.
///
/// The counts are always the emitted array lengths; they are computed from
/// the snapshot, never carried separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResponse {
    pub data: GraphSnapshot,
    pub count: CountSummary,
}

impl GraphResponse {
    /// Wrap a snapshot, deriving the count summary from it.
    #[must_use]
    pub fn new(snapshot: GraphSnapshot) -> Self {
        let count = CountSummary {
            nodes: snapshot.node_count(),
            links: snapshot.link_count(),
        };
        Self {
            data: snapshot,
            count,
        }
    }
}

// =============================================================================
// ERROR ENVELOPE
// =============================================================================

/// The single error code every failure collapses into.
pub const FUNCTION_ERROR: &str = "FUNCTION_ERROR";

/// Error envelope: `{error: {code, message}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Inner error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    /// Build the fixed `FUNCTION_ERROR` envelope with the caught error's
    /// description verbatim.
    #[must_use]
    pub fn function_error(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: FUNCTION_ERROR.to_string(),
                message: message.into(),
            },
        }
    }
}
