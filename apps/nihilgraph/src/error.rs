//! # Service Error Type
//!
//! One error enum covers everything that can abort a snapshot request:
//! missing configuration, unreachable store, upstream error status,
//! undecodable rows, and local I/O. There is no retry and no partial
//! result anywhere; any variant fails the whole operation.
//!
//! On the HTTP surface every variant collapses into the single
//! `FUNCTION_ERROR` envelope with the error's description verbatim.

use thiserror::Error;

/// Errors that can occur in the Nihilgraph service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required environment variable is not set (or empty).
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// The data store could not be reached at all.
    #[error("cannot reach data store at {url}: {message}")]
    Connection { url: String, message: String },

    /// The data store answered with a non-success status.
    #[error("data store returned {status} for table '{table}': {body}")]
    UpstreamStatus {
        table: String,
        status: u16,
        body: String,
    },

    /// The data store answered 2xx but the body was not the expected rows.
    #[error("malformed response for table '{table}': {message}")]
    Decode { table: String, message: String },

    /// An I/O error occurred (server bind, snapshot file write).
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
