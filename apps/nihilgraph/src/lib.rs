//! # Nihilgraph Application Library
//!
//! Library surface of the Nihilgraph binary. Exists so integration tests
//! can exercise the HTTP API and store client via `nihilgraph::*` without
//! starting a real process.

pub mod api;
pub mod cli;
pub mod error;
pub mod store;

pub use error::ServiceError;
pub use store::StoreClient;
