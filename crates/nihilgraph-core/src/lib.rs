//! # nihilgraph-core
//!
//! The deterministic snapshot assembler for Nihilgraph - THE LOGIC.
//!
//! This crate implements the CORE transformation - it takes the raw rows
//! read from the external data store (RPEs, axioms, and knowledge-graph
//! relationships) and reshapes them into the `{nodes, links}` view served
//! to visualization clients.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Owns no state: every snapshot is assembled fresh from the given rows
//! - Is deterministic: output order is fully determined by input order
//! - Has NO async, NO network dependencies (pure Rust)
//!
//! Fetching the rows, serving the result, and everything else that touches
//! a network lives in the `nihilgraph` binary crate.

// =============================================================================
// MODULES
// =============================================================================

pub mod graph;
pub mod records;

// =============================================================================
// RE-EXPORTS: Records (raw store rows)
// =============================================================================

pub use records::{AxiomRecord, RelationshipRecord, RpeRecord};

// =============================================================================
// RE-EXPORTS: Graph View
// =============================================================================

pub use graph::{
    AXIOM_SCORE, DEFAULT_SCORE, DEFAULT_STRENGTH, GraphLink, GraphNode, GraphSnapshot, NodeKind,
};
