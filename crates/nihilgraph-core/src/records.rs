//! # Store Row Projections
//!
//! Read-only projections of the rows held by the external data store.
//! Nihilgraph never creates, mutates, or destroys these rows; they exist
//! only for the lifetime of a single snapshot request.
//!
//! Deserialization is deliberately lenient: unknown upstream columns are
//! ignored, and columns the store may leave NULL are `Option`s here.

use serde::{Deserialize, Serialize};

// =============================================================================
// RPE RECORD (table "rpes")
// =============================================================================

/// A row from the `rpes` table: a primary subject of the knowledge graph,
/// scored along two numeric dimensions.
///
/// `transcendence_score` and `void_resonance` may be NULL upstream; the
/// defaulting to [`DEFAULT_SCORE`](crate::graph::DEFAULT_SCORE) happens at
/// node-assembly time, not here, so the raw row stays a faithful projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpeRecord {
    /// Row id, unique across the table.
    pub id: i64,
    /// External entity identifier, referenced by relationship rows.
    pub entity_id: String,
    /// Display name.
    pub name: String,
    /// UNE signature string, if one has been assigned.
    #[serde(default)]
    pub une_signature: Option<String>,
    #[serde(default)]
    pub transcendence_score: Option<f64>,
    #[serde(default)]
    pub void_resonance: Option<f64>,
    /// Optional descriptive intensity rating.
    #[serde(default)]
    pub heretical_intensity: Option<f64>,
    /// Optional engine label.
    #[serde(default)]
    pub paradox_engine: Option<String>,
}

// =============================================================================
// AXIOM RECORD (table "axioms")
// =============================================================================

/// A row from the `axioms` table: a fixed, maximally-scored foundational
/// statement, numbered and titled.
///
/// `axiom_number` defines the canonical ascending sort order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxiomRecord {
    /// Row id, unique across the table.
    pub id: i64,
    /// Ordinal number of the axiom; drives sort order and the synthesized
    /// `AXM-<n>` entity id.
    pub axiom_number: i64,
    /// Axiom title, used as the node display name.
    pub title: String,
}

// =============================================================================
// RELATIONSHIP RECORD (table "knowledge_graph")
// =============================================================================

/// A row from the `knowledge_graph` table: a directed, typed, weighted edge
/// between two entity identifiers.
///
/// The endpoints reference `entity_id` values (including synthesized
/// `AXM-<n>` ids), never internal row ids. Nothing validates that both
/// endpoints exist among the emitted nodes; a dangling link is passed
/// through untouched and is the consumer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub source_entity_id: String,
    pub target_entity_id: String,
    pub relationship_type: String,
    #[serde(default)]
    pub relationship_strength: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// TESTS
// =============================================================================
