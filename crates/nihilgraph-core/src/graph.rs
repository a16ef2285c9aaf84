//! # Graph View Assembly
//!
//! This module turns raw store rows into the `{nodes, links}` snapshot
//! served to visualization clients.
//!
//! ## Ordering Guarantees
//!
//! Assembly never re-sorts. The store returns RPEs ordered by descending
//! transcendence score and axioms by ascending axiom number; the snapshot
//! preserves both sub-orders, with every RPE node preceding every axiom
//! node. Links keep their fetch order.
//!
//! ## Absence Semantics
//!
//! Missing numeric scores are defaulted ([`DEFAULT_SCORE`],
//! [`DEFAULT_STRENGTH`]); missing descriptive fields (`une_signature`,
//! `description`, ...) propagate as absent and are omitted from the JSON
//! output rather than being given an invented default.

use serde::{Deserialize, Serialize};

use crate::records::{AxiomRecord, RelationshipRecord, RpeRecord};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score assumed for an RPE whose `transcendence_score` or `void_resonance`
/// column is NULL.
pub const DEFAULT_SCORE: f64 = 5.0;

/// Fixed score carried by every axiom node, on both dimensions. Axioms are
/// foundational and always maximally scored.
pub const AXIOM_SCORE: f64 = 10.0;

/// Strength assumed for a relationship whose `relationship_strength` column
/// is NULL.
pub const DEFAULT_STRENGTH: f64 = 1.0;

/// Signature string stamped on every axiom node.
const AXIOM_SIGNATURE: &str = "Axiom";

// =============================================================================
// NODE KIND
// =============================================================================

/// Discriminates the two node families on the wire (`"rpe"` / `"axiom"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Rpe,
    Axiom,
}

// =============================================================================
// GRAPH NODE
// =============================================================================

/// A node of the visualization graph.
///
/// One wire shape covers both families; fields that do not apply to a
/// family stay `None` and are omitted from the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Original row id of the backing record. Unique per node.
    pub id: i64,
    /// Entity identifier links reference. Synthesized as `AXM-<n>` for
    /// axiom nodes.
    pub entity_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub une_signature: Option<String>,
    pub transcendence_score: f64,
    pub void_resonance: f64,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// RPE only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heretical_intensity: Option<f64>,
    /// RPE only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paradox_engine: Option<String>,
    /// Axiom only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axiom_number: Option<i64>,
}

impl GraphNode {
    /// Build an RPE node, defaulting missing scores to [`DEFAULT_SCORE`].
    #[must_use]
    pub fn from_rpe(rpe: RpeRecord) -> Self {
        Self {
            id: rpe.id,
            entity_id: rpe.entity_id,
            name: rpe.name,
            une_signature: rpe.une_signature,
            transcendence_score: rpe.transcendence_score.unwrap_or(DEFAULT_SCORE),
            void_resonance: rpe.void_resonance.unwrap_or(DEFAULT_SCORE),
            kind: NodeKind::Rpe,
            heretical_intensity: rpe.heretical_intensity,
            paradox_engine: rpe.paradox_engine,
            axiom_number: None,
        }
    }

    /// Build an axiom node: synthesized `AXM-<n>` entity id, fixed
    /// [`AXIOM_SCORE`] on both dimensions.
    #[must_use]
    pub fn from_axiom(axiom: AxiomRecord) -> Self {
        Self {
            id: axiom.id,
            entity_id: format!("AXM-{}", axiom.axiom_number),
            name: axiom.title,
            une_signature: Some(AXIOM_SIGNATURE.to_string()),
            transcendence_score: AXIOM_SCORE,
            void_resonance: AXIOM_SCORE,
            kind: NodeKind::Axiom,
            heretical_intensity: None,
            paradox_engine: None,
            axiom_number: Some(axiom.axiom_number),
        }
    }
}

// =============================================================================
// GRAPH LINK
// =============================================================================

/// A directed, typed, weighted edge of the visualization graph.
///
/// `source` and `target` carry `entity_id` values, never internal row ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<RelationshipRecord> for GraphLink {
    fn from(rel: RelationshipRecord) -> Self {
        Self {
            source: rel.source_entity_id,
            target: rel.target_entity_id,
            kind: rel.relationship_type,
            strength: rel.relationship_strength.unwrap_or(DEFAULT_STRENGTH),
            description: rel.description,
        }
    }
}

// =============================================================================
// GRAPH SNAPSHOT
// =============================================================================

/// The full nodes+links view, assembled fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphSnapshot {
    /// Assemble a snapshot from raw store rows.
    ///
    /// RPE nodes come first (input order preserved), axiom nodes second
    /// (input order preserved), links in input order.
    #[must_use]
    pub fn assemble(
        rpes: Vec<RpeRecord>,
        axioms: Vec<AxiomRecord>,
        relationships: Vec<RelationshipRecord>,
    ) -> Self {
        let nodes = rpes
            .into_iter()
            .map(GraphNode::from_rpe)
            .chain(axioms.into_iter().map(GraphNode::from_axiom))
            .collect();

        let links = relationships.into_iter().map(GraphLink::from).collect();

        Self { nodes, links }
    }

    /// Number of nodes in the snapshot.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links in the snapshot.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
