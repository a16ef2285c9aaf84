//! # Property-Based Tests
//!
//! Snapshot-assembly invariants verified with proptest.

use nihilgraph_core::{
    AXIOM_SCORE, AxiomRecord, DEFAULT_SCORE, DEFAULT_STRENGTH, GraphSnapshot, NodeKind,
    RelationshipRecord, RpeRecord,
};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

// =============================================================================
// ROW STRATEGIES
// =============================================================================

fn arb_rpe() -> impl Strategy<Value = RpeRecord> {
    (
        0i64..100_000,
        "[A-Z]{1,3}-[0-9]{1,4}",
        "[a-z]{1,16}",
        option::of(0.0f64..10.0),
        option::of(0.0f64..10.0),
    )
        .prop_map(|(id, entity_id, name, transcendence, resonance)| RpeRecord {
            id,
            entity_id,
            name,
            une_signature: None,
            transcendence_score: transcendence,
            void_resonance: resonance,
            heretical_intensity: None,
            paradox_engine: None,
        })
}

fn arb_axiom() -> impl Strategy<Value = AxiomRecord> {
    (0i64..100_000, 1i64..1000, "[a-z ]{1,24}").prop_map(|(id, axiom_number, title)| AxiomRecord {
        id,
        axiom_number,
        title,
    })
}

fn arb_relationship() -> impl Strategy<Value = RelationshipRecord> {
    (
        "[A-Z]{1,3}-[0-9]{1,4}",
        "[A-Z]{1,3}-[0-9]{1,4}",
        "[a-z_]{1,12}",
        option::of(0.0f64..10.0),
    )
        .prop_map(|(source, target, kind, strength)| RelationshipRecord {
            source_entity_id: source,
            target_entity_id: target,
            relationship_type: kind,
            relationship_strength: strength,
            description: None,
        })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Node count is always the sum of the two input tables; link count
    /// always matches the relationship table.
    #[test]
    fn counts_match_input_lengths(
        rpes in vec(arb_rpe(), 0..30),
        axioms in vec(arb_axiom(), 0..30),
        rels in vec(arb_relationship(), 0..30),
    ) {
        let expected_nodes = rpes.len() + axioms.len();
        let expected_links = rels.len();

        let snapshot = GraphSnapshot::assemble(rpes, axioms, rels);

        prop_assert_eq!(snapshot.node_count(), expected_nodes);
        prop_assert_eq!(snapshot.link_count(), expected_links);
    }

    /// Every RPE node precedes every axiom node, and each sub-group keeps
    /// its input order (the store's sort order).
    #[test]
    fn rpe_nodes_precede_axiom_nodes_in_input_order(
        rpes in vec(arb_rpe(), 0..30),
        axioms in vec(arb_axiom(), 0..30),
    ) {
        let rpe_ids: Vec<String> = rpes.iter().map(|r| r.entity_id.clone()).collect();
        let axiom_numbers: Vec<i64> = axioms.iter().map(|a| a.axiom_number).collect();

        let snapshot = GraphSnapshot::assemble(rpes, axioms, vec![]);

        let first_axiom = snapshot
            .nodes
            .iter()
            .position(|n| n.kind == NodeKind::Axiom)
            .unwrap_or(snapshot.nodes.len());
        prop_assert!(
            snapshot.nodes[..first_axiom].iter().all(|n| n.kind == NodeKind::Rpe)
        );
        prop_assert!(
            snapshot.nodes[first_axiom..].iter().all(|n| n.kind == NodeKind::Axiom)
        );

        let emitted_rpe_ids: Vec<String> = snapshot.nodes[..first_axiom]
            .iter()
            .map(|n| n.entity_id.clone())
            .collect();
        prop_assert_eq!(emitted_rpe_ids, rpe_ids);

        let emitted_axiom_numbers: Vec<i64> = snapshot.nodes[first_axiom..]
            .iter()
            .filter_map(|n| n.axiom_number)
            .collect();
        prop_assert_eq!(emitted_axiom_numbers, axiom_numbers);
    }

    /// Axiom nodes always carry the fixed shape: AXM-<n> entity id, both
    /// scores at the axiom maximum, "Axiom" signature.
    #[test]
    fn axiom_nodes_carry_fixed_constants(axioms in vec(arb_axiom(), 1..30)) {
        let snapshot = GraphSnapshot::assemble(vec![], axioms.clone(), vec![]);

        for (node, row) in snapshot.nodes.iter().zip(&axioms) {
            prop_assert_eq!(&node.entity_id, &format!("AXM-{}", row.axiom_number));
            prop_assert_eq!(node.transcendence_score, AXIOM_SCORE);
            prop_assert_eq!(node.void_resonance, AXIOM_SCORE);
            prop_assert_eq!(node.une_signature.as_deref(), Some("Axiom"));
            prop_assert_eq!(node.axiom_number, Some(row.axiom_number));
        }
    }

    /// Missing scores default, present scores pass through verbatim.
    #[test]
    fn rpe_scores_default_only_when_absent(rpes in vec(arb_rpe(), 1..30)) {
        let snapshot = GraphSnapshot::assemble(rpes.clone(), vec![], vec![]);

        for (node, row) in snapshot.nodes.iter().zip(&rpes) {
            match row.transcendence_score {
                Some(score) => prop_assert_eq!(node.transcendence_score, score),
                None => prop_assert_eq!(node.transcendence_score, DEFAULT_SCORE),
            }
            match row.void_resonance {
                Some(score) => prop_assert_eq!(node.void_resonance, score),
                None => prop_assert_eq!(node.void_resonance, DEFAULT_SCORE),
            }
        }
    }

    /// Links preserve fetch order and default strength only when absent.
    #[test]
    fn links_preserve_order_and_default_strength(rels in vec(arb_relationship(), 1..30)) {
        let snapshot = GraphSnapshot::assemble(vec![], vec![], rels.clone());

        for (link, row) in snapshot.links.iter().zip(&rels) {
            prop_assert_eq!(&link.source, &row.source_entity_id);
            prop_assert_eq!(&link.target, &row.target_entity_id);
            prop_assert_eq!(&link.kind, &row.relationship_type);
            match row.relationship_strength {
                Some(strength) => prop_assert_eq!(link.strength, strength),
                None => prop_assert_eq!(link.strength, DEFAULT_STRENGTH),
            }
        }
    }
}
