//! End-to-end integration tests for collection equality.
//!
//! Each test builds two in-memory collections and runs the full dataflow
//! (signature extraction -> counting -> distinct-record comparison) on a
//! LocalExecutor.

use epgm_rs::{
    equal, equal_with, signature_counts, BinaryCollectionToValueOperator, Edge, EqualByGraphElementIds,
    EqualByGraphIds, ExecutorConfig, GradoopId, GraphCollection, GraphHead, LocalExecutor, Vertex,
};

// ============================================================================
// Helpers
// ============================================================================

fn id(n: u128) -> GradoopId {
    GradoopId::from_u128(n)
}

fn executor(partitions: usize) -> LocalExecutor {
    LocalExecutor::new(ExecutorConfig::default().with_parallelism(2).with_partitions(partitions)).unwrap()
}

/// One graph `g` holding vertices `v1, v2` and edges `edges`, all `v1 -> v2`.
fn two_vertex_graph(g: u128, edges: &[u128]) -> GraphCollection {
    let mut collection = GraphCollection::new()
        .with_graph_head(GraphHead::new(id(g)))
        .with_vertex(Vertex::new(id(101)).in_graphs([id(g)]))
        .with_vertex(Vertex::new(id(102)).in_graphs([id(g)]));
    for e in edges {
        collection = collection.with_edge(Edge::new(id(*e), id(101), id(102)).in_graphs([id(g)]));
    }
    collection
}

fn empty_graphs(count: u128) -> GraphCollection {
    (0..count).fold(GraphCollection::new(), |c, g| c.with_graph_head(GraphHead::new(id(g + 1))))
}

// ============================================================================
// 1. Same element ids under different graph heads are equal
// ============================================================================

#[test]
fn test_equal_by_element_ids_ignores_head_identity() {
    let a = two_vertex_graph(1, &[201]);
    let b = two_vertex_graph(2, &[201]);
    assert!(equal(&a, &b).unwrap());
}

// ============================================================================
// 2. One extra edge breaks equality
// ============================================================================

#[test]
fn test_extra_edge_breaks_equality() {
    let a = two_vertex_graph(1, &[201]);
    let b = two_vertex_graph(2, &[201, 202]);
    assert!(!equal(&a, &b).unwrap());
    assert!(!equal(&b, &a).unwrap());
}

// ============================================================================
// 3. Empty collections
// ============================================================================

#[test]
fn test_empty_equals_empty() {
    assert!(equal(&GraphCollection::new(), &GraphCollection::new()).unwrap());
}

#[test]
fn test_empty_never_equals_non_empty() {
    let empty = GraphCollection::new();
    for other in [empty_graphs(1), two_vertex_graph(1, &[])] {
        assert!(!equal(&empty, &other).unwrap());
        assert!(!equal(&other, &empty).unwrap());
    }
}

#[test]
fn test_elements_outside_any_graph_add_nothing() {
    let unattached = GraphCollection::new()
        .with_vertex(Vertex::new(id(101)))
        .with_edge(Edge::new(id(201), id(101), id(101)));
    assert!(!unattached.is_empty());
    assert!(equal(&GraphCollection::new(), &unattached).unwrap());
    assert!(equal(&two_vertex_graph(1, &[201]), &two_vertex_graph(1, &[201]).with_vertex(Vertex::new(id(103)))).unwrap());
}

// ============================================================================
// 4. Multiplicity: one empty graph is not two empty graphs
// ============================================================================

#[test]
fn test_multiplicity_of_empty_graphs() {
    assert!(!equal(&empty_graphs(1), &empty_graphs(2)).unwrap());
    assert!(equal(&empty_graphs(2), &empty_graphs(2)).unwrap());
}

#[test]
fn test_multiplicity_of_identical_graphs() {
    // Two heads over the same vertex set versus one head.
    let twice = GraphCollection::new()
        .with_graph_head(GraphHead::new(id(1)))
        .with_graph_head(GraphHead::new(id(2)))
        .with_vertex(Vertex::new(id(101)).in_graphs([id(1), id(2)]));
    let once = GraphCollection::new()
        .with_graph_head(GraphHead::new(id(3)))
        .with_vertex(Vertex::new(id(101)).in_graphs([id(3)]));
    assert!(!equal(&twice, &once).unwrap());
}

// ============================================================================
// 5. Membership sensitivity
// ============================================================================

#[test]
fn test_single_membership_difference_is_unequal() {
    let heads = |c: GraphCollection| {
        c.with_graph_head(GraphHead::new(id(1))).with_graph_head(GraphHead::new(id(2)))
    };
    let a = heads(GraphCollection::new()).with_vertex(Vertex::new(id(101)).in_graphs([id(1)]));
    let b = heads(GraphCollection::new()).with_vertex(Vertex::new(id(101)).in_graphs([id(1), id(2)]));
    assert!(!equal(&a, &b).unwrap());
}

// ============================================================================
// 6. Labels and properties play no part
// ============================================================================

#[test]
fn test_element_data_is_ignored() {
    let a = GraphCollection::new()
        .with_graph_head(GraphHead::new(id(1)).with_label("Community"))
        .with_vertex(Vertex::new(id(101)).with_label("Person").with_property("name", "Alice").in_graphs([id(1)]));
    let b = GraphCollection::new()
        .with_graph_head(GraphHead::new(id(2)))
        .with_vertex(Vertex::new(id(101)).with_property("name", "Bob").in_graphs([id(2)]));
    assert!(equal(&a, &b).unwrap());
}

// ============================================================================
// 7. Dangling memberships
// ============================================================================

#[test]
fn test_dangling_membership_is_unequal_to_complete_collection() {
    let complete = two_vertex_graph(1, &[201]);
    let dangling = complete.clone().with_vertex(Vertex::new(id(103)).in_graphs([id(99)]));

    let exec = executor(4);
    assert_eq!(dangling.dangling_graph_ids(&exec).as_slice(), &[id(99)]);
    assert!(!equal_with(&exec, &complete, &dangling).unwrap());
    assert!(equal_with(&exec, &dangling, &dangling.clone()).unwrap());
}

// ============================================================================
// 8. Partitioning does not change the verdict
// ============================================================================

#[test]
fn test_verdict_independent_of_partition_count() {
    let a = two_vertex_graph(1, &[201]).with_graph_head(GraphHead::new(id(7)));
    let b = two_vertex_graph(2, &[201]).with_graph_head(GraphHead::new(id(8)));
    let c = two_vertex_graph(2, &[201]);
    for partitions in [1, 2, 3, 16] {
        let exec = executor(partitions);
        assert!(equal_with(&exec, &a, &b).unwrap(), "partitions = {partitions}");
        assert!(!equal_with(&exec, &a, &c).unwrap(), "partitions = {partitions}");
    }
}

// ============================================================================
// 9. Signature counts as a building block
// ============================================================================

#[test]
fn test_signature_counts_exposed() {
    let exec = executor(3);
    let collection = empty_graphs(3).with_graph_head(GraphHead::new(id(50)))
        .with_vertex(Vertex::new(id(101)).in_graphs([id(50)]));
    let mut counts: Vec<u64> = signature_counts(&exec, &collection).iter().map(|c| c.multiplicity).collect();
    counts.sort_unstable();
    assert_eq!(counts, vec![1, 3]);
}

// ============================================================================
// 10. Equality by graph ids
// ============================================================================

#[test]
fn test_equal_by_graph_ids_compares_heads_only() {
    let exec = executor(4);
    let a = two_vertex_graph(1, &[201]);
    let b = two_vertex_graph(1, &[201, 202]);
    let c = two_vertex_graph(2, &[201]);

    assert!(EqualByGraphIds.evaluate(&exec, &a, &b).unwrap());
    assert!(!EqualByGraphIds.evaluate(&exec, &a, &c).unwrap());
    assert!(!EqualByGraphElementIds.evaluate(&exec, &a, &b).unwrap());
    assert!(EqualByGraphElementIds.evaluate(&exec, &a, &c).unwrap());
}

// ============================================================================
// 11. Collections loaded from JSON
// ============================================================================

#[test]
fn test_equality_of_json_loaded_collections() {
    let a = two_vertex_graph(1, &[201]);
    let loaded = GraphCollection::from_json(&a.to_json().unwrap()).unwrap();
    assert!(equal(&a, &loaded).unwrap());
}

// ============================================================================
// 12. One executor serves repeated checks
// ============================================================================

#[test]
fn test_reused_executor_matches_fresh_one() {
    let exec = executor(4);
    let pairs = [
        (two_vertex_graph(1, &[201]), two_vertex_graph(2, &[201])),
        (two_vertex_graph(1, &[201]), two_vertex_graph(2, &[201, 202])),
        (empty_graphs(1), empty_graphs(2)),
    ];
    for (a, b) in &pairs {
        assert_eq!(equal_with(&exec, a, b).unwrap(), equal(a, b).unwrap());
    }
}
