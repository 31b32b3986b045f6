//! Canonical graph signatures and their multiplicities.
//!
//! A graph's signature is the pair of its vertex-id set and edge-id set.
//! Signatures are derived purely from memberships:
//!
//! ```text
//! graph heads ──► (graph id, head)          ┐
//! vertices ─────► (graph id, vertex id) ... ├─ union ─► aggregate per graph id
//! edges ────────► (graph id, edge id) ...   ┘              │
//!                                                          ▼
//!                    count per distinct signature ◄── (signature, weight)
//! ```
//!
//! A graph id that appears in memberships but has no graph head yields a
//! *dangling* signature. Dangling signatures are counted apart from regular
//! ones, so they can only ever match a dangling signature on the other side.

use serde::{Deserialize, Serialize};

use crate::collection::{CollectionSource, ElementMembership};
use crate::dataflow::{Dataset, Executor};
use crate::model::{GradoopId, GradoopIdSet};

/// The element-id content of one graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GraphSignature {
    pub vertex_ids: GradoopIdSet,
    pub edge_ids: GradoopIdSet,
}

impl GraphSignature {
    pub fn new(vertex_ids: GradoopIdSet, edge_ids: GradoopIdSet) -> Self {
        Self { vertex_ids, edge_ids }
    }

    /// A graph without vertices and edges.
    pub fn is_empty(&self) -> bool {
        self.vertex_ids.is_empty() && self.edge_ids.is_empty()
    }
}

/// A distinct signature and how many graphs of one collection carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignatureCount {
    pub signature: GraphSignature,
    pub multiplicity: u64,
    /// Set when the signature belongs to graph ids without a graph head.
    pub dangling: bool,
}

/// Partial content of one graph id, merged associatively.
#[derive(Debug, Clone, Default)]
struct GraphContent {
    heads: u64,
    vertex_ids: Vec<GradoopId>,
    edge_ids: Vec<GradoopId>,
}

impl GraphContent {
    fn head() -> Self {
        Self { heads: 1, ..Self::default() }
    }

    fn vertex(id: GradoopId) -> Self {
        Self { vertex_ids: vec![id], ..Self::default() }
    }

    fn edge(id: GradoopId) -> Self {
        Self { edge_ids: vec![id], ..Self::default() }
    }

    fn merge(mut self, other: GraphContent) -> GraphContent {
        self.heads += other.heads;
        self.vertex_ids.extend(other.vertex_ids);
        self.edge_ids.extend(other.edge_ids);
        self
    }

    /// `(signature, dangling)` and the number of graphs it stands for.
    fn weighted_signature(&self) -> ((GraphSignature, bool), u64) {
        let signature = GraphSignature {
            vertex_ids: self.vertex_ids.iter().copied().collect(),
            edge_ids: self.edge_ids.iter().copied().collect(),
        };
        match self.heads {
            0 => ((signature, true), 1),
            heads => ((signature, false), heads),
        }
    }
}

fn contributions(
    membership: &ElementMembership,
    content: fn(GradoopId) -> GraphContent,
) -> Vec<(GradoopId, GraphContent)> {
    membership
        .graph_ids
        .iter()
        .map(|graph_id| (*graph_id, content(membership.element_id)))
        .collect()
}

/// Distinct graph signatures of a collection with their multiplicities.
///
/// A repeated graph head id counts as a repeated graph. A graph head
/// without elements yields the empty signature, which is counted like
/// any other.
pub fn signature_counts<E, C>(exec: &E, collection: &C) -> Dataset<SignatureCount>
where
    E: Executor,
    C: CollectionSource,
{
    let heads = exec.map(&collection.graph_head_ids(exec), |g| (*g, GraphContent::head()));
    let vertices = exec.flat_map(&collection.vertex_memberships(exec), |m| {
        contributions(m, GraphContent::vertex)
    });
    let edges = exec.flat_map(&collection.edge_memberships(exec), |m| {
        contributions(m, GraphContent::edge)
    });

    let per_graph = exec.aggregate_by_key(
        &exec.union(&exec.union(&heads, &vertices), &edges),
        |(graph_id, _)| *graph_id,
        |(_, content)| content.clone(),
        GraphContent::merge,
    );

    let weighted = exec.map(&per_graph, |(_, content)| content.weighted_signature());
    let counted = exec.aggregate_by_key(
        &weighted,
        |(key, _)| key.clone(),
        |(_, weight)| *weight,
        |a, b| a + b,
    );

    exec.map(&counted, |((signature, dangling), multiplicity)| SignatureCount {
        signature: signature.clone(),
        multiplicity: *multiplicity,
        dangling: *dangling,
    })
}
