//! Graph collections.
//!
//! A graph collection is a bag of logical graphs sharing one element space:
//! graph heads identify the graphs, and vertices and edges name the graphs
//! they belong to through their membership sets.
//!
//! The equality operators only read three projections of a collection,
//! which is what [`CollectionSource`] exposes.

use serde::{Deserialize, Serialize};

use crate::dataflow::{Dataset, Executor};
use crate::model::*;
use crate::Result;

/// An element id together with the ids of the graphs containing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementMembership {
    pub element_id: GradoopId,
    pub graph_ids: GradoopIdSet,
}

impl ElementMembership {
    pub fn of<E: GraphElement>(element: &E) -> Self {
        Self { element_id: element.id(), graph_ids: element.graph_ids().clone() }
    }
}

// ============================================================================
// CollectionSource
// ============================================================================

/// Read access to a graph collection, as distributed datasets.
pub trait CollectionSource {
    /// Ids of all graph heads. A repeated id denotes a repeated graph.
    fn graph_head_ids<E: Executor>(&self, exec: &E) -> Dataset<GradoopId>;

    fn vertex_memberships<E: Executor>(&self, exec: &E) -> Dataset<ElementMembership>;

    fn edge_memberships<E: Executor>(&self, exec: &E) -> Dataset<ElementMembership>;
}

// ============================================================================
// GraphCollection
// ============================================================================

/// In-memory graph collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphCollection {
    #[serde(default)]
    graph_heads: Vec<GraphHead>,
    #[serde(default)]
    vertices: Vec<Vertex>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl GraphCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(graph_heads: Vec<GraphHead>, vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { graph_heads, vertices, edges }
    }

    pub fn with_graph_head(mut self, head: GraphHead) -> Self {
        self.graph_heads.push(head);
        self
    }

    pub fn with_vertex(mut self, vertex: Vertex) -> Self {
        self.vertices.push(vertex);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn graph_heads(&self) -> &[GraphHead] { &self.graph_heads }

    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    pub fn edges(&self) -> &[Edge] { &self.edges }

    pub fn graph_count(&self) -> usize { self.graph_heads.len() }

    pub fn is_empty(&self) -> bool {
        self.graph_heads.is_empty() && self.vertices.is_empty() && self.edges.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Graph ids referenced by some vertex or edge but missing a graph head.
    ///
    /// Such memberships are a data-quality issue, not an error: the
    /// equality operators still produce a verdict for them.
    pub fn dangling_graph_ids<E: Executor>(&self, exec: &E) -> GradoopIdSet {
        let known = exec.broadcast(&self.graph_head_ids(exec));
        let memberships = exec.union(&self.vertex_memberships(exec), &self.edge_memberships(exec));
        let dangling = exec.flat_map(&memberships, move |m| {
            m.graph_ids
                .iter()
                .filter(|g| !known.contains(*g))
                .copied()
                .collect::<Vec<_>>()
        });
        dangling.into_vec().into_iter().collect()
    }
}

impl CollectionSource for GraphCollection {
    fn graph_head_ids<E: Executor>(&self, exec: &E) -> Dataset<GradoopId> {
        exec.parallelize(self.graph_heads.iter().map(Element::id).collect())
    }

    fn vertex_memberships<E: Executor>(&self, exec: &E) -> Dataset<ElementMembership> {
        exec.parallelize(self.vertices.iter().map(ElementMembership::of).collect())
    }

    fn edge_memberships<E: Executor>(&self, exec: &E) -> Dataset<ElementMembership> {
        exec.parallelize(self.edges.iter().map(ElementMembership::of).collect())
    }
}
