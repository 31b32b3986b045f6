//! Adjacency-list edges, scoped to an owning vertex.
//!
//! In the transient adjacency representation an edge stores only the id of
//! the *other* endpoint plus a per-vertex sequence index. Such an edge has
//! no meaningful identity on its own: two adjacent edges are equal (and
//! ordered) only relative to the same owning vertex. [`AdjacentEdge`]
//! therefore implements neither `PartialEq` nor `Ord`; equality and
//! ordering are reachable only through an [`AdjacencyList`], which carries
//! the owner id.
//!
//! Ordering inside a list is lexicographic on `(other_id, label, index)`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::element::label_or;
use super::{GradoopId, PropertyBag, PropertyValue, DEFAULT_EDGE_LABEL};
use crate::{Error, Result};

/// An edge as seen from its owning vertex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacentEdge {
    other_id: GradoopId,
    label: String,
    index: u64,
    #[serde(default)]
    properties: PropertyBag,
}

impl AdjacentEdge {
    /// Build an adjacent edge.
    ///
    /// Both the other endpoint and the sequence index are required; a
    /// missing one fails with [`Error::InvalidArgument`] instead of being
    /// defaulted, since every edge needs a well-defined position.
    pub fn try_new(
        other_id: Option<GradoopId>,
        label: Option<&str>,
        index: Option<u64>,
    ) -> Result<Self> {
        let other_id = other_id
            .ok_or_else(|| Error::InvalidArgument("other endpoint id must not be missing".into()))?;
        let index = index
            .ok_or_else(|| Error::InvalidArgument("sequence index must not be missing".into()))?;
        Ok(Self {
            other_id,
            label: label_or(label.unwrap_or_default().to_owned(), DEFAULT_EDGE_LABEL),
            index,
            properties: PropertyBag::new(),
        })
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(key, value);
        self
    }

    pub fn other_id(&self) -> GradoopId { self.other_id }

    pub fn label(&self) -> &str { &self.label }

    pub fn index(&self) -> u64 { self.index }

    pub fn properties(&self) -> &PropertyBag { &self.properties }

    fn scope_key(&self) -> (GradoopId, &str, u64) {
        (self.other_id, self.label.as_str(), self.index)
    }
}

/// The outgoing (or incoming) edges of one vertex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencyList {
    owner: GradoopId,
    edges: Vec<AdjacentEdge>,
}

impl AdjacencyList {
    pub fn new(owner: GradoopId) -> Self {
        Self { owner, edges: Vec::new() }
    }

    pub fn owner(&self) -> GradoopId {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn push(&mut self, edge: AdjacentEdge) {
        self.edges.push(edge);
    }

    /// Edges in insertion (or last sorted) order.
    pub fn iter(&self) -> std::slice::Iter<'_, AdjacentEdge> {
        self.edges.iter()
    }

    /// Sort in place by `(other_id, label, index)`.
    pub fn sort(&mut self) {
        self.edges.sort_by(|a, b| a.scope_key().cmp(&b.scope_key()));
    }

    /// Edges in `(other_id, label, index)` order, leaving the list as is.
    pub fn sorted_edges(&self) -> Vec<&AdjacentEdge> {
        let mut edges: Vec<_> = self.edges.iter().collect();
        edges.sort_by(|a, b| a.scope_key().cmp(&b.scope_key()));
        edges
    }

    /// Order of the edges at positions `a` and `b`, or `None` if either
    /// position is out of bounds.
    pub fn compare(&self, a: usize, b: usize) -> Option<Ordering> {
        let (a, b) = (self.edges.get(a)?, self.edges.get(b)?);
        Some(a.scope_key().cmp(&b.scope_key()))
    }

    pub fn contains(&self, other_id: GradoopId, label: &str, index: u64) -> bool {
        self.edges.iter().any(|e| e.scope_key() == (other_id, label, index))
    }

    /// Move all edges of `other` into this list. Both lists must belong to
    /// the same vertex.
    pub fn merge(&mut self, other: AdjacencyList) -> Result<()> {
        self.check_scope(&other)?;
        self.edges.extend(other.edges);
        Ok(())
    }

    /// Whether both lists hold the same edges, ignoring order and
    /// properties. Both lists must belong to the same vertex.
    pub fn same_edges(&self, other: &AdjacencyList) -> Result<bool> {
        self.check_scope(other)?;
        if self.len() != other.len() {
            return Ok(false);
        }
        let mut mine: Vec<_> = self.edges.iter().map(AdjacentEdge::scope_key).collect();
        let mut theirs: Vec<_> = other.edges.iter().map(AdjacentEdge::scope_key).collect();
        mine.sort_unstable();
        theirs.sort_unstable();
        Ok(mine == theirs)
    }

    fn check_scope(&self, other: &AdjacencyList) -> Result<()> {
        if self.owner != other.owner {
            return Err(Error::ScopeMismatch { expected: self.owner, got: other.owner });
        }
        Ok(())
    }
}
