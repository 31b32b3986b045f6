//! Common contract of vertices, edges and graph heads.

use super::{GradoopId, GradoopIdSet, PropertyBag, PropertyValue};

/// Label given to a graph head constructed without one.
pub const DEFAULT_GRAPH_LABEL: &str = "_default";
/// Label given to a vertex constructed without one.
pub const DEFAULT_VERTEX_LABEL: &str = "_default";
/// Label given to an edge constructed without one.
pub const DEFAULT_EDGE_LABEL: &str = "_default";

/// An identified, labeled property container.
///
/// Identity and label are fixed at construction.
pub trait Element {
    fn id(&self) -> GradoopId;

    fn label(&self) -> &str;

    fn properties(&self) -> &PropertyBag;

    fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties().get(key)
    }
}

/// An element that is contained in zero or more logical graphs.
///
/// Membership is the only state that may change after construction.
pub trait GraphElement: Element {
    fn graph_ids(&self) -> &GradoopIdSet;

    /// Returns `false` if the element already belonged to `graph_id`.
    fn add_to_graph(&mut self, graph_id: GradoopId) -> bool;

    /// Returns `false` if the element did not belong to `graph_id`.
    fn remove_from_graph(&mut self, graph_id: GradoopId) -> bool;

    fn graph_count(&self) -> usize {
        self.graph_ids().len()
    }

    fn in_graph(&self, graph_id: &GradoopId) -> bool {
        self.graph_ids().contains(graph_id)
    }
}

pub(crate) fn default_graph_label() -> String { DEFAULT_GRAPH_LABEL.to_owned() }
pub(crate) fn default_vertex_label() -> String { DEFAULT_VERTEX_LABEL.to_owned() }
pub(crate) fn default_edge_label() -> String { DEFAULT_EDGE_LABEL.to_owned() }

/// Empty labels are treated as "not supplied".
pub(crate) fn label_or(label: String, default: &str) -> String {
    if label.is_empty() { default.to_owned() } else { label }
}
