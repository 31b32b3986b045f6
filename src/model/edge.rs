//! Edge in the extended property graph model.

use serde::{Deserialize, Serialize};

use super::element::{default_edge_label, label_or};
use super::{
    Element, GradoopId, GradoopIdSet, GraphElement, PropertyBag, PropertyValue,
    DEFAULT_EDGE_LABEL,
};

/// A directed edge. Endpoints are referenced by id only; an edge never
/// owns its vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: GradoopId,
    #[serde(default = "default_edge_label")]
    label: String,
    source_id: GradoopId,
    target_id: GradoopId,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(default)]
    graph_ids: GradoopIdSet,
}

impl Edge {
    pub fn new(id: GradoopId, source_id: GradoopId, target_id: GradoopId) -> Self {
        Self {
            id,
            label: default_edge_label(),
            source_id,
            target_id,
            properties: PropertyBag::new(),
            graph_ids: GradoopIdSet::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label_or(label.into(), DEFAULT_EDGE_LABEL);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(key, value);
        self
    }

    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = properties;
        self
    }

    pub fn in_graphs(mut self, graph_ids: impl IntoIterator<Item = GradoopId>) -> Self {
        self.graph_ids = graph_ids.into_iter().collect();
        self
    }

    pub fn source_id(&self) -> GradoopId { self.source_id }

    pub fn target_id(&self) -> GradoopId { self.target_id }

    /// The endpoint opposite `from`, if `from` is an endpoint at all.
    pub fn other_end(&self, from: GradoopId) -> Option<GradoopId> {
        if from == self.source_id { Some(self.target_id) }
        else if from == self.target_id { Some(self.source_id) }
        else { None }
    }
}

impl Element for Edge {
    fn id(&self) -> GradoopId { self.id }
    fn label(&self) -> &str { &self.label }
    fn properties(&self) -> &PropertyBag { &self.properties }
}

impl GraphElement for Edge {
    fn graph_ids(&self) -> &GradoopIdSet { &self.graph_ids }

    fn add_to_graph(&mut self, graph_id: GradoopId) -> bool {
        self.graph_ids.insert(graph_id)
    }

    fn remove_from_graph(&mut self, graph_id: GradoopId) -> bool {
        self.graph_ids.remove(&graph_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_end() {
        let (a, b, c) = (GradoopId::from_u128(1), GradoopId::from_u128(2), GradoopId::from_u128(3));
        let e = Edge::new(GradoopId::from_u128(9), a, b).with_label("knows");
        assert_eq!(e.other_end(a), Some(b));
        assert_eq!(e.other_end(b), Some(a));
        assert_eq!(e.other_end(c), None);
        assert_eq!(e.label(), "knows");
    }

    #[test]
    fn test_properties_via_builder() {
        let e = Edge::new(GradoopId::from_u128(9), GradoopId::from_u128(1), GradoopId::from_u128(2))
            .with_property("since", 2015);
        assert_eq!(e.property("since"), Some(&PropertyValue::Int(2015)));
        assert_eq!(e.label(), DEFAULT_EDGE_LABEL);
    }
}
