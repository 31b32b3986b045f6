//! Vertex in the extended property graph model.

use serde::{Deserialize, Serialize};

use super::element::{default_vertex_label, label_or};
use super::{
    Element, GradoopId, GradoopIdSet, GraphElement, PropertyBag, PropertyValue,
    DEFAULT_VERTEX_LABEL,
};

/// A vertex, possibly shared by several logical graphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: GradoopId,
    #[serde(default = "default_vertex_label")]
    label: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(default)]
    graph_ids: GradoopIdSet,
}

impl Vertex {
    pub fn new(id: GradoopId) -> Self {
        Self {
            id,
            label: default_vertex_label(),
            properties: PropertyBag::new(),
            graph_ids: GradoopIdSet::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label_or(label.into(), DEFAULT_VERTEX_LABEL);
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
}

impl Element for Vertex {
    fn id(&self) -> GradoopId { self.id }
    fn label(&self) -> &str { &self.label }
    fn properties(&self) -> &PropertyBag { &self.properties }
}

impl GraphElement for Vertex {
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
    fn test_default_label() {
        let v = Vertex::new(GradoopId::from_u128(1));
        assert_eq!(v.label(), DEFAULT_VERTEX_LABEL);
        assert_eq!(v.clone().with_label("").label(), DEFAULT_VERTEX_LABEL);
        assert_eq!(v.with_label("Person").label(), "Person");
    }

    #[test]
    fn test_membership_mutation() {
        let g1 = GradoopId::from_u128(10);
        let g2 = GradoopId::from_u128(11);
        let mut v = Vertex::new(GradoopId::from_u128(1)).in_graphs([g1]);
        assert!(v.add_to_graph(g2));
        assert!(!v.add_to_graph(g2));
        assert_eq!(v.graph_count(), 2);
        assert!(v.remove_from_graph(g1));
        assert!(!v.in_graph(&g1));
        assert!(v.in_graph(&g2));
    }

    #[test]
    fn test_deserialize_without_label() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000001"}"#;
        let v: Vertex = serde_json::from_str(json).unwrap();
        assert_eq!(v.label(), DEFAULT_VERTEX_LABEL);
        assert!(v.graph_ids().is_empty());
    }
}
