//! Graph head — the identity and data of one logical graph.

use serde::{Deserialize, Serialize};

use super::element::{default_graph_label, label_or};
use super::{Element, GradoopId, PropertyBag, PropertyValue, DEFAULT_GRAPH_LABEL};

/// Head of a logical graph. Vertices and edges point at it through their
/// membership sets; the head itself holds no element references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphHead {
    id: GradoopId,
    #[serde(default = "default_graph_label")]
    label: String,
    #[serde(default)]
    properties: PropertyBag,
}

impl GraphHead {
    pub fn new(id: GradoopId) -> Self {
        Self { id, label: default_graph_label(), properties: PropertyBag::new() }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label_or(label.into(), DEFAULT_GRAPH_LABEL);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(key, value);
        self
    }
}

impl Element for GraphHead {
    fn id(&self) -> GradoopId { self.id }
    fn label(&self) -> &str { &self.label }
    fn properties(&self) -> &PropertyBag { &self.properties }
}
