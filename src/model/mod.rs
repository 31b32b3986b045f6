//! # Extended Property Graph Model
//!
//! Plain data types shared by every layer: identifiers, id sets, property
//! values and the three graph element kinds.
//!
//! Design rule: no executor types here. This module is pure data, with no
//! I/O and no shared state.

pub mod id;
pub mod id_set;
pub mod value;
pub mod property_bag;
pub mod element;
pub mod vertex;
pub mod edge;
pub mod graph_head;
pub mod adjacency;

pub use id::GradoopId;
pub use id_set::GradoopIdSet;
pub use value::{Decimal, PropertyValue, DECIMAL_SCALE};
pub use property_bag::{Property, PropertyBag};
pub use element::{
    Element, GraphElement,
    DEFAULT_EDGE_LABEL, DEFAULT_GRAPH_LABEL, DEFAULT_VERTEX_LABEL,
};
pub use vertex::Vertex;
pub use edge::Edge;
pub use graph_head::GraphHead;
pub use adjacency::{AdjacencyList, AdjacentEdge};
