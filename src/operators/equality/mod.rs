//! # Graph collection equality
//!
//! | Operator | Collections are equal iff |
//! |----------|---------------------------|
//! | [`EqualByGraphElementIds`] | they hold the same multiset of graphs, where a graph is identified by its vertex-id set and edge-id set |
//! | [`EqualByGraphIds`] | they hold the same multiset of graph head ids |
//!
//! Both reduce each collection to distinct records tagged with a
//! multiplicity, join the two sides on the whole record and compare counts
//! (see [`base`]). No step sorts or hashes a collection in one place, so
//! the verdict is independent of partitioning and element order.

pub mod base;
pub mod signature;
pub mod by_element_ids;
pub mod by_graph_ids;

pub use by_element_ids::EqualByGraphElementIds;
pub use by_graph_ids::EqualByGraphIds;
pub use signature::{signature_counts, GraphSignature, SignatureCount};
