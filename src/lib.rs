//! # epgm-rs — Graph Collection Equality
//!
//! The equality core of an extended property graph model: decide whether
//! two collections of logical graphs are equal, using only operators that
//! a data-parallel executor can run in any partitioning and order.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `Executor` is the contract between operators and whatever runs them
//! 2. **Plain DTOs**: `Vertex`, `Edge`, `GraphHead`, `PropertyValue` carry no behavior beyond their invariants
//! 3. **Pure dataflow**: operators compose map / join / aggregate / cross / union and never hold state
//! 4. **Counts, not order**: every aggregation is associative and commutative
//!
//! ## Quick Start
//!
//! ```rust
//! use epgm_rs::{Edge, GradoopId, GraphCollection, GraphHead, Vertex};
//!
//! # fn example() -> epgm_rs::Result<()> {
//! let (v1, v2, e1) = (GradoopId::new(), GradoopId::new(), GradoopId::new());
//! let graph = |g: GradoopId| {
//!     GraphCollection::new()
//!         .with_graph_head(GraphHead::new(g))
//!         .with_vertex(Vertex::new(v1).in_graphs([g]))
//!         .with_vertex(Vertex::new(v2).in_graphs([g]))
//!         .with_edge(Edge::new(e1, v1, v2).in_graphs([g]))
//! };
//!
//! // Different graph heads, same element ids: equal.
//! assert!(epgm_rs::equal(&graph(GradoopId::new()), &graph(GradoopId::new()))?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Executors
//!
//! | Executor | Description |
//! |----------|-------------|
//! | `LocalExecutor` | rayon thread pool with hash-partitioned datasets |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod collection;
pub mod dataflow;
pub mod functions;
pub mod operators;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    AdjacencyList, AdjacentEdge, Decimal, Edge, Element, GradoopId, GradoopIdSet,
    GraphElement, GraphHead, Property, PropertyBag, PropertyValue, Vertex,
};

// ============================================================================
// Re-exports: Collections & execution
// ============================================================================

pub use collection::{CollectionSource, ElementMembership, GraphCollection};
pub use dataflow::{Dataset, Executor, ExecutorConfig, LocalExecutor};

// ============================================================================
// Re-exports: Operators
// ============================================================================

pub use operators::BinaryCollectionToValueOperator;
pub use operators::equality::{
    signature_counts, EqualByGraphElementIds, EqualByGraphIds, GraphSignature, SignatureCount,
};

// ============================================================================
// Entry points
// ============================================================================

/// Whether two collections hold the same graphs (by element ids) the same
/// number of times.
///
/// Only graphs take part: a vertex or edge that belongs to no graph adds
/// nothing, so a collection holding nothing but such elements equals the
/// empty collection.
///
/// Each call reads the environment and builds a fresh [`LocalExecutor`]
/// with its own thread pool. For repeated checks, build one executor and
/// use [`equal_with`].
pub fn equal<A, B>(first: &A, second: &B) -> Result<bool>
where
    A: CollectionSource,
    B: CollectionSource,
{
    let exec = LocalExecutor::new(ExecutorConfig::from_env()?)?;
    equal_with(&exec, first, second)
}

/// [`equal`] on a caller-provided executor.
pub fn equal_with<E, A, B>(exec: &E, first: &A, second: &B) -> Result<bool>
where
    E: Executor,
    A: CollectionSource,
    B: CollectionSource,
{
    EqualByGraphElementIds.evaluate(exec, first, second)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Scope mismatch: edge list of vertex {expected} used with vertex {got}")]
    ScopeMismatch { expected: GradoopId, got: GradoopId },

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
