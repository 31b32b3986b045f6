//! # Data-Parallel Executor Trait
//!
//! This is THE contract between the equality operators and whatever runs
//! them. Operators never loop over a whole collection themselves; they
//! describe the computation as a composition of stateless transformations
//! over partitioned [`Dataset`]s and submit each step to an [`Executor`].
//!
//! Every user function handed to an executor must be pure: the executor
//! may call it on any partition, in any order, any number of times.
//! Combiners given to [`Executor::aggregate_by_key`] and
//! [`Executor::reduce`] must additionally be associative and commutative.
//!
//! ## Implementations
//!
//! | Executor | Module | Description |
//! |----------|--------|-------------|
//! | `LocalExecutor` | `local` | rayon thread pool with hash partitioning |

pub mod config;
pub mod local;

use std::hash::Hash;
use std::ops::Deref;
use std::sync::Arc;

use crate::Result;

pub use config::ExecutorConfig;
pub use local::LocalExecutor;

// ============================================================================
// Element bounds
// ============================================================================

/// Anything that can live in a dataset and cross task boundaries.
pub trait Data: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Data for T {}

/// A grouping or join key.
pub trait Key: Data + Eq + Hash {}

impl<T: Data + Eq + Hash> Key for T {}

// ============================================================================
// Dataset
// ============================================================================

/// A partitioned, unordered collection.
///
/// The split into partitions and the order inside each partition are
/// executor details; operators must not depend on either.
#[derive(Debug, Clone)]
pub struct Dataset<T> {
    partitions: Vec<Vec<T>>,
}

impl<T> Dataset<T> {
    pub fn from_partitions(partitions: Vec<Vec<T>>) -> Self {
        Self { partitions }
    }

    pub fn empty() -> Self {
        Self { partitions: Vec::new() }
    }

    pub fn partitions(&self) -> &[Vec<T>] {
        &self.partitions
    }

    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Total number of elements across partitions.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.partitions.iter().flatten()
    }

    /// Gather every element into one vector (order unspecified).
    pub fn into_vec(self) -> Vec<T> {
        self.partitions.into_iter().flatten().collect()
    }

    pub(crate) fn into_partitions(self) -> Vec<Vec<T>> {
        self.partitions
    }
}

impl<T: Clone> Dataset<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// ============================================================================
// Broadcast
// ============================================================================

/// A read-only copy of a whole dataset, shared by every task that uses it.
#[derive(Debug)]
pub struct Broadcast<T> {
    items: Arc<[T]>,
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self { items: Arc::clone(&self.items) }
    }
}

impl<T> Broadcast<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items: items.into() }
    }
}

impl<T> Deref for Broadcast<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

// ============================================================================
// Executor Trait
// ============================================================================

/// The data-parallel capability set the equality core is written against.
///
/// All operators are eager: each call returns a fully materialized
/// dataset. Nothing here promises an output order.
pub trait Executor: Send + Sync {
    // ========================================================================
    // Sources
    // ========================================================================

    /// Distribute local items over the executor's partitions.
    fn parallelize<T: Data>(&self, items: Vec<T>) -> Dataset<T>;

    // ========================================================================
    // Element-wise
    // ========================================================================

    fn map<T, U, F>(&self, input: &Dataset<T>, f: F) -> Dataset<U>
    where
        T: Data,
        U: Data,
        F: Fn(&T) -> U + Send + Sync;

    fn flat_map<T, U, I, F>(&self, input: &Dataset<T>, f: F) -> Dataset<U>
    where
        T: Data,
        U: Data,
        I: IntoIterator<Item = U>,
        F: Fn(&T) -> I + Send + Sync;

    fn filter<T, F>(&self, input: &Dataset<T>, predicate: F) -> Dataset<T>
    where
        T: Data,
        F: Fn(&T) -> bool + Send + Sync;

    // ========================================================================
    // Keyed
    // ========================================================================

    /// Inner equi-join: `f` is called once per pair whose keys are equal.
    fn join<L, R, K, O, LK, RK, F>(
        &self,
        left: &Dataset<L>,
        right: &Dataset<R>,
        left_key: LK,
        right_key: RK,
        f: F,
    ) -> Dataset<O>
    where
        L: Data,
        R: Data,
        K: Key,
        O: Data,
        LK: Fn(&L) -> K + Send + Sync,
        RK: Fn(&R) -> K + Send + Sync,
        F: Fn(&L, &R) -> O + Send + Sync;

    /// Group by key and aggregate: every element is lifted into an
    /// accumulator, and accumulators of equal keys are merged with
    /// `combine`. Yields one `(key, accumulator)` per distinct key.
    fn aggregate_by_key<T, K, A, KF, LF, CF>(
        &self,
        input: &Dataset<T>,
        key: KF,
        lift: LF,
        combine: CF,
    ) -> Dataset<(K, A)>
    where
        T: Data,
        K: Key,
        A: Data,
        KF: Fn(&T) -> K + Send + Sync,
        LF: Fn(&T) -> A + Send + Sync,
        CF: Fn(A, A) -> A + Send + Sync;

    // ========================================================================
    // Global
    // ========================================================================

    /// Fold the whole dataset with `combine`. The result holds one element,
    /// or none if the input was empty.
    fn reduce<T, F>(&self, input: &Dataset<T>, combine: F) -> Dataset<T>
    where
        T: Data,
        F: Fn(T, T) -> T + Send + Sync;

    /// Cartesian product.
    fn cross<L, R, O, F>(&self, left: &Dataset<L>, right: &Dataset<R>, f: F) -> Dataset<O>
    where
        L: Data,
        R: Data,
        O: Data,
        F: Fn(&L, &R) -> O + Send + Sync;

    /// Bag union (duplicates are kept).
    fn union<T: Data>(&self, first: &Dataset<T>, second: &Dataset<T>) -> Dataset<T>;

    /// Make a dataset available, read-only, to downstream functions.
    fn broadcast<T: Data>(&self, input: &Dataset<T>) -> Broadcast<T>;

    // ========================================================================
    // Job boundary
    // ========================================================================

    /// Run a job built from the operators above. A failing task fails the
    /// whole job with [`crate::Error::ExecutionError`]; no partial result
    /// is returned.
    fn run<R, J>(&self, job: J) -> Result<R>
    where
        Self: Sized,
        J: FnOnce(&Self) -> Result<R>;
}
