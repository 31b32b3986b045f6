//! In-process executor.
//!
//! This is the reference implementation of `Executor`. Datasets are split
//! into a fixed number of hash partitions and every operator runs one task
//! per partition on a dedicated rayon thread pool.
//!
//! ## Strategies
//!
//! - **join**: both sides are shuffled by key hash, then each partition
//!   pair is joined with a hash table built from the left side.
//! - **aggregate_by_key**: accumulators are pre-combined inside each input
//!   partition, shuffled by key hash, then combined again.
//! - **cross**: the right side is broadcast to every left partition.
//!
//! Partition assignment uses a fixed (unseeded) hasher, so a given input
//! always lands in the same partitions. Operators must still not rely on
//! this.

use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::panic::{self, AssertUnwindSafe};

use hashbrown::HashMap;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::{Broadcast, Data, Dataset, Executor, ExecutorConfig, Key};
use crate::{Error, Result};

// ============================================================================
// LocalExecutor
// ============================================================================

/// Multi-threaded, single-process executor.
pub struct LocalExecutor {
    pool: ThreadPool,
    partitions: usize,
    hasher: BuildHasherDefault<DefaultHasher>,
}

impl LocalExecutor {
    pub fn new(config: ExecutorConfig) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.parallelism)
            .thread_name(|i| format!("epgm-worker-{i}"))
            .build()
            .map_err(|e| Error::ExecutionError(format!("failed to start worker pool: {e}")))?;
        tracing::debug!(
            threads = pool.current_num_threads(),
            partitions = config.partitions,
            "local executor started"
        );
        Ok(Self {
            pool,
            partitions: config.partitions,
            hasher: BuildHasherDefault::default(),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(ExecutorConfig::default())
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn partition_of<K: Hash>(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.partitions as u64) as usize
    }

    fn empty_partitions<T>(&self) -> Vec<Vec<T>> {
        (0..self.partitions).map(|_| Vec::new()).collect()
    }

    /// Run `f` once per partition, in parallel.
    fn map_partitions<T, U, F>(&self, input: &Dataset<T>, f: F) -> Dataset<U>
    where
        T: Data,
        U: Data,
        F: Fn(&[T]) -> Vec<U> + Send + Sync,
    {
        let parts = self
            .pool
            .install(|| input.partitions().par_iter().map(|p| f(p.as_slice())).collect());
        Dataset::from_partitions(parts)
    }

    /// Redistribute elements so that equal keys share a partition.
    fn shuffle<T, K, KF>(&self, partitions: Vec<Vec<T>>, key: KF) -> Vec<Vec<T>>
    where
        T: Data,
        K: Hash,
        KF: Fn(&T) -> K + Send + Sync,
    {
        let scattered: Vec<Vec<Vec<T>>> = self.pool.install(|| {
            partitions
                .into_par_iter()
                .map(|part| {
                    let mut buckets = self.empty_partitions();
                    for item in part {
                        let target = self.partition_of(&key(&item));
                        buckets[target].push(item);
                    }
                    buckets
                })
                .collect()
        });

        let mut merged = self.empty_partitions();
        for buckets in scattered {
            for (target, bucket) in merged.iter_mut().zip(buckets) {
                target.extend(bucket);
            }
        }
        tracing::trace!(
            sizes = ?merged.iter().map(Vec::len).collect::<Vec<_>>(),
            "shuffle complete"
        );
        merged
    }
}

fn merge_into<K, A, CF>(acc: &mut HashMap<K, A>, key: K, value: A, combine: &CF)
where
    K: Key,
    CF: Fn(A, A) -> A,
{
    let merged = match acc.remove(&key) {
        Some(previous) => combine(previous, value),
        None => value,
    };
    acc.insert(key, merged);
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "task panicked".to_owned()
    }
}

// ============================================================================
// Executor impl
// ============================================================================

impl Executor for LocalExecutor {
    fn parallelize<T: Data>(&self, items: Vec<T>) -> Dataset<T> {
        let mut parts = self.empty_partitions();
        for (i, item) in items.into_iter().enumerate() {
            parts[i % self.partitions].push(item);
        }
        Dataset::from_partitions(parts)
    }

    fn map<T, U, F>(&self, input: &Dataset<T>, f: F) -> Dataset<U>
    where
        T: Data,
        U: Data,
        F: Fn(&T) -> U + Send + Sync,
    {
        self.map_partitions(input, |part| part.iter().map(&f).collect())
    }

    fn flat_map<T, U, I, F>(&self, input: &Dataset<T>, f: F) -> Dataset<U>
    where
        T: Data,
        U: Data,
        I: IntoIterator<Item = U>,
        F: Fn(&T) -> I + Send + Sync,
    {
        self.map_partitions(input, |part| part.iter().flat_map(&f).collect())
    }

    fn filter<T, F>(&self, input: &Dataset<T>, predicate: F) -> Dataset<T>
    where
        T: Data,
        F: Fn(&T) -> bool + Send + Sync,
    {
        self.map_partitions(input, |part| {
            part.iter().filter(|item| predicate(item)).cloned().collect()
        })
    }

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
        F: Fn(&L, &R) -> O + Send + Sync,
    {
        let left_parts = self.shuffle(left.partitions().to_vec(), &left_key);
        let right_parts = self.shuffle(right.partitions().to_vec(), &right_key);

        let parts: Vec<Vec<O>> = self.pool.install(|| {
            left_parts
                .into_par_iter()
                .zip(right_parts.into_par_iter())
                .map(|(lp, rp)| {
                    let mut table: HashMap<K, Vec<L>> = HashMap::new();
                    for l in lp {
                        table.entry(left_key(&l)).or_default().push(l);
                    }
                    let mut out = Vec::new();
                    for r in &rp {
                        if let Some(matches) = table.get(&right_key(r)) {
                            out.extend(matches.iter().map(|l| f(l, r)));
                        }
                    }
                    out
                })
                .collect()
        });
        Dataset::from_partitions(parts)
    }

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
        CF: Fn(A, A) -> A + Send + Sync,
    {
        let combined: Dataset<(K, A)> = self.map_partitions(input, |part| {
            let mut acc: HashMap<K, A> = HashMap::new();
            for item in part {
                merge_into(&mut acc, key(item), lift(item), &combine);
            }
            acc.into_iter().collect()
        });

        let shuffled = self.shuffle(combined.into_partitions(), |(k, _): &(K, A)| k.clone());

        let parts: Vec<Vec<(K, A)>> = self.pool.install(|| {
            shuffled
                .into_par_iter()
                .map(|part| {
                    let mut acc: HashMap<K, A> = HashMap::new();
                    for (k, a) in part {
                        merge_into(&mut acc, k, a, &combine);
                    }
                    acc.into_iter().collect()
                })
                .collect()
        });
        Dataset::from_partitions(parts)
    }

    fn reduce<T, F>(&self, input: &Dataset<T>, combine: F) -> Dataset<T>
    where
        T: Data,
        F: Fn(T, T) -> T + Send + Sync,
    {
        let partials: Vec<Option<T>> = self.pool.install(|| {
            input
                .partitions()
                .par_iter()
                .map(|part| part.iter().cloned().reduce(&combine))
                .collect()
        });
        let total = partials.into_iter().flatten().reduce(&combine);
        Dataset::from_partitions(vec![total.into_iter().collect()])
    }

    fn cross<L, R, O, F>(&self, left: &Dataset<L>, right: &Dataset<R>, f: F) -> Dataset<O>
    where
        L: Data,
        R: Data,
        O: Data,
        F: Fn(&L, &R) -> O + Send + Sync,
    {
        let right_all = self.broadcast(right);
        self.map_partitions(left, |part| {
            let mut out = Vec::with_capacity(part.len() * right_all.len());
            for l in part {
                out.extend(right_all.iter().map(|r| f(l, r)));
            }
            out
        })
    }

    fn union<T: Data>(&self, first: &Dataset<T>, second: &Dataset<T>) -> Dataset<T> {
        let mut parts = first.partitions().to_vec();
        parts.extend_from_slice(second.partitions());
        Dataset::from_partitions(parts)
    }

    fn broadcast<T: Data>(&self, input: &Dataset<T>) -> Broadcast<T> {
        Broadcast::new(input.to_vec())
    }

    fn run<R, J>(&self, job: J) -> Result<R>
    where
        J: FnOnce(&Self) -> Result<R>,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| job(self))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(%message, "job aborted by failing task");
                Err(Error::ExecutionError(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn executor(partitions: usize) -> LocalExecutor {
        LocalExecutor::new(ExecutorConfig::default().with_parallelism(2).with_partitions(partitions))
            .unwrap()
    }

    fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
        v.sort();
        v
    }

    #[test]
    fn test_parallelize_spreads_over_partitions() {
        let exec = executor(3);
        let ds = exec.parallelize((0..10).collect::<Vec<u32>>());
        assert_eq!(ds.num_partitions(), 3);
        assert_eq!(ds.len(), 10);
        assert_eq!(sorted(ds.into_vec()), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_map_flat_map_filter() {
        let exec = executor(4);
        let ds = exec.parallelize(vec![1u32, 2, 3]);
        assert_eq!(sorted(exec.map(&ds, |x| x * 10).into_vec()), vec![10, 20, 30]);
        assert_eq!(
            sorted(exec.flat_map(&ds, |x| vec![*x; *x as usize]).into_vec()),
            vec![1, 2, 2, 3, 3, 3]
        );
        assert_eq!(sorted(exec.filter(&ds, |x| x % 2 == 1).into_vec()), vec![1, 3]);
    }

    #[test]
    fn test_join_matches_equal_keys_only() {
        let exec = executor(5);
        let left = exec.parallelize(vec![(1u32, "a"), (2, "b"), (2, "c"), (4, "d")]);
        let right = exec.parallelize(vec![(2u32, 20u32), (3, 30), (4, 40), (4, 41)]);
        let joined = exec.join(&left, &right, |l| l.0, |r| r.0, |l, r| (l.1, r.1));
        assert_eq!(
            sorted(joined.into_vec()),
            vec![("b", 20), ("c", 20), ("d", 40), ("d", 41)]
        );
    }

    #[test]
    fn test_aggregate_by_key_independent_of_partitioning() {
        let words = vec!["a", "b", "a", "c", "a", "b"];
        for partitions in [1, 2, 7] {
            let exec = executor(partitions);
            let ds = exec.parallelize(words.clone());
            let counts = exec.aggregate_by_key(&ds, |w| *w, |_| 1u64, |a, b| a + b);
            assert_eq!(sorted(counts.into_vec()), vec![("a", 3), ("b", 2), ("c", 1)]);
        }
    }

    #[test]
    fn test_reduce_empty_and_non_empty() {
        let exec = executor(3);
        let empty: Dataset<u64> = exec.parallelize(Vec::new());
        assert!(exec.reduce(&empty, |a, b| a + b).is_empty());
        let ds = exec.parallelize((1..=100u64).collect());
        assert_eq!(exec.reduce(&ds, |a, b| a + b).into_vec(), vec![5050]);
    }

    #[test]
    fn test_cross_and_union() {
        let exec = executor(2);
        let a = exec.parallelize(vec![1u32, 2]);
        let b = exec.parallelize(vec![10u32, 20]);
        assert_eq!(sorted(exec.cross(&a, &b, |x, y| x + y).into_vec()), vec![11, 12, 21, 22]);
        assert_eq!(sorted(exec.union(&a, &b).into_vec()), vec![1, 2, 10, 20]);
    }

    #[test]
    fn test_broadcast_visible_in_map() {
        let exec = executor(3);
        let allowed = exec.broadcast(&exec.parallelize(vec![2u32, 3]));
        let ds = exec.parallelize(vec![1u32, 2, 3, 4]);
        let kept = exec.filter(&ds, |x| allowed.contains(x));
        assert_eq!(sorted(kept.into_vec()), vec![2, 3]);
    }

    #[test]
    fn test_run_turns_task_panic_into_error() {
        let exec = executor(2);
        let result: Result<Vec<u32>> = exec.run(|exec| {
            let ds = exec.parallelize(vec![1u32, 2, 3]);
            let mapped = exec.map(&ds, |x| if *x == 2 { panic!("node lost") } else { *x });
            Ok(mapped.into_vec())
        });
        match result {
            Err(Error::ExecutionError(message)) => assert!(message.contains("node lost")),
            other => panic!("expected execution error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_partitions_rejected() {
        let err = LocalExecutor::new(ExecutorConfig::default().with_partitions(0));
        assert!(matches!(err, Err(Error::ConfigError(_))));
    }
}
