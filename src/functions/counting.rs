//! Counting by associative summation.

use crate::dataflow::{Dataset, Executor};

/// Number of elements, as a dataset holding exactly one value.
///
/// An empty input counts as `0`, so downstream crosses always see one
/// value on each side.
pub fn count<E: Executor, T: crate::dataflow::Data>(exec: &E, input: &Dataset<T>) -> Dataset<u64> {
    sum(exec, &exec.map(input, |_| 1u64))
}

/// Sum of all values, as a dataset holding exactly one value.
pub fn sum<E: Executor>(exec: &E, input: &Dataset<u64>) -> Dataset<u64> {
    let zero = exec.parallelize(vec![0u64]);
    exec.reduce(&exec.union(input, &zero), |a, b| a + b)
}
