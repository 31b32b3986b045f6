//! Shared count-join check.
//!
//! Given two datasets of *distinct* records, the sides are equal as sets iff
//! `|first| == |first ⋈ second| == |second|`, joining on the whole record.
//! Multiplicities live inside the records, which turns this set check into
//! a bag check on the original collections.

use crate::dataflow::{Dataset, Executor, Key};
use crate::functions::{count, And, Equals};

/// `true` iff both single-value count datasets hold the same count.
pub fn check_count_equals_count<E: Executor>(
    exec: &E,
    first: &Dataset<u64>,
    second: &Dataset<u64>,
) -> Dataset<bool> {
    Equals::cross(exec, first, second)
}

/// Compare two datasets of distinct records; yields one boolean.
pub fn equal_distinct_records<E, T>(exec: &E, first: &Dataset<T>, second: &Dataset<T>) -> Dataset<bool>
where
    E: Executor,
    T: Key,
{
    let first_count = count(exec, first);
    let second_count = count(exec, second);
    let matched = count(exec, &exec.join(first, second, T::clone, T::clone, |_, _| ()));

    tracing::debug!(
        first = ?first_count.to_vec(),
        second = ?second_count.to_vec(),
        matched = ?matched.to_vec(),
        "record counts"
    );

    And::cross(
        exec,
        &check_count_equals_count(exec, &first_count, &matched),
        &check_count_equals_count(exec, &second_count, &matched),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataflow::{ExecutorConfig, LocalExecutor};

    fn exec() -> LocalExecutor {
        LocalExecutor::new(ExecutorConfig::default().with_partitions(4)).unwrap()
    }

    #[test]
    fn test_same_records_any_order() {
        let exec = exec();
        let a = exec.parallelize(vec![("x", 1u64), ("y", 2)]);
        let b = exec.parallelize(vec![("y", 2u64), ("x", 1)]);
        assert_eq!(equal_distinct_records(&exec, &a, &b).into_vec(), vec![true]);
    }

    #[test]
    fn test_subset_is_not_equal_either_way() {
        let exec = exec();
        let a = exec.parallelize(vec![("x", 1u64)]);
        let b = exec.parallelize(vec![("x", 1u64), ("y", 1)]);
        assert_eq!(equal_distinct_records(&exec, &a, &b).into_vec(), vec![false]);
        assert_eq!(equal_distinct_records(&exec, &b, &a).into_vec(), vec![false]);
    }

    #[test]
    fn test_multiplicity_mismatch() {
        let exec = exec();
        let a = exec.parallelize(vec![("x", 1u64)]);
        let b = exec.parallelize(vec![("x", 2u64)]);
        assert_eq!(equal_distinct_records(&exec, &a, &b).into_vec(), vec![false]);
    }

    #[test]
    fn test_both_empty() {
        let exec = exec();
        let a: Dataset<(&str, u64)> = exec.parallelize(Vec::new());
        assert_eq!(equal_distinct_records(&exec, &a, &a).into_vec(), vec![true]);
    }
}
