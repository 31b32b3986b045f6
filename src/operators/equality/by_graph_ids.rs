//! Collection equality by graph head ids.

use crate::collection::CollectionSource;
use crate::dataflow::{Dataset, Executor};
use crate::operators::BinaryCollectionToValueOperator;

use super::base::equal_distinct_records;

/// Two collections are equal iff they contain the same graph head ids the
/// same number of times. Graph content is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualByGraphIds;

impl BinaryCollectionToValueOperator<bool> for EqualByGraphIds {
    fn execute<E, A, B>(&self, exec: &E, first: &A, second: &B) -> Dataset<bool>
    where
        E: Executor,
        A: CollectionSource,
        B: CollectionSource,
    {
        let first = exec.aggregate_by_key(&first.graph_head_ids(exec), |g| *g, |_| 1u64, |a, b| a + b);
        let second = exec.aggregate_by_key(&second.graph_head_ids(exec), |g| *g, |_| 1u64, |a, b| a + b);
        equal_distinct_records(exec, &first, &second)
    }

    fn name(&self) -> &'static str {
        "EqualByGraphIds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::GraphCollection;
    use crate::dataflow::LocalExecutor;
    use crate::model::*;

    fn heads(ids: &[u128]) -> GraphCollection {
        ids.iter().fold(GraphCollection::new(), |c, n| {
            c.with_graph_head(GraphHead::new(GradoopId::from_u128(*n)))
        })
    }

    #[test]
    fn test_same_ids_any_order() {
        let exec = LocalExecutor::with_defaults().unwrap();
        assert!(EqualByGraphIds.evaluate(&exec, &heads(&[1, 2, 3]), &heads(&[3, 1, 2])).unwrap());
    }

    #[test]
    fn test_content_is_ignored() {
        let exec = LocalExecutor::with_defaults().unwrap();
        let a = heads(&[1]);
        let b = heads(&[1]).with_vertex(Vertex::new(GradoopId::from_u128(10)).in_graphs([GradoopId::from_u128(1)]));
        assert!(EqualByGraphIds.evaluate(&exec, &a, &b).unwrap());
    }

    #[test]
    fn test_repeated_ids_count() {
        let exec = LocalExecutor::with_defaults().unwrap();
        assert!(!EqualByGraphIds.evaluate(&exec, &heads(&[1, 1]), &heads(&[1])).unwrap());
        assert!(!EqualByGraphIds.evaluate(&exec, &heads(&[1, 2]), &heads(&[1])).unwrap());
    }
}
