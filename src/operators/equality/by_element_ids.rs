//! Collection equality by graph element ids.

use crate::collection::CollectionSource;
use crate::dataflow::{Dataset, Executor};
use crate::operators::{single_value, BinaryCollectionToValueOperator};
use crate::Result;

use super::base::equal_distinct_records;
use super::signature::{signature_counts, SignatureCount};

/// Two collections are equal iff they contain the same graphs the same
/// number of times, where a graph is identified by the ids of its vertices
/// and edges. Graph head ids and element data play no part.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualByGraphElementIds;

impl EqualByGraphElementIds {
    fn compare<E: Executor>(
        exec: &E,
        first: &Dataset<SignatureCount>,
        second: &Dataset<SignatureCount>,
    ) -> Dataset<bool> {
        equal_distinct_records(exec, first, second)
    }
}

fn dangling_signatures(first: &Dataset<SignatureCount>, second: &Dataset<SignatureCount>) -> usize {
    first.iter().chain(second.iter()).filter(|c| c.dangling).count()
}

impl BinaryCollectionToValueOperator<bool> for EqualByGraphElementIds {
    fn execute<E, A, B>(&self, exec: &E, first: &A, second: &B) -> Dataset<bool>
    where
        E: Executor,
        A: CollectionSource,
        B: CollectionSource,
    {
        Self::compare(exec, &signature_counts(exec, first), &signature_counts(exec, second))
    }

    fn name(&self) -> &'static str {
        "EqualByGraphElementIds"
    }

    /// Same verdict as the default; additionally warns once the signature
    /// counts show graph memberships without a graph head.
    fn evaluate<E, A, B>(&self, exec: &E, first: &A, second: &B) -> Result<bool>
    where
        E: Executor,
        A: CollectionSource,
        B: CollectionSource,
    {
        exec.run(|exec| {
            let first = signature_counts(exec, first);
            let second = signature_counts(exec, second);

            let dangling = dangling_signatures(&first, &second);
            if dangling > 0 {
                tracing::warn!(
                    dangling,
                    "graph memberships without graph head; affected graphs only match identical dangling graphs"
                );
            }

            let verdict = single_value(Self::compare(exec, &first, &second))?;
            tracing::debug!(operator = self.name(), "evaluated");
            Ok(verdict)
        })
    }
}
