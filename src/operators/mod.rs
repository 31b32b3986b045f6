//! Operators over graph collections.
//!
//! An operator only *describes* a dataflow: `execute` composes executor
//! calls and returns the resulting dataset. `evaluate` runs that dataflow as
//! one job and extracts the single scalar result.

pub mod equality;

use crate::collection::CollectionSource;
use crate::dataflow::{Data, Dataset, Executor};
use crate::{Error, Result};

/// An operator mapping two graph collections to one value.
pub trait BinaryCollectionToValueOperator<T: Data> {
    /// Build the dataflow. The returned dataset holds exactly one value.
    fn execute<E, A, B>(&self, exec: &E, first: &A, second: &B) -> Dataset<T>
    where
        E: Executor,
        A: CollectionSource,
        B: CollectionSource;

    fn name(&self) -> &'static str;

    /// Run the dataflow as one job and return its value.
    fn evaluate<E, A, B>(&self, exec: &E, first: &A, second: &B) -> Result<T>
    where
        E: Executor,
        A: CollectionSource,
        B: CollectionSource,
    {
        exec.run(|exec| {
            let value = single_value(self.execute(exec, first, second))?;
            tracing::debug!(operator = self.name(), "evaluated");
            Ok(value)
        })
    }
}

/// Extract the only element of a dataset.
pub(crate) fn single_value<T>(result: Dataset<T>) -> Result<T> {
    let mut values = result.into_vec();
    match values.len() {
        1 => values.pop().ok_or_else(|| Error::ExecutionError("result vanished".into())),
        n => Err(Error::ExecutionError(format!("expected exactly one result value, got {n}"))),
    }
}
