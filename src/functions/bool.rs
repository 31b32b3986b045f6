//! Boolean combinators.

use crate::dataflow::{Data, Dataset, Executor};

/// Logical OR as reduce and cross function.
pub struct Or;

impl Or {
    pub fn reduce(first: bool, second: bool) -> bool {
        first || second
    }

    /// Union both datasets and fold them into at most one value.
    pub fn union<E: Executor>(exec: &E, a: &Dataset<bool>, b: &Dataset<bool>) -> Dataset<bool> {
        exec.reduce(&exec.union(a, b), Self::reduce)
    }

    pub fn cross<E: Executor>(exec: &E, a: &Dataset<bool>, b: &Dataset<bool>) -> Dataset<bool> {
        exec.cross(a, b, |x, y| Self::reduce(*x, *y))
    }
}

/// Logical AND as reduce and cross function.
pub struct And;

impl And {
    pub fn reduce(first: bool, second: bool) -> bool {
        first && second
    }

    pub fn union<E: Executor>(exec: &E, a: &Dataset<bool>, b: &Dataset<bool>) -> Dataset<bool> {
        exec.reduce(&exec.union(a, b), Self::reduce)
    }

    pub fn cross<E: Executor>(exec: &E, a: &Dataset<bool>, b: &Dataset<bool>) -> Dataset<bool> {
        exec.cross(a, b, |x, y| Self::reduce(*x, *y))
    }
}

/// Value equality as cross function.
pub struct Equals;

impl Equals {
    pub fn cross<E, T>(exec: &E, first: &Dataset<T>, second: &Dataset<T>) -> Dataset<bool>
    where
        E: Executor,
        T: Data + PartialEq,
    {
        exec.cross(first, second, |l, r| l == r)
    }
}
