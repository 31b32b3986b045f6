//! Reusable pure functions for dataflow operators.
//!
//! Everything here is side-effect free and safe to call in any order and
//! grouping, so it can serve as a map, cross or reduce function on any
//! executor.

pub mod bool;
pub mod counting;

pub use self::bool::{And, Equals, Or};
pub use counting::{count, sum};
