//! Graph element identifier.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, globally unique identifier of a vertex, edge or graph head.
///
/// The total order exists for canonicalization only (sorting id sets);
/// it carries no business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradoopId(Uuid);

impl GradoopId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build an identifier from its raw 128-bit value.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    pub const fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }

    /// Big-endian byte form, stable across platforms.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for GradoopId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GradoopId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for GradoopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
