//! GradoopIdSet — canonical set of graph element identifiers.
//!
//! Members are kept sorted and de-duplicated, so two sets built from the
//! same ids in any order compare, hash and serialize identically. This is
//! what lets an id set act as a join or grouping key.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::GradoopId;

/// Immutable, order-irrelevant set of unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<GradoopId>", into = "Vec<GradoopId>")]
pub struct GradoopIdSet {
    ids: SmallVec<[GradoopId; 4]>,
}

impl GradoopIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(id: GradoopId) -> Self {
        let mut ids = SmallVec::new();
        ids.push(id);
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &GradoopId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Members in canonical (ascending) order.
    pub fn iter(&self) -> std::slice::Iter<'_, GradoopId> {
        self.ids.iter()
    }

    pub fn as_slice(&self) -> &[GradoopId] {
        &self.ids
    }

    /// Set union; the result is canonical.
    pub fn union(&self, other: &GradoopIdSet) -> GradoopIdSet {
        let mut ids = SmallVec::with_capacity(self.len() + other.len());
        let (mut a, mut b) = (self.ids.iter().peekable(), other.ids.iter().peekable());
        loop {
            let next = match (a.peek(), b.peek()) {
                (Some(x), Some(y)) if x < y => a.next(),
                (Some(x), Some(y)) if x > y => b.next(),
                (Some(_), Some(_)) => {
                    b.next();
                    a.next()
                }
                (Some(_), None) => a.next(),
                (None, Some(_)) => b.next(),
                (None, None) => break,
            };
            if let Some(id) = next {
                ids.push(*id);
            }
        }
        Self { ids }
    }

    /// Deterministic byte encoding: member count (u64, big-endian) followed
    /// by each member's 16 bytes in canonical order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.len() * 16);
        out.extend_from_slice(&(self.len() as u64).to_be_bytes());
        for id in &self.ids {
            out.extend_from_slice(id.as_bytes());
        }
        out
    }

    // Membership mutation is reserved for graph elements, which own their set.

    pub(crate) fn insert(&mut self, id: GradoopId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.ids.insert(pos, id);
                true
            }
        }
    }

    pub(crate) fn remove(&mut self, id: &GradoopId) -> bool {
        match self.ids.binary_search(id) {
            Ok(pos) => {
                self.ids.remove(pos);
                true
            }
            Err(_) => false,
        }
    }
}

impl FromIterator<GradoopId> for GradoopIdSet {
    fn from_iter<I: IntoIterator<Item = GradoopId>>(iter: I) -> Self {
        let mut ids: SmallVec<[GradoopId; 4]> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }
}

impl From<Vec<GradoopId>> for GradoopIdSet {
    fn from(ids: Vec<GradoopId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<GradoopIdSet> for Vec<GradoopId> {
    fn from(set: GradoopIdSet) -> Self {
        set.ids.into_vec()
    }
}

impl<'a> IntoIterator for &'a GradoopIdSet {
    type Item = &'a GradoopId;
    type IntoIter = std::slice::Iter<'a, GradoopId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl fmt::Display for GradoopIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 { write!(f, ",")?; }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}
