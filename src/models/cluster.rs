//! Cluster capacity model.
//!
//! A cluster is a group of interchangeable slots (compute nodes). The
//! timeline only needs how many slots exist; the rest of the topology lives
//! in [`Platform`](super::Platform).

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Cluster identifier (index in the platform description).
pub type ClusterId = u32;

/// A cluster and its slot capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cluster {
    /// Cluster identifier.
    pub id: ClusterId,
    /// Number of slots; always > 0.
    capacity: u32,
}

impl Cluster {
    /// Creates a cluster with `capacity` slots.
    ///
    /// # Errors
    /// [`Error::ZeroCapacity`] if `capacity == 0`.
    pub fn new(id: ClusterId, capacity: u32) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity(id));
        }
        Ok(Self { id, capacity })
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Display label of one slot, `"Cluster {id}: Node {slot}"`.
    pub fn slot_label(&self, slot: u32) -> String {
        slot_label(self.id, slot)
    }
}

/// Builds the cluster map from `(id, capacity)` pairs.
///
/// Later pairs replace earlier ones with the same id.
pub fn clusters_from_capacities<I>(capacities: I) -> Result<HashMap<ClusterId, Cluster>>
where
    I: IntoIterator<Item = (ClusterId, u32)>,
{
    capacities
        .into_iter()
        .map(|(id, capacity)| Cluster::new(id, capacity).map(|c| (id, c)))
        .collect()
}

pub(crate) fn slot_label(cluster: ClusterId, slot: u32) -> String {
    format!("Cluster {cluster}: Node {slot}")
}
