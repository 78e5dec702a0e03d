//! Slot assignment outcome.
//!
//! Holds the placed tasks plus a record of every task left off the
//! timeline, so callers can show how much a run under-reports.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{ClusterId, SlotAssignedTask};

/// Result of one slot assignment pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Assignment {
    /// Placed tasks, in input order.
    pub placed: Vec<SlotAssignedTask>,
    /// Tasks that could not be placed, in input order.
    pub dropped: Vec<DroppedTask>,
}

/// A task left off the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedTask {
    /// Position in the input sequence.
    pub index: usize,
    /// Task name.
    pub name: String,
    /// Requested cluster.
    pub cluster: ClusterId,
    /// Why it was dropped.
    pub reason: DropReason,
}

/// Why a task was not placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropReason {
    /// The task's cluster is not in the cluster map.
    UnknownCluster,
    /// Every slot of the cluster overlaps the task.
    CapacityExhausted,
    /// `start > end` or a non-finite time.
    MalformedInterval,
}

impl Assignment {
    /// Number of placed tasks.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Number of dropped tasks.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Names of dropped tasks, in input order.
    pub fn dropped_names(&self) -> Vec<&str> {
        self.dropped.iter().map(|d| d.name.as_str()).collect()
    }

    /// Dropped task count per reason.
    pub fn drop_counts(&self) -> HashMap<DropReason, usize> {
        let mut counts = HashMap::new();
        for d in &self.dropped {
            *counts.entry(d.reason).or_insert(0) += 1;
        }
        counts
    }

    /// Tasks placed on one `(cluster, slot)`.
    pub fn tasks_on_slot(
        &self,
        cluster: ClusterId,
        slot: u32,
    ) -> impl Iterator<Item = &SlotAssignedTask> {
        self.placed
            .iter()
            .filter(move |a| a.cluster() == cluster && a.slot() == slot)
    }

    /// Number of distinct slots used in a cluster.
    pub fn slots_used(&self, cluster: ClusterId) -> usize {
        self.placed
            .iter()
            .filter(|a| a.cluster() == cluster)
            .map(|a| a.slot())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Latest completion time among placed tasks, 0.0 if none.
    pub fn makespan(&self) -> f64 {
        self.placed.iter().map(|a| a.end()).fold(0.0, f64::max)
    }

    /// Busy time of one slot divided by the makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn slot_utilization(&self, cluster: ClusterId, slot: u32) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0.0 {
            return None;
        }
        let busy: f64 = self
            .tasks_on_slot(cluster, slot)
            .map(|a| a.task().duration())
            .sum();
        Some(busy / horizon)
    }
}
