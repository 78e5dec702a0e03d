//! Task interval model.
//!
//! A task is one completed execution interval produced by the upstream
//! simulation: a name, the cluster it ran on, and its start and
//! completion times.
//!
//! # Time Representation
//! Times are seconds (`f64`) relative to the simulation start. Intervals are
//! half-open, `[start, end)`, for overlap purposes.

use serde::{Deserialize, Serialize};

use super::ClusterId;
use crate::color;
use crate::error::{Error, Result};

/// A task execution interval.
///
/// Field names on the wire follow the upstream simulator output
/// (`task_name`, `cluster_index`, `scheduled_time`, `completion_time`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task name, e.g. `"split_fasta_00000001"`.
    #[serde(rename = "task_name")]
    pub name: String,
    /// Cluster the task ran on.
    #[serde(rename = "cluster_index")]
    pub cluster: ClusterId,
    /// Scheduled start time (s).
    #[serde(rename = "scheduled_time")]
    pub start: f64,
    /// Completion time (s).
    #[serde(rename = "completion_time")]
    pub end: f64,
}

impl Task {
    /// Creates a task without checking its interval.
    pub fn new(name: impl Into<String>, cluster: ClusterId, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            cluster,
            start,
            end,
        }
    }

    /// Creates a task, rejecting non-finite times and `start > end`.
    pub fn try_new(name: impl Into<String>, cluster: ClusterId, start: f64, end: f64) -> Result<Self> {
        let task = Self::new(name, cluster, start, end);
        if task.is_well_formed() {
            Ok(task)
        } else {
            Err(Error::InvalidInterval {
                name: task.name,
                start,
                end,
            })
        }
    }

    /// Whether both times are finite and `start <= end`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start <= self.end
    }

    /// Interval length (s).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether two half-open intervals overlap.
    ///
    /// Cluster membership is not considered.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        intervals_overlap(self.start, self.end, other.start, other.end)
    }

    /// Color grouping key (name without its last `_` segment).
    pub fn family_key(&self) -> &str {
        color::family_key(&self.name)
    }
}

/// `[a_start, a_end)` and `[b_start, b_end)` overlap.
#[inline]
pub(crate) fn intervals_overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start < b_end && b_start < a_end
}
