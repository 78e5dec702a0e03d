//! Slot-assigned task model.

use serde::Serialize;

use super::cluster::slot_label;
use super::{ClusterId, Task};

/// A task placed on one slot of its cluster.
///
/// Produced only by the slot assigner, which guarantees
/// `slot < capacity(cluster)` and that no two tasks on the same
/// `(cluster, slot)` overlap. Values cannot be built or deserialized
/// outside the crate:
///
/// ```compile_fail
/// use u_timeline::models::{SlotAssignedTask, Task};
///
/// let forged = SlotAssignedTask { task: Task::new("x_1", 0, 0.0, 1.0), slot: 999 };
/// ```
///
/// ```compile_fail
/// use u_timeline::models::SlotAssignedTask;
///
/// let json = r#"{"task_name":"x","cluster_index":0,"scheduled_time":5,"completion_time":1,"compute_node":7}"#;
/// let forged: SlotAssignedTask = serde_json::from_str(json).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotAssignedTask {
    #[serde(flatten)]
    task: Task,
    #[serde(rename = "compute_node")]
    slot: u32,
}

impl SlotAssignedTask {
    pub(crate) fn new(task: Task, slot: u32) -> Self {
        Self { task, slot }
    }

    /// The placed interval.
    #[inline]
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Slot (compute node) index within the cluster.
    #[inline]
    pub fn slot(&self) -> u32 {
        self.slot
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.task.name
    }

    #[inline]
    pub fn cluster(&self) -> ClusterId {
        self.task.cluster
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.task.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.task.end
    }

    /// Timeline row label, `"Cluster {cluster}: Node {slot}"`.
    pub fn label(&self) -> String {
        slot_label(self.task.cluster, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_label() {
        let a = SlotAssignedTask::new(Task::new("x_1", 2, 1.0, 3.0), 5);
        assert_eq!(a.name(), "x_1");
        assert_eq!(a.cluster(), 2);
        assert_eq!(a.start(), 1.0);
        assert_eq!(a.end(), 3.0);
        assert_eq!(a.slot(), 5);
        assert_eq!(a.task(), &Task::new("x_1", 2, 1.0, 3.0));
        assert_eq!(a.label(), "Cluster 2: Node 5");
    }

    #[test]
    fn test_flattened_json() {
        let a = SlotAssignedTask::new(Task::new("x_1", 0, 1.0, 3.0), 1);
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["task_name"], "x_1");
        assert_eq!(v["compute_node"], 1);
    }
}
