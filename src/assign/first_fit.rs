//! Greedy first-fit slot assigner.
//!
//! # Algorithm
//!
//! 1. Walk tasks in input order.
//! 2. Reject tasks with an unknown cluster or a malformed interval.
//! 3. Scan slots `0..capacity`; take the first whose accepted intervals do
//!    not overlap the task (`a.start < b.end && b.start < a.end`).
//! 4. If every slot conflicts, drop the task.
//!
//! # Complexity
//! O(T * C * A) where T=tasks, C=cluster capacity, A=intervals already on a slot.

use std::collections::HashMap;

use tracing::debug;

use super::outcome::{Assignment, DropReason, DroppedTask};
use crate::models::task::intervals_overlap;
use crate::models::{Cluster, ClusterId, SlotAssignedTask, Task};

/// Greedy first-fit assigner of task intervals to cluster slots.
///
/// # Example
///
/// ```
/// use u_timeline::assign::SlotAssigner;
/// use u_timeline::models::{clusters_from_capacities, Task};
///
/// let tasks = vec![
///     Task::new("A", 1, 0.0, 10.0),
///     Task::new("B", 1, 5.0, 15.0),
///     Task::new("C", 1, 6.0, 9.0),
/// ];
/// let clusters = clusters_from_capacities([(1, 2)]).unwrap();
///
/// let assignment = SlotAssigner::new().assign(&tasks, &clusters);
/// assert_eq!(assignment.placed_count(), 2);
/// assert_eq!(assignment.dropped_names(), vec!["C"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotAssigner;

impl SlotAssigner {
    /// Creates an assigner.
    pub fn new() -> Self {
        Self
    }

    /// Assigns every task to the lowest free slot of its cluster.
    ///
    /// Placed tasks keep their input order; dropped tasks are listed with
    /// their input position and reason.
    pub fn assign(&self, tasks: &[Task], clusters: &HashMap<ClusterId, Cluster>) -> Assignment {
        let mut assignment = Assignment::default();
        // (cluster, slot) -> accepted intervals
        let mut occupied: HashMap<(ClusterId, u32), Vec<(f64, f64)>> = HashMap::new();

        for (index, task) in tasks.iter().enumerate() {
            let Some(cluster) = clusters.get(&task.cluster) else {
                drop_task(&mut assignment, index, task, DropReason::UnknownCluster);
                continue;
            };

            if !task.is_well_formed() {
                drop_task(&mut assignment, index, task, DropReason::MalformedInterval);
                continue;
            }

            let free_slot = (0..cluster.capacity()).find(|&slot| {
                occupied
                    .get(&(task.cluster, slot))
                    .into_iter()
                    .flatten()
                    .all(|&(start, end)| !intervals_overlap(start, end, task.start, task.end))
            });

            match free_slot {
                Some(slot) => {
                    occupied
                        .entry((task.cluster, slot))
                        .or_default()
                        .push((task.start, task.end));
                    assignment
                        .placed
                        .push(SlotAssignedTask::new(task.clone(), slot));
                }
                None => drop_task(&mut assignment, index, task, DropReason::CapacityExhausted),
            }
        }

        assignment
    }
}

fn drop_task(assignment: &mut Assignment, index: usize, task: &Task, reason: DropReason) {
    debug!(
        task = %task.name,
        cluster = task.cluster,
        start = task.start,
        end = task.end,
        ?reason,
        "task left off the timeline"
    );
    assignment.dropped.push(DroppedTask {
        index,
        name: task.name.clone(),
        cluster: task.cluster,
        reason,
    });
}

/// Assigns slots and returns only the placed tasks.
///
/// Shorthand for `SlotAssigner::new().assign(tasks, clusters).placed`.
pub fn assign_slots(tasks: &[Task], clusters: &HashMap<ClusterId, Cluster>) -> Vec<SlotAssignedTask> {
    SlotAssigner::new().assign(tasks, clusters).placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clusters_from_capacities;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn slots_of(assignment: &Assignment) -> Vec<(&str, u32)> {
        assignment
            .placed
            .iter()
            .map(|a| (a.name(), a.slot()))
            .collect()
    }

    #[test]
    fn test_no_conflict_shares_slot() {
        let tasks = vec![Task::new("A", 1, 0.0, 5.0), Task::new("B", 1, 10.0, 15.0)];
        let clusters = clusters_from_capacities([(1, 1)]).unwrap();

        let a = SlotAssigner::new().assign(&tasks, &clusters);
        assert_eq!(slots_of(&a), vec![("A", 0), ("B", 0)]);
        assert!(a.dropped.is_empty());
    }

    #[test]
    fn test_overlap_forces_split() {
        let tasks = vec![Task::new("A", 1, 0.0, 10.0), Task::new("B", 1, 5.0, 15.0)];
        let clusters = clusters_from_capacities([(1, 2)]).unwrap();

        let a = SlotAssigner::new().assign(&tasks, &clusters);
        assert_eq!(slots_of(&a), vec![("A", 0), ("B", 1)]);
    }

    #[test]
    fn test_drop_on_exhaustion() {
        let tasks = vec![
            Task::new("A", 1, 0.0, 10.0),
            Task::new("B", 1, 5.0, 15.0),
            Task::new("C", 1, 6.0, 9.0),
        ];
        let clusters = clusters_from_capacities([(1, 2)]).unwrap();

        let a = SlotAssigner::new().assign(&tasks, &clusters);
        assert_eq!(slots_of(&a), vec![("A", 0), ("B", 1)]);
        assert_eq!(a.dropped.len(), 1);
        assert_eq!(a.dropped[0].name, "C");
        assert_eq!(a.dropped[0].index, 2);
        assert_eq!(a.dropped[0].reason, DropReason::CapacityExhausted);
    }

    #[test]
    fn test_clusters_are_independent() {
        let tasks = vec![
            Task::new("A", 1, 0.0, 10.0),
            Task::new("X", 2, 0.0, 10.0),
            Task::new("Y", 2, 0.0, 10.0),
            Task::new("B", 1, 0.0, 10.0),
        ];
        let clusters = clusters_from_capacities([(1, 2), (2, 2)]).unwrap();
        let mixed = SlotAssigner::new().assign(&tasks, &clusters);

        let only_c1: Vec<Task> = tasks.iter().filter(|t| t.cluster == 1).cloned().collect();
        let alone = SlotAssigner::new().assign(&only_c1, &clusters);

        let c1_mixed: Vec<_> = slots_of(&mixed)
            .into_iter()
            .filter(|(n, _)| *n == "A" || *n == "B")
            .collect();
        assert_eq!(c1_mixed, slots_of(&alone));
        assert_eq!(c1_mixed, vec![("A", 0), ("B", 1)]);
    }

    #[test]
    fn test_lowest_slot_reused_after_gap() {
        // Slot 0 frees up at t=10; C fits there even though slot 1 is also free.
        let tasks = vec![
            Task::new("A", 0, 0.0, 10.0),
            Task::new("B", 0, 0.0, 5.0),
            Task::new("C", 0, 10.0, 20.0),
        ];
        let clusters = clusters_from_capacities([(0, 3)]).unwrap();

        let a = SlotAssigner::new().assign(&tasks, &clusters);
        assert_eq!(slots_of(&a), vec![("A", 0), ("B", 1), ("C", 0)]);
    }

    #[test]
    fn test_unsorted_arrival_order() {
        // Late task first; the earlier one still fits in the gap before it.
        let tasks = vec![Task::new("late", 0, 10.0, 20.0), Task::new("early", 0, 0.0, 10.0)];
        let clusters = clusters_from_capacities([(0, 1)]).unwrap();

        let a = SlotAssigner::new().assign(&tasks, &clusters);
        assert_eq!(slots_of(&a), vec![("late", 0), ("early", 0)]);
    }

    #[test]
    fn test_zero_length_intervals() {
        let tasks = vec![
            Task::new("span", 0, 0.0, 10.0),
            Task::new("point_in", 0, 5.0, 5.0),
            Task::new("point_edge", 0, 10.0, 10.0),
        ];
        let clusters = clusters_from_capacities([(0, 2)]).unwrap();

        let a = SlotAssigner::new().assign(&tasks, &clusters);
        // A point strictly inside a span overlaps it; one on the end does not.
        assert_eq!(
            slots_of(&a),
            vec![("span", 0), ("point_in", 1), ("point_edge", 0)]
        );
    }

    #[test]
    fn test_unknown_cluster_dropped() {
        let tasks = vec![Task::new("A", 0, 0.0, 1.0), Task::new("B", 7, 0.0, 1.0)];
        let clusters = clusters_from_capacities([(0, 1)]).unwrap();

        let a = SlotAssigner::new().assign(&tasks, &clusters);
        assert_eq!(a.placed_count(), 1);
        assert_eq!(a.dropped[0].reason, DropReason::UnknownCluster);
        assert_eq!(a.dropped[0].cluster, 7);
    }

    #[test]
    fn test_malformed_interval_dropped() {
        let tasks = vec![
            Task::new("rev", 0, 5.0, 1.0),
            Task::new("nan", 0, f64::NAN, 1.0),
            Task::new("ok", 0, 0.0, 1.0),
        ];
        let clusters = clusters_from_capacities([(0, 1)]).unwrap();

        let a = SlotAssigner::new().assign(&tasks, &clusters);
        assert_eq!(slots_of(&a), vec![("ok", 0)]);
        assert!(a
            .dropped
            .iter()
            .all(|d| d.reason == DropReason::MalformedInterval));
        assert_eq!(a.dropped_count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let clusters = HashMap::new();
        let a = SlotAssigner::new().assign(&[], &clusters);
        assert_eq!(a.placed_count(), 0);
        assert_eq!(a.dropped_count(), 0);
    }

    #[test]
    fn test_assign_slots_returns_placed() {
        let tasks = vec![
            Task::new("A", 1, 0.0, 10.0),
            Task::new("B", 1, 5.0, 15.0),
            Task::new("C", 1, 6.0, 9.0),
        ];
        let clusters = clusters_from_capacities([(1, 2)]).unwrap();
        let placed = assign_slots(&tasks, &clusters);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[1].slot(), 1);
    }

    fn random_workload(seed: u64, n: usize) -> Vec<Task> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..n)
            .map(|i| {
                let cluster = rng.random_range(0..3);
                let start: f64 = rng.random_range(0.0..100.0);
                let len: f64 = rng.random_range(0.0..20.0);
                Task::new(format!("job{}_{i}", i % 5), cluster, start, start + len)
            })
            .collect()
    }

    #[test]
    fn test_invariants_on_random_workload() {
        let tasks = random_workload(42, 300);
        let clusters = clusters_from_capacities([(0, 4), (1, 8), (2, 2)]).unwrap();
        let a = SlotAssigner::new().assign(&tasks, &clusters);

        assert_eq!(a.placed_count() + a.dropped_count(), tasks.len());

        for p in &a.placed {
            assert!(p.slot() < clusters[&p.cluster()].capacity());
        }
        for (i, x) in a.placed.iter().enumerate() {
            for y in &a.placed[i + 1..] {
                if x.cluster() == y.cluster() && x.slot() == y.slot() {
                    assert!(
                        !x.task().overlaps(y.task()),
                        "{} and {} overlap on {}",
                        x.name(),
                        y.name(),
                        x.label()
                    );
                }
            }
        }
        // Every drop really had no free slot
        for d in &a.dropped {
            let t = &tasks[d.index];
            let cap = clusters[&t.cluster].capacity();
            for slot in 0..cap {
                assert!(a
                    .tasks_on_slot(t.cluster, slot)
                    .any(|p| p.task().overlaps(t)));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let tasks = random_workload(7, 200);
        let clusters = clusters_from_capacities([(0, 3), (1, 3), (2, 3)]).unwrap();
        let first = SlotAssigner::new().assign(&tasks, &clusters);
        let second = SlotAssigner::new().assign(&tasks, &clusters);
        assert_eq!(first, second);
    }
}
