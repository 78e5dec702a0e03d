//! Timeline series construction.
//!
//! Turns slot-assigned tasks into a [`ColorMap`] and a renderer-agnostic
//! [`Series`] of range bars, one per task, rows labelled
//! `"Cluster {cluster}: Node {slot}"`.
//!
//! Colors stay outside the series. A renderer colors a bar with
//! `color_map.color_for(&entry.name)`, which re-derives the task family
//! from the name.

use rand::Rng;

use crate::color::ColorMap;
use crate::models::{Series, SeriesEntry, SlotAssignedTask};

/// Builds the color map and timeline series for assigned tasks.
///
/// The series is a pure function of `assigned`; only the color values
/// depend on `rng`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timeline::assign::assign_slots;
/// use u_timeline::models::{clusters_from_capacities, Task};
/// use u_timeline::series::build_series;
///
/// let tasks = vec![Task::new("align_1", 0, 0.0, 3.0), Task::new("align_2", 0, 1.0, 2.0)];
/// let clusters = clusters_from_capacities([(0, 2)]).unwrap();
/// let placed = assign_slots(&tasks, &clusters);
///
/// let (colors, series) = build_series(&placed, &mut SmallRng::seed_from_u64(1));
/// assert_eq!(colors.len(), 1);
/// assert_eq!(series.labels(), vec!["Cluster 0: Node 0", "Cluster 0: Node 1"]);
/// ```
pub fn build_series<R: Rng + ?Sized>(
    assigned: &[SlotAssignedTask],
    rng: &mut R,
) -> (ColorMap, Series) {
    let colors = ColorMap::generate(assigned.iter().map(SlotAssignedTask::name), rng);
    (colors, transform_to_series(assigned))
}

/// Maps assigned tasks to series entries, keeping input order.
pub fn transform_to_series(assigned: &[SlotAssignedTask]) -> Series {
    let data = assigned
        .iter()
        .map(|a| SeriesEntry {
            label: a.label(),
            interval: [a.start(), a.end()],
            completion: a.end(),
            name: a.name().to_string(),
        })
        .collect();
    Series { data }
}
