//! Pipeline composition.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::TaskSource;
use crate::assign::{DroppedTask, SlotAssigner};
use crate::color::ColorMap;
use crate::error::Result;
use crate::models::{Cluster, ClusterId, Platform, Series, Task};
use crate::series::build_series;

/// Everything a timeline renderer needs from one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineOutput {
    /// Family colors.
    pub color_map: ColorMap,
    /// Range bars, one per placed task.
    pub series: Series,
    /// Tasks left off the timeline.
    pub dropped: Vec<DroppedTask>,
}

impl PipelineOutput {
    /// Whether every input task made it onto the timeline.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Slot assignment followed by series construction.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    assigner: SlotAssigner,
}

impl Pipeline {
    /// Creates a pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the pipeline over tasks already produced upstream.
    pub fn run<R: Rng + ?Sized>(
        &self,
        tasks: &[Task],
        clusters: &HashMap<ClusterId, Cluster>,
        rng: &mut R,
    ) -> PipelineOutput {
        let assignment = self.assigner.assign(tasks, clusters);
        let (color_map, series) = build_series(&assignment.placed, rng);

        info!(
            tasks = tasks.len(),
            placed = assignment.placed_count(),
            families = color_map.len(),
            rows = series.labels().len(),
            "timeline built"
        );
        if !assignment.dropped.is_empty() {
            warn!(
                dropped = assignment.dropped_count(),
                "some tasks did not fit their cluster and are not shown"
            );
        }

        PipelineOutput {
            color_map,
            series,
            dropped: assignment.dropped,
        }
    }

    /// Simulates `workflow_id` on `platform` through `source`, then runs
    /// the pipeline on the returned intervals.
    ///
    /// # Errors
    /// Propagates source failures and
    /// [`Error::ZeroCapacity`](crate::Error::ZeroCapacity) from the platform.
    pub fn run_with_source<S, R>(
        &self,
        source: &S,
        workflow_id: &str,
        platform: &Platform,
        rng: &mut R,
    ) -> Result<PipelineOutput>
    where
        S: TaskSource + ?Sized,
        R: Rng + ?Sized,
    {
        let clusters = platform.capacities()?;
        let result = source.simulate(workflow_id, platform)?;
        info!(
            source = source.name(),
            workflow = workflow_id,
            tasks = result.runtime.len(),
            "simulation finished"
        );
        Ok(self.run(&result.runtime, &clusters, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::DropReason;
    use crate::models::{clusters_from_capacities, ClusterSpec, SimulationResult};
    use crate::pipeline::RecordedSource;
    use crate::Error;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_run_scenario_c() {
        let tasks = vec![
            Task::new("A", 1, 0.0, 10.0),
            Task::new("B", 1, 5.0, 15.0),
            Task::new("C", 1, 6.0, 9.0),
        ];
        let clusters = clusters_from_capacities([(1, 2)]).unwrap();
        let out = Pipeline::new().run(&tasks, &clusters, &mut SmallRng::seed_from_u64(5));

        let labels: Vec<_> = out.series.data.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Cluster 1: Node 0", "Cluster 1: Node 1"]);
        assert_eq!(out.dropped.len(), 1);
        assert_eq!(out.dropped[0].reason, DropReason::CapacityExhausted);
        assert!(!out.is_complete());
        // Dropped task's family gets no color
        assert_eq!(out.color_map.len(), 2);
        assert!(out.color_map.get("C").is_none());
    }

    #[test]
    fn test_run_with_source() {
        let platform = Platform::empty(100, 100)
            .with_cluster(ClusterSpec::with_nodes(1))
            .with_cluster(ClusterSpec::with_nodes(2));
        let source = RecordedSource::new(SimulationResult {
            runtime: vec![
                Task::new("stage_in_1", 0, 0.0, 1.0),
                Task::new("work_1", 1, 1.0, 5.0),
                Task::new("work_2", 1, 1.0, 5.0),
                Task::new("stage_out_1", 0, 5.0, 6.0),
            ],
        });

        let out = Pipeline::new()
            .run_with_source(&source, "wf-1", &platform, &mut SmallRng::seed_from_u64(3))
            .unwrap();
        assert!(out.is_complete());
        assert_eq!(
            out.series.labels(),
            vec!["Cluster 0: Node 0", "Cluster 1: Node 0", "Cluster 1: Node 1"]
        );
        assert_eq!(out.color_map.len(), 3);
    }

    #[test]
    fn test_run_with_source_zero_capacity() {
        let platform = Platform::empty(100, 100).with_cluster(ClusterSpec::with_nodes(0));
        let source = RecordedSource::default();
        let err = Pipeline::new()
            .run_with_source(&source, "wf", &platform, &mut SmallRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, Error::ZeroCapacity(0)));
    }

    #[test]
    fn test_output_json() {
        let tasks = vec![Task::new("a_1", 0, 0.0, 1.0)];
        let clusters = clusters_from_capacities([(0, 1)]).unwrap();
        let out = Pipeline::new().run(&tasks, &clusters, &mut SmallRng::seed_from_u64(0));

        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["series"]["data"][0]["x"], "Cluster 0: Node 0");
        assert!(v["color_map"]["a"].is_string());
        assert_eq!(v["dropped"].as_array().unwrap().len(), 0);
    }
}
