//! Independent experiments over one workflow.
//!
//! A session holds an ordered list of experiments, each with its own
//! platform and last pipeline output. Experiments never share state: running
//! or editing one leaves the others untouched, and removing one does not
//! renumber or refocus the rest.

use rand::Rng;
use tracing::info;

use super::{Pipeline, PipelineOutput, TaskSource};
use crate::error::{Error, Result};
use crate::models::Platform;

/// Title given to new experiments.
pub const DEFAULT_TITLE: &str = "New Experiment";

/// One platform configuration and its latest timeline.
#[derive(Debug, Clone)]
pub struct Experiment {
    /// Session-unique id, never reused.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Platform handed to the simulator.
    pub platform: Platform,
    /// Output of the last successful run.
    pub output: Option<PipelineOutput>,
}

impl Experiment {
    fn new(id: String) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            platform: Platform::default(),
            output: None,
        }
    }
}

/// Ordered set of experiments for one workflow.
#[derive(Debug, Clone)]
pub struct Session {
    workflow_id: String,
    experiments: Vec<Experiment>,
    next_id: u64,
    pipeline: Pipeline,
}

impl Session {
    /// Creates a session with one default experiment (id `"1"`).
    pub fn new(workflow_id: impl Into<String>) -> Self {
        let mut session = Self {
            workflow_id: workflow_id.into(),
            experiments: Vec::new(),
            next_id: 1,
            pipeline: Pipeline::new(),
        };
        session.add_experiment();
        session
    }

    /// Workflow all experiments simulate.
    pub fn workflow_id(&self) -> &str {
        &self.workflow_id
    }

    /// Appends a default experiment and returns its id.
    pub fn add_experiment(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.experiments.push(Experiment::new(id.clone()));
        info!(experiment = %id, "experiment added");
        id
    }

    /// Removes an experiment.
    ///
    /// # Errors
    /// [`Error::UnknownExperiment`] if `id` does not exist.
    pub fn remove_experiment(&mut self, id: &str) -> Result<Experiment> {
        let pos = self
            .experiments
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::UnknownExperiment(id.to_string()))?;
        info!(experiment = id, "experiment removed");
        Ok(self.experiments.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Experiment> {
        self.experiments.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Experiment> {
        self.experiments.iter_mut().find(|e| e.id == id)
    }

    /// Experiments in creation order.
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Renames an experiment.
    pub fn rename(&mut self, id: &str, title: impl Into<String>) -> Result<()> {
        let exp = self
            .get_mut(id)
            .ok_or_else(|| Error::UnknownExperiment(id.to_string()))?;
        exp.title = title.into();
        Ok(())
    }

    /// Simulates one experiment's platform and stores the timeline.
    ///
    /// On error the previous output is kept.
    pub fn run<S, R>(&mut self, id: &str, source: &S, rng: &mut R) -> Result<&PipelineOutput>
    where
        S: TaskSource + ?Sized,
        R: Rng + ?Sized,
    {
        let pos = self
            .experiments
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::UnknownExperiment(id.to_string()))?;

        let output = self.pipeline.run_with_source(
            source,
            &self.workflow_id,
            &self.experiments[pos].platform,
            rng,
        )?;
        Ok(self.experiments[pos].output.insert(output))
    }
}
