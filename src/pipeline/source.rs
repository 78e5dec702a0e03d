//! Upstream task interval sources.

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{Platform, SimulationResult};

/// The upstream simulator: given a workflow and a platform, returns the
/// computed task intervals.
///
/// Implementations may block or talk to the network; the pipeline only sees
/// the finished [`SimulationResult`].
pub trait TaskSource: Send + Sync + Debug {
    /// Source name for logs.
    fn name(&self) -> &'static str;

    /// Runs the simulation.
    ///
    /// # Errors
    /// [`Error::Source`](crate::Error::Source) or
    /// [`Error::Json`](crate::Error::Json) when the simulator cannot answer.
    fn simulate(&self, workflow_id: &str, platform: &Platform) -> Result<SimulationResult>;
}

/// Replays a stored simulation result regardless of the platform.
#[derive(Debug, Clone, Default)]
pub struct RecordedSource {
    result: SimulationResult,
}

impl RecordedSource {
    pub fn new(result: SimulationResult) -> Self {
        Self { result }
    }

    /// Loads a `{"Runtime": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(SimulationResult::from_json(json)?))
    }
}

impl TaskSource for RecordedSource {
    fn name(&self) -> &'static str {
        "recorded"
    }

    fn simulate(&self, _workflow_id: &str, _platform: &Platform) -> Result<SimulationResult> {
        Ok(self.result.clone())
    }
}
