//! Platform topology and simulator envelopes.
//!
//! The upstream simulator takes a [`Platform`] (disk bandwidth on the
//! controller host plus one [`ClusterSpec`] per cluster) and answers with a
//! [`SimulationResult`] holding the raw task intervals. Only
//! `compute_nodes` matters to the timeline; the remaining fields are carried
//! through untouched.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "readBandwidth": 100,
//!   "writeBandwidth": 100,
//!   "clusters": {
//!     "0": { "bw": 400, "latency": 10, "computeNodes": 16, "cores": 1, "speed": 1 }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{Cluster, ClusterId, Task};
use crate::error::Result;

/// Hardware description of one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Link bandwidth (kBps).
    pub bw: u32,
    /// Link latency (ms).
    pub latency: u32,
    /// Number of compute nodes (slots on the timeline).
    pub compute_nodes: u32,
    /// Cores per compute node.
    pub cores: u32,
    /// Core speed (Gflop/s).
    pub speed: u32,
}

impl ClusterSpec {
    /// Creates a spec with the given node count and default link/core values.
    pub fn with_nodes(compute_nodes: u32) -> Self {
        Self {
            compute_nodes,
            ..Self::default()
        }
    }

    /// Sets the link bandwidth.
    pub fn with_bandwidth(mut self, bw: u32) -> Self {
        self.bw = bw;
        self
    }

    /// Sets the link latency.
    pub fn with_latency(mut self, latency: u32) -> Self {
        self.latency = latency;
        self
    }

    /// Sets cores per node.
    pub fn with_cores(mut self, cores: u32) -> Self {
        self.cores = cores;
        self
    }

    /// Sets the core speed.
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }
}

impl Default for ClusterSpec {
    fn default() -> Self {
        Self {
            bw: 100,
            latency: 10,
            compute_nodes: 32,
            cores: 1,
            speed: 1,
        }
    }
}

/// Compute platform handed to the upstream simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    /// Read bandwidth of the controller host disk (MBps).
    pub read_bandwidth: u32,
    /// Write bandwidth of the controller host disk (MBps).
    pub write_bandwidth: u32,
    /// Clusters keyed by index.
    pub clusters: BTreeMap<ClusterId, ClusterSpec>,
}

impl Platform {
    /// Creates a platform with no clusters.
    pub fn empty(read_bandwidth: u32, write_bandwidth: u32) -> Self {
        Self {
            read_bandwidth,
            write_bandwidth,
            clusters: BTreeMap::new(),
        }
    }

    /// Appends a cluster at the next free index.
    ///
    /// The cluster is not added if the last index is already `ClusterId::MAX`.
    pub fn with_cluster(mut self, spec: ClusterSpec) -> Self {
        self.push_cluster(spec);
        self
    }

    /// Appends a default cluster and returns its id.
    pub fn add_cluster(&mut self) -> Option<ClusterId> {
        self.push_cluster(ClusterSpec::default())
    }

    /// Appends `spec` after the highest index and returns its id.
    ///
    /// Returns `None`, leaving the platform unchanged, if the highest index
    /// is `ClusterId::MAX`.
    pub fn push_cluster(&mut self, spec: ClusterSpec) -> Option<ClusterId> {
        let id = match self.clusters.keys().next_back() {
            Some(last) => last.checked_add(1)?,
            None => 0,
        };
        self.clusters.insert(id, spec);
        Some(id)
    }

    /// Removes a cluster and re-keys the rest densely from 0, keeping order.
    ///
    /// Returns the removed spec, or `None` if `id` is unknown.
    pub fn remove_cluster(&mut self, id: ClusterId) -> Option<ClusterSpec> {
        let removed = self.clusters.remove(&id)?;
        let rest = std::mem::take(&mut self.clusters);
        self.clusters = rest.into_values().zip(0..).map(|(spec, i)| (i, spec)).collect();
        Some(removed)
    }

    /// Mutable access to one cluster.
    pub fn cluster_mut(&mut self, id: ClusterId) -> Option<&mut ClusterSpec> {
        self.clusters.get_mut(&id)
    }

    /// Projects the topology onto slot capacities.
    ///
    /// # Errors
    /// [`Error::ZeroCapacity`](crate::Error::ZeroCapacity) for a cluster with no nodes.
    pub fn capacities(&self) -> Result<HashMap<ClusterId, Cluster>> {
        self.clusters
            .iter()
            .map(|(&id, spec)| Cluster::new(id, spec.compute_nodes).map(|c| (id, c)))
            .collect()
    }

    /// Total compute nodes across clusters.
    pub fn total_nodes(&self) -> u64 {
        self.clusters.values().map(|c| u64::from(c.compute_nodes)).sum()
    }

    /// Parses a platform document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to a platform document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::empty(100, 100)
            .with_cluster(ClusterSpec::with_nodes(16).with_bandwidth(400))
            .with_cluster(ClusterSpec::with_nodes(64).with_speed(2))
            .with_cluster(ClusterSpec::with_nodes(32).with_bandwidth(300).with_speed(3))
    }
}

/// Upstream simulator response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Raw task intervals in emission order.
    #[serde(rename = "Runtime")]
    pub runtime: Vec<Task>,
}

impl SimulationResult {
    /// Parses a `{"Runtime": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
