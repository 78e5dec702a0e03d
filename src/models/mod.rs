//! Timeline domain models.
//!
//! Typed records flowing through the pipeline, plus the platform
//! description and result envelope exchanged with the upstream simulator.
//!
//! # Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Simulator output | `SimulationResult` → `Task` |
//! | Slot capacities | `Platform` → `Cluster` |
//! | Slot assigner output | `SlotAssignedTask` |
//! | Series builder output | `Series` of `SeriesEntry` |

mod assigned;
mod cluster;
mod platform;
mod series;
pub(crate) mod task;

pub use assigned::SlotAssignedTask;
pub use cluster::{clusters_from_capacities, Cluster, ClusterId};
pub use platform::{ClusterSpec, Platform, SimulationResult};
pub use series::{Series, SeriesEntry};
pub use task::Task;
