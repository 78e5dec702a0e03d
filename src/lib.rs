//! Timeline post-processing for simulated workflow runs.
//!
//! Takes the task intervals computed by a workflow simulator and prepares
//! them for a Gantt-style chart: every interval is placed on a compute node
//! row of its cluster so that no row has overlapping bars, and tasks of the
//! same family share a color.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Cluster`, `SlotAssignedTask`,
//!   `Series`, `SeriesEntry`, `Platform`
//! - **`assign`**: Greedy first-fit slot assignment with drop reporting
//! - **`color`**: Task family keys and unique random colors
//! - **`series`**: Range-bar series construction
//! - **`pipeline`**: End-to-end runs, upstream `TaskSource`, experiment `Session`
//! - **`validation`**: Optional input checks (platform ranges, cluster refs)
//!
//! # Determinism
//!
//! Slot assignment is a pure function of its input. Only color values are
//! random, and the random source is always a parameter.
//!
//! # References
//!
//! - Kolen et al. (2007), "Interval scheduling: A survey"
//! - Johnson (1974), "Fast algorithms for bin packing"

pub mod assign;
pub mod color;
mod error;
pub mod models;
pub mod pipeline;
pub mod series;
pub mod validation;

pub use error::{Error, Result};
