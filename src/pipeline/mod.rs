//! End-to-end timeline pipeline.
//!
//! ```text
//! raw tasks ──► SlotAssigner ──► slot-assigned tasks ──► build_series ──► {ColorMap, Series}
//! ```
//!
//! The raw tasks come from an upstream simulator behind the [`TaskSource`]
//! trait. A [`Session`] keeps several independent experiments (platform +
//! last result), each run in isolation.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_timeline::models::{clusters_from_capacities, Task};
//! use u_timeline::pipeline::Pipeline;
//!
//! let tasks = vec![Task::new("fetch_1", 0, 0.0, 2.0), Task::new("fetch_2", 0, 1.0, 3.0)];
//! let clusters = clusters_from_capacities([(0, 1)]).unwrap();
//!
//! let out = Pipeline::new().run(&tasks, &clusters, &mut SmallRng::seed_from_u64(0));
//! assert_eq!(out.series.len(), 1);
//! assert_eq!(out.dropped.len(), 1);
//! ```

mod run;
mod session;
mod source;

pub use run::{Pipeline, PipelineOutput};
pub use session::{Experiment, Session, DEFAULT_TITLE};
pub use source::{RecordedSource, TaskSource};
