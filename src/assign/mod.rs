//! Slot assignment for simulated task intervals.
//!
//! Explains, after the fact, which compute node of its cluster each task
//! interval should be drawn on.
//!
//! # Algorithm
//!
//! `SlotAssigner` is greedy first-fit in arrival order: every task goes to
//! the lowest-indexed slot of its cluster where it overlaps none of the
//! intervals already accepted there. It does not minimize the number of
//! slots used and never backtracks.
//!
//! A task that fits nowhere (full cluster, unknown cluster, malformed
//! interval) is left out of the timeline and reported in
//! [`Assignment::dropped`]. Placement never fails.
//!
//! # References
//!
//! - Johnson (1974), "Fast algorithms for bin packing" (first-fit)
//! - Kolen et al. (2007), "Interval scheduling: A survey"

mod first_fit;
mod outcome;

pub use first_fit::{assign_slots, SlotAssigner};
pub use outcome::{Assignment, DropReason, DroppedTask};
