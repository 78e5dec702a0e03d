//! Input validation for timeline runs.
//!
//! The pipeline accepts any input and silently leaves out what it cannot
//! place. These checks are for callers who want to tell the user why
//! before running. Detects:
//! - Platforms with no clusters or out-of-range hardware values
//! - Tasks on clusters that do not exist
//! - Malformed intervals, unnamed tasks, and duplicate task names
//!
//! All issues are collected; validation never stops at the first one.

use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

use crate::models::{Cluster, ClusterId, Platform, Task};

/// Accepted link bandwidth (kBps).
pub const BANDWIDTH_RANGE: RangeInclusive<u32> = 50..=1000;
/// Accepted link latency (ms).
pub const LATENCY_RANGE: RangeInclusive<u32> = 1..=100;
/// Accepted compute nodes per cluster.
pub const COMPUTE_NODES_RANGE: RangeInclusive<u32> = 1..=256;
/// Accepted cores per compute node.
pub const CORES_RANGE: RangeInclusive<u32> = 1..=10;
/// Accepted core speed (Gflop/s).
pub const SPEED_RANGE: RangeInclusive<u32> = 1..=10;
/// Accepted controller disk read/write bandwidth (MBps).
pub const DISK_BANDWIDTH_RANGE: RangeInclusive<u32> = 50..=1000;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same name.
    DuplicateId,
    /// The platform defines no cluster.
    NoClusters,
    /// A platform value lies outside its accepted range.
    OutOfRange,
    /// A task references a cluster that doesn't exist.
    UnknownCluster,
    /// A task has `start > end` or a non-finite time.
    MalformedInterval,
    /// A task has an empty name.
    EmptyName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a platform description.
///
/// Checks:
/// 1. At least one cluster
/// 2. Every cluster value within its accepted range
/// 3. Disk read/write bandwidth within range
pub fn validate_platform(platform: &Platform) -> ValidationResult {
    let mut errors = Vec::new();

    if platform.clusters.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoClusters,
            "Platform has no clusters",
        ));
    }

    check_range(&mut errors, "Read bandwidth", platform.read_bandwidth, &DISK_BANDWIDTH_RANGE);
    check_range(&mut errors, "Write bandwidth", platform.write_bandwidth, &DISK_BANDWIDTH_RANGE);

    for (id, spec) in &platform.clusters {
        let fields = [
            ("bandwidth", spec.bw, &BANDWIDTH_RANGE),
            ("latency", spec.latency, &LATENCY_RANGE),
            ("compute nodes", spec.compute_nodes, &COMPUTE_NODES_RANGE),
            ("cores", spec.cores, &CORES_RANGE),
            ("speed", spec.speed, &SPEED_RANGE),
        ];
        for (field, value, range) in fields {
            check_range(&mut errors, &format!("Cluster {id} {field}"), value, range);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates task intervals against a cluster map.
///
/// Checks:
/// 1. Non-empty names
/// 2. Well-formed intervals
/// 3. Known cluster references
/// 4. No duplicate task names
pub fn validate_tasks(tasks: &[Task], clusters: &HashMap<ClusterId, Cluster>) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (i, task) in tasks.iter().enumerate() {
        if task.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Task #{i} has no name"),
            ));
        } else if !names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task name: {}", task.name),
            ));
        }

        if !task.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedInterval,
                format!(
                    "Task '{}' has invalid interval [{}, {}]",
                    task.name, task.start, task.end
                ),
            ));
        }

        if !clusters.contains_key(&task.cluster) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCluster,
                format!(
                    "Task '{}' references unknown cluster {}",
                    task.name, task.cluster
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_range(
    errors: &mut Vec<ValidationError>,
    what: &str,
    value: u32,
    range: &RangeInclusive<u32>,
) {
    if !range.contains(&value) {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "{what} is {value}, expected {}..={}",
                range.start(),
                range.end()
            ),
        ));
    }
}
