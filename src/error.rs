//! Crate error types.
//!
//! Only structural problems are errors. A task that cannot be placed on a
//! slot is never an error; it is reported through
//! [`Assignment::dropped`](crate::assign::Assignment::dropped) instead.

use thiserror::Error;

use crate::models::ClusterId;

/// Structural errors raised while building inputs or talking to the
/// upstream task source.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cluster {0} has zero capacity")]
    ZeroCapacity(ClusterId),

    #[error("task '{name}' has an invalid interval [{start}, {end}]")]
    InvalidInterval { name: String, start: f64, end: f64 },

    #[error("experiment not found: {0}")]
    UnknownExperiment(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, Error>;
