//! Error types for scheduling operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid interval: end {end} is not after start {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("calendar store failure: {0}")]
    Dependency(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
