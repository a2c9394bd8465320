//! Error types for the logbook_core library.

use std::io;
use uuid::Uuid;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for logbook_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A workout date that is not a `YYYY-MM-DD` calendar date
    #[error("Malformed date {value:?} on workout {id}")]
    MalformedDate { id: String, value: String },

    /// A record that cannot be turned into a domain value
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Workout id not present in the snapshot
    #[error("Unknown workout: {0}")]
    UnknownWorkout(Uuid),

    /// Snapshot failed consistency checks
    #[error("Snapshot validation error: {0}")]
    SnapshotValidation(String),
}
