#![forbid(unsafe_code)]

//! Core domain model and comparison logic for the workout logbook.
//!
//! This crate provides:
//! - Domain types (workouts, exercise sets) and their API record formats
//! - Nearest comparable workout resolution
//! - Exercise reconciliation (previous-performance pairing, unique exercises)
//! - Workout analysis (rep-range checks, volume load, progression)
//! - Snapshot loading, CSV export, configuration and logging

pub mod types;
pub mod error;
pub mod date;
pub mod muscles;
pub mod config;
pub mod logging;
pub mod nearest;
pub mod reconcile;
pub mod analysis;
pub mod comparison;
pub mod snapshot;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use nearest::{find_nearest_record, find_nearest_workout};
pub use reconcile::{
    display_order, pair_with_previous, previous_by_exercise, unique_exercises, unique_to_first,
    PairedSet, UniqueExercises,
};
pub use comparison::{carry_over, compare_to_nearest, progression, SetProgression, WorkoutComparison};
pub use snapshot::Snapshot;
