//! Snapshots of a user's workout history.
//!
//! A snapshot is the full list of workouts and exercise sets as the backend
//! returns them, stored as one JSON document:
//!
//! ```json
//! { "workouts": [ ... ], "exercises": [ ... ] }
//! ```
//!
//! Records are validated into domain types when the snapshot is built, so a
//! malformed date fails the load instead of reaching the comparison logic.

use crate::{
    muscles, Error, Exercise, ExerciseRecord, Result, Workout, WorkoutId, WorkoutRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Upper bounds the backend enforces on a logged set
pub const MAX_REPS: u32 = 50;
pub const MAX_WEIGHT: u32 = 1500;
pub const MAX_RIR: u32 = 10;

/// On-disk document format
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

/// Validated, in-memory workout history
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub workouts: Vec<Workout>,
    pub exercises: Vec<Exercise>,
}

impl TryFrom<SnapshotFile> for Snapshot {
    type Error = Error;

    fn try_from(file: SnapshotFile) -> Result<Self> {
        Snapshot::from_records(file.workouts, file.exercises)
    }
}

impl Snapshot {
    /// Build a snapshot from backend records, rejecting malformed ones
    pub fn from_records(
        workouts: Vec<WorkoutRecord>,
        exercises: Vec<ExerciseRecord>,
    ) -> Result<Self> {
        let workouts = workouts
            .into_iter()
            .map(Workout::try_from)
            .collect::<Result<Vec<_>>>()?;
        let exercises = exercises
            .into_iter()
            .map(Exercise::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            workouts,
            exercises,
        })
    }

    /// Parse a snapshot document
    pub fn from_json(contents: &str) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(contents)?;
        Snapshot::try_from(file)
    }

    /// Load a snapshot from a file
    ///
    /// A missing file is an empty history (a new user). A file that exists but
    /// cannot be parsed or validated is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No snapshot found at {:?}, using empty history", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&contents)?;

        tracing::info!(
            "Loaded {} workouts and {} exercises from {:?}",
            snapshot.workouts.len(),
            snapshot.exercises.len(),
            path
        );

        Ok(snapshot)
    }

    pub fn workout(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| &w.id == id)
    }

    /// Like [`Snapshot::workout`], but an unknown id is an error
    pub fn require_workout(&self, id: &WorkoutId) -> Result<&Workout> {
        self.workout(id).ok_or(Error::UnknownWorkout(*id))
    }

    /// Sets logged in a workout, in snapshot order
    pub fn exercises_of(&self, workout_id: &WorkoutId) -> Vec<Exercise> {
        self.exercises
            .iter()
            .filter(|e| &e.workout_id == workout_id)
            .cloned()
            .collect()
    }

    /// Workouts, newest first, optionally restricted to one muscle label
    pub fn workouts_newest_first(&self, muscle: Option<&str>) -> Vec<&Workout> {
        let mut workouts: Vec<&Workout> = self
            .workouts
            .iter()
            .filter(|w| muscle.map_or(true, |m| w.muscle == m))
            .collect();
        workouts.sort_by(|a, b| b.date.cmp(&a.date));
        workouts
    }

    /// Check snapshot consistency
    ///
    /// Returns a list of problems; empty means the snapshot is consistent.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut ids = HashSet::new();

        for workout in &self.workouts {
            if !ids.insert(workout.id) {
                errors.push(format!("Workout '{}': duplicate id", workout.id));
            }
            if !muscles::is_known_muscle(&workout.muscle) {
                errors.push(format!(
                    "Workout '{}': unknown muscle '{}'",
                    workout.id, workout.muscle
                ));
            }
            if workout.lower_reps_range > workout.upper_reps_range {
                errors.push(format!(
                    "Workout '{}': lower reps {} > upper reps {}",
                    workout.id, workout.lower_reps_range, workout.upper_reps_range
                ));
            }
        }

        for exercise in &self.exercises {
            if !ids.contains(&exercise.workout_id) {
                errors.push(format!(
                    "Exercise '{}': references unknown workout '{}'",
                    exercise.id, exercise.workout_id
                ));
            }
            if exercise.reps > MAX_REPS {
                errors.push(format!(
                    "Exercise '{}': reps {} > max {}",
                    exercise.id, exercise.reps, MAX_REPS
                ));
            }
            if exercise.weight > MAX_WEIGHT {
                errors.push(format!(
                    "Exercise '{}': weight {} > max {}",
                    exercise.id, exercise.weight, MAX_WEIGHT
                ));
            }
            if exercise.rir > MAX_RIR {
                errors.push(format!(
                    "Exercise '{}': rir {} > max {}",
                    exercise.id, exercise.rir, MAX_RIR
                ));
            }
        }

        errors
    }
}
