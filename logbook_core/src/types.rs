//! Core domain types for the workout logbook.
//!
//! This module defines:
//! - Workouts and logged exercise sets, as used by the comparison logic
//! - The record formats the REST backend serialises them in
//! - Drafts for exercises that are about to be created

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type WorkoutId = Uuid;
pub type ExerciseId = Uuid;

// ============================================================================
// Domain Types
// ============================================================================

/// A workout for one muscle group on one calendar day
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub date: NaiveDate,
    pub muscle: String,
    pub lower_reps_range: u32,
    pub upper_reps_range: u32,
}

impl Workout {
    /// Target repetition interval as `(lower, upper)`
    pub fn rep_range(&self) -> (u32, u32) {
        (self.lower_reps_range, self.upper_reps_range)
    }

    /// Same muscle label and identical rep range (both bounds)
    pub fn is_comparable_to(&self, other: &Workout) -> bool {
        self.muscle == other.muscle && self.rep_range() == other.rep_range()
    }

    pub fn contains_reps(&self, reps: u32) -> bool {
        reps >= self.lower_reps_range && reps <= self.upper_reps_range
    }
}

/// One logged set of an exercise within a workout
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub workout_id: WorkoutId,
    pub name: String,
    pub reps: u32,
    pub weight: u32,
    pub rir: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// An exercise set that has not been created yet
///
/// Serialises to the body the backend expects when adding an exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDraft {
    pub workout_id: WorkoutId,
    pub name: String,
    pub reps: u32,
    pub weight: u32,
    pub rir: u32,
}

// ============================================================================
// Record Types (API payloads)
// ============================================================================

/// Workout as delivered by the backend, date still unparsed
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: WorkoutId,
    pub date: String,
    pub muscle: String,
    pub lower_reps_range: u32,
    pub upper_reps_range: u32,
}

/// Exercise as delivered by the backend, `createdAt` in epoch milliseconds
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub id: ExerciseId,
    pub workout_id: WorkoutId,
    pub name: String,
    pub reps: u32,
    pub weight: u32,
    pub rir: u32,
    pub created_at: i64,
}

impl TryFrom<WorkoutRecord> for Workout {
    type Error = crate::Error;

    fn try_from(record: WorkoutRecord) -> crate::Result<Self> {
        let date = crate::date::parse_workout_date(&record.id, &record.date)?;

        if record.lower_reps_range > record.upper_reps_range {
            tracing::debug!(
                "Workout {} has inverted rep range {}-{}",
                record.id,
                record.lower_reps_range,
                record.upper_reps_range
            );
        }

        Ok(Workout {
            id: record.id,
            date,
            muscle: record.muscle,
            lower_reps_range: record.lower_reps_range,
            upper_reps_range: record.upper_reps_range,
        })
    }
}

impl TryFrom<&WorkoutRecord> for Workout {
    type Error = crate::Error;

    fn try_from(record: &WorkoutRecord) -> crate::Result<Self> {
        Workout::try_from(record.clone())
    }
}

impl TryFrom<ExerciseRecord> for Exercise {
    type Error = crate::Error;

    fn try_from(record: ExerciseRecord) -> crate::Result<Self> {
        let created_at = DateTime::from_timestamp_millis(record.created_at).ok_or_else(|| {
            crate::Error::InvalidRecord(format!(
                "exercise {} has out-of-range createdAt {}",
                record.id, record.created_at
            ))
        })?;

        Ok(Exercise {
            id: record.id,
            workout_id: record.workout_id,
            name: record.name,
            reps: record.reps,
            weight: record.weight,
            rir: record.rir,
            created_at,
        })
    }
}

impl From<&Exercise> for ExerciseRecord {
    fn from(exercise: &Exercise) -> Self {
        ExerciseRecord {
            id: exercise.id,
            workout_id: exercise.workout_id,
            name: exercise.name.clone(),
            reps: exercise.reps,
            weight: exercise.weight,
            rir: exercise.rir,
            created_at: exercise.created_at.timestamp_millis(),
        }
    }
}
