//! Comparing a workout against its nearest comparable predecessor.
//!
//! This module ties the resolver and the reconciler together:
//! - Resolve the nearest earlier workout with the same muscle and rep range
//! - Pair current sets with previous sets and compute per-set progression
//! - List exercises unique to either workout
//!
//! When no earlier workout qualifies there is nothing to compare and the
//! reconciliation is skipped entirely.

use crate::reconcile::{self, PairedSet, UniqueExercises};
use crate::{
    analysis, find_nearest_workout, Exercise, ExerciseDraft, Result, Snapshot, Workout, WorkoutId,
};
use serde::Serialize;

/// Change of one set relative to the set it was paired with
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetProgression {
    pub name: String,
    pub set_number: usize,
    pub reps: i64,
    pub weight: i64,
    pub rir: i64,
}

/// Everything the presentation layer needs to compare two workouts
#[derive(Clone, Debug)]
pub struct WorkoutComparison {
    pub current: Workout,
    pub previous: Workout,
    pub current_exercises: Vec<Exercise>,
    pub previous_exercises: Vec<Exercise>,
    pub unique: UniqueExercises,
}

impl WorkoutComparison {
    /// Build a comparison from already fetched workouts and sets
    pub fn new(
        current: Workout,
        previous: Workout,
        current_exercises: Vec<Exercise>,
        previous_exercises: Vec<Exercise>,
    ) -> Self {
        let unique = reconcile::unique_exercises(&previous_exercises, &current_exercises);
        Self {
            current,
            previous,
            current_exercises,
            previous_exercises,
            unique,
        }
    }

    /// Current sets in display order with their previous counterparts
    pub fn pairs(&self) -> Vec<PairedSet<'_>> {
        reconcile::pair_with_previous(&self.current_exercises, &self.previous_exercises)
    }

    pub fn progression(&self) -> Vec<SetProgression> {
        progression(&self.pairs())
    }

    /// Current sets that missed the target rep range
    pub fn outside_rep_range(&self) -> Vec<&Exercise> {
        analysis::outside_rep_range(&self.current, &self.current_exercises)
    }

    pub fn days_since_previous(&self) -> i64 {
        crate::date::days_between(self.previous.date, self.current.date)
    }
}

/// Compare a workout from the snapshot with its nearest predecessor
///
/// Returns `Ok(None)` when no earlier comparable workout exists, which is the
/// normal situation for a first workout of a kind. An id that is not in the
/// snapshot is an error.
pub fn compare_to_nearest(
    snapshot: &Snapshot,
    current_id: &WorkoutId,
) -> Result<Option<WorkoutComparison>> {
    let current = snapshot.require_workout(current_id)?;

    let Some(previous) = find_nearest_workout(&snapshot.workouts, current) else {
        tracing::info!(
            "No previous workout with the same reps range and muscle for {}",
            current.id
        );
        return Ok(None);
    };

    tracing::info!(
        "Comparing workout {} ({}) with {} ({})",
        current.id,
        current.date,
        previous.id,
        previous.date
    );

    Ok(Some(WorkoutComparison::new(
        current.clone(),
        previous.clone(),
        snapshot.exercises_of(&current.id),
        snapshot.exercises_of(&previous.id),
    )))
}

/// Signed change (current minus previous) for every paired set
///
/// Unpaired sets have nothing to compare against and are left out.
pub fn progression(pairs: &[PairedSet<'_>]) -> Vec<SetProgression> {
    pairs
        .iter()
        .filter_map(|pair| {
            let previous = pair.previous?;
            Some(SetProgression {
                name: pair.current.name.clone(),
                set_number: pair.set_number,
                reps: i64::from(pair.current.reps) - i64::from(previous.reps),
                weight: i64::from(pair.current.weight) - i64::from(previous.weight),
                rir: i64::from(pair.current.rir) - i64::from(previous.rir),
            })
        })
        .collect()
}

/// Drafts that repeat the previous workout's sets in another workout
pub fn carry_over(previous_exercises: &[Exercise], target: &WorkoutId) -> Vec<ExerciseDraft> {
    previous_exercises
        .iter()
        .map(|e| ExerciseDraft {
            workout_id: *target,
            name: e.name.clone(),
            reps: e.reps,
            weight: e.weight,
            rir: e.rir,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ExerciseRecord, WorkoutRecord};
    use uuid::Uuid;

    fn workout_record(date: &str, muscle: &str, lower: u32, upper: u32) -> WorkoutRecord {
        WorkoutRecord {
            id: Uuid::new_v4(),
            date: date.into(),
            muscle: muscle.into(),
            lower_reps_range: lower,
            upper_reps_range: upper,
        }
    }

    fn exercise_record(
        workout: &WorkoutRecord,
        name: &str,
        created_at: i64,
        reps: u32,
        weight: u32,
        rir: u32,
    ) -> ExerciseRecord {
        ExerciseRecord {
            id: Uuid::new_v4(),
            workout_id: workout.id,
            name: name.into(),
            reps,
            weight,
            rir,
            created_at,
        }
    }

    /// Two chest workouts a week apart plus an unrelated back workout
    fn create_test_snapshot() -> (Snapshot, WorkoutId, WorkoutId) {
        let old = workout_record("2024-04-01", "CHEST", 6, 10);
        let current = workout_record("2024-04-08", "CHEST", 6, 10);
        let back = workout_record("2024-04-05", "BACK", 6, 10);

        let exercises = vec![
            exercise_record(&old, "Bench Press", 1, 8, 80, 2),
            exercise_record(&old, "Bench Press", 2, 7, 80, 1),
            exercise_record(&old, "Fly", 3, 12, 20, 2),
            exercise_record(&current, "Bench Press", 10, 9, 82, 2),
            exercise_record(&current, "Bench Press", 11, 8, 82, 1),
            exercise_record(&current, "Bench Press", 12, 5, 82, 0),
            exercise_record(&current, "Dip", 13, 10, 0, 2),
            exercise_record(&back, "Row", 20, 8, 60, 2),
        ];

        let (old_id, current_id) = (old.id, current.id);
        let snapshot = Snapshot::from_records(vec![old, current, back], exercises).unwrap();
        (snapshot, old_id, current_id)
    }

    #[test]
    fn test_compare_to_nearest() {
        let (snapshot, old_id, current_id) = create_test_snapshot();

        let comparison = compare_to_nearest(&snapshot, &current_id).unwrap().unwrap();

        assert_eq!(comparison.previous.id, old_id);
        assert_eq!(comparison.days_since_previous(), 7);
        assert_eq!(comparison.unique.only_in_previous, vec!["Fly"]);
        assert_eq!(comparison.unique.only_in_current, vec!["Dip"]);

        let pairs = comparison.pairs();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].previous.map(|p| p.reps), Some(8));
        assert_eq!(pairs[1].previous.map(|p| p.reps), Some(7));
        assert!(pairs[2].previous.is_none());
        assert!(pairs[3].previous.is_none());
    }

    #[test]
    fn test_progression_of_paired_sets() {
        let (snapshot, _, current_id) = create_test_snapshot();
        let comparison = compare_to_nearest(&snapshot, &current_id).unwrap().unwrap();

        let progression = comparison.progression();

        assert_eq!(
            progression,
            vec![
                SetProgression {
                    name: "Bench Press".into(),
                    set_number: 1,
                    reps: 1,
                    weight: 2,
                    rir: 0,
                },
                SetProgression {
                    name: "Bench Press".into(),
                    set_number: 2,
                    reps: 1,
                    weight: 2,
                    rir: 0,
                },
            ]
        );
    }

    #[test]
    fn test_outside_rep_range_in_comparison() {
        let (snapshot, _, current_id) = create_test_snapshot();
        let comparison = compare_to_nearest(&snapshot, &current_id).unwrap().unwrap();

        let outside = comparison.outside_rep_range();
        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].reps, 5);
    }

    #[test]
    fn test_first_workout_has_no_comparison() {
        let (snapshot, old_id, _) = create_test_snapshot();
        assert!(compare_to_nearest(&snapshot, &old_id).unwrap().is_none());
    }

    #[test]
    fn test_unknown_workout_is_error() {
        let (snapshot, _, _) = create_test_snapshot();
        let result = compare_to_nearest(&snapshot, &Uuid::new_v4());
        assert!(matches!(result, Err(Error::UnknownWorkout(_))));
    }

    #[test]
    fn test_carry_over_targets_new_workout() {
        let (snapshot, old_id, current_id) = create_test_snapshot();
        let previous = snapshot.exercises_of(&old_id);

        let drafts = carry_over(&previous, &current_id);

        assert_eq!(drafts.len(), 3);
        assert!(drafts.iter().all(|d| d.workout_id == current_id));
        assert_eq!(drafts[2].name, "Fly");
        assert_eq!((drafts[2].reps, drafts[2].weight, drafts[2].rir), (12, 20, 2));

        let json = serde_json::to_value(&drafts[0]).unwrap();
        assert_eq!(json["workoutId"], current_id.to_string());
        assert_eq!(json["name"], "Bench Press");
    }

    #[test]
    fn test_negative_progression() {
        let (snapshot, old_id, current_id) = create_test_snapshot();
        // Compare in reverse: previous sets as current
        let old_sets = snapshot.exercises_of(&old_id);
        let newer_sets = snapshot.exercises_of(&current_id);
        let pairs = reconcile::pair_with_previous(&old_sets[..1], &newer_sets);

        let progression = progression(&pairs);
        assert_eq!(progression.len(), 1);
        assert_eq!((progression[0].reps, progression[0].weight), (-1, -2));
    }
}
