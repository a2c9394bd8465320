//! Per-workout analysis of logged sets.

use crate::{Exercise, Workout};
use std::collections::BTreeMap;

/// Sets whose reps fall outside the workout's target rep range
pub fn outside_rep_range<'a>(workout: &Workout, exercises: &'a [Exercise]) -> Vec<&'a Exercise> {
    exercises
        .iter()
        .filter(|e| !workout.contains_reps(e.reps))
        .collect()
}

/// Volume load (reps x weight) summed per exercise name
pub fn volume_load(exercises: &[Exercise]) -> BTreeMap<String, u64> {
    let mut volumes: BTreeMap<String, u64> = BTreeMap::new();
    for exercise in exercises {
        *volumes.entry(exercise.name.clone()).or_insert(0) +=
            u64::from(exercise.reps) * u64::from(exercise.weight);
    }
    volumes
}

/// Total volume load across all sets
pub fn total_volume(exercises: &[Exercise]) -> u64 {
    volume_load(exercises).values().sum()
}
