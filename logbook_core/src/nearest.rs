//! Nearest comparable workout resolution.
//!
//! A workout is compared against the most recent earlier workout that trained
//! the same muscle in the same rep range:
//! - the candidate's date is strictly before the current workout's date
//! - the muscle labels are equal
//! - both rep range bounds are equal
//!
//! Among qualifying candidates the smallest date gap wins. Equal gaps keep
//! the candidate seen first.

use crate::{date, Result, Workout, WorkoutRecord};

/// Find the closest preceding comparable workout
///
/// `workouts` may contain `current` itself and unrelated workouts; neither
/// can qualify. Returns `None` when nothing qualifies, including for an
/// empty collection.
pub fn find_nearest_workout<'a>(workouts: &'a [Workout], current: &Workout) -> Option<&'a Workout> {
    let mut nearest: Option<(&'a Workout, i64)> = None;

    for workout in workouts {
        if !date::is_before(workout.date, current.date) || !workout.is_comparable_to(current) {
            continue;
        }

        let gap = date::days_between(workout.date, current.date);
        match nearest {
            Some((_, best)) if gap >= best => {}
            _ => nearest = Some((workout, gap)),
        }
    }

    match nearest {
        Some((workout, gap)) => {
            tracing::debug!(
                "Nearest workout for {} is {} ({} days earlier)",
                current.id,
                workout.id,
                gap
            );
            Some(workout)
        }
        None => {
            tracing::debug!(
                "No earlier {} workout with rep range {}-{} before {}",
                current.muscle,
                current.lower_reps_range,
                current.upper_reps_range,
                current.date
            );
            None
        }
    }
}

/// Resolve the nearest workout directly from backend records
///
/// Every record is validated first. A malformed date anywhere in the input
/// rejects the whole call with [`crate::Error::MalformedDate`] instead of
/// silently dropping the candidate.
pub fn find_nearest_record(
    records: &[WorkoutRecord],
    current: &WorkoutRecord,
) -> Result<Option<Workout>> {
    let current = Workout::try_from(current)?;
    let workouts = records
        .iter()
        .map(Workout::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(find_nearest_workout(&workouts, &current).cloned())
}
