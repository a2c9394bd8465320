//! Exercise reconciliation between a workout and its nearest predecessor.
//!
//! Two operations, both keyed on the exercise name (exact, case-sensitive):
//! - Previous-performance pairing: each current set is matched with the first
//!   not yet used set of the same name from the previous workout
//! - Unique exercises: names present in one workout and absent from the other

use crate::{Exercise, ExerciseId};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A current set together with the set it is compared against
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairedSet<'a> {
    /// 1-based position among sets of the same name, in display order
    pub set_number: usize,
    pub current: &'a Exercise,
    pub previous: Option<&'a Exercise>,
}

/// Exercise names found in only one of two workouts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UniqueExercises {
    pub only_in_previous: Vec<String>,
    pub only_in_current: Vec<String>,
}

impl UniqueExercises {
    pub fn is_empty(&self) -> bool {
        self.only_in_previous.is_empty() && self.only_in_current.is_empty()
    }
}

/// Sort sets for display: by name, then by creation time
///
/// Names compare case-insensitively first, so `bench` lists before `Squat`.
/// Names equal up to case stay apart, ordered by their raw bytes.
///
/// Sets of the same exercise keep the order they were logged in, which is
/// what the "Set 1, Set 2" numbering refers to.
pub fn display_order(exercises: &[Exercise]) -> Vec<&Exercise> {
    let mut ordered: Vec<&Exercise> = exercises.iter().collect();
    ordered.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    ordered
}

/// Pair every current set with a set of the previous workout
///
/// Current sets are walked in [`display_order`]. Each takes the first set in
/// `previous` (in the order given) with the same name that no earlier current
/// set has taken. A previous set is used at most once; surplus current sets
/// are left unpaired.
pub fn pair_with_previous<'a>(
    current: &'a [Exercise],
    previous: &'a [Exercise],
) -> Vec<PairedSet<'a>> {
    let mut consumed: HashSet<usize> = HashSet::new();
    let mut set_numbers: HashMap<&str, usize> = HashMap::new();
    let mut pairs = Vec::with_capacity(current.len());

    for exercise in display_order(current) {
        let matched = previous
            .iter()
            .enumerate()
            .find(|(idx, candidate)| candidate.name == exercise.name && !consumed.contains(idx));

        let previous_set = matched.map(|(idx, candidate)| {
            consumed.insert(idx);
            candidate
        });

        let set_number = set_numbers.entry(exercise.name.as_str()).or_insert(0);
        *set_number += 1;

        pairs.push(PairedSet {
            set_number: *set_number,
            current: exercise,
            previous: previous_set,
        });
    }

    tracing::debug!(
        "Paired {} of {} current sets with {} previous sets",
        pairs.iter().filter(|p| p.previous.is_some()).count(),
        current.len(),
        previous.len()
    );

    pairs
}

/// Pairing as a lookup from current exercise id to its previous set
pub fn previous_by_exercise<'a>(
    current: &'a [Exercise],
    previous: &'a [Exercise],
) -> BTreeMap<ExerciseId, Option<&'a Exercise>> {
    pair_with_previous(current, previous)
        .into_iter()
        .map(|pair| (pair.current.id, pair.previous))
        .collect()
}

/// Distinct names of `a` that appear nowhere in `b`
///
/// Names are returned in the order they first occur in `a`.
pub fn unique_to_first(a: &[Exercise], b: &[Exercise]) -> Vec<String> {
    let excluded: HashSet<&str> = b.iter().map(|e| e.name.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    a.iter()
        .map(|e| e.name.as_str())
        .filter(|name| !excluded.contains(name) && seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Both one-sided differences between a previous and a current workout
pub fn unique_exercises(previous: &[Exercise], current: &[Exercise]) -> UniqueExercises {
    UniqueExercises {
        only_in_previous: unique_to_first(previous, current),
        only_in_current: unique_to_first(current, previous),
    }
}
