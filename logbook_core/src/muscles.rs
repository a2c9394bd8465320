//! Built-in catalog of muscle groups.
//!
//! Workouts carry the muscle as a plain label, so the core never rejects an
//! unknown one. The catalog lists the groups the backend offers and is used
//! for listing and for snapshot validation.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A muscle group offered when creating a workout
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Muscle {
    pub code: u8,
    pub label: &'static str,
    pub display_name: &'static str,
}

const MUSCLES: &[Muscle] = &[
    Muscle {
        code: 1,
        label: "CHEST",
        display_name: "Chest",
    },
    Muscle {
        code: 2,
        label: "BACK",
        display_name: "Back",
    },
    Muscle {
        code: 3,
        label: "SHOULDERS",
        display_name: "Shoulders",
    },
    Muscle {
        code: 4,
        label: "LEGS",
        display_name: "Legs",
    },
    Muscle {
        code: 5,
        label: "BICEPS",
        display_name: "Biceps",
    },
    Muscle {
        code: 6,
        label: "TRICEPS",
        display_name: "Triceps",
    },
    Muscle {
        code: 7,
        label: "CALVES",
        display_name: "Calves",
    },
    Muscle {
        code: 8,
        label: "ABDOMINAL",
        display_name: "Abdominal",
    },
    Muscle {
        code: 9,
        label: "FULL_BODY",
        display_name: "Full body",
    },
];

/// Label index, built once
static BY_LABEL: Lazy<HashMap<&'static str, &'static Muscle>> =
    Lazy::new(|| MUSCLES.iter().map(|m| (m.label, m)).collect());

/// All muscle groups, ordered by code
pub fn known_muscles() -> &'static [Muscle] {
    MUSCLES
}

pub fn muscle_by_code(code: u8) -> Option<&'static Muscle> {
    MUSCLES.iter().find(|m| m.code == code)
}

pub fn muscle_by_label(label: &str) -> Option<&'static Muscle> {
    BY_LABEL.get(label).copied()
}

/// Exact, case-sensitive label lookup
pub fn is_known_muscle(label: &str) -> bool {
    BY_LABEL.contains_key(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        assert_eq!(known_muscles().len(), 9);
    }

    #[test]
    fn test_codes_are_unique_and_sequential() {
        for (idx, muscle) in known_muscles().iter().enumerate() {
            assert_eq!(muscle.code as usize, idx + 1);
        }
    }

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(muscle_by_code(5).map(|m| m.label), Some("BICEPS"));
        assert!(muscle_by_code(0).is_none());
        assert!(muscle_by_code(10).is_none());
    }

    #[test]
    fn test_lookup_by_label_is_exact() {
        assert_eq!(muscle_by_label("FULL_BODY").map(|m| m.code), Some(9));
        assert!(is_known_muscle("CHEST"));
        assert!(!is_known_muscle("chest"));
        assert!(!is_known_muscle("NECK"));
    }
}
