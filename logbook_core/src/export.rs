//! CSV export of workout comparisons.
//!
//! One row per current set, in display order, with the paired previous set
//! (if any) and the change against it.

use crate::{Result, WorkoutComparison};
use std::fs::File;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    date: String,
    previous_date: String,
    exercise: String,
    set: usize,
    reps: u32,
    weight: u32,
    rir: u32,
    in_range: bool,
    previous_reps: Option<u32>,
    previous_weight: Option<u32>,
    previous_rir: Option<u32>,
    reps_change: Option<i64>,
    weight_change: Option<i64>,
    rir_change: Option<i64>,
}

/// Write a comparison as CSV, replacing any existing file
///
/// Returns the number of rows written. The file is synced before returning.
pub fn write_comparison_csv(comparison: &WorkoutComparison, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file);

    let pairs = comparison.pairs();
    for pair in &pairs {
        let current = pair.current;
        let row = CsvRow {
            date: comparison.current.date.to_string(),
            previous_date: comparison.previous.date.to_string(),
            exercise: current.name.clone(),
            set: pair.set_number,
            reps: current.reps,
            weight: current.weight,
            rir: current.rir,
            in_range: comparison.current.contains_reps(current.reps),
            previous_reps: pair.previous.map(|p| p.reps),
            previous_weight: pair.previous.map(|p| p.weight),
            previous_rir: pair.previous.map(|p| p.rir),
            reps_change: pair
                .previous
                .map(|p| i64::from(current.reps) - i64::from(p.reps)),
            weight_change: pair
                .previous
                .map(|p| i64::from(current.weight) - i64::from(p.weight)),
            rir_change: pair
                .previous
                .map(|p| i64::from(current.rir) - i64::from(p.rir)),
        };
        writer.serialize(row)?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} comparison rows to {:?}", pairs.len(), path);
    Ok(pairs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Exercise, Workout};
    use chrono::{DateTime, NaiveDate, Utc};
    use uuid::Uuid;

    fn create_test_workout(date: (i32, u32, u32)) -> Workout {
        Workout {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            muscle: "SHOULDERS".into(),
            lower_reps_range: 8,
            upper_reps_range: 12,
        }
    }

    fn create_test_exercise(workout: &Workout, name: &str, created_at: i64, reps: u32) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            workout_id: workout.id,
            name: name.into(),
            reps,
            weight: 30,
            rir: 2,
            created_at: DateTime::<Utc>::from_timestamp_millis(created_at).unwrap(),
        }
    }

    fn create_test_comparison() -> WorkoutComparison {
        let previous = create_test_workout((2024, 6, 1));
        let current = create_test_workout((2024, 6, 8));
        let previous_sets = vec![create_test_exercise(&previous, "Press", 1, 10)];
        let current_sets = vec![
            create_test_exercise(&current, "Press", 2, 12),
            create_test_exercise(&current, "Press", 3, 7),
        ];
        WorkoutComparison::new(current, previous, current_sets, previous_sets)
    }

    #[test]
    fn test_write_comparison_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("out").join("comparison.csv");

        let count = write_comparison_csv(&create_test_comparison(), &csv_path).unwrap();
        assert_eq!(count, 2);

        let mut reader = csv::Reader::from_path(&csv_path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "date");
        assert_eq!(&headers[2], "exercise");

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][1], "2024-06-01");
        assert_eq!(&records[0][3], "1");
        assert_eq!(&records[0][11], "2");
        assert_eq!(&headers[13], "rir_change");
        assert_eq!(&records[0][13], "0");
        assert_eq!(&records[1][13], "");
        assert_eq!(&records[1][7], "false");
        assert_eq!(&records[1][8], "");
    }

    #[test]
    fn test_export_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("comparison.csv");

        write_comparison_csv(&create_test_comparison(), &csv_path).unwrap();
        write_comparison_csv(&create_test_comparison(), &csv_path).unwrap();

        let reader = csv::Reader::from_path(&csv_path).unwrap();
        assert_eq!(reader.into_records().count(), 2);
    }
}
