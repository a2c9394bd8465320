use clap::{Parser, Subcommand};
use logbook_core::date::format_date;
use logbook_core::*;
use std::path::PathBuf;
use uuid::Uuid;

const NO_PREVIOUS: &str = "No previous workout with the same reps range and muscle was found.";

#[derive(Parser)]
#[command(name = "logbook")]
#[command(about = "Workout logbook: compare workouts with your previous session", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workout history snapshot (JSON export of workouts and exercises)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the muscle groups workouts can be logged for
    Muscles,

    /// List workouts, newest first
    Workouts {
        /// Only workouts for this muscle label (e.g. CHEST)
        #[arg(long)]
        muscle: Option<String>,
    },

    /// Show the nearest earlier workout with the same muscle and rep range
    Nearest {
        workout_id: Uuid,
    },

    /// Compare a workout set by set with its nearest earlier workout
    Compare {
        workout_id: Uuid,

        /// Write the comparison table to this CSV file
        #[arg(long, conflicts_with = "export")]
        csv: Option<PathBuf>,

        /// Write the comparison table to the configured export directory
        #[arg(long)]
        export: bool,
    },

    /// Print the previous workout's sets as new exercises for this workout (JSON)
    CarryOver {
        workout_id: Uuid,
    },

    /// Validate the snapshot
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logbook_core::logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let snapshot_path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| config.data.snapshot_path.clone());
    tracing::debug!("Using snapshot {:?}", snapshot_path);

    match cli.command {
        Commands::Muscles => cmd_muscles(),
        Commands::Workouts { muscle } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            cmd_workouts(&snapshot, muscle.as_deref(), &config)
        }
        Commands::Nearest { workout_id } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            cmd_nearest(&snapshot, &workout_id, &config)
        }
        Commands::Compare {
            workout_id,
            csv,
            export,
        } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            cmd_compare(&snapshot, &workout_id, csv, export, &config)
        }
        Commands::CarryOver { workout_id } => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            cmd_carry_over(&snapshot, &workout_id)
        }
        Commands::Check => {
            let snapshot = Snapshot::load(&snapshot_path)?;
            cmd_check(&snapshot)
        }
    }
}

fn cmd_muscles() -> Result<()> {
    for muscle in logbook_core::muscles::known_muscles() {
        println!("{:>2}  {:<10} {}", muscle.code, muscle.label, muscle.display_name);
    }
    Ok(())
}

fn cmd_workouts(snapshot: &Snapshot, muscle: Option<&str>, config: &Config) -> Result<()> {
    let workouts = snapshot.workouts_newest_first(muscle);
    if workouts.is_empty() {
        println!("No workouts found.");
        return Ok(());
    }

    for workout in workouts {
        println!(
            "{}  {:<10} {:>2}-{:<2}  {} sets  {}",
            format_date(workout.date, &config.display.date_format),
            workout.muscle,
            workout.lower_reps_range,
            workout.upper_reps_range,
            snapshot.exercises_of(&workout.id).len(),
            workout.id
        );
    }
    Ok(())
}

fn cmd_nearest(snapshot: &Snapshot, workout_id: &Uuid, config: &Config) -> Result<()> {
    let current = snapshot.require_workout(workout_id)?;
    tracing::info!(
        "Looking up nearest {} workout before {}",
        current.muscle,
        current.date
    );

    match find_nearest_workout(&snapshot.workouts, current) {
        Some(previous) => {
            println!(
                "Previous {} workout: {} ({} days earlier)",
                previous.muscle,
                format_date(previous.date, &config.display.date_format),
                date::days_between(previous.date, current.date)
            );
            println!("  id: {}", previous.id);
        }
        None => println!("{}", NO_PREVIOUS),
    }
    Ok(())
}

fn cmd_compare(
    snapshot: &Snapshot,
    workout_id: &Uuid,
    csv: Option<PathBuf>,
    export: bool,
    config: &Config,
) -> Result<()> {
    let Some(comparison) = compare_to_nearest(snapshot, workout_id)? else {
        println!("{}", NO_PREVIOUS);
        return Ok(());
    };
    tracing::info!(
        "Comparing workout {} with {}",
        comparison.current.id,
        comparison.previous.id
    );

    display_comparison(&comparison, config);

    let csv_path = match (csv, export) {
        (Some(path), _) => Some(path),
        (None, true) => Some(config.export.dir.join(format!(
            "{}_{}.csv",
            comparison.current.date,
            comparison.current.muscle.to_lowercase()
        ))),
        (None, false) => None,
    };

    if let Some(path) = csv_path {
        let rows = logbook_core::export::write_comparison_csv(&comparison, &path)?;
        println!("✓ Exported {} sets to {}", rows, path.display());
    }

    Ok(())
}

fn cmd_carry_over(snapshot: &Snapshot, workout_id: &Uuid) -> Result<()> {
    let Some(comparison) = compare_to_nearest(snapshot, workout_id)? else {
        eprintln!("{}", NO_PREVIOUS);
        println!("[]");
        return Ok(());
    };

    let drafts = carry_over(&comparison.previous_exercises, workout_id);
    tracing::info!(
        "Carrying over {} sets from workout {}",
        drafts.len(),
        comparison.previous.id
    );
    println!("{}", serde_json::to_string_pretty(&drafts)?);
    Ok(())
}

fn cmd_check(snapshot: &Snapshot) -> Result<()> {
    let errors = snapshot.validate();
    if !errors.is_empty() {
        tracing::warn!("Snapshot has {} problem(s)", errors.len());
        eprintln!("Snapshot validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::SnapshotValidation(format!(
            "{} problem(s) found",
            errors.len()
        )));
    }

    println!(
        "✓ Snapshot OK ({} workouts, {} exercises)",
        snapshot.workouts.len(),
        snapshot.exercises.len()
    );
    Ok(())
}

fn display_comparison(comparison: &WorkoutComparison, config: &Config) {
    let current = &comparison.current;
    let date_format = &config.display.date_format;

    println!();
    println!(
        "  {} workout {} (reps {}-{})",
        current.muscle,
        format_date(current.date, date_format),
        current.lower_reps_range,
        current.upper_reps_range
    );
    println!(
        "  Compared to {} workout ({} days earlier)",
        format_date(comparison.previous.date, date_format),
        comparison.days_since_previous()
    );
    println!();
    println!(
        "  {:<4} {:<24} {:<12} {:>5} {:>7}",
        "Set", "Exercise", "Previous", "Reps", "Weight"
    );

    for pair in comparison.pairs() {
        let previous = pair
            .previous
            .map(|p| format!("({} x {})", p.reps, p.weight))
            .unwrap_or_default();
        let marker = if current.contains_reps(pair.current.reps) {
            " "
        } else {
            "!"
        };
        println!(
            "  {:<4} {:<24} {:<12} {:>4}{} {:>7}",
            pair.set_number,
            pair.current.name,
            previous,
            pair.current.reps,
            marker,
            pair.current.weight
        );
    }

    if !comparison.outside_rep_range().is_empty() {
        println!();
        println!(
            "  ! reps outside the {}-{} target range",
            current.lower_reps_range, current.upper_reps_range
        );
    }

    if !comparison.unique.is_empty() {
        println!();
        println!(
            "  Unique old workout exercises:     {}",
            comparison.unique.only_in_previous.join(", ")
        );
        println!(
            "  Unique current workout exercises: {}",
            comparison.unique.only_in_current.join(", ")
        );
    }

    let previous_volume = analysis::volume_load(&comparison.previous_exercises);
    let current_volume = analysis::volume_load(&comparison.current_exercises);
    if !current_volume.is_empty() {
        println!();
        println!("  Volume load:");
        for (name, volume) in &current_volume {
            match previous_volume.get(name) {
                Some(before) => println!("    {:<24} {:>8} (was {})", name, volume, before),
                None => println!("    {:<24} {:>8}", name, volume),
            }
        }
        println!(
            "    {:<24} {:>8} (was {})",
            "Total",
            analysis::total_volume(&comparison.current_exercises),
            analysis::total_volume(&comparison.previous_exercises)
        );
    }

    println!();
}
