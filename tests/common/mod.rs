#![allow(dead_code)]

use chrono::{Duration, Utc};
use tempfile::TempDir;
use uuid::Uuid;

use liftbook::models::{Exercise, ExerciseCategory, LoggedSet, WorkoutSession, WorkoutTemplate};
use liftbook::Store;

pub fn setup_test_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = Store::open(dir.path());
    (dir, store)
}

/// Adds an exercise whose muscle groups are resolved by name against the
/// store's groups.
pub fn create_test_exercise(
    store: &mut Store,
    name: &str,
    groups: &[&str],
    category: ExerciseCategory,
) -> Exercise {
    let ids = groups
        .iter()
        .map(|g| store.find_or_create_muscle_group(g).unwrap().id)
        .collect();
    let exercise = Exercise::new(name, ids, category).unwrap();
    store.add_exercise(exercise.clone());
    exercise
}

/// Logs a finished session started `hours_ago`, one completed set per entry
/// of `(exercise, weight, reps)`, numbering sets per exercise.
pub fn create_finished_session(
    store: &mut Store,
    template: &WorkoutTemplate,
    hours_ago: i64,
    sets: &[(Uuid, f64, u32)],
) -> WorkoutSession {
    let mut session = store.start_session(template);
    session.start_date = Utc::now() - Duration::hours(hours_ago);
    for (exercise_id, weight, reps) in sets {
        let number = liftbook::stats::next_set_number(&session, *exercise_id);
        session
            .sets
            .push(LoggedSet::new(*exercise_id, number, *weight, *reps, true));
    }
    session.end_date = Some(session.start_date + Duration::hours(1));
    store.update_session(session.clone());
    session
}
