use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

use super::{escape_field, format_date, format_weight, HEADER, MUSCLE_GROUP_SEPARATOR};
use crate::models::ExerciseCategory;
use crate::store::{Store, UNKNOWN_EXERCISE};

/// Muscle group column value for sets whose exercise no longer exists.
const UNKNOWN_MUSCLE_GROUP: &str = "Unknown";

/// Renders every finished session, most recent first, one line per set.
/// Active sessions are never exported.
pub fn export_csv(store: &Store) -> String {
    let mut lines = vec![HEADER.to_string()];

    for session in store.completed_sessions() {
        let session_id = session.id.to_string();
        let start_date = format_date(session.start_date);
        let end_date = session.end_date.map(format_date).unwrap_or_default();
        let template_name = escape_field(&session.template_name);

        for set in &session.sets {
            let exercise = store.exercise(set.exercise_id);
            let exercise_name = exercise.map_or(UNKNOWN_EXERCISE, |e| e.name.as_str());
            let muscle_groups = exercise.map_or_else(
                || UNKNOWN_MUSCLE_GROUP.to_string(),
                |e| store.muscle_group_names(e).join(MUSCLE_GROUP_SEPARATOR),
            );
            let category = exercise.map_or(ExerciseCategory::Other, |e| e.category);

            let row: [&str; 11] = [
                session_id.as_str(),
                start_date.as_str(),
                end_date.as_str(),
                template_name.as_str(),
                &escape_field(exercise_name),
                &escape_field(&muscle_groups),
                category.as_str(),
                &set.set_number.to_string(),
                &format_weight(set.weight),
                &set.reps.to_string(),
                if set.completed { "true" } else { "false" },
            ];
            lines.push(row.join(","));
        }
    }

    lines.join("\n")
}

/// `liftbook_export_<timestamp>.csv` with colons swapped for dashes so the
/// name is valid on every filesystem.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("liftbook_export_{}.csv", format_date(now)).replace(':', "-")
}

/// Writes the export into the OS temp directory.
pub fn export_to_file(store: &Store) -> Option<PathBuf> {
    export_to_dir(store, &std::env::temp_dir())
}

/// Writes the export into `dir`. Returns `None` if the file cannot be written.
pub fn export_to_dir(store: &Store, dir: &Path) -> Option<PathBuf> {
    let path = dir.join(export_filename(Utc::now()));

    match write_replacing(&path, export_csv(store).as_bytes()) {
        Ok(()) => {
            tracing::info!("Exported workout history to {}", path.display());
            Some(path)
        }
        Err(e) => {
            tracing::warn!("Failed to write export {}: {}", path.display(), e);
            None
        }
    }
}

/// Writes a temp file beside `path` and renames it over `path`.
fn write_replacing(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, LoggedSet, WorkoutTemplate};
    use chrono::TimeZone;
    use std::fs;
    use tempfile::tempdir;
    use uuid::Uuid;

    #[test]
    fn test_export_empty_store_is_header_only() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path());

        assert_eq!(export_csv(&store), HEADER);
    }

    #[test]
    fn test_export_rows() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let chest = store.muscle_groups()[0].id;
        let triceps = store.muscle_groups()[4].id;
        let bench = Exercise::new("Bench Press", vec![chest, triceps], ExerciseCategory::Barbell)
            .unwrap();
        store.add_exercise(bench.clone());
        let template = WorkoutTemplate::new("Push, Heavy", vec![bench.id]);
        let session = store.start_session(&template);
        store.add_set(session.id, LoggedSet::new(bench.id, 1, 100.0, 10, true));
        store.add_set(session.id, LoggedSet::new(bench.id, 2, 100.0, 8, false));
        store.finish_session(session.id);

        let csv = export_csv(&store);
        let lines: Vec<_> = csv.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        let expected_tail = "\"Push, Heavy\",Bench Press,Chest;Triceps,Barbell,1,100.0,10,true";
        assert!(lines[1].starts_with(&session.id.to_string()));
        assert!(lines[1].ends_with(expected_tail), "{}", lines[1]);
        assert!(lines[2].ends_with(",2,100.0,8,false"));
    }

    #[test]
    fn test_export_skips_active_sessions() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let session = store.start_free_session("Ongoing");
        store.add_set(session.id, LoggedSet::new(Uuid::new_v4(), 1, 20.0, 10, true));

        assert_eq!(export_csv(&store), HEADER);
    }

    #[test]
    fn test_export_unknown_exercise_placeholders() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let session = store.start_free_session("Free");
        store.add_set(session.id, LoggedSet::new(Uuid::new_v4(), 1, 5.0, 3, true));
        store.finish_session(session.id);

        let csv = export_csv(&store);

        assert!(csv.ends_with(",Free,Unknown Exercise,Unknown,Other,1,5.0,3,true"));
    }

    #[test]
    fn test_export_filename_has_no_colons() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            export_filename(now),
            "liftbook_export_2025-01-02T03-04-05Z.csv"
        );
    }

    #[test]
    fn test_export_to_dir_writes_file() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("store"));

        let path = export_to_dir(&store, dir.path()).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), HEADER);
    }

    #[test]
    fn test_write_replacing_swaps_in_new_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("export.csv");
        let linked = dir.path().join("linked.csv");
        fs::write(&target, "ORIGINAL").unwrap();
        fs::hard_link(&target, &linked).unwrap();

        write_replacing(&target, HEADER.as_bytes()).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), HEADER);
        assert_eq!(fs::read_to_string(&linked).unwrap(), "ORIGINAL");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 2);
    }

    #[test]
    fn test_export_to_dir_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("store"));
        let side = dir.path().join("side.txt");
        fs::write(&side, "ORIGINAL").unwrap();
        let now = Utc::now();
        for offset in 0..3 {
            let name = export_filename(now + chrono::Duration::seconds(offset));
            fs::hard_link(&side, dir.path().join(name)).unwrap();
        }

        let path = export_to_dir(&store, dir.path()).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), HEADER);
        assert_eq!(fs::read_to_string(&side).unwrap(), "ORIGINAL");
    }

    #[test]
    fn test_export_to_missing_dir_is_none() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path());

        assert!(export_to_dir(&store, &dir.path().join("nope")).is_none());
    }
}
