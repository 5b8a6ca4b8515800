use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use super::{
    parse_date, parse_line, unescape_field, COLUMN_COUNT, HEADER, MUSCLE_GROUP_SEPARATOR,
};
use crate::error::{ImportError, RowError};
use crate::models::{Exercise, ExerciseCategory, ImportResult, LoggedSet, WorkoutSession};
use crate::store::Store;

/// A data row that passed the structural checks. `row` is the 1-based line
/// number as a spreadsheet would show it (the header is row 1).
struct CsvRow {
    row: usize,
    fields: Vec<String>,
}

/// Reads a CSV export from `path` into `store`.
pub fn import_csv(path: &Path, store: &mut Store) -> ImportResult {
    match fs::read_to_string(path) {
        Ok(content) => import_csv_str(&content, store),
        Err(e) => {
            tracing::warn!("Cannot read import file {}: {}", path.display(), e);
            ImportResult {
                errors: vec![ImportError::Unreadable(e).to_string()],
                ..Default::default()
            }
        }
    }
}

pub fn import_csv_str(content: &str, store: &mut Store) -> ImportResult {
    let mut importer = Importer {
        store,
        result: ImportResult::default(),
    };

    if let Err(e) = importer.run(content) {
        tracing::warn!("Import aborted: {}", e);
        importer.result.errors.push(e.to_string());
    }

    let result = importer.result;
    tracing::info!(
        sessions = result.sessions_imported,
        sets = result.sets_imported,
        exercises = result.exercises_created,
        skipped = result.rows_skipped,
        errors = result.errors.len(),
        "Import finished"
    );
    result
}

struct Importer<'a> {
    store: &'a mut Store,
    result: ImportResult,
}

impl Importer<'_> {
    fn run(&mut self, content: &str) -> Result<(), ImportError> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(ImportError::NoDataRows)?;
        let data: Vec<_> = lines.collect();
        if data.is_empty() {
            return Err(ImportError::NoDataRows);
        }

        // Column count only; names and order are not checked.
        let expected = HEADER.split(',').count();
        let actual = header.trim().split(',').count();
        if actual != expected {
            return Err(ImportError::HeaderMismatch { expected, actual });
        }

        for (session_id, rows) in self.group_by_session(data) {
            self.import_session(session_id, rows);
        }
        Ok(())
    }

    /// Drops malformed rows and rows of sessions already in the store, then
    /// groups the rest by session id in first-seen order.
    fn group_by_session(&mut self, data: Vec<(usize, &str)>) -> Vec<(Uuid, Vec<CsvRow>)> {
        let existing: HashSet<Uuid> = self.store.sessions().iter().map(|s| s.id).collect();
        let mut groups: Vec<(Uuid, Vec<CsvRow>)> = Vec::new();
        let mut index: HashMap<Uuid, usize> = HashMap::new();

        for (row, line) in data {
            let fields = parse_line(line);
            if fields.len() != COLUMN_COUNT {
                self.skip(RowError::FieldCount {
                    row,
                    expected: COLUMN_COUNT,
                    actual: fields.len(),
                });
                continue;
            }

            let Ok(session_id) = Uuid::parse_str(fields[0].trim()) else {
                self.skip(RowError::InvalidSessionId(row));
                continue;
            };

            // Re-importing the same export is expected; skip without a message.
            if existing.contains(&session_id) {
                self.result.rows_skipped += 1;
                continue;
            }

            let slot = *index.entry(session_id).or_insert_with(|| {
                groups.push((session_id, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(CsvRow { row, fields });
        }

        groups
    }

    fn import_session(&mut self, session_id: Uuid, rows: Vec<CsvRow>) {
        let Some(first) = rows.first() else {
            return;
        };

        let start_date = parse_date(&first.fields[1]).unwrap_or_else(Utc::now);
        let end_date = match first.fields[2].trim() {
            "" => None,
            value => parse_date(value),
        };
        let template_name = unescape_field(&first.fields[3]);

        let mut sets = Vec::with_capacity(rows.len());
        for row in &rows {
            match self.import_set(row) {
                Ok(set) => {
                    sets.push(set);
                    self.result.sets_imported += 1;
                }
                Err(e) => self.skip(e),
            }
        }

        self.store.add_session_from_import(WorkoutSession {
            id: session_id,
            template_id: None,
            template_name,
            start_date,
            end_date,
            sets,
        });
        self.result.sessions_imported += 1;
    }

    fn import_set(&mut self, row: &CsvRow) -> Result<LoggedSet, RowError> {
        let fields = &row.fields;
        let exercise_name = unescape_field(&fields[4]);
        let muscle_groups = unescape_field(&fields[5]);
        let category = fields[6]
            .trim()
            .parse()
            .unwrap_or(ExerciseCategory::Other);

        let muscle_group_ids: Vec<Uuid> = muscle_groups
            .split(MUSCLE_GROUP_SEPARATOR)
            .filter_map(|name| self.store.find_or_create_muscle_group(name))
            .map(|group| group.id)
            .collect();

        // Looked up per row so exercises created by earlier rows are reused.
        let exercise_id = match self.store.find_exercise_by_name(&exercise_name) {
            Some(exercise) => exercise.id,
            None => {
                let exercise = Exercise::new(&exercise_name, muscle_group_ids, category)
                    .map_err(|_| RowError::MissingExerciseName(row.row))?;
                let id = exercise.id;
                self.store.add_exercise_from_import(exercise);
                self.result.exercises_created += 1;
                id
            }
        };

        let (Some(set_number), Some(weight), Some(reps)) = (
            parse_count(&fields[7]),
            parse_weight(&fields[8]),
            parse_count(&fields[9]),
        ) else {
            return Err(RowError::InvalidNumbers(row.row));
        };

        let completed = fields[10].trim().eq_ignore_ascii_case("true");

        Ok(LoggedSet::new(exercise_id, set_number, weight, reps, completed))
    }

    fn skip(&mut self, error: RowError) {
        tracing::debug!("Skipping row: {}", error);
        self.result.rows_skipped += 1;
        self.result.errors.push(error.to_string());
    }
}

fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

fn parse_weight(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
}
