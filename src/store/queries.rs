use uuid::Uuid;

use super::Store;
use crate::models::{Exercise, LoggedSet, WorkoutSession, WorkoutTemplate};

pub const UNKNOWN_EXERCISE: &str = "Unknown Exercise";
pub const NO_MUSCLE_GROUP: &str = "No muscle group";
pub const OTHER_MUSCLE_GROUP: &str = "Other";

/// A finished session together with only the sets of one exercise.
#[derive(Debug, Clone)]
pub struct ExerciseHistoryEntry<'a> {
    pub session: &'a WorkoutSession,
    pub sets: Vec<&'a LoggedSet>,
}

impl Store {
    /// Finished sessions, most recent start first.
    pub fn completed_sessions(&self) -> Vec<&WorkoutSession> {
        let mut sessions: Vec<_> = self.sessions.iter().filter(|s| !s.is_active()).collect();
        sessions.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        sessions
    }

    pub fn sessions_for_exercise(&self, exercise_id: Uuid) -> Vec<ExerciseHistoryEntry<'_>> {
        self.completed_sessions()
            .into_iter()
            .filter_map(|session| {
                let sets: Vec<_> = session
                    .sets
                    .iter()
                    .filter(|s| s.exercise_id == exercise_id)
                    .collect();
                (!sets.is_empty()).then_some(ExerciseHistoryEntry { session, sets })
            })
            .collect()
    }

    pub fn valid_exercise_ids(&self, template: &WorkoutTemplate) -> Vec<Uuid> {
        template
            .exercise_ids
            .iter()
            .copied()
            .filter(|id| self.exercise(*id).is_some())
            .collect()
    }

    pub fn removed_exercise_count(&self, template: &WorkoutTemplate) -> usize {
        template.exercise_ids.len() - self.valid_exercise_ids(template).len()
    }

    pub fn exercise_name(&self, id: Uuid) -> &str {
        self.exercise(id)
            .map(|e| e.name.as_str())
            .unwrap_or(UNKNOWN_EXERCISE)
    }

    /// Names of the exercise's groups in order, skipping deleted groups.
    pub fn muscle_group_names(&self, exercise: &Exercise) -> Vec<&str> {
        exercise
            .muscle_group_ids
            .iter()
            .filter_map(|id| self.muscle_group(*id))
            .map(|g| g.name.as_str())
            .collect()
    }

    pub fn muscle_group_names_joined(&self, exercise: &Exercise) -> String {
        let names = self.muscle_group_names(exercise);
        if names.is_empty() {
            NO_MUSCLE_GROUP.to_string()
        } else {
            names.join(", ")
        }
    }

    pub fn primary_muscle_group_name(&self, exercise: &Exercise) -> &str {
        exercise
            .primary_muscle_group_id()
            .and_then(|id| self.muscle_group(id))
            .map(|g| g.name.as_str())
            .unwrap_or(OTHER_MUSCLE_GROUP)
    }
}
