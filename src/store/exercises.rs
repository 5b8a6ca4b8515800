use uuid::Uuid;

use super::{Collection, Store};
use crate::models::Exercise;

impl Store {
    pub fn add_exercise(&mut self, exercise: Exercise) {
        tracing::debug!("Adding exercise {}", exercise.name);
        self.exercises.push(exercise);
        self.commit(Collection::Exercises);
    }

    pub fn update_exercise(&mut self, exercise: Exercise) -> bool {
        match self.exercises.iter_mut().find(|e| e.id == exercise.id) {
            Some(existing) => {
                *existing = exercise;
                self.commit(Collection::Exercises);
                true
            }
            None => false,
        }
    }

    /// Templates and logged sets keep referencing the deleted id.
    pub fn delete_exercise(&mut self, id: Uuid) -> bool {
        let before = self.exercises.len();
        self.exercises.retain(|e| e.id != id);
        self.commit(Collection::Exercises);
        self.exercises.len() != before
    }

    pub fn exercise(&self, id: Uuid) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn find_exercise_by_name(&self, name: &str) -> Option<&Exercise> {
        let needle = name.to_lowercase();
        self.exercises
            .iter()
            .find(|e| e.name.to_lowercase() == needle)
    }

    /// Appends without any duplicate check; the importer has already decided.
    pub fn add_exercise_from_import(&mut self, exercise: Exercise) {
        tracing::debug!("Importing exercise {}", exercise.name);
        self.exercises.push(exercise);
        self.commit(Collection::Exercises);
    }
}
