use uuid::Uuid;

use super::{Collection, Store};
use crate::models::MuscleGroup;

impl Store {
    pub fn add_muscle_group(&mut self, group: MuscleGroup) {
        tracing::debug!("Adding muscle group {}", group.name);
        self.muscle_groups.push(group);
        self.commit(Collection::MuscleGroups);
    }

    /// Replaces the group with the same id. Returns `false` if none matched.
    pub fn update_muscle_group(&mut self, group: MuscleGroup) -> bool {
        match self.muscle_groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => {
                *existing = group;
                self.commit(Collection::MuscleGroups);
                true
            }
            None => false,
        }
    }

    /// Exercises referencing the group keep the dangling id.
    pub fn delete_muscle_group(&mut self, id: Uuid) -> bool {
        let before = self.muscle_groups.len();
        self.muscle_groups.retain(|g| g.id != id);
        self.commit(Collection::MuscleGroups);
        self.muscle_groups.len() != before
    }

    pub fn muscle_group(&self, id: Uuid) -> Option<&MuscleGroup> {
        self.muscle_groups.iter().find(|g| g.id == id)
    }

    /// Case-insensitive lookup by trimmed name, creating and persisting the
    /// group when no match exists. A blank name yields `None`.
    pub fn find_or_create_muscle_group(&mut self, name: &str) -> Option<MuscleGroup> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let needle = name.to_lowercase();
        if let Some(existing) = self
            .muscle_groups
            .iter()
            .find(|g| g.name.to_lowercase() == needle)
        {
            return Some(existing.clone());
        }

        let group = MuscleGroup::new(name);
        self.add_muscle_group(group.clone());
        Some(group)
    }
}
