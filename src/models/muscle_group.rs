use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Names seeded into an empty store. Order matters: the first entry is the
/// default primary group offered when building a new exercise.
pub const DEFAULT_MUSCLE_GROUPS: &[&str] = &[
    "Chest",
    "Back",
    "Shoulders",
    "Biceps",
    "Triceps",
    "Legs",
    "Glutes",
    "Core",
    "Full Body",
    "Cardio",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroup {
    pub id: Uuid,
    pub name: String,
}

impl MuscleGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn defaults() -> Vec<MuscleGroup> {
        DEFAULT_MUSCLE_GROUPS
            .iter()
            .map(|name| MuscleGroup::new(*name))
            .collect()
    }
}
