use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: Uuid,
    pub name: String,
    /// Ordered, possibly repeating, weak references to exercises.
    #[serde(default)]
    pub exercise_ids: Vec<Uuid>,
}

impl WorkoutTemplate {
    pub fn new(name: impl Into<String>, exercise_ids: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            exercise_ids,
        }
    }
}
