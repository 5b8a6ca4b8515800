use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseCategory {
    Barbell,
    Dumbbell,
    Machine,
    Bodyweight,
    Cable,
    Other,
}

impl ExerciseCategory {
    pub const ALL: [ExerciseCategory; 6] = [
        ExerciseCategory::Barbell,
        ExerciseCategory::Dumbbell,
        ExerciseCategory::Machine,
        ExerciseCategory::Bodyweight,
        ExerciseCategory::Cable,
        ExerciseCategory::Other,
    ];

    /// Canonical label, also used as the CSV `category` column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Barbell => "Barbell",
            ExerciseCategory::Dumbbell => "Dumbbell",
            ExerciseCategory::Machine => "Machine",
            ExerciseCategory::Bodyweight => "Bodyweight",
            ExerciseCategory::Cable => "Cable",
            ExerciseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExerciseCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    /// Weak references to muscle groups. The first entry is the primary group.
    pub muscle_group_ids: Vec<Uuid>,
    pub category: ExerciseCategory,
}

impl Exercise {
    /// Builds an exercise with a fresh identity. The name is trimmed and must
    /// not end up empty.
    pub fn new(
        name: &str,
        muscle_group_ids: Vec<Uuid>,
        category: ExerciseCategory,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            muscle_group_ids,
            category,
        })
    }

    pub fn primary_muscle_group_id(&self) -> Option<Uuid> {
        self.muscle_group_ids.first().copied()
    }
}
