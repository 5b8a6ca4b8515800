use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{LoggedSet, WorkoutTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: Uuid,
    /// `None` for free sessions.
    pub template_id: Option<Uuid>,
    /// Copied when the session starts; renaming the template later does not
    /// touch past sessions.
    pub template_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sets: Vec<LoggedSet>,
}

impl WorkoutSession {
    pub fn from_template(template: &WorkoutTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            template_id: Some(template.id),
            template_name: template.name.clone(),
            start_date: Utc::now(),
            end_date: None,
            sets: Vec::new(),
        }
    }

    pub fn free(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            template_id: None,
            template_name: name.into(),
            start_date: Utc::now(),
            end_date: None,
            sets: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.end_date.map(|end| end - self.start_date)
    }
}
