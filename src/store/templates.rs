use uuid::Uuid;

use super::{Collection, Store};
use crate::models::WorkoutTemplate;

impl Store {
    pub fn add_template(&mut self, template: WorkoutTemplate) {
        tracing::debug!("Adding template {}", template.name);
        self.templates.push(template);
        self.commit(Collection::Templates);
    }

    pub fn update_template(&mut self, template: WorkoutTemplate) -> bool {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => {
                *existing = template;
                self.commit(Collection::Templates);
                true
            }
            None => false,
        }
    }

    pub fn delete_template(&mut self, id: Uuid) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        self.commit(Collection::Templates);
        self.templates.len() != before
    }

    pub fn template(&self, id: Uuid) -> Option<&WorkoutTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}
