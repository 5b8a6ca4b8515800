use chrono::Utc;
use uuid::Uuid;

use super::{Collection, Store};
use crate::models::{LoggedSet, WorkoutSession, WorkoutTemplate};

impl Store {
    /// The first unfinished session, if any. Callers are expected to keep at
    /// most one session active; the store does not enforce it.
    pub fn active_session(&self) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.is_active())
    }

    pub fn session(&self, id: Uuid) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn start_session(&mut self, template: &WorkoutTemplate) -> WorkoutSession {
        self.push_new_session(WorkoutSession::from_template(template))
    }

    pub fn start_free_session(&mut self, name: &str) -> WorkoutSession {
        self.push_new_session(WorkoutSession::free(name))
    }

    fn push_new_session(&mut self, session: WorkoutSession) -> WorkoutSession {
        if let Some(active) = self.active_session() {
            tracing::warn!(
                "Starting session {} while session {} is still active",
                session.id,
                active.id
            );
        }
        tracing::debug!("Starting session {} ({})", session.id, session.template_name);

        self.sessions.push(session.clone());
        self.commit(Collection::Sessions);
        session
    }

    pub fn update_session(&mut self, session: WorkoutSession) -> bool {
        match self.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => {
                *existing = session;
                self.commit(Collection::Sessions);
                true
            }
            None => false,
        }
    }

    /// Stamps the end date with the current time.
    pub fn finish_session(&mut self, id: Uuid) -> bool {
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => {
                session.end_date = Some(Utc::now());
                self.commit(Collection::Sessions);
                true
            }
            None => false,
        }
    }

    pub fn delete_session(&mut self, id: Uuid) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        self.commit(Collection::Sessions);
        self.sessions.len() != before
    }

    pub fn add_set(&mut self, session_id: Uuid, set: LoggedSet) -> bool {
        match self.sessions.iter_mut().find(|s| s.id == session_id) {
            Some(session) => {
                session.sets.push(set);
                self.commit(Collection::Sessions);
                true
            }
            None => false,
        }
    }

    pub fn update_set(&mut self, session_id: Uuid, set: LoggedSet) -> bool {
        let slot = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .and_then(|s| s.sets.iter_mut().find(|existing| existing.id == set.id));

        match slot {
            Some(existing) => {
                *existing = set;
                self.commit(Collection::Sessions);
                true
            }
            None => false,
        }
    }

    pub fn delete_set(&mut self, session_id: Uuid, set_id: Uuid) -> bool {
        match self.sessions.iter_mut().find(|s| s.id == session_id) {
            Some(session) => {
                let before = session.sets.len();
                session.sets.retain(|s| s.id != set_id);
                let removed = session.sets.len() != before;
                self.commit(Collection::Sessions);
                removed
            }
            None => false,
        }
    }

    /// Appends a session parsed from a CSV file, keeping its original id.
    pub fn add_session_from_import(&mut self, session: WorkoutSession) {
        tracing::debug!("Importing session {}", session.id);
        self.sessions.push(session);
        self.commit(Collection::Sessions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_start_session_from_template() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let template = WorkoutTemplate::new("Leg Day", vec![]);

        let session = store.start_session(&template);

        assert_eq!(store.sessions().len(), 1);
        assert_eq!(session.template_name, "Leg Day");
        assert_eq!(session.template_id, Some(template.id));
        assert_eq!(store.active_session().map(|s| s.id), Some(session.id));
    }

    #[test]
    fn test_finish_session_clears_active() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let session = store.start_free_session("Quick Pump");

        assert!(store.finish_session(session.id));

        assert!(store.active_session().is_none());
        assert!(store.session(session.id).unwrap().end_date.is_some());
        assert!(!store.finish_session(Uuid::new_v4()));
    }

    #[test]
    fn test_second_active_session_is_not_rejected() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let first = store.start_free_session("A");
        store.start_free_session("B");

        assert_eq!(store.sessions().len(), 2);
        assert_eq!(store.active_session().map(|s| s.id), Some(first.id));
    }

    #[test]
    fn test_set_crud() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let session = store.start_free_session("Test");
        let mut set = LoggedSet::new(Uuid::new_v4(), 1, 100.0, 10, false);

        assert!(store.add_set(session.id, set.clone()));

        set.weight = 110.0;
        set.completed = true;
        assert!(store.update_set(session.id, set.clone()));
        let stored = &store.session(session.id).unwrap().sets[0];
        assert_eq!(stored.weight, 110.0);
        assert!(stored.completed);

        assert!(store.delete_set(session.id, set.id));
        assert!(store.session(session.id).unwrap().sets.is_empty());
    }

    #[test]
    fn test_set_ops_on_missing_session_are_noops() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let set = LoggedSet::blank(Uuid::new_v4(), 1);

        assert!(!store.add_set(Uuid::new_v4(), set.clone()));
        assert!(!store.update_set(Uuid::new_v4(), set.clone()));
        assert!(!store.delete_set(Uuid::new_v4(), set.id));
    }

    #[test]
    fn test_sessions_persist() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path());
        let session = store.start_free_session("Pull");
        store.add_set(session.id, LoggedSet::new(Uuid::new_v4(), 1, 140.0, 5, true));
        store.finish_session(session.id);

        let reopened = Store::open(dir.path());
        let loaded = reopened.session(session.id).unwrap();
        assert_eq!(loaded.sets.len(), 1);
        assert_eq!(loaded.sets[0].weight, 140.0);
        assert!(!loaded.is_active());
    }
}
