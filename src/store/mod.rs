//! In-memory workout data mirrored to a directory of JSON files.
//!
//! The in-memory collections are authoritative for the running process.
//! Every mutation synchronously saves the collection it touched; disk
//! failures are logged and otherwise ignored.

pub mod backup_file;
mod exercises;
mod muscle_groups;
mod queries;
mod sessions;
mod templates;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::models::{Exercise, MuscleGroup, WorkoutSession, WorkoutTemplate};
pub use backup_file::{BackupFile, BACKUP_SUFFIX};
pub use queries::{ExerciseHistoryEntry, NO_MUSCLE_GROUP, OTHER_MUSCLE_GROUP, UNKNOWN_EXERCISE};

pub const MUSCLE_GROUPS_FILE: &str = "muscle_groups.json";
pub const EXERCISES_FILE: &str = "exercises.json";
pub const TEMPLATES_FILE: &str = "templates.json";
pub const SESSIONS_FILE: &str = "sessions.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    MuscleGroups,
    Exercises,
    Templates,
    Sessions,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::MuscleGroups,
        Collection::Exercises,
        Collection::Templates,
        Collection::Sessions,
    ];
}

/// Sent to subscribers after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Changed(Collection),
    Reset,
}

struct StoreFiles {
    muscle_groups: BackupFile<Vec<MuscleGroup>>,
    exercises: BackupFile<Vec<Exercise>>,
    templates: BackupFile<Vec<WorkoutTemplate>>,
    sessions: BackupFile<Vec<WorkoutSession>>,
}

impl StoreFiles {
    fn new(dir: &Path) -> Self {
        Self {
            muscle_groups: BackupFile::new(dir, MUSCLE_GROUPS_FILE),
            exercises: BackupFile::new(dir, EXERCISES_FILE),
            templates: BackupFile::new(dir, TEMPLATES_FILE),
            sessions: BackupFile::new(dir, SESSIONS_FILE),
        }
    }
}

pub struct Store {
    dir: PathBuf,
    files: StoreFiles,
    muscle_groups: Vec<MuscleGroup>,
    exercises: Vec<Exercise>,
    templates: Vec<WorkoutTemplate>,
    sessions: Vec<WorkoutSession>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl Store {
    /// Opens (or initializes) the store rooted at `dir`. Never fails: anything
    /// that cannot be read is treated as empty.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create store directory {}: {}", dir.display(), e);
        }

        let files = StoreFiles::new(&dir);
        let mut store = Self {
            muscle_groups: files.muscle_groups.load().unwrap_or_default(),
            exercises: files.exercises.load().unwrap_or_default(),
            templates: files.templates.load().unwrap_or_default(),
            sessions: files.sessions.load().unwrap_or_default(),
            files,
            dir,
            subscribers: Vec::new(),
        };

        if store.muscle_groups.is_empty() {
            tracing::info!("Seeding default muscle groups");
            store.muscle_groups = MuscleGroup::defaults();
            store.save(Collection::MuscleGroups);
        }

        tracing::debug!(
            "Opened store at {}: {} muscle groups, {} exercises, {} templates, {} sessions",
            store.dir.display(),
            store.muscle_groups.len(),
            store.exercises.len(),
            store.templates.len(),
            store.sessions.len()
        );

        store
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn muscle_groups(&self) -> &[MuscleGroup] {
        &self.muscle_groups
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn templates(&self) -> &[WorkoutTemplate] {
        &self.templates
    }

    pub fn sessions(&self) -> &[WorkoutSession] {
        &self.sessions
    }

    /// Registers a listener. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Wipes every collection and reseeds the default muscle groups.
    pub fn delete_all_data(&mut self) {
        tracing::warn!("Deleting all data in {}", self.dir.display());

        self.muscle_groups = MuscleGroup::defaults();
        self.exercises.clear();
        self.templates.clear();
        self.sessions.clear();

        for collection in Collection::ALL {
            self.save(collection);
        }
        self.notify(StoreEvent::Reset);
    }

    /// Persists `collection` and tells subscribers about it.
    fn commit(&mut self, collection: Collection) {
        self.save(collection);
        self.notify(StoreEvent::Changed(collection));
    }

    fn save(&self, collection: Collection) {
        let result = match collection {
            Collection::MuscleGroups => self.files.muscle_groups.save(&self.muscle_groups),
            Collection::Exercises => self.files.exercises.save(&self.exercises),
            Collection::Templates => self.files.templates.save(&self.templates),
            Collection::Sessions => self.files.sessions.save(&self.sessions),
        };

        if let Err(e) = result {
            tracing::warn!("Failed to persist {:?}: {}", collection, e);
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
