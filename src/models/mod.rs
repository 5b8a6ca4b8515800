pub mod exercise;
pub mod import_result;
pub mod muscle_group;
pub mod workout_log;
pub mod workout_session;
pub mod workout_template;

pub use exercise::{Exercise, ExerciseCategory};
pub use import_result::ImportResult;
pub use muscle_group::{MuscleGroup, DEFAULT_MUSCLE_GROUPS};
pub use workout_log::LoggedSet;
pub use workout_session::WorkoutSession;
pub use workout_template::WorkoutTemplate;

pub use crate::error::ValidationError;
