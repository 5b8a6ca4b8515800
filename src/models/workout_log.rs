use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged set inside a workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    pub id: Uuid,
    /// Weak reference; the exercise may have been deleted since.
    pub exercise_id: Uuid,
    /// 1-based, counted per exercise within a session.
    pub set_number: u32,
    pub weight: f64,
    pub reps: u32,
    pub completed: bool,
}

impl LoggedSet {
    pub fn new(exercise_id: Uuid, set_number: u32, weight: f64, reps: u32, completed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id,
            set_number,
            weight,
            reps,
            completed,
        }
    }

    /// An empty, not yet completed set, as created when a lifter taps "add set".
    pub fn blank(exercise_id: Uuid, set_number: u32) -> Self {
        Self::new(exercise_id, set_number, 0.0, 0, false)
    }

    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_set_defaults() {
        let set = LoggedSet::blank(Uuid::new_v4(), 1);

        assert_eq!(set.weight, 0.0);
        assert_eq!(set.reps, 0);
        assert!(!set.completed);
    }

    #[test]
    fn test_volume() {
        let set = LoggedSet::new(Uuid::new_v4(), 2, 62.5, 8, true);
        assert_eq!(set.volume(), 500.0);
    }
}
