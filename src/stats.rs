//! Aggregates over logged sets: volume, rep totals, best lifts.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{LoggedSet, WorkoutSession};
use crate::store::Store;

pub fn total_reps<'a>(sets: impl IntoIterator<Item = &'a LoggedSet>) -> u64 {
    sets.into_iter().map(|s| u64::from(s.reps)).sum()
}

/// Sum of weight × reps.
pub fn total_volume<'a>(sets: impl IntoIterator<Item = &'a LoggedSet>) -> f64 {
    sets.into_iter().map(LoggedSet::volume).sum()
}

/// Number the next set of `exercise_id` in `session` should get.
pub fn next_set_number(session: &WorkoutSession, exercise_id: Uuid) -> u32 {
    session
        .sets
        .iter()
        .filter(|s| s.exercise_id == exercise_id)
        .map(|s| s.set_number)
        .max()
        .map_or(1, |n| n + 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    pub set_count: usize,
    pub completed_sets: usize,
    pub total_reps: u64,
    pub total_volume: f64,
    pub duration: Option<Duration>,
}

impl SessionStats {
    pub fn of(session: &WorkoutSession) -> Self {
        Self {
            set_count: session.sets.len(),
            completed_sets: session.sets.iter().filter(|s| s.completed).count(),
            total_reps: total_reps(&session.sets),
            total_volume: total_volume(&session.sets),
            duration: session.duration(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalBest {
    pub weight: f64,
    pub reps: u32,
    pub session_id: Uuid,
    pub date: DateTime<Utc>,
}

/// Heaviest completed set of the exercise across finished sessions. Ties go
/// to the set with more reps, then to the earliest session.
pub fn personal_best(store: &Store, exercise_id: Uuid) -> Option<PersonalBest> {
    let mut best: Option<PersonalBest> = None;

    // completed_sessions is newest first; walk oldest first so ties keep the
    // earliest date.
    for entry in store.sessions_for_exercise(exercise_id).into_iter().rev() {
        for set in entry.sets.iter().filter(|s| s.completed) {
            let better = best.as_ref().map_or(true, |b| {
                set.weight > b.weight || (set.weight == b.weight && set.reps > b.reps)
            });
            if better {
                best = Some(PersonalBest {
                    weight: set.weight,
                    reps: set.reps,
                    session_id: entry.session.id,
                    date: entry.session.start_date,
                });
            }
        }
    }

    best
}

/// Totals across all finished sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySummary {
    pub sessions: usize,
    pub sets: usize,
    pub total_reps: u64,
    pub total_volume: f64,
}

pub fn history_summary(store: &Store) -> HistorySummary {
    store
        .completed_sessions()
        .into_iter()
        .fold(HistorySummary::default(), |mut acc, session| {
            acc.sessions += 1;
            acc.sets += session.sets.len();
            acc.total_reps += total_reps(&session.sets);
            acc.total_volume += total_volume(&session.sets);
            acc
        })
}
