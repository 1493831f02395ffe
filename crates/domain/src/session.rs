use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use derive_more::Display;

use crate::{ExerciseID, Name, Reps, TemplateID, Weight, WorkoutSet};

/// Identifier of a set within the active session. Assigned from a monotonic
/// per-store counter and never persisted.
#[derive(Debug, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetID(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Weight,
    Reps,
}

/// Set of the active session. Weight and reps are kept as entered and only
/// validated when the session is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSet {
    pub id: SetID,
    pub weight: String,
    pub reps: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveExercise {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub sets: Vec<ActiveSet>,
}

/// The single in-progress, unpersisted workout.
///
/// All mutations run synchronously to completion on the caller's thread.
/// Observers are notified after every state change. Starting a new session
/// overwrites whatever was there before.
///
/// The start timestamp is stamped lazily by the first meaningful interaction
/// (adding an exercise or set, editing or completing a set), so time spent
/// picking a template does not count towards the workout duration.
#[derive(Default)]
pub struct SessionStore {
    active: bool,
    template_id: Option<TemplateID>,
    started_at: Option<DateTime<Utc>>,
    exercises: Vec<ActiveExercise>,
    next_set_id: u64,
    observers: Vec<Box<dyn Fn()>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn template_id(&self) -> Option<TemplateID> {
        self.template_id
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn exercises(&self) -> &[ActiveExercise] {
        &self.exercises
    }

    pub fn subscribe(&mut self, observer: impl Fn() + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn start(&mut self, template_id: Option<TemplateID>) {
        self.active = true;
        self.template_id = template_id;
        self.started_at = None;
        self.exercises.clear();
        self.notify();
    }

    pub fn add_exercise(
        &mut self,
        exercise_id: ExerciseID,
        exercise_name: Name,
        target_sets: u32,
        target_reps: u32,
    ) {
        let prefilled_reps = if target_reps > 0 {
            target_reps.to_string()
        } else {
            String::new()
        };
        let sets = (0..target_sets.max(1))
            .map(|_| self.new_set(prefilled_reps.clone()))
            .collect();
        self.exercises.push(ActiveExercise {
            exercise_id,
            exercise_name,
            sets,
        });
        self.touch();
        self.notify();
    }

    pub fn remove_exercise(&mut self, exercise_id: ExerciseID) {
        let len = self.exercises.len();
        self.exercises.retain(|e| e.exercise_id != exercise_id);
        if self.exercises.len() != len {
            self.notify();
        }
    }

    pub fn add_set(&mut self, exercise_id: ExerciseID) {
        let indices = self
            .exercises
            .iter()
            .enumerate()
            .filter(|(_, e)| e.exercise_id == exercise_id)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        if indices.is_empty() {
            return;
        }
        for i in indices {
            let set = self.new_set(String::new());
            self.exercises[i].sets.push(set);
        }
        self.touch();
        self.notify();
    }

    pub fn remove_set(&mut self, exercise_id: ExerciseID, set_id: SetID) {
        let mut changed = false;
        for exercise in &mut self.exercises {
            if exercise.exercise_id != exercise_id {
                continue;
            }
            let len = exercise.sets.len();
            exercise.sets.retain(|s| s.id != set_id);
            changed |= exercise.sets.len() != len;
        }
        if changed {
            self.notify();
        }
    }

    pub fn update_set(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
        field: SetField,
        value: &str,
    ) {
        let mut changed = false;
        for exercise in &mut self.exercises {
            if exercise.exercise_id != exercise_id {
                continue;
            }
            for set in &mut exercise.sets {
                if set.id != set_id {
                    continue;
                }
                match field {
                    SetField::Weight => set.weight = value.to_string(),
                    SetField::Reps => set.reps = value.to_string(),
                }
                changed = true;
            }
        }
        if changed {
            self.touch();
            self.notify();
        }
    }

    pub fn toggle_set_complete(&mut self, exercise_id: ExerciseID, set_id: SetID) {
        let mut changed = false;
        for exercise in &mut self.exercises {
            if exercise.exercise_id != exercise_id {
                continue;
            }
            for set in &mut exercise.sets {
                if set.id == set_id {
                    set.completed = !set.completed;
                    changed = true;
                }
            }
        }
        if changed {
            self.touch();
            self.notify();
        }
    }

    /// End the session and hand out a snapshot for persistence. A session
    /// that never saw a meaningful interaction gets the current time as its
    /// start.
    pub fn finish(&mut self) -> WorkoutDraft {
        let draft = WorkoutDraft {
            template_id: self.template_id,
            started_at: self.started_at.unwrap_or_else(Utc::now),
            exercises: std::mem::take(&mut self.exercises),
        };
        self.reset();
        draft
    }

    /// End the session without keeping anything.
    pub fn discard(&mut self) {
        self.exercises.clear();
        self.reset();
    }

    fn reset(&mut self) {
        self.active = false;
        self.template_id = None;
        self.started_at = None;
        self.notify();
    }

    fn touch(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }
    }

    fn new_set(&mut self, reps: String) -> ActiveSet {
        self.next_set_id += 1;
        ActiveSet {
            id: SetID(self.next_set_id),
            weight: String::new(),
            reps,
            completed: false,
        }
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer();
        }
    }
}

/// Snapshot returned by [`SessionStore::finish`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub template_id: Option<TemplateID>,
    pub started_at: DateTime<Utc>,
    pub exercises: Vec<ActiveExercise>,
}

impl WorkoutDraft {
    /// The sets eligible for persistence: completed, with a weight that
    /// parses as a positive number and reps that parse as a positive
    /// integer. Everything else is silently dropped. Eligible sets are
    /// renumbered 1..N per exercise in their original order.
    #[must_use]
    pub fn sets(&self) -> Vec<WorkoutSet> {
        let mut set_numbers: BTreeMap<ExerciseID, u32> = BTreeMap::new();
        let mut result = Vec::new();
        for exercise in &self.exercises {
            for set in &exercise.sets {
                if !set.completed {
                    continue;
                }
                let (Ok(weight), Ok(reps)) = (
                    Weight::try_from(set.weight.as_str()),
                    Reps::try_from(set.reps.as_str()),
                ) else {
                    continue;
                };
                let set_number = set_numbers.entry(exercise.exercise_id).or_insert(0);
                *set_number += 1;
                result.push(WorkoutSet {
                    exercise_id: exercise.exercise_id,
                    set_number: *set_number,
                    weight,
                    reps,
                });
            }
        }
        result
    }
}
