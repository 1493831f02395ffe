use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{
    CalendarDay, CreateError, DeleteError, ExerciseID, MuscleGroup, Name, ReadError, TemplateID,
    UpdateError, WorkoutDraft,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn save_workout(&self, draft: WorkoutDraft) -> Result<Workout, CreateError>;
    async fn get_workout_history(&self, limit: u32) -> Result<Vec<WorkoutSummary>, ReadError>;
    async fn get_workout(&self, id: WorkoutID) -> Result<WorkoutDetail, ReadError>;
    async fn rename_workout(&self, id: WorkoutID, name: Option<Name>)
    -> Result<WorkoutID, UpdateError>;
    async fn replace_workout_sets(
        &self,
        id: WorkoutID,
        sets: Vec<WorkoutSet>,
    ) -> Result<WorkoutID, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
    async fn get_personal_records(&self) -> Result<Vec<PersonalRecord>, ReadError>;
    async fn get_exercise_volume(
        &self,
        exercise_id: ExerciseID,
        days: u32,
    ) -> Result<Vec<DailyVolume>, ReadError>;
    async fn get_monthly_stats(&self) -> Result<MonthlyStats, ReadError>;
    async fn get_calendar_month(&self, year: i32, month: u32)
    -> Result<Vec<CalendarDay>, ReadError>;
    async fn get_current_streak(&self) -> Result<u32, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn create_workout(
        &self,
        template_id: Option<TemplateID>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        sets: Vec<WorkoutSet>,
    ) -> Result<Workout, CreateError>;
    async fn read_workouts(&self, limit: u32) -> Result<Vec<WorkoutSummary>, ReadError>;
    async fn read_workout(&self, id: WorkoutID) -> Result<WorkoutDetail, ReadError>;
    async fn modify_workout_name(
        &self,
        id: WorkoutID,
        name: Option<Name>,
    ) -> Result<WorkoutID, UpdateError>;
    async fn replace_workout_sets(
        &self,
        id: WorkoutID,
        sets: Vec<WorkoutSet>,
    ) -> Result<WorkoutID, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
    async fn read_personal_records(&self) -> Result<Vec<PersonalRecord>, ReadError>;
    async fn read_exercise_volume(
        &self,
        exercise_id: ExerciseID,
        days: u32,
    ) -> Result<Vec<DailyVolume>, ReadError>;
    async fn read_monthly_stats(&self) -> Result<MonthlyStats, ReadError>;
    async fn read_workout_dates(
        &self,
        year: i32,
        month: u32,
    ) -> Result<BTreeMap<NaiveDate, WorkoutID>, ReadError>;
    async fn read_all_workout_dates(&self) -> Result<Vec<NaiveDate>, ReadError>;
}

/// A completed, persisted workout. Created only when a session is finished,
/// never when it is started.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub template_id: Option<TemplateID>,
    pub name: Option<Name>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSet {
    pub exercise_id: ExerciseID,
    pub set_number: u32,
    pub weight: Weight,
    pub reps: Reps,
}

impl WorkoutSet {
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.weight) * f64::from(u32::from(self.reps))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub id: WorkoutID,
    pub name: Option<Name>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub exercise_count: u32,
    pub total_volume: f64,
}

impl WorkoutSummary {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_ref().map_or("Freeform", Name::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDetail {
    pub id: WorkoutID,
    pub template_id: Option<TemplateID>,
    pub name: Option<Name>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub sets: Vec<WorkoutSetDetail>,
}

impl WorkoutDetail {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_ref().map_or("Freeform", Name::as_str)
    }

    #[must_use]
    pub fn exercises(&self) -> BTreeSet<ExerciseID> {
        self.sets.iter().map(|s| s.set.exercise_id).collect()
    }

    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(|s| s.set.volume()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSetDetail {
    pub exercise_name: Name,
    pub muscle_group: Option<MuscleGroup>,
    pub set: WorkoutSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub max_weight: Weight,
    pub max_weight_reps: Reps,
    pub max_volume: f64,
    pub max_volume_weight: Weight,
    pub max_volume_reps: Reps,
    pub achieved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub workout_count: u32,
    pub total_volume: f64,
    pub top_muscle_group: Option<MuscleGroup>,
}

/// Weight of a persisted set in kg. Free-form session input only becomes a
/// `Weight` if it parses as a positive finite number.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(WeightError::NotPositive);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a positive number")]
    NotPositive,
    #[error("Weight must be a decimal number")]
    ParseError,
}

/// Repetition count of a persisted set.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value == 0 {
            return Err(RepsError::NotPositive);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be positive")]
    NotPositive,
    #[error("Reps must be an integer")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("100", Ok(Weight(100.0)))]
    #[case("12.5", Ok(Weight(12.5)))]
    #[case(" 60 ", Ok(Weight(60.0)))]
    #[case("0", Err(WeightError::NotPositive))]
    #[case("-5", Err(WeightError::NotPositive))]
    #[case("inf", Err(WeightError::NotPositive))]
    #[case("", Err(WeightError::ParseError))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[rstest]
    #[case("10", Ok(Reps(10)))]
    #[case(" 8 ", Ok(Reps(8)))]
    #[case("0", Err(RepsError::NotPositive))]
    #[case("-3", Err(RepsError::ParseError))]
    #[case("2.5", Err(RepsError::ParseError))]
    #[case("", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[test]
    fn test_workout_set_volume() {
        let set = WorkoutSet {
            exercise_id: 1.into(),
            set_number: 1,
            weight: Weight::new(62.5).unwrap(),
            reps: Reps::new(8).unwrap(),
        };
        assert_approx_eq!(set.volume(), 500.0);
    }

    #[test]
    fn test_workout_detail_derived_values() {
        let detail = WorkoutDetail {
            id: 1.into(),
            template_id: None,
            name: None,
            started_at: Utc::now(),
            finished_at: Utc::now(),
            sets: vec![
                WorkoutSetDetail {
                    exercise_name: Name::new("Bench Press").unwrap(),
                    muscle_group: Some(MuscleGroup::Chest),
                    set: WorkoutSet {
                        exercise_id: 1.into(),
                        set_number: 1,
                        weight: Weight::new(100.0).unwrap(),
                        reps: Reps::new(10).unwrap(),
                    },
                },
                WorkoutSetDetail {
                    exercise_name: Name::new("Squat").unwrap(),
                    muscle_group: Some(MuscleGroup::Legs),
                    set: WorkoutSet {
                        exercise_id: 2.into(),
                        set_number: 1,
                        weight: Weight::new(50.0).unwrap(),
                        reps: Reps::new(5).unwrap(),
                    },
                },
            ],
        };
        assert_eq!(detail.display_name(), "Freeform");
        assert_eq!(detail.exercises(), BTreeSet::from([1.into(), 2.into()]));
        assert_approx_eq!(detail.total_volume(), 1250.0);
    }

    #[test]
    fn test_workout_summary_display_name() {
        let mut summary = WorkoutSummary {
            id: 1.into(),
            name: None,
            started_at: Utc::now(),
            finished_at: Utc::now(),
            exercise_count: 0,
            total_volume: 0.0,
        };
        assert_eq!(summary.display_name(), "Freeform");
        summary.name = Some(Name::new("Push Day").unwrap());
        assert_eq!(summary.display_name(), "Push Day");
    }

    #[test]
    fn test_workout_id_nil() {
        assert!(WorkoutID::nil().is_nil());
        assert_eq!(WorkoutID::nil(), WorkoutID::default());
    }
}
