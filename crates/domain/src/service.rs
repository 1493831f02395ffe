use chrono::Utc;
use log::{debug, error};

use crate::{
    CalendarDay, CreateError, DailyVolume, DeleteError, Exercise, ExerciseID, ExerciseRepository,
    ExerciseService, MonthlyStats, MuscleGroup, Name, NewTemplateEntry, PersonalRecord, ReadError,
    Template, TemplateDetail, TemplateID, TemplateRepository, TemplateService, UpdateError,
    Workout, WorkoutDetail, WorkoutDraft, WorkoutID, WorkoutRepository, WorkoutService,
    WorkoutSet, WorkoutSummary, build_calendar_days, current_streak,
};

/// Gateway between the screens and a repository. Every failed call is
/// logged once and handed back to the caller unchanged; retrying is the
/// user's decision.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Busy) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn search_exercises(&self, query: &str) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.search_exercises(query),
            ReadError,
            "search",
            "exercises"
        )
    }

    async fn create_exercise(
        &self,
        name: Name,
        muscle_group: Option<MuscleGroup>,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository.create_exercise(name, muscle_group),
            CreateError,
            "create",
            "exercise"
        )
    }
}

impl<R: TemplateRepository> TemplateService for Service<R> {
    async fn get_templates(&self) -> Result<Vec<Template>, ReadError> {
        log_on_error!(
            self.repository.read_templates(),
            ReadError,
            "get",
            "templates"
        )
    }

    async fn get_template(&self, id: TemplateID) -> Result<TemplateDetail, ReadError> {
        log_on_error!(
            self.repository.read_template(id),
            ReadError,
            "get",
            "template"
        )
    }

    async fn create_template(
        &self,
        name: Name,
        entries: Vec<NewTemplateEntry>,
    ) -> Result<TemplateID, CreateError> {
        log_on_error!(
            self.repository.create_template(name, entries),
            CreateError,
            "create",
            "template"
        )
    }

    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
        log_on_error!(
            self.repository.delete_template(id),
            DeleteError,
            "delete",
            "template"
        )
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn save_workout(&self, draft: WorkoutDraft) -> Result<Workout, CreateError> {
        let sets = draft.sets();
        log_on_error!(
            self.repository
                .create_workout(draft.template_id, draft.started_at, Utc::now(), sets),
            CreateError,
            "save",
            "workout"
        )
    }

    async fn get_workout_history(&self, limit: u32) -> Result<Vec<WorkoutSummary>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(limit),
            ReadError,
            "get",
            "workout history"
        )
    }

    async fn get_workout(&self, id: WorkoutID) -> Result<WorkoutDetail, ReadError> {
        log_on_error!(self.repository.read_workout(id), ReadError, "get", "workout")
    }

    async fn rename_workout(
        &self,
        id: WorkoutID,
        name: Option<Name>,
    ) -> Result<WorkoutID, UpdateError> {
        log_on_error!(
            self.repository.modify_workout_name(id, name),
            UpdateError,
            "rename",
            "workout"
        )
    }

    async fn replace_workout_sets(
        &self,
        id: WorkoutID,
        sets: Vec<WorkoutSet>,
    ) -> Result<WorkoutID, UpdateError> {
        log_on_error!(
            self.repository.replace_workout_sets(id, sets),
            UpdateError,
            "replace",
            "workout sets"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }

    async fn get_personal_records(&self) -> Result<Vec<PersonalRecord>, ReadError> {
        log_on_error!(
            self.repository.read_personal_records(),
            ReadError,
            "get",
            "personal records"
        )
    }

    async fn get_exercise_volume(
        &self,
        exercise_id: ExerciseID,
        days: u32,
    ) -> Result<Vec<DailyVolume>, ReadError> {
        log_on_error!(
            self.repository.read_exercise_volume(exercise_id, days),
            ReadError,
            "get",
            "exercise volume"
        )
    }

    async fn get_monthly_stats(&self) -> Result<MonthlyStats, ReadError> {
        log_on_error!(
            self.repository.read_monthly_stats(),
            ReadError,
            "get",
            "monthly stats"
        )
    }

    async fn get_calendar_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarDay>, ReadError> {
        let workouts = log_on_error!(
            self.repository.read_workout_dates(year, month),
            ReadError,
            "get",
            "workout dates"
        )?;
        Ok(build_calendar_days(
            year,
            month,
            &workouts,
            Utc::now().date_naive(),
        ))
    }

    async fn get_current_streak(&self) -> Result<u32, ReadError> {
        let dates = log_on_error!(
            self.repository.read_all_workout_dates(),
            ReadError,
            "get",
            "workout dates"
        )?;
        Ok(current_streak(&dates, Utc::now().date_naive()))
    }
}
