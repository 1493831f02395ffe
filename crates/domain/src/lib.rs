#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod calendar;
mod error;
mod exercise;
mod name;
mod service;
mod session;
mod template;
mod workout;

pub use calendar::{CALENDAR_CELLS, CalendarDay, build_calendar_days, current_streak, month_label};
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use exercise::{
    Exercise, ExerciseID, ExerciseRepository, ExerciseService, MuscleGroup, MuscleGroupError,
};
pub use name::{Name, NameError};
pub use service::Service;
pub use session::{ActiveExercise, ActiveSet, SessionStore, SetField, SetID, WorkoutDraft};
pub use template::{
    NewTemplateEntry, Template, TemplateDetail, TemplateEntry, TemplateID, TemplateRepository,
    TemplateService,
};
pub use workout::{
    DailyVolume, MonthlyStats, PersonalRecord, Reps, RepsError, Weight, WeightError, Workout,
    WorkoutDetail, WorkoutID, WorkoutRepository, WorkoutService, WorkoutSet, WorkoutSetDetail,
    WorkoutSummary,
};
