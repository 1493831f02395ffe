use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, DeleteError, ExerciseID, MuscleGroup, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait TemplateService {
    async fn get_templates(&self) -> Result<Vec<Template>, ReadError>;
    async fn get_template(&self, id: TemplateID) -> Result<TemplateDetail, ReadError>;
    async fn create_template(
        &self,
        name: Name,
        entries: Vec<NewTemplateEntry>,
    ) -> Result<TemplateID, CreateError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait TemplateRepository {
    async fn read_templates(&self) -> Result<Vec<Template>, ReadError>;
    async fn read_template(&self, id: TemplateID) -> Result<TemplateDetail, ReadError>;
    async fn create_template(
        &self,
        name: Name,
        entries: Vec<NewTemplateEntry>,
    ) -> Result<TemplateID, CreateError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

/// A reusable prescription of exercises with target sets and reps.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: TemplateID,
    pub name: Name,
    pub created_at: DateTime<Utc>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateID(Uuid);

impl TemplateID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TemplateID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TemplateID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDetail {
    pub template: Template,
    pub entries: Vec<TemplateEntry>,
}

impl TemplateDetail {
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.entries.iter().map(|e| e.target_sets).sum()
    }

    #[must_use]
    pub fn exercises(&self) -> BTreeSet<ExerciseID> {
        self.entries.iter().map(|e| e.exercise_id).collect()
    }
}

/// Entry of a template, ordered by its position in `TemplateDetail::entries`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub muscle_group: Option<MuscleGroup>,
    pub target_sets: u32,
    pub target_reps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTemplateEntry {
    pub exercise_id: ExerciseID,
    pub target_sets: u32,
    pub target_reps: u32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static TEMPLATE_DETAIL: std::sync::LazyLock<TemplateDetail> =
        std::sync::LazyLock::new(|| TemplateDetail {
            template: Template {
                id: 1.into(),
                name: Name::new("Push Day").unwrap(),
                created_at: Utc::now(),
            },
            entries: vec![
                TemplateEntry {
                    exercise_id: 1.into(),
                    exercise_name: Name::new("Bench Press").unwrap(),
                    muscle_group: Some(MuscleGroup::Chest),
                    target_sets: 3,
                    target_reps: 8,
                },
                TemplateEntry {
                    exercise_id: 2.into(),
                    exercise_name: Name::new("Overhead Press").unwrap(),
                    muscle_group: Some(MuscleGroup::Shoulders),
                    target_sets: 2,
                    target_reps: 10,
                },
                TemplateEntry {
                    exercise_id: 1.into(),
                    exercise_name: Name::new("Bench Press").unwrap(),
                    muscle_group: Some(MuscleGroup::Chest),
                    target_sets: 1,
                    target_reps: 5,
                },
            ],
        });

    #[test]
    fn test_template_detail_num_sets() {
        assert_eq!(TEMPLATE_DETAIL.num_sets(), 6);
    }

    #[test]
    fn test_template_detail_exercises() {
        assert_eq!(
            TEMPLATE_DETAIL.exercises(),
            BTreeSet::from([1.into(), 2.into()])
        );
    }

    #[test]
    fn test_template_id_nil() {
        assert!(TemplateID::nil().is_nil());
        assert_eq!(TemplateID::nil(), TemplateID::default());
    }
}
