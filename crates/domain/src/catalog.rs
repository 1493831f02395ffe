use crate::MuscleGroup;

/// Preset exercises inserted into an empty store on first launch.
pub const PRESET_EXERCISES: &[(&str, MuscleGroup)] = &[
    ("Bench Press", MuscleGroup::Chest),
    ("Incline Bench Press", MuscleGroup::Chest),
    ("Dumbbell Flies", MuscleGroup::Chest),
    ("Cable Crossover", MuscleGroup::Chest),
    ("Push-ups", MuscleGroup::Chest),
    ("Barbell Row", MuscleGroup::Back),
    ("Pull-ups", MuscleGroup::Back),
    ("Lat Pulldown", MuscleGroup::Back),
    ("Seated Cable Row", MuscleGroup::Back),
    ("Deadlift", MuscleGroup::Back),
    ("Overhead Press", MuscleGroup::Shoulders),
    ("Lateral Raise", MuscleGroup::Shoulders),
    ("Face Pull", MuscleGroup::Shoulders),
    ("Front Raise", MuscleGroup::Shoulders),
    ("Squat", MuscleGroup::Legs),
    ("Romanian Deadlift", MuscleGroup::Legs),
    ("Leg Press", MuscleGroup::Legs),
    ("Lunges", MuscleGroup::Legs),
    ("Leg Curl", MuscleGroup::Legs),
    ("Leg Extension", MuscleGroup::Legs),
    ("Calf Raise", MuscleGroup::Legs),
    ("Barbell Curl", MuscleGroup::Arms),
    ("Dumbbell Curl", MuscleGroup::Arms),
    ("Tricep Pushdown", MuscleGroup::Arms),
    ("Skull Crushers", MuscleGroup::Arms),
    ("Hammer Curl", MuscleGroup::Arms),
    ("Plank", MuscleGroup::Core),
    ("Hanging Leg Raise", MuscleGroup::Core),
    ("Cable Crunch", MuscleGroup::Core),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_preset_exercises() {
        assert_eq!(PRESET_EXERCISES.len(), 29);
        assert_eq!(
            PRESET_EXERCISES
                .iter()
                .map(|(name, _)| *name)
                .collect::<BTreeSet<_>>()
                .len(),
            29
        );
        assert_eq!(
            PRESET_EXERCISES
                .iter()
                .map(|(_, group)| *group)
                .collect::<BTreeSet<_>>(),
            MuscleGroup::iter().copied().collect::<BTreeSet<_>>()
        );
    }
}
