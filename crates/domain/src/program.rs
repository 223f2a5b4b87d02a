use derive_more::Deref;

use crate::{EquipmentMode, Loaded, ReadError, WriteError};

/// Number of weeks covered by a plan.
pub const WEEK_COUNT: u32 = 12;

pub trait ProgramRepository {
    fn read_custom_program(&self) -> Result<Loaded<Option<ProgramStructure>>, ReadError>;
    fn write_custom_program(&self, program: &ProgramStructure) -> Result<(), WriteError>;
    fn delete_custom_program(&self) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryLift {
    Leg,
    Chest,
}

/// Position in a training day together with its base prescription.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementSlot {
    pub key: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub percent: f64,
    pub primary: Option<PrimaryLift>,
}

impl MovementSlot {
    #[must_use]
    pub fn new(
        key: &str,
        name: &str,
        sets: u32,
        reps: u32,
        percent: f64,
        primary: Option<PrimaryLift>,
    ) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            sets,
            reps,
            percent,
            primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDay {
    pub name: String,
    pub slots: Vec<MovementSlot>,
}

/// Training days repeated identically in every week of the plan.
#[derive(Deref, Debug, Clone, PartialEq)]
pub struct ProgramStructure(Vec<TrainingDay>);

impl ProgramStructure {
    pub fn new(days: Vec<TrainingDay>) -> Result<Self, ProgramError> {
        if days.is_empty() {
            return Err(ProgramError::Empty);
        }

        for (day_idx, day) in days.iter().enumerate() {
            for (slot_idx, slot) in day.slots.iter().enumerate() {
                if slot.key.trim().is_empty() {
                    return Err(ProgramError::MissingKey {
                        day: day_idx + 1,
                        slot: slot_idx + 1,
                    });
                }
                if !(0.0..=1.0).contains(&slot.percent) {
                    return Err(ProgramError::InvalidPercent {
                        day: day_idx + 1,
                        slot: slot_idx + 1,
                    });
                }
            }
        }

        Ok(Self(days))
    }

    /// Four day program. The proposed exercises depend on the equipment mode.
    #[must_use]
    pub fn default_for(mode: EquipmentMode) -> Self {
        use PrimaryLift::{Chest, Leg};

        let machine = mode == EquipmentMode::Machine;
        let pick = |machine_name: &'static str, free_weight_name: &'static str| {
            if machine {
                machine_name
            } else {
                free_weight_name
            }
        };

        Self(vec![
            TrainingDay {
                name: "Day 1 – Lower Body Power".to_string(),
                slots: vec![
                    MovementSlot::new(
                        "K_LOWER_PRIMARY",
                        pick("Leg Press", "Back Squat (Barbell)"),
                        5,
                        5,
                        0.85,
                        Some(Leg),
                    ),
                    MovementSlot::new(
                        "K_LOWER_UNILATERAL",
                        pick("Single-Leg Leg Press", "Bulgarian Split Squat"),
                        3,
                        8,
                        0.75,
                        Some(Leg),
                    ),
                    MovementSlot::new("K_PLYO", "Box/Vertical Jumps", 4, 6, 0.50, None),
                ],
            },
            TrainingDay {
                name: "Day 2 – Upper Push & Pull".to_string(),
                slots: vec![
                    MovementSlot::new(
                        "K_UPPER_PRESS",
                        pick("Chest Press", "Bench Press"),
                        5,
                        5,
                        0.85,
                        Some(Chest),
                    ),
                    MovementSlot::new(
                        "K_SHOULDER_PRESS",
                        pick("Pike Push-Ups", "Overhead Press"),
                        3,
                        8,
                        0.75,
                        Some(Chest),
                    ),
                    MovementSlot::new("K_ROW", "Bodyweight Rows", 4, 8, 0.50, None),
                    MovementSlot::new("K_CARRIES", "Loaded Carries", 4, 1, 0.60, None),
                ],
            },
            TrainingDay {
                name: "Day 3 – Explosive & Conditioning".to_string(),
                slots: vec![
                    MovementSlot::new("K_PLYO", "Jump Series", 5, 3, 0.50, None),
                    MovementSlot::new("K_STRIKE", "Shadow Boxing / Bag Rounds", 6, 2, 0.50, None),
                    MovementSlot::new("K_SPRINT", "Hill / Stair Sprints", 8, 1, 0.50, None),
                ],
            },
            TrainingDay {
                name: "Day 4 – Mixed Strength & Stability".to_string(),
                slots: vec![
                    MovementSlot::new(
                        "K_HINGE",
                        pick("Hip Thrust (Bodyweight)", "Deadlift"),
                        4,
                        6,
                        0.80,
                        Some(Leg),
                    ),
                    MovementSlot::new(
                        "K_LOWER_SECONDARY",
                        pick("Rear Foot Elevated Split Squat", "Front Squat"),
                        4,
                        8,
                        0.75,
                        Some(Leg),
                    ),
                    MovementSlot::new(
                        "K_UPPER_PRESS",
                        "Push-Ups / Incline Press",
                        3,
                        10,
                        0.70,
                        Some(Chest),
                    ),
                    MovementSlot::new("K_ROW", "Towel/Sheet Rows", 4, 8, 0.50, None),
                ],
            },
        ])
    }

    /// A stored custom program replaces the default program as a whole.
    #[must_use]
    pub fn effective(custom: Option<ProgramStructure>, mode: EquipmentMode) -> Self {
        custom.unwrap_or_else(|| Self::default_for(mode))
    }

    #[must_use]
    pub fn days(&self) -> &[TrainingDay] {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ProgramError {
    #[error("Program must contain at least one day")]
    Empty,
    #[error("Exercise {slot} of day {day} must have a key")]
    MissingKey { day: usize, slot: usize },
    #[error("Percent of exercise {slot} of day {day} must be in the range 0.0 to 1.0")]
    InvalidPercent { day: usize, slot: usize },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_program_structure_new() {
        let day = TrainingDay {
            name: "A".to_string(),
            slots: vec![MovementSlot::new("K_A", "Squat", 3, 5, 0.8, None)],
        };
        assert_eq!(
            ProgramStructure::new(vec![day.clone()]),
            Ok(ProgramStructure(vec![day]))
        );
        assert_eq!(ProgramStructure::new(vec![]), Err(ProgramError::Empty));
    }

    #[rstest]
    #[case::missing_key(
        MovementSlot::new(" ", "", 3, 5, 0.8, None),
        ProgramError::MissingKey { day: 2, slot: 1 }
    )]
    #[case::percent_too_high(
        MovementSlot::new("K_A", "Squat", 3, 5, 1.2, None),
        ProgramError::InvalidPercent { day: 2, slot: 1 }
    )]
    #[case::percent_negative(
        MovementSlot::new("K_A", "Squat", 3, 5, -0.1, None),
        ProgramError::InvalidPercent { day: 2, slot: 1 }
    )]
    #[case::percent_nan(
        MovementSlot::new("K_A", "Squat", 3, 5, f64::NAN, None),
        ProgramError::InvalidPercent { day: 2, slot: 1 }
    )]
    fn test_program_structure_new_invalid(
        #[case] slot: MovementSlot,
        #[case] expected: ProgramError,
    ) {
        assert_eq!(
            ProgramStructure::new(vec![
                TrainingDay {
                    name: "Rest".to_string(),
                    slots: vec![],
                },
                TrainingDay {
                    name: "B".to_string(),
                    slots: vec![slot],
                },
            ]),
            Err(expected)
        );
    }

    #[rstest]
    #[case(EquipmentMode::Machine, ["Leg Press", "Chest Press", "Jump Series", "Hip Thrust (Bodyweight)"])]
    #[case(EquipmentMode::FreeWeight, ["Back Squat (Barbell)", "Bench Press", "Jump Series", "Deadlift"])]
    fn test_default_program(#[case] mode: EquipmentMode, #[case] first_exercises: [&str; 4]) {
        let program = ProgramStructure::default_for(mode);
        assert_eq!(program.len(), 4);
        assert_eq!(
            program
                .days()
                .iter()
                .map(|d| d.slots[0].name.as_str())
                .collect::<Vec<_>>(),
            first_exercises
        );
        assert!(ProgramStructure::new(program.days().to_vec()).is_ok());
    }

    #[test]
    fn test_effective_program() {
        let custom = ProgramStructure::new(vec![TrainingDay {
            name: "Only".to_string(),
            slots: vec![],
        }])
        .unwrap();
        assert_eq!(
            ProgramStructure::effective(Some(custom.clone()), EquipmentMode::Machine),
            custom
        );
        assert_eq!(
            ProgramStructure::effective(None, EquipmentMode::FreeWeight),
            ProgramStructure::default_for(EquipmentMode::FreeWeight)
        );
    }
}
