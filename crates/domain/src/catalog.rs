use std::collections::BTreeMap;

/// Equipment label shown for exercises that are not part of the catalog.
pub const UNKNOWN_EQUIPMENT: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseOption {
    pub name: String,
    pub equipment: Option<String>,
    pub adjustment: Adjustment,
}

impl ExerciseOption {
    /// Option for an exercise without catalog data.
    #[must_use]
    pub fn fallback(name: &str) -> Self {
        Self {
            name: name.to_string(),
            equipment: None,
            adjustment: Adjustment::default(),
        }
    }

    #[must_use]
    pub fn equipment_label(&self) -> &str {
        self.equipment.as_deref().unwrap_or(UNKNOWN_EQUIPMENT)
    }
}

/// Changes to the base prescription of a slot caused by choosing an option.
///
/// A `cue` replaces the numeric load entirely.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Adjustment {
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub percent_delta: Option<f64>,
    pub cue: Option<String>,
}

/// Candidate exercises per movement slot, in order of preference.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    slots: BTreeMap<String, Vec<ExerciseOption>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slot(mut self, key: &str, options: Vec<ExerciseOption>) -> Self {
        self.slots.insert(key.to_string(), options);
        self
    }

    #[must_use]
    pub fn options(&self, key: &str) -> Option<&[ExerciseOption]> {
        self.slots.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn find(&self, key: &str, name: &str) -> Option<&ExerciseOption> {
        self.options(key)?.iter().find(|o| o.name == name)
    }

    pub fn slots(&self) -> impl Iterator<Item = (&str, &[ExerciseOption])> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

pub static DEFAULT_CATALOG: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    SLOT_OPTIONS
        .iter()
        .fold(Catalog::new(), |catalog, (key, options)| {
            catalog.with_slot(key, options.iter().map(ExerciseOption::from).collect())
        })
});

struct OptionDefinition {
    name: &'static str,
    equipment: &'static str,
    adjustment: AdjustmentDefinition,
}

impl From<&OptionDefinition> for ExerciseOption {
    fn from(value: &OptionDefinition) -> Self {
        ExerciseOption {
            name: value.name.to_string(),
            equipment: Some(value.equipment.to_string()),
            adjustment: Adjustment {
                sets: value.adjustment.sets,
                reps: value.adjustment.reps,
                percent_delta: value.adjustment.percent_delta,
                cue: value.adjustment.cue.map(str::to_string),
            },
        }
    }
}

struct AdjustmentDefinition {
    sets: Option<u32>,
    reps: Option<u32>,
    percent_delta: Option<f64>,
    cue: Option<&'static str>,
}

impl AdjustmentDefinition {
    const fn none() -> Self {
        Self {
            sets: None,
            reps: None,
            percent_delta: None,
            cue: None,
        }
    }

    const fn reps(reps: u32) -> Self {
        Self {
            reps: Some(reps),
            ..Self::none()
        }
    }
}

const SLOT_OPTIONS: [(&str, &[OptionDefinition]); 6] = [
    (
        "K_LOWER_PRIMARY",
        &[
            OptionDefinition {
                name: "Leg Press",
                equipment: "Leg Press",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Hack Squat",
                equipment: "Hack Squat",
                adjustment: AdjustmentDefinition::reps(6),
            },
            OptionDefinition {
                name: "Back Squat (Barbell)",
                equipment: "Squat Rack",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Goblet Squat (DB)",
                equipment: "Dumbbells",
                adjustment: AdjustmentDefinition::reps(8),
            },
        ],
    ),
    (
        "K_LOWER_UNILATERAL",
        &[
            OptionDefinition {
                name: "Single-Leg Leg Press",
                equipment: "Leg Press",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Bulgarian Split Squat",
                equipment: "Dumbbells",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Walking Lunges",
                equipment: "Dumbbells",
                adjustment: AdjustmentDefinition::reps(10),
            },
        ],
    ),
    (
        "K_STRIKE",
        &[
            OptionDefinition {
                name: "Shadow Boxing / Bag Rounds",
                equipment: "Heavy Bag / Open Space",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Assault Bike Intervals",
                equipment: "Air Bike",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Row Erg Intervals",
                equipment: "Row Erg",
                adjustment: AdjustmentDefinition::none(),
            },
        ],
    ),
    (
        "K_SPRINT",
        &[
            OptionDefinition {
                name: "Hill / Stair Sprints",
                equipment: "Hill/Stairs",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Treadmill Sprints",
                equipment: "Treadmill",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Bike Sprints",
                equipment: "Spin Bike",
                adjustment: AdjustmentDefinition::none(),
            },
        ],
    ),
    (
        "K_HINGE",
        &[
            OptionDefinition {
                name: "Deadlift",
                equipment: "Barbell",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Hip Thrust (Bodyweight)",
                equipment: "Bench / Bodyweight",
                adjustment: AdjustmentDefinition {
                    reps: Some(12),
                    percent_delta: Some(0.0),
                    cue: Some("Bodyweight / RIR 2-3"),
                    ..AdjustmentDefinition::none()
                },
            },
            OptionDefinition {
                name: "Hip Thrust (Barbell)",
                equipment: "Barbell + Bench",
                adjustment: AdjustmentDefinition::reps(8),
            },
            OptionDefinition {
                name: "Kettlebell Swings",
                equipment: "Kettlebell",
                adjustment: AdjustmentDefinition::reps(12),
            },
        ],
    ),
    (
        "K_LOWER_SECONDARY",
        &[
            OptionDefinition {
                name: "Front Squat",
                equipment: "Barbell",
                adjustment: AdjustmentDefinition::none(),
            },
            OptionDefinition {
                name: "Rear Foot Elevated Split Squat",
                equipment: "Dumbbells",
                adjustment: AdjustmentDefinition::reps(10),
            },
            OptionDefinition {
                name: "Leg Extension",
                equipment: "Leg Extension Machine",
                adjustment: AdjustmentDefinition::reps(12),
            },
        ],
    ),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::EQUIPMENT;

    #[test]
    fn test_default_catalog() {
        assert_eq!(
            DEFAULT_CATALOG.slots().map(|(k, _)| k).collect::<Vec<_>>(),
            vec![
                "K_HINGE",
                "K_LOWER_PRIMARY",
                "K_LOWER_SECONDARY",
                "K_LOWER_UNILATERAL",
                "K_SPRINT",
                "K_STRIKE",
            ]
        );
        assert!(DEFAULT_CATALOG.slots().all(|(_, options)| !options.is_empty()));
    }

    #[test]
    fn test_default_catalog_duplicate_names() {
        for (key, options) in DEFAULT_CATALOG.slots() {
            let names = options.iter().map(|o| &o.name).collect::<BTreeSet<_>>();
            assert_eq!(names.len(), options.len(), "duplicate option in {key}");
        }
    }

    #[test]
    fn test_default_catalog_invalid_equipment() {
        for (key, options) in DEFAULT_CATALOG.slots() {
            for option in options {
                assert!(
                    EQUIPMENT.contains(&option.equipment_label()),
                    "unknown equipment {} in {key}",
                    option.equipment_label()
                );
            }
        }
    }

    #[test]
    fn test_catalog_find() {
        let option = DEFAULT_CATALOG
            .find("K_HINGE", "Hip Thrust (Bodyweight)")
            .unwrap();
        assert_eq!(option.equipment_label(), "Bench / Bodyweight");
        assert_eq!(
            option.adjustment,
            Adjustment {
                sets: None,
                reps: Some(12),
                percent_delta: Some(0.0),
                cue: Some("Bodyweight / RIR 2-3".to_string()),
            }
        );
        assert_eq!(DEFAULT_CATALOG.find("K_HINGE", "Leg Press"), None);
        assert_eq!(DEFAULT_CATALOG.find("K_PLYO", "Jump Series"), None);
    }

    #[test]
    fn test_exercise_option_fallback() {
        let option = ExerciseOption::fallback("Jump Series");
        assert_eq!(option.name, "Jump Series");
        assert_eq!(option.equipment_label(), UNKNOWN_EQUIPMENT);
        assert_eq!(option.adjustment, Adjustment::default());
    }
}
