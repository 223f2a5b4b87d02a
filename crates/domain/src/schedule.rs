use crate::{
    Catalog, Choice, EquipmentSet, ExerciseOverrides, Load, MovementSlot, ProgramStructure,
    ReadError, Recovery, Settings, TrainingDay, ValidationError, WriteError, load,
    recovery_for_day, resolve,
};

pub trait PlanService {
    fn get_equipment(&self) -> Result<EquipmentSet, ReadError>;
    fn set_equipment(&self, equipment: &EquipmentSet) -> Result<(), WriteError>;

    fn get_exercise_overrides(&self) -> Result<ExerciseOverrides, ReadError>;
    fn set_exercise_override(&self, slot_key: &str, exercise: &str) -> Result<(), WriteError>;
    fn clear_exercise_override(&self, slot_key: &str) -> Result<(), WriteError>;

    /// The custom program if one is stored, otherwise the default program of the current
    /// equipment mode.
    fn get_program(&self) -> Result<ProgramStructure, ReadError>;
    /// Replace the program. An invalid program is rejected and the current program stays in
    /// effect.
    fn set_custom_program(&self, days: Vec<TrainingDay>) -> Result<ProgramStructure, WriteError>;
    fn reset_custom_program(&self) -> Result<(), WriteError>;

    fn get_plan_input(&self) -> Result<PlanInput, ReadError>;
    fn get_schedule(&self, range: WeekRange) -> Result<Schedule, ReadError>;
    fn get_choices(&self, slot: &MovementSlot) -> Result<Vec<Choice>, ReadError>;
}

/// Everything a schedule is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanInput {
    pub settings: Settings,
    pub overrides: ExerciseOverrides,
    pub equipment: EquipmentSet,
    pub program: ProgramStructure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub weeks: Vec<Week>,
}

impl Schedule {
    #[must_use]
    pub fn day(&self, week: u32, day: u32) -> Option<&Day> {
        self.weeks
            .iter()
            .find(|w| w.number == week)?
            .days
            .iter()
            .find(|d| d.number == day)
    }

    pub fn exercises(&self) -> impl Iterator<Item = &PlannedExercise> {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .flat_map(|d| d.exercises.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub number: u32,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub number: u32,
    pub name: String,
    pub exercises: Vec<PlannedExercise>,
    pub recovery: Recovery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub week: u32,
    pub day: u32,
    pub slot_key: String,
    pub exercise: String,
    pub equipment: String,
    pub sets: u32,
    pub reps: u32,
    pub load: Load,
}

/// Inclusive range of weeks to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    first: u32,
    last: u32,
}

impl WeekRange {
    #[must_use]
    pub fn all() -> Self {
        Self {
            first: 1,
            last: u32::MAX,
        }
    }

    pub fn new(first: u32, last: u32) -> Result<Self, ValidationError> {
        if first == 0 || first > last {
            return Err(ValidationError::Invalid(format!(
                "Invalid week range {first}-{last}"
            )));
        }
        Ok(Self { first, last })
    }

    #[must_use]
    pub fn contains(&self, week: u32) -> bool {
        (self.first..=self.last).contains(&week)
    }
}

impl Default for WeekRange {
    fn default() -> Self {
        Self::all()
    }
}

impl TryFrom<&str> for WeekRange {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.is_empty() || value == "all" {
            return Ok(Self::all());
        }
        let invalid = || ValidationError::Invalid(format!("Invalid week range {value}"));
        let (first, last) = value.split_once('-').ok_or_else(invalid)?;
        let first = first.trim().parse::<u32>().map_err(|_| invalid())?;
        let last = last.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::new(first, last)
    }
}

/// Realize the program for the weeks `1..=week_count`.
#[must_use]
pub fn generate(input: &PlanInput, catalog: &Catalog, week_count: u32) -> Schedule {
    generate_weeks(input, catalog, week_count, WeekRange::all())
}

/// Realize the program for the weeks of `1..=week_count` within `range`.
///
/// Every week repeats the same days, so restricting the range never changes
/// the content of a single week.
#[must_use]
pub fn generate_weeks(
    input: &PlanInput,
    catalog: &Catalog,
    week_count: u32,
    range: WeekRange,
) -> Schedule {
    Schedule {
        weeks: (1..=week_count)
            .filter(|week| range.contains(*week))
            .map(|week| Week {
                number: week,
                days: input
                    .program
                    .days()
                    .iter()
                    .zip(1..)
                    .map(|(day, number)| Day {
                        number,
                        name: day.name.clone(),
                        exercises: day
                            .slots
                            .iter()
                            .map(|slot| plan_exercise(week, number, slot, input, catalog))
                            .collect(),
                        recovery: recovery_for_day(&day.name),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn plan_exercise(
    week: u32,
    day: u32,
    slot: &MovementSlot,
    input: &PlanInput,
    catalog: &Catalog,
) -> PlannedExercise {
    let settings = &input.settings;
    let option = resolve(slot, &input.overrides, &input.equipment, catalog);
    let adjustment = &option.adjustment;

    let load = match slot.primary {
        Some(lift) => load(
            settings.equipment_mode,
            settings.units,
            settings.training_max(lift),
            slot.percent,
            adjustment,
        ),
        None => adjustment
            .cue
            .clone()
            .map_or_else(|| Load::generic(settings.equipment_mode), Load::Cue),
    };

    PlannedExercise {
        week,
        day,
        slot_key: slot.key.clone(),
        exercise: option.name.clone(),
        equipment: option.equipment_label().to_string(),
        sets: adjustment.sets.unwrap_or(slot.sets),
        reps: adjustment.reps.unwrap_or(slot.reps),
        load,
    }
}
