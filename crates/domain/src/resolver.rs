use std::collections::BTreeMap;

use derive_more::Deref;

use crate::{Catalog, EquipmentSet, ExerciseOption, Loaded, MovementSlot, ReadError, WriteError};

pub trait ExerciseOverrideRepository {
    fn read_exercise_overrides(&self) -> Result<Loaded<ExerciseOverrides>, ReadError>;
    fn write_exercise_overrides(&self, overrides: &ExerciseOverrides) -> Result<(), WriteError>;
}

/// Exercise explicitly chosen by the user per slot key.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseOverrides(BTreeMap<String, String>);

impl ExerciseOverrides {
    #[must_use]
    pub fn exercise(&self, slot_key: &str) -> Option<&str> {
        self.0
            .get(slot_key)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn set(&mut self, slot_key: &str, exercise: &str) {
        self.0.insert(slot_key.to_string(), exercise.to_string());
    }

    pub fn clear(&mut self, slot_key: &str) -> Option<String> {
        self.0.remove(slot_key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExerciseOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Determine the exercise prescribed for a slot.
///
/// An explicit choice of the user always wins, even if its equipment is not
/// available. Otherwise the first catalog option whose equipment is available
/// is taken, and the first option if none is. Slots without catalog entry get
/// their default exercise.
#[must_use]
pub fn resolve(
    slot: &MovementSlot,
    overrides: &ExerciseOverrides,
    equipment: &EquipmentSet,
    catalog: &Catalog,
) -> ExerciseOption {
    let options = catalog.options(&slot.key).unwrap_or_default();

    if let Some(name) = overrides.exercise(&slot.key) {
        return options
            .iter()
            .find(|o| o.name == name)
            .cloned()
            .unwrap_or_else(|| ExerciseOption::fallback(name));
    }

    options
        .iter()
        .find(|o| o.equipment.as_deref().is_some_and(|e| equipment.has(e)))
        .or(options.first())
        .cloned()
        .unwrap_or_else(|| ExerciseOption::fallback(&slot.name))
}

/// Entry of a substitution picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub selected: bool,
    pub available: bool,
}

/// Options that can be chosen for a slot.
///
/// While no equipment is marked at all, every option counts as available.
#[must_use]
pub fn choices(
    slot: &MovementSlot,
    selected: &str,
    equipment: &EquipmentSet,
    catalog: &Catalog,
) -> Vec<Choice> {
    let choice = |option: &ExerciseOption| Choice {
        name: option.name.clone(),
        selected: option.name == selected,
        available: equipment.is_empty() || equipment.has(option.equipment_label()),
    };

    match catalog.options(&slot.key) {
        Some(options) if !options.is_empty() => options.iter().map(choice).collect(),
        _ => vec![choice(&ExerciseOption::fallback(&slot.name))],
    }
}
